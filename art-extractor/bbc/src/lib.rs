//! Decoding the level graphics of the BBC Micro release of Bruce Lee into a contact sheet.

use log::info;

pub mod characters;
pub mod codec;
pub mod context;
pub mod directory;
pub mod error;
pub mod export;
pub mod font;
pub mod format;
pub mod palette;
pub mod raw;
pub mod render;
pub mod sheet;
pub mod tables;
#[cfg(test)]
pub(crate) mod test_util;

pub use context::DecodeContext;
pub use directory::VisualObject;
pub use error::DecodeError;
pub use format::FormatDescription;
pub use sheet::ContactSheet;

/// Parses the object directory and renders every object onto a contact sheet.
///
/// # Errors
/// Any [`DecodeError`]. The directory is parsed completely before anything is rendered.
pub fn create_contact_sheet(data: &[u8], format: &FormatDescription) -> Result<ContactSheet, DecodeError> {
    let ctx = DecodeContext::new(data, format)?;
    let objects = directory::parse_directory(ctx.raw(), format)?;

    info!("Total objects {}", objects.len());
    for (i, object) in objects.iter().enumerate() {
        info!("{}: {}", i, object);
    }

    sheet::compose(&ctx, objects, &format.sheet)
}
