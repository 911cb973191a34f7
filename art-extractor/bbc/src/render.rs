//! Painting decoded objects onto a surface.

use crate::codec::decode_pixel;
use crate::context::DecodeContext;
use crate::directory::VisualObject;
use crate::error::DecodeError;
use art_extractor_core::color::{Color, Palette};
use art_extractor_core::geom::Point;
use art_extractor_core::surface::Surface;

/// Paints the two pixels of a physical pixel byte at `position` and the position to the right of it.
///
/// Pixels outside of the surface are dropped.
#[inline(always)]
pub(crate) fn paint_pixel_byte(target: &mut impl Surface<DataType = Color>, palette: &Palette, position: Point, byte: u8) {
    let (left, right) = decode_pixel(byte);
    target.set_pixel(position, palette[left]);
    target.set_pixel(position.offset(1, 0), palette[right]);
}

/// Renders an object with its top-left corner at `origin`.
///
/// The pixel data is stored one byte column after the other, top to bottom. Every byte yields a raw nibble (the high one for
/// masked objects) that is resolved through the object's lookup table into a physical pixel byte, which in turn yields two
/// pixels. Only the area returned by [`VisualObject::footprint`] is touched.
///
/// # Errors
/// * [`DecodeError::OutOfRange`] if the pixel data runs past the end of the file. Nothing is painted in that case.
/// * [`DecodeError::UnknownLookupTable`] or [`DecodeError::NibbleOutsideTable`] if a nibble can not be resolved.
pub fn render_object(
    target: &mut impl Surface<DataType = Color>,
    ctx: &DecodeContext,
    object: &VisualObject,
    origin: Point,
) -> Result<(), DecodeError> {
    let tables = ctx.tables();
    tables.table(object.lookup_table_index)?;

    let data = ctx.raw().read_n(object.file_offset.as_usize(), object.data_len())?;
    if data.is_empty() {
        return Ok(());
    }

    let high_nibble = uses_high_nibble(ctx, object);
    let column_len = usize::from(object.height_in_rows);
    for (column, bytes) in (0u32..).zip(data.chunks_exact(column_len)) {
        let x = origin.x + column * 2;
        for (row, &byte) in (0u32..).zip(bytes) {
            let physical = tables.lookup(object.lookup_table_index, raw_nibble(byte, high_nibble))?;
            paint_pixel_byte(target, ctx.palette(), Point::new(x, origin.y + row), physical);
        }
    }
    Ok(())
}

/// A data byte of an object after lookup table resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedByte {
    pub nibble: u8,
    /// The physical pixel byte the nibble maps to.
    pub physical: u8,
}

/// Resolves every data byte of an object, in storage order, the same way [`render_object`] does.
///
/// # Errors
/// The same as [`render_object`].
pub fn resolve_object(ctx: &DecodeContext, object: &VisualObject) -> Result<Vec<ResolvedByte>, DecodeError> {
    let tables = ctx.tables();
    tables.table(object.lookup_table_index)?;
    let high_nibble = uses_high_nibble(ctx, object);
    ctx.raw()
        .read_n(object.file_offset.as_usize(), object.data_len())?
        .iter()
        .map(|&byte| {
            let nibble = raw_nibble(byte, high_nibble);
            let physical = tables.lookup(object.lookup_table_index, nibble)?;
            Ok(ResolvedByte { nibble, physical })
        })
        .collect()
}

fn uses_high_nibble(ctx: &DecodeContext, object: &VisualObject) -> bool {
    object.mask || ctx.format().forces_mask(object.file_offset)
}

#[inline(always)]
fn raw_nibble(byte: u8, high_nibble: bool) -> u8 {
    (if high_nibble { byte >> 4 } else { byte }) & 0x0f
}
