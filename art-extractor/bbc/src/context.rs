use crate::error::DecodeError;
use crate::format::FormatDescription;
use crate::palette::bbc_micro_palette;
use crate::raw::RawFile;
use crate::tables::LookupTableBank;
use art_extractor_core::color::Palette;

/// Everything a decoder needs to read graphics from one game image. Built once, then shared by reference.
pub struct DecodeContext<'a> {
    raw: RawFile<'a>,
    tables: LookupTableBank<'a>,
    palette: Palette,
    format: &'a FormatDescription,
}

impl<'a> DecodeContext<'a> {
    /// Creates a new instance.
    ///
    /// # Errors
    /// [`DecodeError::OutOfRange`] if the lookup tables do not fit in `data`.
    pub fn new(data: &'a [u8], format: &'a FormatDescription) -> Result<Self, DecodeError> {
        let raw = RawFile::new(data);
        let tables = LookupTableBank::new(&raw, format.lookup_table_base, &format.lookup_table_sizes)?;
        Ok(Self {
            raw,
            tables,
            palette: bbc_micro_palette(),
            format,
        })
    }

    pub fn raw(&self) -> &RawFile<'a> {
        &self.raw
    }

    pub fn tables(&self) -> &LookupTableBank<'a> {
        &self.tables
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn format(&self) -> &'a FormatDescription {
        self.format
    }
}
