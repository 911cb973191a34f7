//! The object directory: a fixed table of records describing every level object (statues, lanterns, walls...).
//!
//! Record layout (5 bytes):
//!
//! | byte | content                                                             |
//! |------|---------------------------------------------------------------------|
//! | 0-1  | machine address of the pixel data (little-endian)                   |
//! | 2    | width in byte columns                                               |
//! | 3    | height in rows                                                      |
//! | 4    | bits 1-7: lookup table index, bit 0: mask flag                      |

use crate::error::DecodeError;
use crate::format::{FileOffset, FormatDescription, MachineAddr};
use crate::raw::RawFile;
use art_extractor_core::geom::{Point, Rect, Size};
use serde::Serialize;
use std::fmt::Display;

/// The size of a directory record in bytes.
pub const RECORD_LEN: usize = 5;

/// A decodable graphic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VisualObject {
    /// Where the pixel data starts.
    pub file_offset: FileOffset,
    /// The number of byte columns. Every byte column is two pixels wide.
    pub width_in_bytes: u8,
    pub height_in_rows: u8,
    /// The lookup table to resolve raw nibbles with.
    pub lookup_table_index: u8,
    /// Only the high nibble carries colour. The low nibble holds mask data.
    pub mask: bool,
}

impl VisualObject {
    /// Decodes a directory record.
    ///
    /// # Parameters
    /// * `record`: The 5 bytes of the record.
    /// * `format`: The format description, for translating the pixel data address.
    pub fn from_record(record: &[u8; RECORD_LEN], format: &FormatDescription) -> Self {
        let addr = MachineAddr(u16::from_le_bytes([record[0], record[1]]));
        Self {
            file_offset: format.rebase(addr),
            width_in_bytes: record[2],
            height_in_rows: record[3],
            lookup_table_index: (record[4] & 0xfe) >> 1,
            mask: record[4] & 0x01 == 0x01,
        }
    }

    /// The number of bytes of pixel data.
    pub fn data_len(&self) -> usize {
        usize::from(self.width_in_bytes) * usize::from(self.height_in_rows)
    }

    /// The size of the decoded graphic in pixels.
    pub fn pixel_size(&self) -> Size {
        Size::new(u32::from(self.width_in_bytes) * 2, u32::from(self.height_in_rows))
    }

    /// The area that rendering this object at `origin` paints.
    pub fn footprint(&self, origin: Point) -> Rect {
        Rect::new(origin, self.pixel_size())
    }
}

impl Display for VisualObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "offset {} size {}x{} table {}{}",
            self.file_offset,
            self.width_in_bytes,
            self.height_in_rows,
            self.lookup_table_index,
            if self.mask { " masked" } else { "" }
        )
    }
}

/// Reads all object records, in directory order.
pub fn parse_directory(raw: &RawFile, format: &FormatDescription) -> Result<Vec<VisualObject>, DecodeError> {
    let records = raw.read_n(format.first_record_offset(), format.object_count * RECORD_LEN)?;
    Ok(records
        .chunks_exact(RECORD_LEN)
        .map(|chunk| {
            // chunks_exact only yields full records
            let mut record = [0u8; RECORD_LEN];
            record.copy_from_slice(chunk);
            VisualObject::from_record(&record, format)
        })
        .collect())
}

/// Orders objects by lookup table. Objects sharing a table keep their directory order.
pub fn sort_by_lookup_table(objects: &mut [VisualObject]) {
    objects.sort_by_key(|object| object.lookup_table_index);
}
