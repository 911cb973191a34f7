//! The lookup tables that translate the raw nibbles of object data into physical pixel bytes.
//!
//! Objects are stored with 4 bits per byte column entry. The game maps such a nibble through one of a handful of small tables
//! to get a screen byte (see [`crate::codec`]), which is how a single graphic can be drawn in different colours.

use crate::error::DecodeError;
use crate::raw::RawFile;
use log::debug;

/// All lookup tables of a game image, borrowed from the raw buffer.
#[derive(Clone, Debug)]
pub struct LookupTableBank<'a> {
    tables: Vec<&'a [u8]>,
}

impl<'a> LookupTableBank<'a> {
    /// Slices the tables out of the raw file.
    ///
    /// # Parameters
    /// * `raw`: The raw file.
    /// * `base`: The offset of the first table.
    /// * `sizes`: The number of entries of each table, in order. The tables are contiguous.
    pub fn new(raw: &RawFile<'a>, base: usize, sizes: &[usize]) -> Result<Self, DecodeError> {
        let mut tables = Vec::with_capacity(sizes.len());
        let mut offset = base;
        for &size in sizes {
            tables.push(raw.read_n(offset, size)?);
            offset += size;
        }
        debug!("Sliced {} lookup tables from {} to {}", tables.len(), base, offset);
        Ok(Self { tables })
    }

    /// The number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Retrieves a table.
    pub fn table(&self, index: u8) -> Result<&'a [u8], DecodeError> {
        self.tables
            .get(usize::from(index))
            .copied()
            .ok_or(DecodeError::UnknownLookupTable {
                index,
                count: self.tables.len(),
            })
    }

    /// Looks up the physical pixel byte for a raw nibble.
    pub fn lookup(&self, index: u8, nibble: u8) -> Result<u8, DecodeError> {
        let table = self.table(index)?;
        table
            .get(usize::from(nibble))
            .copied()
            .ok_or(DecodeError::NibbleOutsideTable {
                nibble,
                table: index,
                table_len: table.len(),
            })
    }

    /// Iterates over all tables in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.tables.iter().copied()
    }
}
