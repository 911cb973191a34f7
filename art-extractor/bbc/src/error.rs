use thiserror::Error;

/// Errors raised while decoding graphics from a game image.
///
/// All offsets are absolute byte offsets into the raw file buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("read of {len} byte(s) at offset {offset} is out of range (file is {file_len} bytes)")]
    OutOfRange {
        offset: usize,
        len: usize,
        file_len: usize,
    },
    #[error("lookup table {index} does not exist (bank holds {count} tables)")]
    UnknownLookupTable { index: u8, count: usize },
    #[error("nibble {nibble:#x} is outside lookup table {table} ({table_len} entries)")]
    NibbleOutsideTable { nibble: u8, table: u8, table_len: usize },
    #[error("palette index {index} does not exist (palette holds {len} colours)")]
    UnknownPaletteIndex { index: u8, len: usize },
}
