//! Bounds-checked access to the raw game image.
//!
//! Every offset used by the decoder is a format constant that was found by hand. None of them are validated up front; instead
//! each read checks its own range and reports [`DecodeError::OutOfRange`].

use crate::error::DecodeError;

/// A read-only view of the whole game image.
#[derive(Copy, Clone, Debug)]
pub struct RawFile<'a> {
    data: &'a [u8],
}

impl<'a> RawFile<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// The file size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.data
            .get(offset)
            .copied()
            .ok_or_else(|| self.out_of_range(offset, 1))
    }

    /// Reads a little-endian 16-bit value.
    pub fn read_u16_le(&self, offset: usize) -> Result<u16, DecodeError> {
        let bytes = self.read_n(offset, 2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Retrieves `n` bytes starting at `offset` without copying.
    pub fn read_n(&self, offset: usize, n: usize) -> Result<&'a [u8], DecodeError> {
        let end = offset
            .checked_add(n)
            .ok_or_else(|| self.out_of_range(offset, n))?;
        self.data
            .get(offset..end)
            .ok_or_else(|| self.out_of_range(offset, n))
    }

    fn out_of_range(&self, offset: usize, len: usize) -> DecodeError {
        DecodeError::OutOfRange {
            offset,
            len,
            file_len: self.data.len(),
        }
    }
}

#[cfg(test)]
mod test_raw_file {
    use super::RawFile;
    use crate::error::DecodeError;

    #[test]
    fn test_read_u8() {
        let data = [0x10, 0x20, 0x30];
        let raw = RawFile::new(&data);
        assert_eq!(Ok(0x10), raw.read_u8(0));
        assert_eq!(Ok(0x30), raw.read_u8(2));
        assert_eq!(
            Err(DecodeError::OutOfRange { offset: 3, len: 1, file_len: 3 }),
            raw.read_u8(3)
        );
    }

    #[test]
    fn test_read_u16_le() {
        let data = [0x72, 0x28, 0xff];
        let raw = RawFile::new(&data);
        assert_eq!(Ok(0x2872), raw.read_u16_le(0));
        assert_eq!(Ok(0xff28), raw.read_u16_le(1));
        // Only one byte left
        assert_eq!(
            Err(DecodeError::OutOfRange { offset: 2, len: 2, file_len: 3 }),
            raw.read_u16_le(2)
        );
    }

    #[test]
    fn test_read_n() {
        let data = [1, 2, 3, 4, 5];
        let raw = RawFile::new(&data);
        assert_eq!(Ok(&data[1..4]), raw.read_n(1, 3));
        assert_eq!(Ok(&data[5..5]), raw.read_n(5, 0));
        assert!(raw.read_n(3, 3).is_err());
        assert!(raw.read_n(usize::MAX, 2).is_err());
        assert_eq!(5, raw.len());
        assert!(!raw.is_empty());
    }
}
