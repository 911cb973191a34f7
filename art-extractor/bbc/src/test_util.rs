use crate::directory::RECORD_LEN;
use crate::format::FormatDescription;

/// A zero-filled game image that tests fill in piece by piece.
pub struct SyntheticImage {
    data: Vec<u8>,
}

impl SyntheticImage {
    pub fn new(len: usize) -> Self {
        Self { data: vec![0; len] }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn put_bytes(&mut self, offset: usize, bytes: &[u8]) {
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    /// Writes the entries of lookup table `index`.
    pub fn put_table(&mut self, format: &FormatDescription, index: usize, entries: &[u8]) {
        assert_eq!(format.lookup_table_sizes[index], entries.len());
        let offset = format.lookup_table_base + format.lookup_table_sizes[..index].iter().sum::<usize>();
        self.put_bytes(offset, entries);
    }

    /// Writes object record `index` of the directory.
    #[allow(clippy::too_many_arguments)]
    pub fn put_record(
        &mut self,
        format: &FormatDescription,
        index: usize,
        addr: u16,
        width_in_bytes: u8,
        height_in_rows: u8,
        lookup_table_index: u8,
        mask: bool,
    ) {
        let [low, high] = addr.to_le_bytes();
        let packed = lookup_table_index << 1 | u8::from(mask);
        let offset = format.first_record_offset() + index * RECORD_LEN;
        self.put_bytes(offset, &[low, high, width_in_bytes, height_in_rows, packed]);
    }
}

/// The table entries `0x00, 0x11, 0x22...`: nibble `n` maps to the byte with `n` in both halves.
pub fn doubled_nibble_table(len: usize) -> Vec<u8> {
    (0..len).map(|n| (n as u8) * 0x11).collect()
}
