//! The pixel format of the BBC Micro's 16-colour screen mode (MODE 2).
//!
//! A screen byte holds two pixels whose colour bits are interleaved:
//!
//! ```text
//! bit:    7  6  5  4  3  2  1  0
//! pixel:  L3 R3 L2 R2 L1 R1 L0 R0
//! ```

use art_extractor_core::color::PaletteIndex;

/// Splits a physical pixel byte into its left and right pixel.
///
/// # Returns
/// A tuple of `(left, right)` colour indices, each in the range `0..16`.
#[inline(always)]
pub fn decode_pixel(byte: u8) -> (PaletteIndex, PaletteIndex) {
    let left = ((byte & 0b0000_0010) >> 1)
        | ((byte & 0b0000_1000) >> 2)
        | ((byte & 0b0010_0000) >> 3)
        | ((byte & 0b1000_0000) >> 4);
    let right = (byte & 0b0000_0001)
        | ((byte & 0b0000_0100) >> 1)
        | ((byte & 0b0001_0000) >> 2)
        | ((byte & 0b0100_0000) >> 3);
    (PaletteIndex::new(left), PaletteIndex::new(right))
}
