//! A tiny digit font for labelling the contact sheet.

use art_extractor_core::geom::Point;
use art_extractor_core::surface::Surface;

/// The width of a glyph in pixels.
pub const GLYPH_WIDTH: u32 = 3;
/// The height of a glyph in pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// The horizontal distance between the left edges of consecutive digits.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// The glyphs for `0` through `9`. Each row is a 3-bit mask, most significant bit on the left.
const DIGITS: [[u8; GLYPH_HEIGHT as usize]; 10] = [
    [0b000, 0b111, 0b101, 0b101, 0b101, 0b111, 0b000],
    [0b000, 0b010, 0b110, 0b010, 0b010, 0b111, 0b000],
    [0b000, 0b111, 0b001, 0b111, 0b100, 0b111, 0b000],
    [0b000, 0b111, 0b001, 0b011, 0b001, 0b111, 0b000],
    [0b000, 0b101, 0b101, 0b111, 0b001, 0b001, 0b000],
    [0b000, 0b111, 0b100, 0b111, 0b001, 0b111, 0b000],
    [0b000, 0b111, 0b100, 0b111, 0b101, 0b111, 0b000],
    [0b000, 0b111, 0b001, 0b001, 0b010, 0b010, 0b000],
    [0b000, 0b111, 0b101, 0b111, 0b101, 0b111, 0b000],
    [0b000, 0b111, 0b101, 0b111, 0b001, 0b111, 0b000],
];

/// Determines whether the pixel at `(x, y)` of the glyph for `digit` is set.
///
/// # Panics
/// If `digit` is not a decimal digit.
fn glyph_pixel(digit: usize, x: u32, y: u32) -> bool {
    let row = DIGITS[digit][y as usize];
    row & (0b100 >> x) != 0
}

/// Paints `value` in decimal with its top-left corner at `origin`.
///
/// Each glyph cell is painted completely: `foreground` for set pixels, `background` for the others. Pixels outside of the
/// surface are dropped.
pub fn stamp_number<S>(target: &mut S, value: usize, origin: Point, foreground: S::DataType, background: S::DataType)
where
    S: Surface,
    S::DataType: Copy,
{
    let mut x = origin.x;
    for digit in value.to_string().bytes().map(|b| usize::from(b - b'0')) {
        for gy in 0..GLYPH_HEIGHT {
            for gx in 0..GLYPH_WIDTH {
                let color = if glyph_pixel(digit, gx, gy) { foreground } else { background };
                target.set_pixel(Point::new(x + gx, origin.y + gy), color);
            }
        }
        x += GLYPH_ADVANCE;
    }
}
