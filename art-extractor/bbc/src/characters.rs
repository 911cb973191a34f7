//! The character animation frames.
//!
//! Characters are not listed in the object directory and do not go through a lookup table: every byte already is a physical
//! pixel byte. Their location is part of the [`FormatDescription`](crate::format::FormatDescription).

use crate::context::DecodeContext;
use crate::error::DecodeError;
use crate::format::FileOffset;
use crate::render::paint_pixel_byte;
use art_extractor_core::color::Color;
use art_extractor_core::geom::Point;
use art_extractor_core::surface::Surface;
use log::debug;
use serde::{Deserialize, Serialize};

/// The vertical space between two strips of the same column.
const STRIP_GAP: u32 = 2;

/// One animation of a character: `frames` equally sized frames stored back to back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStrip {
    pub name: String,
    pub file_offset: FileOffset,
    /// The width of a frame in pixels. A frame is `width_px / 2` byte columns wide.
    pub width_px: u8,
    pub height: u8,
    pub frames: u8,
}

impl CharacterStrip {
    pub fn new(name: &str, file_offset: u16, width_px: u8, height: u8, frames: u8) -> Self {
        Self {
            name: name.to_owned(),
            file_offset: FileOffset(file_offset),
            width_px,
            height,
            frames,
        }
    }

    fn columns_per_frame(&self) -> usize {
        usize::from(self.width_px / 2)
    }

    /// The number of bytes taken up by all frames.
    pub fn data_len(&self) -> usize {
        self.columns_per_frame() * usize::from(self.height) * usize::from(self.frames)
    }
}

/// The strips of one character, drawn below each other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterColumn {
    pub name: String,
    /// The horizontal distance from the character area origin.
    pub x_offset: u32,
    pub strips: Vec<CharacterStrip>,
}

impl CharacterColumn {
    pub fn new(name: &str, x_offset: u32, strips: Vec<CharacterStrip>) -> Self {
        Self {
            name: name.to_owned(),
            x_offset,
            strips,
        }
    }
}

/// Renders a strip with the top-left corner of its first frame at `origin`. Frames are placed left to right.
///
/// # Errors
/// [`DecodeError::OutOfRange`] if the frames run past the end of the file. Nothing is painted in that case.
pub fn render_strip(
    target: &mut impl Surface<DataType = Color>,
    ctx: &DecodeContext,
    strip: &CharacterStrip,
    origin: Point,
) -> Result<(), DecodeError> {
    let data = ctx.raw().read_n(strip.file_offset.as_usize(), strip.data_len())?;
    if data.is_empty() {
        return Ok(());
    }

    // The byte columns of consecutive frames follow each other, so the whole strip reads like one wide object.
    for (column, bytes) in (0u32..).zip(data.chunks_exact(usize::from(strip.height))) {
        let x = origin.x + column * 2;
        for (row, &byte) in (0u32..).zip(bytes) {
            paint_pixel_byte(target, ctx.palette(), Point::new(x, origin.y + row), byte);
        }
    }
    Ok(())
}

/// Renders all character columns, each one starting at `origin` moved right by its x offset.
pub fn render_characters(
    target: &mut impl Surface<DataType = Color>,
    ctx: &DecodeContext,
    columns: &[CharacterColumn],
    origin: Point,
) -> Result<(), DecodeError> {
    for column in columns {
        let mut cursor = origin.offset(column.x_offset, 0);
        for strip in &column.strips {
            debug!("Character {} {} at ({}, {})", column.name, strip.name, cursor.x, cursor.y);
            render_strip(target, ctx, strip, cursor)?;
            cursor = cursor.offset(0, u32::from(strip.height) + STRIP_GAP);
        }
    }
    Ok(())
}

#[cfg(test)]
mod test_render_characters {
    use super::{render_characters, render_strip, CharacterColumn, CharacterStrip};
    use crate::context::DecodeContext;
    use crate::error::DecodeError;
    use crate::format::FormatDescription;
    use crate::palette::BBC_MICRO_COLORS;
    use crate::test_util::SyntheticImage;
    use art_extractor_core::color::{rgb, Color};
    use art_extractor_core::geom::{Point, Size};
    use art_extractor_core::surface::{GenericSurface, Surface};

    const UNTOUCHED: Color = rgb(0x12, 0x34, 0x56);

    #[test]
    fn test_strip_bytes_are_physical() {
        let format = FormatDescription::bruce_lee();
        let mut image = SyntheticImage::new(9000);
        // Two frames of one byte column by two rows
        image.put_bytes(8500, &[0x11, 0x22, 0x33, 0x00]);
        let ctx = DecodeContext::new(image.data(), &format).unwrap();

        let strip = CharacterStrip::new("walk", 8500, 2, 2, 2);
        assert_eq!(4, strip.data_len());
        let mut surface = GenericSurface::new(Size::new(5, 2), UNTOUCHED);
        render_strip(&mut surface, &ctx, &strip, Point::new(0, 0)).unwrap();

        let c = BBC_MICRO_COLORS;
        let expected = [
            c[0], c[5], c[5], c[5], UNTOUCHED, //
            c[5], c[0], c[0], c[0], UNTOUCHED,
        ];
        assert_eq!(&expected, surface.data());
    }

    #[test]
    fn test_columns_and_spacing() {
        let format = FormatDescription::bruce_lee();
        let mut image = SyntheticImage::new(9000);
        image.put_bytes(8500, &[0xff]);
        image.put_bytes(8501, &[0x33]);
        image.put_bytes(8502, &[0x22]);
        let ctx = DecodeContext::new(image.data(), &format).unwrap();

        let columns = vec![
            CharacterColumn::new(
                "a",
                0,
                vec![
                    CharacterStrip::new("first", 8500, 2, 1, 1),
                    CharacterStrip::new("second", 8501, 2, 1, 1),
                ],
            ),
            CharacterColumn::new("b", 4, vec![CharacterStrip::new("only", 8502, 2, 1, 1)]),
        ];
        let mut surface = GenericSurface::new(Size::new(8, 5), UNTOUCHED);
        render_characters(&mut surface, &ctx, &columns, Point::new(1, 1)).unwrap();

        let c = BBC_MICRO_COLORS;
        assert_eq!(Some(&c[15]), surface.pixel(Point::new(1, 1)));
        assert_eq!(Some(&c[15]), surface.pixel(Point::new(2, 1)));
        // Height 1 plus a gap of 2
        assert_eq!(Some(&UNTOUCHED), surface.pixel(Point::new(1, 2)));
        assert_eq!(Some(&UNTOUCHED), surface.pixel(Point::new(1, 3)));
        assert_eq!(Some(&c[5]), surface.pixel(Point::new(1, 4)));
        // The second column starts back at the top
        assert_eq!(Some(&c[5]), surface.pixel(Point::new(5, 1)));
        assert_eq!(Some(&c[0]), surface.pixel(Point::new(6, 1)));
    }

    #[test]
    fn test_strip_past_end_of_file() {
        let format = FormatDescription::bruce_lee();
        let image = SyntheticImage::new(9000);
        let ctx = DecodeContext::new(image.data(), &format).unwrap();

        let strip = CharacterStrip::new("jump", 8990, 10, 26, 1);
        let mut surface = GenericSurface::new(Size::new(10, 26), UNTOUCHED);
        assert_eq!(
            Err(DecodeError::OutOfRange { offset: 8990, len: 130, file_len: 9000 }),
            render_strip(&mut surface, &ctx, &strip, Point::new(0, 0))
        );
        assert!(surface.data().iter().all(|pixel| *pixel == UNTOUCHED));
    }

    #[test]
    fn test_bruce_lee_characters_fit() {
        let format = FormatDescription::bruce_lee();
        let end = format
            .character_columns
            .iter()
            .flat_map(|column| column.strips.iter())
            .map(|strip| strip.file_offset.as_usize() + strip.data_len())
            .max()
            .unwrap();
        // The last strip ends before the smoke belch
        assert_eq!(10311, end);
    }
}
