use art_extractor_core::color::{rgb, Color, Palette};

/// The number of base hues. The palette repeats them at a lower brightness.
pub const BASE_COLOR_COUNT: usize = 8;

/// The BBC Micro colours: the eight base hues, then the same hues dimmed.
pub const BBC_MICRO_COLORS: [Color; 16] = [
    rgb(0x00, 0x00, 0x00), // black
    rgb(0xff, 0x00, 0x00), // red
    rgb(0x00, 0xff, 0x00), // green
    rgb(0xff, 0xff, 0x00), // yellow
    rgb(0x00, 0x00, 0xff), // blue
    rgb(0xff, 0x00, 0xff), // magenta
    rgb(0x00, 0xff, 0xff), // cyan
    rgb(0xff, 0xff, 0xff), // white
    rgb(0x20, 0x20, 0x20),
    rgb(0x7f, 0x00, 0x00),
    rgb(0x00, 0x7f, 0x00),
    rgb(0x7f, 0x7f, 0x00),
    rgb(0x00, 0x00, 0x7f),
    rgb(0x7f, 0x00, 0x7f),
    rgb(0x00, 0x7f, 0x7f),
    rgb(0x7f, 0x7f, 0x7f),
];

/// Creates the [`Palette`] of [`BBC_MICRO_COLORS`].
pub fn bbc_micro_palette() -> Palette {
    Palette::new(BBC_MICRO_COLORS.to_vec())
}
