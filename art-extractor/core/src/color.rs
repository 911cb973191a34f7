//! A module for colors and palettes.
//!
//! Decoded graphics never store colors directly. They store a [`PaletteIndex`] that is resolved through a [`Palette`] at the
//! moment a pixel is painted.

/// An opaque RGB color.
pub type Color = rgb::RGB8;

/// Creates a [`Color`] in a `const` context.
#[inline(always)]
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r, g, b }
}

/// An index into a [`Palette`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PaletteIndex(u8); // Currently just a simple Newtype

impl PaletteIndex {
    /// Creates a new instance.
    ///
    /// # Arguments
    /// * `index` the index.
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Retrieves the underlying value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Retrieves the value as a `usize`.
    pub fn as_usize(&self) -> usize {
        self.0.into()
    }
}

impl From<u8> for PaletteIndex {
    fn from(val: u8) -> Self {
        Self::new(val)
    }
}

/// A palette of colors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a new instance from a `Vec`.
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Retrieves the number of entries in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Determines whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Retrieves the color for the provided index, if present.
    pub fn get(&self, index: PaletteIndex) -> Option<Color> {
        self.colors.get(index.as_usize()).copied()
    }

    /// Gets an immutable iterator over all slots.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteIndex, &Color)> + '_ {
        self.colors
            .iter()
            .enumerate()
            // Truncation is fine: a palette never holds more than 256 entries
            .map(|(index, color)| (PaletteIndex::new(index as u8), color))
    }
}

impl std::ops::Index<PaletteIndex> for Palette {
    type Output = Color;

    fn index(&self, index: PaletteIndex) -> &Self::Output {
        &self.colors[index.as_usize()]
    }
}

/// Alternative to `std::panic::catch_unwind()` that is silent in its output.
#[cfg(test)]
fn catch_unwind_silent<F: FnOnce() -> R + std::panic::UnwindSafe, R>(f: F) -> std::thread::Result<R> {
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    let result = std::panic::catch_unwind(f);
    std::panic::set_hook(prev_hook);
    result
}
