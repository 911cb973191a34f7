//! A module for geometric types for working with 2D artwork.

pub mod generic;

/// The space identifier for the "artwork space". This is the space for working with graphical entities like surfaces, decoded
/// objects and contact sheets.
///
/// The main reason for having space identifiers is to avoid (unintentionally) mixing up incompatible geometric spaces. For instance,
/// a pixel position inside a contact sheet should not be confused with a byte offset into the source file or a byte-column inside
/// an encoded object. Translating between these is always explicit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ArtworkSpace;

/// The unit for data in "artwork space".
pub type ArtworkSpaceUnit = u32;

impl crate::surface::IntoUsize for ArtworkSpaceUnit {
    #[inline(always)]
    fn into_usize(self) -> usize {
        // u32 always fits on the platforms we build for
        self as usize
    }
}

/// A point in "artwork space".
///
/// See also [`ArtworkSpace`].
pub type Point = generic::Point<ArtworkSpaceUnit, ArtworkSpace>;

/// A size in "artwork space".
///
/// See also [`ArtworkSpace`].
pub type Size = generic::Size<ArtworkSpaceUnit, ArtworkSpace>;

/// A 2-dimensional rectangle in "artwork space".
///
/// See also [`ArtworkSpace`].
pub type Rect = generic::Rect<ArtworkSpaceUnit, ArtworkSpace>;
