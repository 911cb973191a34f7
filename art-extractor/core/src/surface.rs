//! A module for working with 2-dimensional surfaces.

use crate::geom::{Point, Rect, Size};

/// Local trait for extending `ArtworkSpaceUnit` with `into_usize()`.
pub trait IntoUsize {
    fn into_usize(self) -> usize;
}

/// A 2-dimensional surface.
///
/// The data is stored row-major: the pixel at `(x, y)` lives at index `y * width + x`.
pub trait Surface {
    type DataType;

    /// The size.
    fn size(&self) -> Size;

    /// Retrieves a slice of the raw data.
    fn data(&self) -> &[Self::DataType];

    /// Retrieves a mutable slice of the raw data.
    fn data_mut(&mut self) -> &mut [Self::DataType];

    /// Retrieves the index into the data for the provided position.
    ///
    /// # Parameters
    /// * `position`: The position.
    ///
    /// # Returns
    /// The index or `None` if the provided position is outside of the [`Surface`].
    #[inline(always)]
    fn index(&self, position: Point) -> Option<usize> {
        let size = self.size();
        if position.x >= size.width || position.y >= size.height {
            None
        } else {
            Some(position.y.into_usize() * size.width.into_usize() + position.x.into_usize())
        }
    }

    /// Retrieves the data of a single row.
    ///
    /// # Returns
    /// The row or `None` if `y` is outside of the [`Surface`].
    fn row_data(&self, y: u32) -> Option<&[Self::DataType]> {
        let size = self.size();
        if y >= size.height {
            return None;
        }
        let width = size.width.into_usize();
        let start = y.into_usize() * width;
        Some(&self.data()[start..start + width])
    }

    /// Retrieves a reference to the pixel at the provided position.
    ///
    /// # Parameters
    /// * `position`: The position.
    ///
    /// # Returns
    /// The reference or `None` if the provided position is outside of the [`Surface`].
    #[inline(always)]
    fn pixel(&self, position: Point) -> Option<&Self::DataType> {
        self.index(position).map(|index| &self.data()[index])
    }

    /// Retrieves a mutable reference to the pixel at the provided position.
    ///
    /// # Parameters
    /// * `position`: The position.
    ///
    /// # Returns
    /// The reference or `None` if the provided position is outside of the [`Surface`].
    #[inline(always)]
    fn pixel_mut(&mut self, position: Point) -> Option<&mut Self::DataType> {
        self.index(position).map(move |index| &mut self.data_mut()[index])
    }

    /// Sets the pixel at the provided position. Positions outside of the [`Surface`] are ignored.
    ///
    /// # Returns
    /// `true` if the pixel was written.
    #[inline(always)]
    fn set_pixel(&mut self, position: Point, value: Self::DataType) -> bool {
        match self.pixel_mut(position) {
            Some(pixel) => {
                *pixel = value;
                true
            }
            None => false,
        }
    }

    /// Fills the provided area, clipped to the [`Surface`].
    fn fill_rect(&mut self, area: Rect, value: Self::DataType)
    where
        Self::DataType: Copy,
    {
        let size = self.size();
        let end_x = area.end_x().min(size.width);
        let end_y = area.end_y().min(size.height);
        for y in area.min_y()..end_y {
            for x in area.min_x()..end_x {
                self.set_pixel(Point::new(x, y), value);
            }
        }
    }
}

/// A heap-allocated [`Surface`] of arbitrary size.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenericSurface<T> {
    data: Vec<T>,
    size: Size,
}

impl<T: Clone> GenericSurface<T> {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `size`: The size.
    /// * `default_value`: The initial value of every pixel.
    pub fn new(size: Size, default_value: T) -> Self {
        Self {
            data: vec![default_value; size.area().into_usize()],
            size,
        }
    }
}

impl<T> Surface for GenericSurface<T> {
    type DataType = T;

    #[inline(always)]
    fn size(&self) -> Size {
        self.size
    }

    #[inline(always)]
    fn data(&self) -> &[Self::DataType] {
        &self.data
    }

    #[inline(always)]
    fn data_mut(&mut self) -> &mut [Self::DataType] {
        &mut self.data
    }
}
