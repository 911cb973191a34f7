use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{Add, Mul};

/// A point in 2D space.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Point<T, U> {
    /// The X-coordinate.
    pub x: T,
    /// The Y-coordinate.
    pub y: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _phantom: PhantomData<U>,
}

impl<T, U> Point<T, U> {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `x`: The X-coordinate.
    /// * `y`: The Y-coordinate.
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self {
            x,
            y,
            _phantom: PhantomData,
        }
    }
}

impl<T, U> Point<T, U>
where
    T: Copy + Add<Output = T>,
{
    /// Creates a new point that is moved by the provided deltas.
    #[inline(always)]
    pub fn offset(&self, dx: T, dy: T) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl<T, U> From<(T, T)> for Point<T, U> {
    #[inline(always)]
    fn from(coords: (T, T)) -> Self {
        Self::new(coords.0, coords.1)
    }
}

/// A size (or dimension) in 2D space.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Size<T, U> {
    /// The width.
    pub width: T,
    /// The height.
    pub height: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _phantom: PhantomData<U>,
}

impl<T, U> Size<T, U> {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `width`: The width.
    /// * `height`: The height.
    #[inline(always)]
    pub fn new(width: T, height: T) -> Self {
        Self {
            width,
            height,
            _phantom: PhantomData,
        }
    }
}

impl<T, U> Size<T, U>
where
    T: Copy + Mul<Output = T>,
{
    /// The number of elements covered by this size.
    #[inline(always)]
    pub fn area(&self) -> T {
        self.width * self.height
    }
}

impl<T, U> Size<T, U>
where
    T: Copy + From<u8>,
    U: Copy,
{
    /// Creates a [`Rect`] with this size at the origin.
    #[inline(always)]
    pub fn as_rect(&self) -> Rect<T, U> {
        Rect::new(Point::new(T::from(0u8), T::from(0u8)), *self)
    }
}

/// A rectangle in 2D space.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rect<T, U> {
    /// The point of origin.
    pub origin: Point<T, U>,
    /// The size.
    pub size: Size<T, U>,
}

impl<T, U> Rect<T, U> {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `origin`: The point of origin.
    /// * `size`: The size.
    #[inline(always)]
    pub fn new(origin: Point<T, U>, size: Size<T, U>) -> Self {
        Self { origin, size }
    }
}

impl<T, U> Rect<T, U>
where
    T: Copy,
{
    #[inline(always)]
    pub fn min_x(&self) -> T {
        self.origin.x
    }

    #[inline(always)]
    pub fn min_y(&self) -> T {
        self.origin.y
    }

    #[inline(always)]
    pub fn width(&self) -> T {
        self.size.width
    }

    #[inline(always)]
    pub fn height(&self) -> T {
        self.size.height
    }
}

impl<T, U> Rect<T, U>
where
    T: Copy + Add<Output = T> + PartialOrd,
{
    /// The X-coordinate just past the right edge (exclusive).
    #[inline(always)]
    pub fn end_x(&self) -> T {
        self.origin.x + self.size.width
    }

    /// The Y-coordinate just past the bottom edge (exclusive).
    #[inline(always)]
    pub fn end_y(&self) -> T {
        self.origin.y + self.size.height
    }

    /// Determines whether the provided point lies inside this rectangle.
    #[inline(always)]
    pub fn contains(&self, point: Point<T, U>) -> bool {
        point.x >= self.min_x() && point.x < self.end_x() && point.y >= self.min_y() && point.y < self.end_y()
    }
}

impl<T, U> From<((T, T), T, T)> for Rect<T, U> {
    #[inline(always)]
    fn from(args: ((T, T), T, T)) -> Self {
        Self {
            origin: args.0.into(),
            size: Size::new(args.1, args.2),
        }
    }
}

#[cfg(test)]
mod test_point {
    use crate::geom::Point;

    #[test]
    fn test_offset() {
        let point = Point::new(3, 4);
        assert_eq!(Point::new(5, 4), point.offset(2, 0));
        assert_eq!(Point::new(3, 10), point.offset(0, 6));
        assert_eq!(Point::new(3, 4), point);
    }

    #[test]
    fn test_from_tuple() {
        let point: Point = (7, 9).into();
        assert_eq!(7, point.x);
        assert_eq!(9, point.y);
    }
}
