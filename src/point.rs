use crate::rect::Rect;
use std::ops::Index;

/// A point in `D`-dimensional Euclidean space.
///
/// Points are plain values: no operation mutates a point in place.
///
/// # Examples
///
/// ```
/// use spatio_geom::Point;
///
/// let p = Point::new([0.0, 0.0, 0.0]);
/// let q = Point::new([3.0, 4.0, 12.0]);
/// assert_eq!(p.dist(&q), 13.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const D: usize> {
    coords: [f64; D],
}

impl<const D: usize> Point<D> {
    /// Create a point from its coordinates.
    pub const fn new(coords: [f64; D]) -> Self {
        const { assert!(D > 0, "points need at least one dimension") };
        Self { coords }
    }

    /// The number of dimensions.
    pub const fn dim(&self) -> usize {
        D
    }

    /// The coordinates as an array.
    pub fn coords(&self) -> &[f64; D] {
        &self.coords
    }

    #[cfg_attr(not(feature = "rstar"), allow(dead_code))]
    pub(crate) fn coords_mut(&mut self) -> &mut [f64; D] {
        &mut self.coords
    }

    /// Coordinate on axis `i`.
    #[inline]
    pub fn coord(&self, i: usize) -> f64 {
        self.coords[i]
    }

    /// Euclidean distance to `other`.
    pub fn dist(&self, other: &Point<D>) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| {
                let d = a - b;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Box of half-width `tol` centred on this point.
    ///
    /// `tol` must be finite and strictly positive. Anything else is a caller
    /// error: the returned box then breaks the rectangle invariant.
    pub fn to_rect(&self, tol: f64) -> Rect<D> {
        if !is_valid_tolerance(tol) {
            log::warn!(
                "Point::to_rect called with non-positive or non-finite tolerance {}; result breaks the rectangle invariant",
                tol
            );
        }
        let low = self.coords.map(|c| c - tol);
        let high = self.coords.map(|c| c + tol);
        Rect::from_raw(Point::new(low), Point::new(high))
    }
}

fn is_valid_tolerance(tol: f64) -> bool {
    tol.is_finite() && tol > 0.0
}

impl<const D: usize> From<[f64; D]> for Point<D> {
    fn from(coords: [f64; D]) -> Self {
        Self::new(coords)
    }
}

impl<const D: usize> From<Point<D>> for [f64; D] {
    fn from(point: Point<D>) -> Self {
        point.coords
    }
}

impl<const D: usize> Index<usize> for Point<D> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coords[index]
    }
}
