//! Axis-aligned bounding rectangles.
//!
//! A [`Rect`] is the box `[low[0], high[0]] x ... x [low[D-1], high[D-1]]`.
//! Construction enforces `high[i] > low[i]` on every axis; all other
//! operations assume it and never re-validate.

use crate::error::{GeomError, Result};
use crate::point::Point;
use std::fmt;

/// A `D`-dimensional axis-aligned rectangle.
///
/// Equality (`==`) is exact and compares every coordinate of both corners
/// without any tolerance.
///
/// # Examples
///
/// ```
/// use spatio_geom::{Point, Rect};
///
/// let r = Rect::new(Point::new([0.0, 0.0, 0.0]), [2.0, 2.0, 2.0])?;
/// assert_eq!(r.high(), &Point::new([2.0, 2.0, 2.0]));
/// assert_eq!(r.size(), 8.0);
/// # Ok::<(), spatio_geom::GeomError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<const D: usize> {
    // low[i] <= high[i] for all i, strict at construction.
    pub(crate) low: Point<D>,
    pub(crate) high: Point<D>,
}

impl<const D: usize> Rect<D> {
    /// Create a rectangle from its most-negative corner and the side length
    /// along each axis.
    ///
    /// Fails with [`GeomError::DegenerateRectangle`] carrying the first
    /// length that is not strictly positive.
    pub fn new(low: Point<D>, lengths: [f64; D]) -> Result<Self> {
        check_lengths(&lengths)?;
        let high = Point::new(std::array::from_fn(|i| low.coord(i) + lengths[i]));
        Ok(Self { low, high })
    }

    /// Create a rectangle from two opposite corners.
    ///
    /// `high` must exceed `low` on every axis; otherwise the error carries
    /// the offending `high[i] - low[i]`.
    pub fn from_corners(low: Point<D>, high: Point<D>) -> Result<Self> {
        let lengths: [f64; D] = std::array::from_fn(|i| high.coord(i) - low.coord(i));
        check_lengths(&lengths)?;
        Ok(Self { low, high })
    }

    /// Build without checking the invariant. Callers must guarantee it.
    pub(crate) const fn from_raw(low: Point<D>, high: Point<D>) -> Self {
        Self { low, high }
    }

    /// The most-negative corner.
    pub fn low(&self) -> &Point<D> {
        &self.low
    }

    /// The most-positive corner.
    pub fn high(&self) -> &Point<D> {
        &self.high
    }

    /// Coordinate of the low corner on axis `i`.
    #[inline]
    pub fn point_coord(&self, i: usize) -> f64 {
        self.low.coord(i)
    }

    /// Side length on axis `i`.
    #[inline]
    pub fn lengths_coord(&self, i: usize) -> f64 {
        self.high.coord(i) - self.low.coord(i)
    }

    /// Side lengths on every axis.
    pub fn lengths(&self) -> [f64; D] {
        std::array::from_fn(|i| self.lengths_coord(i))
    }

    /// Per-axis midpoint.
    pub fn center(&self) -> Point<D> {
        Point::new(std::array::from_fn(|i| {
            (self.low.coord(i) + self.high.coord(i)) / 2.0
        }))
    }
}

fn check_lengths<const D: usize>(lengths: &[f64; D]) -> Result<()> {
    match lengths.iter().position(|l| l.is_nan() || *l <= 0.0) {
        Some(axis) => {
            let length = lengths[axis];
            log::debug!(
                "Rejecting degenerate rectangle: side length {} on axis {}",
                length,
                axis
            );
            Err(GeomError::DegenerateRectangle { axis, length })
        }
        None => Ok(()),
    }
}

impl<const D: usize> fmt::Display for Rect<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..D {
            if i > 0 {
                f.write_str("x")?;
            }
            write!(f, "[{:.2}, {:.2}]", self.low.coord(i), self.high.coord(i))?;
        }
        Ok(())
    }
}
