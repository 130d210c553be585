//! Rectangle measures and set algebra.
//!
//! Everything here is pure except [`Rect::enlarge`], the one operation that
//! mutates a rectangle in place.

use crate::point::Point;
use crate::rect::Rect;

impl<const D: usize> Rect<D> {
    /// Hyper-volume: the product of the side lengths.
    pub fn size(&self) -> f64 {
        (0..D).map(|i| self.lengths_coord(i)).product()
    }

    /// Sum of all edge lengths.
    ///
    /// A `D`-dimensional box has `D * 2^(D-1)` edges, `2^(D-1)` of them
    /// parallel to each axis, so the margin is
    /// `2^(D-1) * (len[0] + ... + len[D-1])`.
    pub fn margin(&self) -> f64 {
        let edges_per_axis = 2f64.powi(D as i32 - 1);
        let sum: f64 = (0..D).map(|i| self.lengths_coord(i)).sum();
        edges_per_axis * sum
    }

    /// Whether `point` lies inside or on the boundary of this rectangle.
    pub fn contains_point(&self, point: &Point<D>) -> bool {
        (0..D).all(|i| {
            let c = point.coord(i);
            self.low.coord(i) <= c && c <= self.high.coord(i)
        })
    }

    /// Whether `other` lies inside this rectangle, boundaries included.
    pub fn contains_rect(&self, other: &Rect<D>) -> bool {
        (0..D).all(|i| {
            self.low.coord(i) <= other.low.coord(i) && other.high.coord(i) <= self.high.coord(i)
        })
    }

    /// Whether the two rectangles overlap on every axis.
    ///
    /// Rectangles that only share a face, edge or corner do **not**
    /// intersect: on each axis the boxes must overlap by a positive length.
    pub fn intersects(&self, other: &Rect<D>) -> bool {
        // Only two ways to miss on an axis: other entirely below, or entirely above.
        (0..D).all(|i| {
            !(other.high.coord(i) <= self.low.coord(i) || self.high.coord(i) <= other.low.coord(i))
        })
    }

    /// Grow this rectangle in place to the smallest box containing both its
    /// previous extent and `other`.
    ///
    /// This is the only mutating operation on [`Rect`]. Use
    /// [`Rect::bounding_box`] to get a new value instead.
    pub fn enlarge(&mut self, other: &Rect<D>) {
        let (mut low, mut high) = (*self.low.coords(), *self.high.coords());
        for i in 0..D {
            if low[i] > other.low.coord(i) {
                low[i] = other.low.coord(i);
            }
            if high[i] < other.high.coord(i) {
                high[i] = other.high.coord(i);
            }
        }
        self.low = Point::new(low);
        self.high = Point::new(high);
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn bounding_box(&self, other: &Rect<D>) -> Rect<D> {
        let mut bb = *self;
        bb.enlarge(other);
        bb
    }

    /// How much the size grows if `other` is merged into this rectangle.
    pub fn enlargement(&self, other: &Rect<D>) -> f64 {
        self.bounding_box(other).size() - self.size()
    }

    /// Hyper-volume of the intersection, or `0.0` when the rectangles do not
    /// intersect (including when they only touch).
    pub fn overlap(&self, other: &Rect<D>) -> f64 {
        if !self.intersects(other) {
            return 0.0;
        }
        (0..D)
            .map(|i| {
                let low = self.low.coord(i).max(other.low.coord(i));
                let high = self.high.coord(i).min(other.high.coord(i));
                high - low
            })
            .product()
    }
}

/// Whether `r1` and `r2` intersect. See [`Rect::intersects`].
pub fn intersect<const D: usize>(r1: &Rect<D>, r2: &Rect<D>) -> bool {
    r1.intersects(r2)
}

/// The smallest rectangle containing both `r1` and `r2`.
pub fn bounding_box<const D: usize>(r1: &Rect<D>, r2: &Rect<D>) -> Rect<D> {
    r1.bounding_box(r2)
}

/// The smallest rectangle containing every rectangle in `rects`.
///
/// Returns `None` for an empty input. A single input comes back as an owned
/// copy equal to it, so enlarging the result never touches the caller's
/// rectangle.
///
/// # Examples
///
/// ```
/// use spatio_geom::{Point, Rect, bounding_box_n};
///
/// let a = Rect::new(Point::new([0.0, 0.0]), [1.0, 1.0])?;
/// let b = Rect::new(Point::new([3.0, -2.0]), [1.0, 1.0])?;
/// let bb = bounding_box_n([&a, &b]).unwrap();
/// assert_eq!(bb, Rect::from_corners(Point::new([0.0, -2.0]), Point::new([4.0, 1.0]))?);
/// assert!(bounding_box_n(std::iter::empty::<&Rect<2>>()).is_none());
/// # Ok::<(), spatio_geom::GeomError>(())
/// ```
pub fn bounding_box_n<'a, const D: usize, I>(rects: I) -> Option<Rect<D>>
where
    I: IntoIterator<Item = &'a Rect<D>>,
{
    let mut iter = rects.into_iter();
    let mut bb = *iter.next()?;
    for rect in iter {
        bb.enlarge(rect);
    }
    Some(bb)
}
