//! `rstar` integration.
//!
//! [`Point`] implements `rstar::Point`, and [`Rect`] is an `rstar` object
//! whose envelope is its own extent. `distance_2` is [`Point::min_dist`], so
//! `RTree::nearest_neighbor` orders candidates by the same lower bound this
//! crate exposes.
//!
//! ```rust
//! use rstar::RTree;
//! use spatio_geom::{Point, Rect};
//!
//! let rects = vec![
//!     Rect::new(Point::new([0.0, 0.0, 0.0]), [1.0, 1.0, 1.0])?,
//!     Rect::new(Point::new([10.0, 0.0, 0.0]), [1.0, 1.0, 1.0])?,
//! ];
//! let tree = RTree::bulk_load(rects);
//! let nearest = tree.nearest_neighbor(&Point::new([8.0, 0.5, 0.5])).unwrap();
//! assert_eq!(nearest.point_coord(0), 10.0);
//! # Ok::<(), spatio_geom::GeomError>(())
//! ```

use crate::error::{GeomError, Result};
use crate::point::Point;
use crate::rect::Rect;
use rstar::{AABB, PointDistance, RTreeObject};

impl<const D: usize> rstar::Point for Point<D> {
    type Scalar = f64;
    const DIMENSIONS: usize = D;

    fn generate(generator: impl FnMut(usize) -> Self::Scalar) -> Self {
        Point::new(std::array::from_fn(generator))
    }

    fn nth(&self, index: usize) -> Self::Scalar {
        self.coord(index)
    }

    fn nth_mut(&mut self, index: usize) -> &mut Self::Scalar {
        &mut self.coords_mut()[index]
    }
}

impl<const D: usize> RTreeObject for Rect<D> {
    type Envelope = AABB<Point<D>>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.low, self.high)
    }
}

impl<const D: usize> PointDistance for Rect<D> {
    fn distance_2(&self, point: &Point<D>) -> f64 {
        point.min_dist(self)
    }

    fn contains_point(&self, point: &Point<D>) -> bool {
        Rect::contains_point(self, point)
    }
}

impl<const D: usize> From<Rect<D>> for AABB<Point<D>> {
    fn from(rect: Rect<D>) -> Self {
        rect.envelope()
    }
}

impl<const D: usize> TryFrom<AABB<Point<D>>> for Rect<D> {
    type Error = GeomError;

    /// Fails when the envelope is flat on some axis, e.g. the envelope of a
    /// single point.
    fn try_from(aabb: AABB<Point<D>>) -> Result<Self> {
        Rect::from_corners(aabb.lower(), aabb.upper())
    }
}
