//! Conversions between 2-D points/rectangles and the `geo` crate.

use crate::error::{GeomError, Result};
use crate::point::Point;
use crate::rect::Rect;
use geo::{Coord, coord};

impl From<Coord<f64>> for Point<2> {
    fn from(c: Coord<f64>) -> Self {
        Point::new([c.x, c.y])
    }
}

impl From<Point<2>> for Coord<f64> {
    fn from(p: Point<2>) -> Self {
        coord! { x: p.coord(0), y: p.coord(1) }
    }
}

impl From<geo::Point<f64>> for Point<2> {
    fn from(p: geo::Point<f64>) -> Self {
        Point::new([p.x(), p.y()])
    }
}

impl From<Point<2>> for geo::Point<f64> {
    fn from(p: Point<2>) -> Self {
        geo::Point::new(p.coord(0), p.coord(1))
    }
}

impl From<Rect<2>> for geo::Rect<f64> {
    fn from(r: Rect<2>) -> Self {
        geo::Rect::new(Coord::from(r.low), Coord::from(r.high))
    }
}

impl TryFrom<geo::Rect<f64>> for Rect<2> {
    type Error = GeomError;

    /// `geo::Rect` allows zero width or height; those are rejected here.
    fn try_from(r: geo::Rect<f64>) -> Result<Self> {
        Rect::from_corners(r.min().into(), r.max().into())
    }
}
