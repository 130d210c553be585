//! Bounding-box geometry for R-tree style spatial indexes.
//!
//! Fixed-dimension points and axis-aligned rectangles, the two distance
//! bounds used to prune nearest-neighbour searches, and the rectangle algebra
//! (containment, intersection, union, size, margin) that tree maintenance is
//! built from. Dimensionality is a const generic shared by every operand.
//!
//! ```rust
//! use spatio_geom::{Point, Rect, bounding_box};
//!
//! let a = Rect::new(Point::new([0.0, 0.0, 0.0]), [2.0, 2.0, 2.0])?;
//! let b = Rect::new(Point::new([1.0, 1.0, 1.0]), [3.0, 1.0, 1.0])?;
//! assert!(a.intersects(&b));
//!
//! let bb = bounding_box(&a, &b);
//! assert!(bb.contains_rect(&a) && bb.contains_rect(&b));
//!
//! let query = Point::new([-1.0, 0.0, 0.0]);
//! assert_eq!(query.min_dist(&a), 1.0);
//! assert!(query.min_max_dist(&a) >= query.min_dist(&a));
//! # Ok::<(), spatio_geom::GeomError>(())
//! ```

pub mod algebra;
pub mod distance;
pub mod error;
pub mod interop;
pub mod point;
pub mod rect;

pub use algebra::{bounding_box, bounding_box_n, intersect};
pub use error::{GeomError, Result};
pub use point::Point;
pub use rect::Rect;

/// Dimensionality used by the `Point3`/`Rect3` aliases.
pub const DEFAULT_DIM: usize = 3;

pub type Point3 = Point<DEFAULT_DIM>;
pub type Rect3 = Rect<DEFAULT_DIM>;
pub type Point2 = Point<2>;
pub type Rect2 = Rect<2>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{GeomError, Point, Point2, Point3, Rect, Rect2, Rect3, Result};

    pub use crate::{bounding_box, bounding_box_n, intersect};
}
