//! Adapters to the spatial crates the rest of the spatio stack is built on.
//!
//! - `rstar`: points and rectangles plug straight into an `rstar::RTree`.
//! - `geo`: 2-D conversions to and from `geo` coordinates and rectangles.

#[cfg(feature = "geo")]
pub mod geo2d;
#[cfg(feature = "rstar")]
pub mod rtree;
