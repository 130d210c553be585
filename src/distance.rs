//! Point-to-rectangle distance bounds used for nearest-neighbour pruning.
//!
//! Both metrics follow Definitions 2 and 4 of "Nearest Neighbor Queries" by
//! N. Roussopoulos, S. Kelley and F. Vincent (ACM SIGMOD 1995). They return
//! *squared* distances: callers only compare them against each other, so the
//! square root is left to whoever needs an absolute value.

use crate::point::Point;
use crate::rect::Rect;

impl<const D: usize> Point<D> {
    /// Squared distance from this point to the nearest point of `rect`.
    ///
    /// Zero when the point lies inside or on the boundary of `rect`. This is
    /// a lower bound on the distance to anything stored inside `rect`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spatio_geom::{Point, Rect};
    ///
    /// let r = Rect::new(Point::new([0.0, 0.0, 0.0]), [2.0, 2.0, 2.0])?;
    /// assert_eq!(Point::new([1.0, 1.0, 1.0]).min_dist(&r), 0.0);
    /// assert_eq!(Point::new([-1.0, 0.0, 0.0]).min_dist(&r), 1.0);
    /// # Ok::<(), spatio_geom::GeomError>(())
    /// ```
    pub fn min_dist(&self, rect: &Rect<D>) -> f64 {
        let mut sum = 0.0;
        for i in 0..D {
            let p = self.coord(i);
            let (low, high) = (rect.low.coord(i), rect.high.coord(i));
            if p < low {
                let d = p - low;
                sum += d * d;
            } else if p > high {
                let d = p - high;
                sum += d * d;
            }
        }
        sum
    }

    /// Squared minimum of the maximum distances from this point to the faces
    /// of `rect`.
    ///
    /// If `rect` is the bounding box of a set of objects, at least one of
    /// them lies within `sqrt(min_max_dist)` of the point, so this is an
    /// upper bound on the nearest-neighbour distance.
    ///
    /// Linear in `D`: `S`, the sum of squared distances to the far corner
    /// coordinate on every axis, is computed once. The candidate for axis
    /// `k` is then `S - far_k + near_k`, evaluated in that order. Regrouping
    /// it as `S + (near_k - far_k)` can round below [`Point::min_dist`].
    pub fn min_max_dist(&self, rect: &Rect<D>) -> f64 {
        let far_sum: f64 = (0..D).map(|k| self.far_near_sq(rect, k).0).sum();

        (0..D)
            .map(|k| {
                let (far_sq, near_sq) = self.far_near_sq(rect, k);
                far_sum - far_sq + near_sq
            })
            .fold(f64::INFINITY, f64::min)
    }

    /// Squared distances on axis `k` to the far and near corner coordinates.
    #[inline]
    fn far_near_sq(&self, rect: &Rect<D>, k: usize) -> (f64, f64) {
        let p = self.coord(k);
        let (low, high) = (rect.low.coord(k), rect.high.coord(k));
        let mid = (low + high) / 2.0;

        let far = if p >= mid { low } else { high };
        let near = if p <= mid { low } else { high };

        let (d_far, d_near) = (p - far, p - near);
        (d_far * d_far, d_near * d_near)
    }
}
