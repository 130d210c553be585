//! Best-first nearest-rectangle search using the two distance bounds.
//!
//! Candidates are visited in `min_dist` order. The smallest `min_max_dist`
//! seen so far guarantees an object at most that far away, so any candidate
//! whose `min_dist` exceeds it can be skipped. The same query then runs
//! through an `rstar::RTree`, which orders by `min_dist` as well.

use rstar::RTree;
use spatio_geom::{Point3, Rect3, bounding_box_n};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rects = Vec::new();
    for i in 0..10 {
        for j in 0..10 {
            let low = Point3::new([i as f64 * 3.0, j as f64 * 3.0, (i + j) as f64 * 0.5]);
            rects.push(Rect3::new(
                low,
                [1.0 + (i % 3) as f64, 1.0 + (j % 2) as f64, 2.0],
            )?);
        }
    }

    let world = bounding_box_n(&rects).ok_or("no rectangles")?;
    println!("World bounds: {}", world);
    println!(
        "World size: {:.2}, margin: {:.2}",
        world.size(),
        world.margin()
    );

    let query = Point3::new([13.7, 8.2, 20.0]);

    let mut order: Vec<(f64, usize)> = rects
        .iter()
        .enumerate()
        .map(|(i, r)| (query.min_dist(r), i))
        .collect();
    order.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut bound = f64::INFINITY;
    let mut visited = 0;
    for &(lower, i) in &order {
        if lower > bound {
            break;
        }
        visited += 1;
        bound = bound.min(query.min_max_dist(&rects[i]));
    }

    let (dist2, idx) = order[0];
    println!(
        "Nearest rectangle {} at distance {:.3} (visited {} of {})",
        rects[idx],
        dist2.sqrt(),
        visited,
        rects.len()
    );

    let tree = RTree::bulk_load(rects.clone());
    if let Some(nearest) = tree.nearest_neighbor(&query) {
        println!(
            "R-tree agrees: {} at distance {:.3}",
            nearest,
            query.min_dist(nearest).sqrt()
        );
    }

    Ok(())
}
