use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spatio_geom::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn cube() -> Rect3 {
    Rect::new(Point::new([0.0, 0.0, 0.0]), [2.0, 2.0, 2.0]).expect("valid cube")
}

fn random_rect<const D: usize>(rng: &mut StdRng) -> Rect<D> {
    let low = Point::new(std::array::from_fn(|_| rng.random_range(-50.0..50.0)));
    let lengths = std::array::from_fn(|_| rng.random_range(0.1..20.0));
    Rect::new(low, lengths).expect("positive lengths")
}

fn random_point<const D: usize>(rng: &mut StdRng) -> Point<D> {
    Point::new(std::array::from_fn(|_| rng.random_range(-80.0..80.0)))
}

/// Test 1: construction of the reference cube
#[test]
fn test_reference_cube() {
    let r = cube();
    assert_eq!(r.low(), &Point::new([0.0, 0.0, 0.0]));
    assert_eq!(r.high(), &Point::new([2.0, 2.0, 2.0]));
    assert_eq!(r.size(), 8.0);
    assert_eq!(r.margin(), 24.0);
    assert_eq!(r.to_string(), "[0.00, 2.00]x[0.00, 2.00]x[0.00, 2.00]");
}

/// Test 2: every non-positive length is rejected and reported
#[test]
fn test_degenerate_lengths_are_rejected() {
    init_logging();
    for bad in [0.0, -0.0, -1.0, -1e-300, f64::NEG_INFINITY] {
        for axis in 0..3 {
            let mut lengths = [1.0; 3];
            lengths[axis] = bad;
            let err = Rect::new(Point::new([0.0; 3]), lengths).unwrap_err();
            assert_eq!(err, GeomError::DegenerateRectangle { axis, length: bad });
            assert_eq!(err.offending_length(), bad);
        }
    }
}

/// Test 3: min_dist against the reference cube
#[test]
fn test_min_dist_reference_values() {
    let r = cube();
    assert_eq!(Point::new([1.0, 1.0, 1.0]).min_dist(&r), 0.0);
    assert_eq!(Point::new([-1.0, 0.0, 0.0]).min_dist(&r), 1.0);
}

/// Test 4: containment agrees with a zero min_dist
#[test]
fn test_contains_point_iff_zero_min_dist() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2_000 {
        let r: Rect<3> = random_rect(&mut rng);
        let p: Point<3> = random_point(&mut rng);
        assert_eq!(r.contains_point(&p), p.min_dist(&r) == 0.0, "{r} vs {p:?}");

        // Corners and the center are always contained.
        for q in [*r.low(), *r.high(), r.center()] {
            assert!(r.contains_point(&q));
            assert_eq!(q.min_dist(&r), 0.0);
        }
    }
}

fn assert_min_max_dist_at_least_min_dist<const D: usize>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..20_000 {
        let r: Rect<D> = random_rect(&mut rng);
        let p: Point<D> = random_point(&mut rng);
        let lower = p.min_dist(&r);
        let upper = p.min_max_dist(&r);
        assert!(
            upper >= lower,
            "D={D}: min_max_dist {upper} < min_dist {lower} for {p:?} and {r}"
        );
    }
}

/// Test 5: the upper bound never drops below the lower bound
#[test]
fn test_min_max_dist_at_least_min_dist() {
    assert_min_max_dist_at_least_min_dist::<1>(11);
    assert_min_max_dist_at_least_min_dist::<2>(12);
    assert_min_max_dist_at_least_min_dist::<3>(13);
    assert_min_max_dist_at_least_min_dist::<4>(14);

    // Point just past the high edge of a segment: both bounds are the same
    // squared gap and must agree exactly.
    let r = Rect::from_corners(Point::new([-35.789_7]), Point::new([-17.933_1])).unwrap();
    let p = Point::new([-17.517_108_041_889_777]);
    assert_eq!(p.min_max_dist(&r), p.min_dist(&r));
}

/// Test 6: the upper bound never exceeds the distance to the farthest corner
#[test]
fn test_min_max_dist_below_farthest_corner() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..500 {
        let r: Rect<3> = random_rect(&mut rng);
        let p: Point<3> = random_point(&mut rng);
        let upper = p.min_max_dist(&r).sqrt();

        let farthest = (0..8)
            .map(|mask| {
                Point::new(std::array::from_fn(|i| {
                    if mask & (1 << i) == 0 {
                        r.low()[i]
                    } else {
                        r.high()[i]
                    }
                }))
            })
            .map(|corner: Point<3>| p.dist(&corner))
            .fold(0.0, f64::max);
        assert!(upper <= farthest + 1e-9);
    }
}

/// Test 7: equality is exact, reflexive and symmetric
#[test]
fn test_equality_is_exact() {
    let a = cube();
    let b = cube();
    assert_eq!(a, b);
    assert_eq!(b, a);

    for axis in 0..3 {
        let mut low = [0.0; 3];
        low[axis] = f64::EPSILON;
        let shifted = Rect::new(Point::new(low), [2.0, 2.0, 2.0]).unwrap();
        assert_ne!(a, shifted);

        let mut lengths = [2.0; 3];
        lengths[axis] += 1e-9;
        let stretched = Rect::new(Point::new([0.0; 3]), lengths).unwrap();
        assert_ne!(a, stretched);
    }
}

/// Test 8: intersection is symmetric and excludes touching boxes
#[test]
fn test_intersect_symmetry_and_touching() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..2_000 {
        let a: Rect<3> = random_rect(&mut rng);
        let b: Rect<3> = random_rect(&mut rng);
        assert_eq!(intersect(&a, &b), intersect(&b, &a));
        assert_eq!(a.overlap(&b) > 0.0, intersect(&a, &b));
    }

    let a = cube();
    let face = Rect::new(Point::new([2.0, 0.5, 0.5]), [1.0, 1.0, 1.0]).unwrap();
    assert!(!intersect(&a, &face));
    assert!(!intersect(&face, &a));

    let overlapping = Rect::new(Point::new([1.999, 0.5, 0.5]), [1.0, 1.0, 1.0]).unwrap();
    assert!(intersect(&a, &overlapping));
}

/// Test 9: unions contain their inputs
#[test]
fn test_bounding_box_contains_inputs() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..1_000 {
        let a: Rect<3> = random_rect(&mut rng);
        let b: Rect<3> = random_rect(&mut rng);
        let bb = bounding_box(&a, &b);
        assert!(bb.contains_rect(&a));
        assert!(bb.contains_rect(&b));
        assert_eq!(bb, bounding_box(&b, &a));
        assert!(a.enlargement(&b) >= 0.0);
    }

    let rects: Vec<Rect<3>> = (0..32).map(|_| random_rect(&mut rng)).collect();
    let bb = bounding_box_n(&rects).unwrap();
    assert!(rects.iter().all(|r| bb.contains_rect(r)));
}

/// Test 10: a single-input union equals the input
#[test]
fn test_bounding_box_n_single_input() {
    let r = cube();
    assert_eq!(bounding_box_n([&r]), Some(r));
    assert_eq!(bounding_box_n(Vec::<&Rect3>::new()), None);
}

/// Test 11: enlarging with a contained rectangle changes nothing
#[test]
fn test_enlarge_idempotent_on_contained() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..500 {
        let mut outer: Rect<3> = random_rect(&mut rng);
        let inner = Rect::from_corners(
            Point::new(std::array::from_fn(|i| outer.low()[i] + outer.lengths_coord(i) * 0.25)),
            Point::new(std::array::from_fn(|i| outer.low()[i] + outer.lengths_coord(i) * 0.75)),
        )
        .unwrap();
        assert!(outer.contains_rect(&inner));

        let before = outer;
        outer.enlarge(&inner);
        assert_eq!(outer, before);
        outer.enlarge(&before);
        assert_eq!(outer, before);
    }
}

/// Test 12: tolerance boxes are centred on their point
#[test]
fn test_point_to_rect() {
    let p = Point::new([3.0, -1.0, 0.0]);
    let r = p.to_rect(0.5);
    assert_eq!(r.center(), p);
    assert_eq!(r.lengths(), [1.0, 1.0, 1.0]);
    assert_eq!(p.min_dist(&r), 0.0);
}

/// Test 13: higher dimensions scale the margin factor
#[test]
fn test_margin_scales_with_dimension() {
    let r5 = Rect::new(Point::new([0.0; 5]), [1.0; 5]).unwrap();
    assert_eq!(r5.margin(), 16.0 * 5.0);

    let r2 = Rect2::new(Point2::new([0.0, 0.0]), [3.0, 4.0]).unwrap();
    assert_eq!(r2.margin(), 14.0);
}
