use coulomb_sim::{
    bodies::{Body, BodyParams, DisplayAttrs},
    geometry::{distance_angle, point_distance},
    math::Vector2,
};
use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn circle(x: f64, y: f64, radius: f64) -> Body {
    Body::circle(Vector2::new(x, y), BodyParams::new(1.0, 0.0, radius)).unwrap()
}

fn wall(x1: f64, y1: f64, x2: f64, y2: f64) -> Body {
    Body::wall(Vector2::new(x1, y1), Vector2::new(x2, y2), 5.0, DisplayAttrs::default()).unwrap()
}

/// Difference of two angles folded into [0, 2pi)
fn angle_gap(a: f64, b: f64) -> f64 {
    (a - b).rem_euclid(TAU)
}

#[test]
fn test_circle_circle_distance_and_angle() {
    let a = circle(0.0, 0.0, 1.0);
    let b = circle(3.0, 4.0, 1.0);
    let separation = distance_angle(&a, &b).unwrap();

    assert_relative_eq!(separation.distance, 5.0);
    assert_relative_eq!(separation.angle, 4.0f64.atan2(3.0));
}

#[test]
fn test_wall_normal_points_toward_circle() {
    let floor = wall(0.0, 0.0, 100.0, 0.0);

    let above = distance_angle(&floor, &circle(30.0, 4.0, 5.0)).unwrap();
    assert_relative_eq!(above.distance, 4.0);
    assert_relative_eq!(above.angle, FRAC_PI_2);

    let below = distance_angle(&floor, &circle(30.0, -4.0, 5.0)).unwrap();
    assert_relative_eq!(below.distance, 4.0);
    assert_relative_eq!(below.angle, -FRAC_PI_2);
}

#[test]
fn test_vertical_wall() {
    let side = wall(50.0, 0.0, 50.0, 100.0);

    let right = distance_angle(&side, &circle(55.0, 20.0, 5.0)).unwrap();
    assert_relative_eq!(right.distance, 5.0);
    assert_relative_eq!(right.angle, 0.0);

    let left = distance_angle(&side, &circle(47.0, 80.0, 5.0)).unwrap();
    assert_relative_eq!(left.distance, 3.0);
    assert_relative_eq!(left.angle.abs(), PI);
}

#[test]
fn test_diagonal_wall() {
    let slope = wall(0.0, 0.0, 10.0, 10.0);
    let separation = distance_angle(&slope, &circle(0.0, 10.0, 1.0)).unwrap();

    assert_relative_eq!(separation.distance, 50.0f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(separation.angle, 3.0 * PI / 4.0, epsilon = 1e-12);
}

#[test]
fn test_beyond_segment_falls_back_to_endpoint() {
    let floor = wall(0.0, 0.0, 100.0, 0.0);

    let past_end = distance_angle(&floor, &circle(106.0, 8.0, 1.0)).unwrap();
    assert_relative_eq!(past_end.distance, 10.0);
    assert_relative_eq!(past_end.angle, 8.0f64.atan2(6.0));

    let before_start = distance_angle(&floor, &circle(-3.0, 0.0, 1.0)).unwrap();
    assert_relative_eq!(before_start.distance, 3.0);
    assert_relative_eq!(before_start.angle.abs(), PI);
}

#[test]
fn test_degenerate_pairs_do_not_interact() {
    // coincident centers
    assert!(distance_angle(&circle(5.0, 5.0, 1.0), &circle(5.0, 5.0, 2.0)).is_none());

    // circle centred on the wall line
    let floor = wall(0.0, 0.0, 100.0, 0.0);
    assert!(distance_angle(&floor, &circle(40.0, 0.0, 1.0)).is_none());

    // walls never interact with each other
    assert!(distance_angle(&floor, &wall(0.0, 10.0, 100.0, 10.0)).is_none());
}

#[test]
fn test_zero_length_wall_behaves_as_point() {
    let dot = wall(10.0, 10.0, 10.0, 10.0);
    let separation = distance_angle(&dot, &circle(13.0, 14.0, 1.0)).unwrap();

    assert_relative_eq!(separation.distance, 5.0);
    assert!(separation.angle.is_finite());
}

#[test]
fn test_geometry_symmetry() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let a = circle(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0), 1.0);
        let b = if rng.gen_bool(0.5) {
            circle(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0), 1.0)
        } else {
            wall(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            )
        };

        let (Some(ab), Some(ba)) = (distance_angle(&a, &b), distance_angle(&b, &a)) else {
            continue;
        };

        assert_eq!(ab.distance, ba.distance);
        let gap = angle_gap(ab.angle, ba.angle + PI);
        assert!(gap < 1e-9 || TAU - gap < 1e-9, "angles {} and {} are not opposite", ab.angle, ba.angle);
    }
}

#[test]
fn test_point_distance() {
    assert_relative_eq!(point_distance(&circle(3.0, 4.0, 2.0), Vector2::zero()), 5.0);

    let floor = wall(0.0, 0.0, 100.0, 0.0);
    assert_relative_eq!(point_distance(&floor, Vector2::new(50.0, -7.0)), 7.0);
    assert_relative_eq!(point_distance(&floor, Vector2::new(103.0, 4.0)), 5.0);
}
