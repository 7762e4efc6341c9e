use glam::Vec2;
use ink_core::{interpolate_points, total_length};

#[test]
fn resampling_to_source_length_is_identity() {
    let points = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.3, 0.7),
        Vec2::new(1.0, 0.2),
    ];
    let resampled = interpolate_points(&points, points.len());
    assert_eq!(resampled.len(), points.len());
    for (a, b) in points.iter().zip(&resampled) {
        assert!(a.distance(*b) < 1e-6);
    }
}

#[test]
fn zero_count_yields_empty() {
    let points = vec![Vec2::ZERO, Vec2::ONE];
    assert!(interpolate_points(&points, 0).is_empty());
    assert!(interpolate_points(&[], 5).is_empty());
}

#[test]
fn single_point_request_returns_the_first_point() {
    let points = vec![Vec2::new(0.25, 0.75), Vec2::ONE];
    let resampled = interpolate_points(&points, 1);
    assert_eq!(resampled, vec![Vec2::new(0.25, 0.75)]);
}

#[test]
fn segment_resamples_to_evenly_spaced_points() {
    let points = vec![Vec2::ZERO, Vec2::new(1.0, 0.0)];
    let resampled = interpolate_points(&points, 5);
    assert_eq!(resampled.len(), 5);
    for (i, p) in resampled.iter().enumerate() {
        assert!((p.x - i as f32 * 0.25).abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }
}

#[test]
fn endpoints_are_preserved() {
    let points = vec![
        Vec2::new(0.1, 0.9),
        Vec2::new(0.4, 0.4),
        Vec2::new(0.9, 0.1),
    ];
    let resampled = interpolate_points(&points, 20);
    assert!(resampled[0].distance(points[0]) < 1e-6);
    assert!(resampled[19].distance(points[2]) < 1e-6);
}

#[test]
fn spacing_is_by_index_not_arc_length() {
    // Second segment is much longer; index-even sampling still places the
    // middle output point on the shared interior source point.
    let points = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.1, 0.0),
        Vec2::new(1.0, 0.0),
    ];
    let resampled = interpolate_points(&points, 5);
    // Fractional index 1.0 lands exactly on the interior point, and index
    // 0.5 is halfway along the short first segment, not the full path.
    assert!(resampled[2].distance(points[1]) < 1e-6);
    assert!(resampled[1].distance(Vec2::new(0.05, 0.0)) < 1e-6);
}

#[test]
fn total_length_sums_segments() {
    let square = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(0.0, 0.0),
    ];
    assert!((total_length(&square) - 4.0).abs() < 1e-6);
    assert_eq!(total_length(&square[..1]), 0.0);
    assert_eq!(total_length(&[]), 0.0);
}
