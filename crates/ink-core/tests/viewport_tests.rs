use ink_core::{aspect_resolution, clamp_dimensions};

#[test]
fn landscape_resolution_stretches_x_only() {
    let r = aspect_resolution(800, 600);
    assert!((r.x - 800.0 / 600.0).abs() < 1e-6);
    assert_eq!(r.y, 1.0);
}

#[test]
fn portrait_resolution_stretches_y_only() {
    let r = aspect_resolution(600, 800);
    assert_eq!(r.x, 1.0);
    assert!((r.y - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn resolution_is_scale_invariant() {
    // Halving both axes must leave the aspect-corrected pair unchanged.
    let before = aspect_resolution(800, 600);
    let after = aspect_resolution(400, 300);
    assert!((before.x - after.x).abs() < 1e-6);
    assert!((before.y - after.y).abs() < 1e-6);
}

#[test]
fn square_canvas_is_the_identity_pair() {
    let r = aspect_resolution(512, 512);
    assert_eq!((r.x, r.y), (1.0, 1.0));
}

#[test]
fn degenerate_dimensions_stay_finite() {
    let r = aspect_resolution(0, 0);
    assert!(r.x.is_finite() && r.y.is_finite());
    assert_eq!(clamp_dimensions(0, 0), (1, 1));
    assert_eq!(clamp_dimensions(0, 600), (1, 600));
    assert_eq!(clamp_dimensions(800, 600), (800, 600));
}
