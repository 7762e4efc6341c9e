use glam::Vec2;

/// Aspect-corrected resolution pair `[max(w/h,1), max(h/w,1)]` pushed to all
/// stage programs. Both components are at least 1, so scaling a normalized
/// coordinate by the pair only ever stretches the longer axis.
pub fn aspect_resolution(width: u32, height: u32) -> Vec2 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec2::new((w / h).max(1.0), (h / w).max(1.0))
}

/// Clamps canvas dimensions to at least one pixel per axis so a degenerate
/// resize event never allocates a zero-sized texture.
pub fn clamp_dimensions(width: u32, height: u32) -> (u32, u32) {
    (width.max(1), height.max(1))
}
