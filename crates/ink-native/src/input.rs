use glam::Vec2;

/// Maps a window-space cursor position in physical pixels to the normalized
/// `[0,1]²` pointer domain, clamped at the edges.
pub fn cursor_to_normalized(x: f64, y: f64, width: u32, height: u32) -> Vec2 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec2::new(
        (x as f32 / w).clamp(0.0, 1.0),
        (y as f32 / h).clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_window_maps_to_half() {
        let uv = cursor_to_normalized(400.0, 300.0, 800, 600);
        assert!((uv.x - 0.5).abs() < 1e-6);
        assert!((uv.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn positions_outside_window_are_clamped() {
        let uv = cursor_to_normalized(-50.0, 900.0, 800, 600);
        assert_eq!(uv.x, 0.0);
        assert_eq!(uv.y, 1.0);
    }

    #[test]
    fn zero_sized_window_does_not_divide_by_zero() {
        let uv = cursor_to_normalized(10.0, 10.0, 0, 0);
        assert!(uv.x.is_finite() && uv.y.is_finite());
    }
}
