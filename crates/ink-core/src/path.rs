use glam::Vec2;

/// Resamples the piecewise-linear path through `points` to exactly `count`
/// points, evenly spaced by source *index* rather than arc length: output
/// position `i` maps to fractional source index `i·(len-1)/(count-1)`.
///
/// `count == 0` or an empty input yields an empty vec. `count == 1` returns
/// the first source point; the fractional-index formula divides by
/// `count - 1`, so the single-point contract is pinned down here explicitly.
pub fn interpolate_points(points: &[Vec2], count: usize) -> Vec<Vec2> {
    if count == 0 || points.is_empty() {
        return Vec::new();
    }
    if count == 1 {
        return vec![points[0]];
    }

    let last = points.len() - 1;
    let step = last as f32 / (count - 1) as f32;
    let mut resampled = Vec::with_capacity(count);
    for i in 0..count {
        let index = i as f32 * step;
        let floor = (index.floor() as usize).min(last);
        let ceil = (index.ceil() as usize).min(last);
        if floor == ceil {
            resampled.push(points[floor]);
        } else {
            let fraction = index - floor as f32;
            resampled.push(points[floor] + (points[ceil] - points[floor]) * fraction);
        }
    }
    resampled
}

/// Sum of Euclidean segment lengths of a polyline.
pub fn total_length(points: &[Vec2]) -> f32 {
    points
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .sum()
}
