use rand::Rng;

use crate::geometry::Point3;

/// Moves `p1` toward `p2` by a random distance in `[min, max]`.
///
/// Returns `p1` unchanged when the points are closer than `min`. `max` is
/// clamped to the segment length so the result never passes `p2`.
pub fn spin_offset<R: Rng>(rng: &mut R, p1: Point3, p2: Point3, min: f64, max: f64) -> Point3 {
    let (min, mut max) = if min > max { (max, min) } else { (min, max) };
    let min = min.max(0.0);
    max = max.max(min);
    let dir = p2 - p1;
    let len = dir.length();
    if len < min {
        return p1;
    }
    if len < max {
        max = len;
    }
    let Some(unit) = dir.normalized() else { return p1 };
    p1 + unit * rng.gen_range(min..=max)
}
