use rand::Rng;

use crate::geometry::Point3;
use crate::options::ShrinkRange;
use crate::portal::Portal;

/// Contracts every portal toward its planar midpoint by `rate`.
///
/// The result owns a fresh vertex array with two entries per portal, in slot
/// order, and portals reindexed into it (`2k`, `2k + 1`). The mesh vertices are
/// never shared, so neighbouring portals get independent copies of a common
/// corner.
pub fn shrink_portals(portals: &[Portal], vertices: &[Point3], rate: f64) -> (Vec<Portal>, Vec<Point3>) {
    let mut out_vertices = Vec::with_capacity(portals.len() * 2);
    let mut out_portals = Vec::with_capacity(portals.len());
    for portal in portals {
        let a = vertices[portal.a as usize];
        let b = vertices[portal.b as usize];
        let mid = a.planar_midpoint(b);
        let base = out_vertices.len() as u32;
        out_vertices.push(mid + (a - mid) * rate);
        out_vertices.push(mid + (b - mid) * rate);
        out_portals.push(Portal::new(base, base + 1));
    }
    (out_portals, out_vertices)
}

/// Draws a shrink rate uniformly from `[min, max)`; a zero-width range yields `min`.
pub fn random_rate<R: Rng>(rng: &mut R, range: ShrinkRange) -> f64 {
    if range.min < range.max {
        rng.gen_range(range.min..range.max)
    } else {
        range.min
    }
}
