//! Funnel (string-pulling) algorithm that converts an ordered portal corridor
//! into the turn points of a taut path.
//!
//! Deterministic, allocation-free except for the output turns. Turn decisions
//! only look at the sign of `cross(a, b).z`, so the mesh is treated as lying in
//! the x-y plane. Collinear cases count as inside the funnel.

use tracing::trace;

use crate::geometry::{Point3, Vector3};
use crate::portal::{Portal, PortalList};

/// A portal seen from an apex: which endpoint lies on which side, and the
/// vectors from the apex to each.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Visibility {
    pub left: Vector3,
    pub right: Vector3,
    pub left_vertex: u32,
    pub right_vertex: u32,
}

/// Orders the endpoints of `portal` into left/right relative to `apex`.
#[inline]
pub fn classify(apex: Point3, vertices: &[Point3], portal: Portal) -> Visibility {
    let va = vertices[portal.a as usize] - apex;
    let vb = vertices[portal.b as usize] - apex;
    if va.cross_z(vb) > 0.0 {
        Visibility { left: vb, right: va, left_vertex: portal.b, right_vertex: portal.a }
    } else {
        Visibility { left: va, right: vb, left_vertex: portal.a, right_vertex: portal.b }
    }
}

/// Visibility wedge anchored at the current apex. Each bound remembers the
/// portal it was taken from so a restart can resume after it.
#[derive(Copy, Clone, Debug)]
struct Funnel {
    left: Vector3,
    right: Vector3,
    left_vertex: u32,
    right_vertex: u32,
    left_portal: usize,
    right_portal: usize,
}

impl Funnel {
    fn open(apex: Point3, list: &PortalList, k: usize) -> Self {
        let vis = classify(apex, &list.vertices, list.portals[k]);
        Self {
            left: vis.left,
            right: vis.right,
            left_vertex: vis.left_vertex,
            right_vertex: vis.right_vertex,
            left_portal: k,
            right_portal: k,
        }
    }

    /// Vertex and source portal the funnel must pivot on, if `cur` collapses it.
    fn collapse(&self, cur: &Visibility) -> Option<(u32, usize)> {
        if self.left.cross_z(cur.right) > 0.0 {
            // right side swept past the left bound
            Some((self.left_vertex, self.left_portal))
        } else if self.right.cross_z(cur.left) < 0.0 {
            Some((self.right_vertex, self.right_portal))
        } else {
            None
        }
    }

    fn tighten(&mut self, cur: &Visibility, k: usize) {
        if self.left.cross_z(cur.left) < 0.0 {
            self.left = cur.left;
            self.left_vertex = cur.left_vertex;
            self.left_portal = k;
        }
        if self.right.cross_z(cur.right) > 0.0 {
            self.right = cur.right;
            self.right_vertex = cur.right_vertex;
            self.right_portal = k;
        }
    }
}

/// First portal at or after `from` that does not touch the pivot, either by
/// index or by sharing its exact position.
fn restart_portal(list: &PortalList, pivot: u32, apex: Point3, from: usize) -> Option<usize> {
    (from..list.portals.len()).find(|&i| {
        let p = list.portals[i];
        !p.touches(pivot) && list.position(p.a) != apex && list.position(p.b) != apex
    })
}

/// Walks `list` from `start` and returns the emitted turn points in order.
///
/// The start point is not included. The goal is not included either; it is
/// the caller's final waypoint.
pub fn walk(start: Point3, list: &PortalList) -> Vec<Point3> {
    let mut turns = Vec::new();
    if list.portals.is_empty() {
        return turns;
    }

    let mut apex = start;
    let mut funnel = Funnel::open(apex, list, 0);
    let mut k = 1usize;
    while k < list.portals.len() {
        let cur = classify(apex, &list.vertices, list.portals[k]);
        let Some((pivot, from)) = funnel.collapse(&cur) else {
            funnel.tighten(&cur, k);
            k += 1;
            continue;
        };

        apex = list.position(pivot);
        trace!(portal = k, vertex = pivot, x = apex.x, y = apex.y, "funnel_turn");
        turns.push(apex);

        match restart_portal(list, pivot, apex, from + 1) {
            Some(i) => {
                funnel = Funnel::open(apex, list, i);
                k = i + 1;
            }
            None => break,
        }
    }
    turns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point3 { Point3::new(x, y, 0.0) }

    fn angle(a: Vector3, b: Vector3) -> f64 { a.cross_z(b).abs().atan2(a.x * b.x + a.y * b.y) }

    #[test]
    fn classify_is_independent_of_storage_order() {
        let verts = vec![p(1.0, -1.0), p(1.0, 1.0)];
        let apex = p(0.0, 0.0);
        let fwd = classify(apex, &verts, Portal::new(0, 1));
        let rev = classify(apex, &verts, Portal::new(1, 0));
        assert_eq!(fwd, rev);
        // heading +x, the +y endpoint is on the left
        assert_eq!(fwd.left_vertex, 1);
        assert_eq!(fwd.right_vertex, 0);
        assert!(fwd.left.cross_z(fwd.right) <= 0.0);
    }

    #[test]
    fn straight_corridor_has_no_turns() {
        let verts = vec![p(1.0, -1.0), p(1.0, 1.0), p(2.0, -1.0), p(2.0, 1.0)];
        let list = PortalList::with_goal(verts, vec![Portal::new(0, 1), Portal::new(3, 2)], p(3.0, 0.0));
        assert!(walk(p(0.0, 0.0), &list).is_empty());
    }

    #[test]
    fn offset_corridor_turns_at_inner_corner() {
        // narrow opening at x=1, then shifted upwards
        let verts = vec![p(1.0, -0.5), p(1.0, 0.5), p(2.0, 0.5), p(2.0, 2.0)];
        let list = PortalList::with_goal(verts, vec![Portal::new(0, 1), Portal::new(2, 3)], p(3.0, 2.0));
        let turns = walk(p(0.0, 0.0), &list);
        assert_eq!(turns, vec![p(1.0, 0.5)]);
    }

    #[test]
    fn only_goal_portal() {
        let list = PortalList::with_goal(Vec::new(), Vec::new(), p(5.0, 5.0));
        assert!(walk(p(0.0, 0.0), &list).is_empty());
        let empty = PortalList { vertices: Vec::new(), portals: Vec::new() };
        assert!(walk(p(0.0, 0.0), &empty).is_empty());
    }

    #[test]
    fn point_portals_become_turns() {
        // zero-width portals off the straight line force a turn at each one
        let verts = vec![p(1.0, 1.0), p(2.0, -1.0)];
        let list = PortalList::with_goal(verts, vec![Portal::point(0), Portal::point(1)], p(3.0, 0.0));
        assert_eq!(walk(p(0.0, 0.0), &list), vec![p(1.0, 1.0), p(2.0, -1.0)]);
    }

    #[test]
    fn bounds_never_widen_between_turns() {
        let apex = p(0.0, 0.5);
        let verts = vec![
            p(1.0, -1.0), p(1.0, 2.0),
            p(2.0, -0.5), p(2.0, 1.5),
            p(3.0, 0.0), p(3.0, 1.0),
            p(4.0, 0.2), p(4.0, 0.9),
        ];
        let portals = vec![Portal::new(0, 1), Portal::new(3, 2), Portal::new(4, 5), Portal::new(6, 7)];
        let list = PortalList::with_goal(verts, portals, p(5.0, 0.5));

        let mut funnel = Funnel::open(apex, &list, 0);
        let mut width = angle(funnel.left, funnel.right);
        for k in 1..list.portals.len() {
            let cur = classify(apex, &list.vertices, list.portals[k]);
            assert!(funnel.collapse(&cur).is_none(), "unexpected turn at portal {k}");
            funnel.tighten(&cur, k);
            let w = angle(funnel.left, funnel.right);
            assert!(w <= width + 1e-12, "funnel widened at portal {k}: {width} -> {w}");
            width = w;
        }
        // collapsed onto the goal
        assert!(width.abs() < 1e-12);
    }

    #[test]
    fn restart_skips_portals_on_the_pivot() {
        let verts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)];
        let list = PortalList::with_goal(
            verts,
            vec![Portal::new(0, 1), Portal::new(0, 2), Portal::new(3, 2), Portal::new(1, 2)],
            p(2.0, 2.0),
        );
        // portal 1 shares the index, portal 2 shares the position
        assert_eq!(restart_portal(&list, 0, p(0.0, 0.0), 1), Some(3));
        assert_eq!(restart_portal(&list, 0, p(0.0, 0.0), 5), None);
    }
}
