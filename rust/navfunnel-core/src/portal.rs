use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::geometry::Point3;
use crate::models::{Triangle, TriangleList};

/// Shared edge between two consecutive corridor triangles. Endpoint order is
/// arbitrary; the funnel decides left/right relative to its apex.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Portal {
    pub a: u32,
    pub b: u32,
}

impl Portal {
    #[inline]
    pub const fn new(a: u32, b: u32) -> Self { Self { a, b } }

    /// Zero-width portal pinned to a single vertex.
    #[inline]
    pub const fn point(v: u32) -> Self { Self { a: v, b: v } }

    #[inline]
    pub fn touches(&self, v: u32) -> bool { self.a == v || self.b == v }
}

/// Portals of a corridor plus the vertices they index. The last portal is
/// always the degenerate goal portal.
#[derive(Clone, Debug, PartialEq)]
pub struct PortalList {
    pub vertices: Vec<Point3>,
    pub portals: Vec<Portal>,
}

impl PortalList {
    /// Builds the portals of `corridor` and closes them with a zero-width
    /// portal on `goal`.
    pub fn from_corridor(corridor: &TriangleList, goal: Point3) -> Result<Self> {
        let portals = corridor_portals(corridor)?;
        Ok(Self::with_goal(corridor.vertices.clone(), portals, goal))
    }

    /// Appends `goal` to `vertices` and a degenerate portal referencing it.
    pub fn with_goal(mut vertices: Vec<Point3>, mut portals: Vec<Portal>, goal: Point3) -> Self {
        vertices.push(goal);
        let g = (vertices.len() - 1) as u32;
        portals.push(Portal::point(g));
        Self { vertices, portals }
    }

    #[inline]
    pub fn position(&self, v: u32) -> Point3 { self.vertices[v as usize] }
}

/// Derives the shared edge of every consecutive triangle pair.
///
/// Matches are collected in the vertex order of the earlier triangle. Anything
/// other than exactly two shared indices is an illegal corridor.
pub fn build_portals(triangles: &[Triangle]) -> Result<Vec<Portal>> {
    let mut portals = Vec::with_capacity(triangles.len().saturating_sub(1));
    for (k, pair) in triangles.windows(2).enumerate() {
        let mut shared = [0u32; 2];
        let mut count = 0usize;
        for &i in &pair[0] {
            for &j in &pair[1] {
                if i == j {
                    if count < 2 { shared[count] = i; }
                    count += 1;
                }
            }
        }
        if count != 2 {
            return Err(RouteError::IllegalTriangleList { index: k, shared: count });
        }
        portals.push(Portal::new(shared[0], shared[1]));
    }
    Ok(portals)
}

/// [`build_portals`] after checking every triangle index against the vertex array.
pub fn corridor_portals(corridor: &TriangleList) -> Result<Vec<Portal>> {
    check_indices(&corridor.triangles, corridor.vertices.len())?;
    build_portals(&corridor.triangles)
}

fn check_indices(triangles: &[Triangle], len: usize) -> Result<()> {
    for (t, tri) in triangles.iter().enumerate() {
        if let Some(&bad) = tri.iter().find(|&&i| i as usize >= len) {
            return Err(RouteError::VertexOutOfRange { triangle: t, index: bad, len });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_edges_follow_first_triangle_order() {
        let tris = vec![[0, 1, 4], [1, 5, 4], [1, 2, 5]];
        let portals = build_portals(&tris).unwrap();
        assert_eq!(portals, vec![Portal::new(1, 4), Portal::new(1, 5)]);
    }

    #[test]
    fn short_corridors_have_no_portals() {
        assert!(build_portals(&[]).unwrap().is_empty());
        assert!(build_portals(&[[0, 1, 2]]).unwrap().is_empty());
    }

    #[test]
    fn disjoint_triangles_are_illegal() {
        let err = build_portals(&[[0, 1, 2], [1, 2, 3], [4, 5, 6]]).unwrap_err();
        assert_eq!(err, RouteError::IllegalTriangleList { index: 1, shared: 0 });
        assert_eq!(err.code(), "illegal_triangle_list");
    }

    #[test]
    fn repeated_triangle_is_illegal() {
        let err = build_portals(&[[0, 1, 2], [2, 0, 1]]).unwrap_err();
        assert_eq!(err, RouteError::IllegalTriangleList { index: 0, shared: 3 });
    }

    #[test]
    fn corridor_gets_goal_portal() {
        let corridor = TriangleList {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ],
            triangles: vec![[0, 1, 2], [1, 3, 2]],
        };
        let goal = Point3::new(0.8, 0.8, 0.0);
        let list = PortalList::from_corridor(&corridor, goal).unwrap();
        assert_eq!(list.vertices.len(), 5);
        assert_eq!(list.portals, vec![Portal::new(1, 2), Portal::point(4)]);
        assert_eq!(list.position(4), goal);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let corridor = TriangleList {
            vertices: vec![Point3::default(); 3],
            triangles: vec![[0, 1, 2], [1, 2, 7]],
        };
        let err = PortalList::from_corridor(&corridor, Point3::default()).unwrap_err();
        assert_eq!(err, RouteError::VertexOutOfRange { triangle: 1, index: 7, len: 3 });
    }
}
