use serde::{Deserialize, Serialize};

use crate::geometry::Point3;

/// Three vertex indices into a shared vertex array. No winding order is assumed.
pub type Triangle = [u32; 3];

/// A corridor: the mesh vertices plus the triangles from the start triangle to
/// the goal triangle, in traversal order. Consecutive triangles are expected to
/// share exactly one edge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleList {
    pub vertices: Vec<Point3>,
    pub triangles: Vec<Triangle>,
}

/// A smoothed route. Holds every turn point in traversal order followed by the
/// goal; the start point is implicit and never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub points: Vec<Point3>,
}

impl Path {
    /// Turn points followed by `goal`. The goal is always appended, even when
    /// the last turn sits on it, so `turn_points` stays exact.
    pub(crate) fn from_turns(mut turns: Vec<Point3>, goal: Point3) -> Self {
        turns.push(goal);
        Self { points: turns }
    }

    /// Corner points between start and goal.
    pub fn turn_points(&self) -> &[Point3] {
        match self.points.split_last() {
            Some((_, turns)) => turns,
            None => &[],
        }
    }

    pub fn goal(&self) -> Option<Point3> { self.points.last().copied() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn turn_points_exclude_goal() {
        let goal = Point3::new(3.0, 0.0, 0.0);
        let p = Path::from_turns(vec![Point3::new(1.0, 1.0, 0.0)], goal);
        assert_eq!(p.turn_points(), &[Point3::new(1.0, 1.0, 0.0)]);
        assert_eq!(p.goal(), Some(goal));

        let direct = Path::from_turns(Vec::new(), goal);
        assert!(direct.turn_points().is_empty());
        assert!(Path::default().turn_points().is_empty());
    }

    #[test]
    fn turn_on_goal_is_kept() {
        let goal = Point3::new(1.0, 1.0, 0.0);
        let p = Path::from_turns(vec![goal], goal);
        assert_eq!(p.points, vec![goal, goal]);
        assert_eq!(p.turn_points().len(), 1);
    }

    #[test]
    fn corridor_deserializes_from_arrays() {
        let v = json!({
            "vertices": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            "triangles": [[0, 1, 2]]
        });
        let list: TriangleList = serde_json::from_value(v).unwrap();
        assert_eq!(list.vertices.len(), 3);
        assert_eq!(list.triangles, vec![[0, 1, 2]]);
    }
}
