use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::funnel::walk;
use crate::geometry::Point3;
use crate::models::{Path, TriangleList};
use crate::options::ShrinkRange;
use crate::portal::{corridor_portals, PortalList};
use crate::shrink::{random_rate, shrink_portals};

/// Entry point for smoothing corridors. Stateless; every call is independent.
#[derive(Copy, Clone, Debug, Default)]
pub struct NavMesh;

impl NavMesh {
    pub fn new() -> Self { Self }

    /// Taut path from `start` to `end` through `corridor`.
    ///
    /// The returned path holds the turn points followed by `end`; `start` is
    /// the implicit first waypoint.
    pub fn route(&self, corridor: &TriangleList, start: Point3, end: Point3) -> Result<Path> {
        let list = PortalList::from_corridor(corridor, end)?;
        let turns = walk(start, &list);
        debug!(triangles = corridor.triangles.len(), portals = list.portals.len(), turns = turns.len(), "route_done");
        Ok(Path::from_turns(turns, end))
    }

    /// Like [`NavMesh::route`], but every portal is first contracted toward its
    /// midpoint by one rate drawn from `range`, so repeated calls spread agents
    /// across the corridor. Reproducible for a fixed `rng` state.
    pub fn route_with_rand_offset<R: Rng>(
        &self,
        rng: &mut R,
        corridor: &TriangleList,
        start: Point3,
        end: Point3,
        range: ShrinkRange,
    ) -> Result<Path> {
        let range = range.validated()?;
        let portals = corridor_portals(corridor)?;
        let rate = random_rate(rng, range);
        let (portals, vertices) = shrink_portals(&portals, &corridor.vertices, rate);
        let list = PortalList::with_goal(vertices, portals, end);
        let turns = walk(start, &list);
        debug!(triangles = corridor.triangles.len(), portals = list.portals.len(), rate, turns = turns.len(), "route_with_rand_offset_done");
        Ok(Path::from_turns(turns, end))
    }
}
