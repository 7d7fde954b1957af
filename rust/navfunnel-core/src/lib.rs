pub mod error;
pub mod funnel;
pub mod geometry;
pub mod models;
pub mod navmesh;
pub mod offset;
pub mod options;
pub mod portal;
pub mod shrink;

pub use error::{Result, RouteError};
pub use geometry::{Point3, Vector3};
pub use models::{Path, Triangle, TriangleList};
pub use navmesh::NavMesh;
pub use offset::spin_offset;
pub use options::ShrinkRange;
pub use portal::{Portal, PortalList};

pub fn version() -> &'static str { env!("CARGO_PKG_VERSION") }
