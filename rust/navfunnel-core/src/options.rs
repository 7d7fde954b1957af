use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

pub const DEFAULT_SHRINK_MIN: f64 = 0.6;
pub const DEFAULT_SHRINK_MAX: f64 = 1.0;

/// Bounds of the ratio every portal is contracted by in a jittered route.
/// 1.0 keeps the mesh edges, 0.0 collapses portals onto their midpoints.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShrinkRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ShrinkRange {
    fn default() -> Self {
        Self { min: DEFAULT_SHRINK_MIN, max: DEFAULT_SHRINK_MAX }
    }
}

impl ShrinkRange {
    pub fn new(min: f64, max: f64) -> Self { Self { min, max } }

    /// Orders the bounds and checks both lie within `[0, 1]`.
    pub fn validated(self) -> Result<Self> {
        let (min, max) = if self.min > self.max { (self.max, self.min) } else { (self.min, self.max) };
        let ok = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
        if !ok(min) || !ok(max) {
            return Err(RouteError::InvalidShrinkRange { min: self.min, max: self.max });
        }
        Ok(Self { min, max })
    }
}
