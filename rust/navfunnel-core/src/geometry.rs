use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A position on the mesh. Serialized as `[x, y, z]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A direction with magnitude, the difference of two points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    /// Midpoint in the x-y plane; z is pinned to 0.
    #[inline]
    pub fn planar_midpoint(self, other: Point3) -> Point3 {
        Point3::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0, 0.0)
    }

    #[inline]
    pub fn distance(self, other: Point3) -> f64 { (other - self).length() }
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    #[inline]
    pub fn length(self) -> f64 { (self.x * self.x + self.y * self.y + self.z * self.z).sqrt() }

    /// Unit vector in the same direction. Returns `None` for the zero vector.
    #[inline]
    pub fn normalized(self) -> Option<Vector3> {
        let len = self.length();
        if len > 0.0 && len.is_finite() { Some(self * (1.0 / len)) } else { None }
    }

    /// z-component of `self x o`: positive when `o` is counter-clockwise of `self`.
    #[inline]
    pub fn cross_z(self, o: Vector3) -> f64 { self.x * o.y - self.y * o.x }
}

impl Sub for Point3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Point3) -> Vector3 { Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z) }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;
    #[inline]
    fn add(self, rhs: Vector3) -> Point3 { Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z) }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, s: f64) -> Vector3 { Vector3::new(self.x * s, self.y * s, self.z * s) }
}

impl From<[f64; 3]> for Point3 {
    fn from(a: [f64; 3]) -> Self { Point3::new(a[0], a[1], a[2]) }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self { [p.x, p.y, p.z] }
}
