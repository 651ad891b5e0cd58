use std::ops::{Add, Div, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use super::Vec3;

/// A 4-component vector of 32-bit floats.
///
/// This struct is `repr(C)`, so it is guaranteed to be identical to `[f32; 4]`.
///
/// There is deliberately no `cross` on this type. The C library this crate is
/// based on defined one as the 3D cross product of the `xyz` parts with
/// `w = (w0+w1)/2`, which is not a real operation on 4-vectors; see
/// `DESIGN.md` for the audit. Compose `Vec3::cross` on `.xyz()` explicitly if
/// you need that specific (non-standard) behavior.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Vec4 { Vec4 { x, y, z, w } }

    #[inline]
    pub const fn from_xyz(xyz: Vec3, w: f32) -> Vec4 { Vec4::new(xyz.x, xyz.y, xyz.z, w) }

    #[inline]
    pub const fn xyz(self) -> Vec3 { Vec3::new(self.x, self.y, self.z) }

    #[inline]
    pub fn dot(self, rhs: Vec4) -> f32 { self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w }

    #[inline]
    pub fn length(self) -> f32 { self.dot(self).sqrt() }

    #[inline]
    pub fn normalize(self) -> Vec4 {
        let inv_len = 1.0 / self.length();
        self * inv_len
    }

    /// Perspective-divide: returns the `xyz` part divided by `w`.
    #[inline]
    pub fn perspective_divide(self) -> Vec3 {
        let inv_w = 1.0 / self.w;
        Vec3::new(self.x * inv_w, self.y * inv_w, self.z * inv_w)
    }
}

impl Add for Vec4 {
    type Output = Vec4;
    #[inline]
    fn add(self, rhs: Vec4) -> Vec4 { Vec4::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w) }
}

impl Sub for Vec4 {
    type Output = Vec4;
    #[inline]
    fn sub(self, rhs: Vec4) -> Vec4 { Vec4::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w) }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: f32) -> Vec4 { Vec4::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs) }
}

impl Div<f32> for Vec4 {
    type Output = Vec4;
    #[inline]
    fn div(self, rhs: f32) -> Vec4 { self * (1.0 / rhs) }
}

impl Neg for Vec4 {
    type Output = Vec4;
    #[inline]
    fn neg(self) -> Vec4 { Vec4::new(-self.x, -self.y, -self.z, -self.w) }
}
