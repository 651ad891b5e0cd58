use bytemuck::{Pod, Zeroable};

use super::{Vec3, Vec4};

const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// A 4×4 matrix of 32-bit floats, stored column-major (`cols[col][row]`).
///
/// This struct is `repr(C)`, so it is guaranteed to be identical to
/// `[[f32; 4]; 4]` or `[f32; 16]` in column-major order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// Builds a matrix from its 16 entries, given column-by-column
    /// (`m_rc`, row `r`, column `c`), matching the layout of a GLSL
    /// `mat4` constructor.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32, m10: f32, m20: f32, m30: f32,
        m01: f32, m11: f32, m21: f32, m31: f32,
        m02: f32, m12: f32, m22: f32, m32: f32,
        m03: f32, m13: f32, m23: f32, m33: f32,
    ) -> Mat4 {
        Mat4 {
            cols: [
                Vec4::new(m00, m10, m20, m30),
                Vec4::new(m01, m11, m21, m31),
                Vec4::new(m02, m12, m22, m32),
                Vec4::new(m03, m13, m23, m33),
            ],
        }
    }

    pub const IDENTITY: Mat4 = Mat4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    #[inline]
    pub const fn identity() -> Mat4 { Mat4::IDENTITY }

    /// Reads entry at `row`, `col` (both 0..4).
    #[inline]
    fn get(&self, row: usize, col: usize) -> f32 {
        match row {
            0 => self.cols[col].x,
            1 => self.cols[col].y,
            2 => self.cols[col].z,
            _ => self.cols[col].w,
        }
    }

    /// Standard right-handed OpenGL orthographic projection.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        let rl = right - left;
        let tx = -(right + left) / rl;
        let tb = top - bottom;
        let ty = -(top + bottom) / tb;
        let fn_ = far - near;
        let tz = -(far + near) / fn_;

        Mat4::new(
            2.0 / rl, 0.0, 0.0, 0.0,
            0.0, 2.0 / tb, 0.0, 0.0,
            0.0, 0.0, -2.0 / fn_, 0.0,
            tx, ty, tz, 1.0,
        )
    }

    /// Standard right-handed OpenGL perspective projection mapping
    /// `z ∈ [near, far]` to `z_ndc ∈ [-1, +1]`. `fovy` is in degrees.
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let a = fovy * DEG_TO_RAD * 0.5;
        let f = 1.0 / a.tan();
        let nfi = 1.0 / (near - far);

        Mat4::new(
            f / aspect, 0.0, 0.0, 0.0,
            0.0, f, 0.0, 0.0,
            0.0, 0.0, (far + near) * nfi, -1.0,
            0.0, 0.0, 2.0 * far * near * nfi, 0.0,
        )
    }

    pub fn translation(v: Vec3) -> Mat4 {
        Mat4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            v.x, v.y, v.z, 1.0,
        )
    }

    pub fn scaling(v: Vec3) -> Mat4 {
        Mat4::new(
            v.x, 0.0, 0.0, 0.0,
            0.0, v.y, 0.0, 0.0,
            0.0, 0.0, v.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Right-handed view matrix looking from `eye` toward `center`, with `up`
    /// as the reference up direction.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
        let f = (center - eye).normalize();
        let s = f.cross(up.normalize());
        let u = s.normalize().cross(f);

        let rotation = Mat4::new(
            s.x, u.x, -f.x, 0.0,
            s.y, u.y, -f.y, 0.0,
            s.z, u.z, -f.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );

        rotation * Mat4::translation(eye * -1.0)
    }

    /// Rotation about `axis` by `angle` degrees.
    pub fn rotation(angle: f32, axis: Vec3) -> Mat4 {
        let angle = angle * DEG_TO_RAD;
        let c = angle.cos();
        let s = angle.sin();
        let c2 = 1.0 - c;
        let axis = axis.normalize();
        let (x, y, z) = (axis.x, axis.y, axis.z);

        Mat4::new(
            x * x * c2 + c, y * x * c2 + z * s, x * z * c2 - y * s, 0.0,
            x * y * c2 - z * s, y * y * c2 + c, y * z * c2 + x * s, 0.0,
            x * z * c2 + y * s, y * z * c2 - x * s, z * z * c2 + c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Transforms a full homogeneous `Vec4` (no perspective divide).
    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.get(0, 0) * v.x + self.get(0, 1) * v.y + self.get(0, 2) * v.z + self.get(0, 3) * v.w,
            self.get(1, 0) * v.x + self.get(1, 1) * v.y + self.get(1, 2) * v.z + self.get(1, 3) * v.w,
            self.get(2, 0) * v.x + self.get(2, 1) * v.y + self.get(2, 2) * v.z + self.get(2, 3) * v.w,
            self.get(3, 0) * v.x + self.get(3, 1) * v.y + self.get(3, 2) * v.z + self.get(3, 3) * v.w,
        )
    }

    /// Transforms a position (implicit `w = 1`) and perspective-divides the result.
    #[inline]
    pub fn transform_position(&self, v: Vec3) -> Vec3 {
        let inv_w = 1.0 / (self.get(3, 0) * v.x + self.get(3, 1) * v.y + self.get(3, 2) * v.z + self.get(3, 3));

        Vec3::new(
            (self.get(0, 0) * v.x + self.get(0, 1) * v.y + self.get(0, 2) * v.z + self.get(0, 3)) * inv_w,
            (self.get(1, 0) * v.x + self.get(1, 1) * v.y + self.get(1, 2) * v.z + self.get(1, 3)) * inv_w,
            (self.get(2, 0) * v.x + self.get(2, 1) * v.y + self.get(2, 2) * v.z + self.get(2, 3)) * inv_w,
        )
    }

    /// Transforms a direction vector through the upper-left 3×3 only (no
    /// translation, no perspective divide), for normals and other
    /// direction-like attributes.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.get(0, 0) * v.x + self.get(0, 1) * v.y + self.get(0, 2) * v.z,
            self.get(1, 0) * v.x + self.get(1, 1) * v.y + self.get(1, 2) * v.z,
            self.get(2, 0) * v.x + self.get(2, 1) * v.y + self.get(2, 2) * v.z,
        )
    }

    pub fn transpose(&self) -> Mat4 {
        Mat4::new(
            self.get(0, 0), self.get(0, 1), self.get(0, 2), self.get(0, 3),
            self.get(1, 0), self.get(1, 1), self.get(1, 2), self.get(1, 3),
            self.get(2, 0), self.get(2, 1), self.get(2, 2), self.get(2, 3),
            self.get(3, 0), self.get(3, 1), self.get(3, 2), self.get(3, 3),
        )
    }

    /// Computes the full inverse via the adjugate/determinant method.
    ///
    /// The C library this is based on returns the raw cofactor matrix
    /// without dividing by the determinant, which only inverts correctly
    /// when `det(self) == 1` (pure rotation + translation). This port always
    /// divides by the determinant so that uniformly-scaled affine transforms
    /// invert correctly too (see DESIGN.md). There is no check for
    /// singularity; callers must not invert a singular matrix.
    pub fn invert(&self) -> Mat4 {
        let a = self.cols[0].xyz();
        let b = self.cols[1].xyz();
        let c = self.cols[2].xyz();
        let d = self.cols[3].xyz();

        let x = self.get(3, 0);
        let y = self.get(3, 1);
        let z = self.get(3, 2);
        let w = self.get(3, 3);

        let mut s = a.cross(b);
        let mut t = c.cross(d);
        let mut u = a * y - b * x;
        let mut v = c * w - d * z;

        let det = s.dot(v) + t.dot(u);
        let inv_det = 1.0 / det;

        s = s * inv_det;
        t = t * inv_det;
        u = u * inv_det;
        v = v * inv_det;

        let r0 = b.cross(v) + t * y;
        let r1 = v.cross(a) - t * x;
        let r2 = d.cross(u) + s * w;
        let r3 = u.cross(c) - s * z;

        Mat4::new(
            r0.x, r0.y, r0.z, -b.dot(t),
            r1.x, r1.y, r1.z, a.dot(t),
            r2.x, r2.y, r2.z, -d.dot(s),
            r3.x, r3.y, r3.z, c.dot(s),
        )
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];

        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.get(row, k) * rhs.get(k, col);
                }
                out[col][row] = sum;
            }
        }

        Mat4::new(
            out[0][0], out[0][1], out[0][2], out[0][3],
            out[1][0], out[1][1], out[1][2], out[1][3],
            out[2][0], out[2][1], out[2][2], out[2][3],
            out[3][0], out[3][1], out[3][2], out[3][3],
        )
    }
}
