//! Fixed-arity vector/matrix math kernel.
//!
//! This is a small, self-contained linear-algebra kernel: `vec2`/`vec3`/`vec4`
//! and a column-major `mat4`, with exactly the operations the rasterizer
//! needs. It does not aim to be a general-purpose math crate: there is no
//! generic scalar type, no SIMD backend selection, nothing beyond `f32`.
//! That is intentional for the embedded target this crate is designed for.

mod mat4;
mod vec2;
mod vec3;
mod vec4;

pub use self::mat4::Mat4;
pub use self::vec2::Vec2;
pub use self::vec3::Vec3;
pub use self::vec4::Vec4;
