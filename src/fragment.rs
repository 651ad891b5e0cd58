//! Fragment stage: depth test, shade, pixel store.

use log::trace;

use crate::math::Vec3;
use crate::shader::FragmentShader;

/// The write side of a color/depth target. The rasterizer never owns pixel
/// storage directly; it writes through this trait so the same draw path
/// works against any backing store (an in-memory RGB framebuffer, a
/// memory-mapped LCD controller, a test double that records writes).
pub trait Framebuffer {
    fn set_pixel(&mut self, x: u16, y: u16, depth: f32, color: Vec3);
    fn get_depth(&self, x: u16, y: u16) -> f32;
}

/// Runs the depth test and, on pass, shades and stores one pixel.
///
/// `attrs` is the interpolated varying record for this pixel; slot 2 is the
/// NDC-space `z ∈ [-1, +1]`, remapped to `[1, 0]` (greater means closer) to
/// match the convention `get_depth`/`set_pixel` store. A fragment shader
/// that returns alpha is accepted but the channel is discarded; there is
/// no blending stage.
#[inline]
pub fn shade_fragment<F, FB>(fragment_shader: &F, framebuffer: &mut FB, attrs: &[f32], x: u16, y: u16)
where
    F: FragmentShader,
    FB: Framebuffer,
{
    let z = (attrs[2] - 1.0) * -0.5;

    if z > framebuffer.get_depth(x, y) {
        let color = fragment_shader(attrs);
        trace!("shade_fragment: ({x}, {y}) z={z} color=({}, {}, {})", color.x, color.y, color.z);

        framebuffer.set_pixel(x, y, z, Vec3::new(color.x.clamp(0.0, 1.0), color.y.clamp(0.0, 1.0), color.z.clamp(0.0, 1.0)));
    }
}
