//! Point rasterization: no assembly, straight NDC -> screen -> fragment.

use crate::fragment::{self, Framebuffer};
use crate::shader::FragmentShader;
use crate::viewport::Viewport;

/// Drops the point if any of its NDC coordinates fall outside `[-1, +1]`,
/// otherwise maps it to a screen pixel and shades it.
pub fn rasterize<F, FB>(viewport: &Viewport, fragment_shader: &F, framebuffer: &mut FB, v: &[f32])
where
    F: FragmentShader,
    FB: Framebuffer,
{
    if v[0] < -1.0 || v[0] > 1.0 || v[1] < -1.0 || v[1] > 1.0 || v[2] < -1.0 || v[2] > 1.0 {
        return;
    }

    let (x, y) = viewport.to_screen_point(v[0], v[1]);
    if !viewport.contains(x, y) {
        return;
    }

    fragment::shade_fragment(fragment_shader, framebuffer, v, x as u16, y as u16);
}
