//! Bresenham line rasterization with linear attribute interpolation.

use crate::fragment::{self, Framebuffer};
use crate::interpolate;
use crate::shader::FragmentShader;
use crate::viewport::Viewport;

/// Walks the Bresenham line between `v0` and `v1` (attribute records whose
/// slots 0/1 are NDC x/y) in screen space, shading every covered pixel that
/// falls inside the viewport. Endpoints outside the viewport rectangle are
/// clipped per-pixel rather than against the line itself, since the walk
/// has no notion of NDC frustum clipping.
pub fn rasterize<F, FB>(viewport: &Viewport, fragment_shader: &F, framebuffer: &mut FB, v0: &[f32], v1: &[f32], scratch: &mut [f32])
where
    F: FragmentShader,
    FB: Framebuffer,
{
    let (x0, y0) = viewport.to_screen_point(v0[0], v0[1]);
    let (x1, y1) = viewport.to_screen_point(v1[0], v1[1]);

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    // A single-pixel line (both endpoints map to the same screen pixel)
    // would otherwise divide 0/0 computing `t` below.
    let len = dx.max(dy).max(1);

    let mut err = if dx > dy { dx } else { -dy } / 2;
    let mut x = x0;
    let mut y = y0;

    for cur in 0..=dx.max(dy) {
        let t = cur as f32 / len as f32;
        interpolate::linear_interpolate(t, v0, v1, scratch);

        if viewport.contains(x, y) {
            fragment::shade_fragment(fragment_shader, framebuffer, scratch, x as u16, y as u16);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = err;
        if e2 > -dx {
            err -= dy;
            x += sx;
        }
        if e2 < dy {
            err += dx;
            y += sy;
        }
    }
}
