//! Edge-function scanline triangle rasterization.

use crate::fragment::{self, Framebuffer};
use crate::interpolate;
use crate::math::Vec4;
use crate::shader::{FaceWinding, FragmentShader};
use crate::viewport::Viewport;

/// Determines front/back-facing from the draw-global winding and, if the
/// triangle should be drawn, rasterizes it with vertices reordered into
/// canonical (non-negative edge function) order.
#[allow(clippy::too_many_arguments)]
pub fn rasterize<F, FB>(
    viewport: &Viewport,
    winding: FaceWinding,
    backface_culling: bool,
    fragment_shader: &F,
    framebuffer: &mut FB,
    v0: &[f32],
    v1: &[f32],
    v2: &[f32],
    scratch: &mut [f32],
) where
    F: FragmentShader,
    FB: Framebuffer,
{
    let o = orientation(v0, v1, v2);

    match winding {
        FaceWinding::CounterClockwise => {
            if o > 0.0 {
                rasterize_front(viewport, fragment_shader, framebuffer, v0, v2, v1, scratch);
            } else if !backface_culling {
                rasterize_front(viewport, fragment_shader, framebuffer, v0, v1, v2, scratch);
            }
        }
        FaceWinding::Clockwise => {
            if o < 0.0 {
                rasterize_front(viewport, fragment_shader, framebuffer, v0, v1, v2, scratch);
            } else if !backface_culling {
                rasterize_front(viewport, fragment_shader, framebuffer, v0, v2, v1, scratch);
            }
        }
    }
}

/// Signed area of the NDC-space triangle; sign (not magnitude) is what the
/// caller reads to decide winding.
#[inline]
fn orientation(v0: &[f32], v1: &[f32], v2: &[f32]) -> f32 {
    (v1[0] - v0[0]) * (v2[1] - v0[1]) - (v1[1] - v0[1]) * (v2[0] - v0[0])
}

#[allow(clippy::too_many_arguments)]
fn rasterize_front<F, FB>(viewport: &Viewport, fragment_shader: &F, framebuffer: &mut FB, v0: &[f32], v1: &[f32], v2: &[f32], scratch: &mut [f32])
where
    F: FragmentShader,
    FB: Framebuffer,
{
    let (x0, y0) = viewport.to_screen_point(v0[0], v0[1]);
    let (x1, y1) = viewport.to_screen_point(v1[0], v1[1]);
    let (x2, y2) = viewport.to_screen_point(v2[0], v2[1]);

    let (rect_min_x, rect_min_y, rect_max_x, rect_max_y) = viewport.bounds();

    let min_x = x0.min(x1).min(x2).max(rect_min_x);
    let min_y = y0.min(y1).min(y2).max(rect_min_y);
    let max_x = x0.max(x1).max(x2).min(rect_max_x);
    let max_y = y0.max(y1).max(y2).min(rect_max_y);

    if min_x > max_x || min_y > max_y {
        return;
    }

    let a01 = y0 - y1;
    let b01 = x1 - x0;
    let a12 = y1 - y2;
    let b12 = x2 - x1;
    let a20 = y2 - y0;
    let b20 = x0 - x2;

    let edge = |ax: i32, ay: i32, bx: i32, by: i32, px: i32, py: i32| (bx - ax) * (py - ay) - (by - ay) * (px - ax);

    let mut w0_row = edge(x1, y1, x2, y2, min_x, min_y);
    let mut w1_row = edge(x2, y2, x0, y0, min_x, min_y);
    let mut w2_row = edge(x0, y0, x1, y1, min_x, min_y);

    for py in min_y..=max_y {
        let mut w0 = w0_row;
        let mut w1 = w1_row;
        let mut w2 = w2_row;

        for px in min_x..=max_x {
            if (w0 | w1 | w2) >= 0 {
                let sum = (w0 + w1 + w2) as f32;
                let inv_sum = 1.0 / sum;

                interpolate::barycentric_interpolate(w0 as f32 * inv_sum, v0, w1 as f32 * inv_sum, v1, w2 as f32 * inv_sum, v2, scratch);

                fragment::shade_fragment(fragment_shader, framebuffer, scratch, px as u16, py as u16);
            }

            w0 += a12;
            w1 += a20;
            w2 += a01;
        }

        w0_row += b12;
        w1_row += b20;
        w2_row += b01;
    }
}
