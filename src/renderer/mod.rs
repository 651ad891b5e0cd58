//! Draw dispatch (H): the single entry point that drives a vertex/index
//! stream through the vertex shader, the primitive assembler, and into the
//! line or triangle rasterizer.

use log::debug;

use crate::assembler::Assembler;
use crate::error::{check_stride, RendererResult};
use crate::fragment::Framebuffer;
use crate::raster::{line, point, triangle};
use crate::shader::{FaceWinding, FragmentShader, ShaderBinding, VertexShader};
use crate::viewport::Viewport;
use crate::MAX_ATTRS;

/// Wire-stable primitive type enumeration.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    LineStrip = 3,
    LineFan = 4,
    Triangles = 5,
    TriangleStrip = 6,
    TriangleFan = 7,
}

/// An immutable descriptor for one primitive stream.
pub struct DrawCall<'a> {
    pub primitive_type: PrimitiveType,
    /// Raw vertex buffer, `stride` bytes per record.
    pub vertices: &'a [u8],
    pub stride: usize,
    /// Vertex count when `indices` is `None`, else index count.
    pub count: u32,
    pub indices: Option<&'a [u16]>,
}

impl<'a> DrawCall<'a> {
    /// Validates `stride` (the only thing about a draw call the renderer
    /// can check without knowing what the vertex shader expects).
    pub fn new(primitive_type: PrimitiveType, vertices: &'a [u8], stride: usize, count: u32, indices: Option<&'a [u16]>) -> RendererResult<DrawCall<'a>> {
        check_stride(stride)?;
        Ok(DrawCall { primitive_type, vertices, stride, count, indices })
    }

    #[inline]
    fn vertex_bytes(&self, i: usize) -> &'a [u8] {
        let vertex_index = match self.indices {
            Some(indices) => indices[i] as usize,
            None => i,
        };
        let start = vertex_index * self.stride;
        &self.vertices[start..start + self.stride]
    }
}

/// Holds the active configuration (shader binding, viewport, winding,
/// culling toggle) and the primitive assembler's scratch buffer. Bundled
/// into an explicit struct rather than thread-locals or process globals, so
/// nothing about a draw's configuration is implicit.
pub struct Renderer<V, F> {
    shader: ShaderBinding<V, F>,
    viewport: Viewport,
    winding: FaceWinding,
    backface_culling: bool,
    assembler: Assembler,
}

impl<V, F> Renderer<V, F>
where
    V: VertexShader,
    F: FragmentShader,
{
    pub fn new(shader: ShaderBinding<V, F>, viewport: Viewport, winding: FaceWinding, backface_culling: bool) -> Renderer<V, F> {
        Renderer { shader, viewport, winding, backface_culling, assembler: Assembler::new() }
    }

    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) { self.viewport = viewport; }

    #[inline]
    pub fn set_winding(&mut self, winding: FaceWinding) { self.winding = winding; }

    #[inline]
    pub fn set_backface_culling(&mut self, enabled: bool) { self.backface_culling = enabled; }

    /// Submits one primitive stream. Returns once the last fragment of the
    /// last primitive has reached `framebuffer`. There are no suspension
    /// points and no partial results.
    pub fn draw<FB: Framebuffer>(&mut self, call: &DrawCall, framebuffer: &mut FB) {
        self.assembler.reset();

        let n = self.shader.vertex_out_elements();
        debug!("draw: {:?} count={} stride={} vertex_out_elements={}", call.primitive_type, call.count, call.stride, n);

        let mut attrs: [f32; MAX_ATTRS] = [0.0; MAX_ATTRS];
        let mut scratch: [f32; MAX_ATTRS] = [0.0; MAX_ATTRS];

        let assembler = &mut self.assembler;
        let shader = &self.shader;
        let fragment_shader = &shader.fragment_shader;
        let viewport = &self.viewport;
        let winding = self.winding;
        let backface_culling = self.backface_culling;

        if call.primitive_type == PrimitiveType::LineLoop && call.count > 0 {
            shader.run_vertex(call.vertex_bytes(call.count as usize - 1), &mut attrs[..n]);
            assembler.feed_line_strip(&attrs, |v0, v1| {
                line::rasterize(viewport, fragment_shader, framebuffer, &v0[..n], &v1[..n], &mut scratch[..n]);
            });
        }

        for i in 0..call.count as usize {
            shader.run_vertex(call.vertex_bytes(i), &mut attrs[..n]);

            match call.primitive_type {
                PrimitiveType::Points => {
                    point::rasterize(viewport, fragment_shader, framebuffer, &attrs[..n]);
                }
                PrimitiveType::Lines => {
                    assembler.feed_lines(&attrs, |v0, v1| {
                        line::rasterize(viewport, fragment_shader, framebuffer, &v0[..n], &v1[..n], &mut scratch[..n]);
                    });
                }
                PrimitiveType::LineStrip | PrimitiveType::LineLoop => {
                    assembler.feed_line_strip(&attrs, |v0, v1| {
                        line::rasterize(viewport, fragment_shader, framebuffer, &v0[..n], &v1[..n], &mut scratch[..n]);
                    });
                }
                PrimitiveType::LineFan => {
                    assembler.feed_line_fan(&attrs, |v0, v1| {
                        line::rasterize(viewport, fragment_shader, framebuffer, &v0[..n], &v1[..n], &mut scratch[..n]);
                    });
                }
                PrimitiveType::Triangles => {
                    assembler.feed_triangles(&attrs, |v0, v1, v2| {
                        triangle::rasterize(viewport, winding, backface_culling, fragment_shader, framebuffer, &v0[..n], &v1[..n], &v2[..n], &mut scratch[..n]);
                    });
                }
                PrimitiveType::TriangleStrip => {
                    assembler.feed_triangle_strip(&attrs, |v0, v1, v2| {
                        triangle::rasterize(viewport, winding, backface_culling, fragment_shader, framebuffer, &v0[..n], &v1[..n], &v2[..n], &mut scratch[..n]);
                    });
                }
                PrimitiveType::TriangleFan => {
                    assembler.feed_triangle_fan(&attrs, |v0, v1, v2| {
                        triangle::rasterize(viewport, winding, backface_culling, fragment_shader, framebuffer, &v0[..n], &v1[..n], &v2[..n], &mut scratch[..n]);
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec3, Vec4};

    struct RecordingFramebuffer {
        pixels: Vec<(u16, u16)>,
    }

    impl Framebuffer for RecordingFramebuffer {
        fn set_pixel(&mut self, x: u16, y: u16, _depth: f32, _color: Vec3) {
            self.pixels.push((x, y));
        }
        fn get_depth(&self, _x: u16, _y: u16) -> f32 { -1.0 }
    }

    fn vertex_bytes(x: f32, y: f32, z: f32) -> [u8; 12] {
        let mut out = [0u8; 12];
        out[0..4].copy_from_slice(&x.to_le_bytes());
        out[4..8].copy_from_slice(&y.to_le_bytes());
        out[8..12].copy_from_slice(&z.to_le_bytes());
        out
    }

    fn passthrough_vertex_shader(vertex: &[u8], out: &mut [f32]) {
        out[0] = f32::from_le_bytes(vertex[0..4].try_into().unwrap());
        out[1] = f32::from_le_bytes(vertex[4..8].try_into().unwrap());
        out[2] = f32::from_le_bytes(vertex[8..12].try_into().unwrap());
    }

    fn opaque_white(_: &[f32]) -> Vec4 { Vec4::new(1.0, 1.0, 1.0, 1.0) }

    fn new_renderer() -> Renderer<impl VertexShader, impl FragmentShader> {
        let shader = ShaderBinding::new(passthrough_vertex_shader, opaque_white, 3).unwrap();
        let viewport = Viewport::new(0, 0, 100, 100).unwrap();
        Renderer::new(shader, viewport, FaceWinding::CounterClockwise, true)
    }

    #[test]
    fn drawcall_new_rejects_zero_stride() {
        let vertices = vertex_bytes(0.0, 0.0, 0.0);
        assert!(DrawCall::new(PrimitiveType::Points, &vertices, 0, 1, None).is_err());
    }

    #[test]
    fn draw_points_shades_viewport_center() {
        let mut renderer = new_renderer();
        let vertices = vertex_bytes(0.0, 0.0, 0.0);
        let call = DrawCall::new(PrimitiveType::Points, &vertices, 12, 1, None).unwrap();
        let mut fb = RecordingFramebuffer { pixels: Vec::new() };

        renderer.draw(&call, &mut fb);

        assert_eq!(fb.pixels, vec![(50, 50)]);
    }

    #[test]
    fn draw_indexed_points_fetches_via_index_buffer() {
        let mut renderer = new_renderer();
        let mut vertices = Vec::new();
        vertices.extend_from_slice(&vertex_bytes(-0.5, 0.0, 0.0));
        vertices.extend_from_slice(&vertex_bytes(0.5, 0.0, 0.0));
        let indices = [1u16, 0u16];
        let call = DrawCall::new(PrimitiveType::Points, &vertices, 12, 2, Some(&indices)).unwrap();
        let mut fb = RecordingFramebuffer { pixels: Vec::new() };

        renderer.draw(&call, &mut fb);

        assert_eq!(fb.pixels.len(), 2);
        assert!(fb.pixels.contains(&(75, 50)));
        assert!(fb.pixels.contains(&(25, 50)));
    }

    #[test]
    fn draw_line_loop_closes_back_to_first_vertex() {
        let mut renderer = new_renderer();
        let mut vertices = Vec::new();
        vertices.extend_from_slice(&vertex_bytes(-0.5, -0.5, 0.0));
        vertices.extend_from_slice(&vertex_bytes(0.5, -0.5, 0.0));
        vertices.extend_from_slice(&vertex_bytes(0.0, 0.5, 0.0));
        let call = DrawCall::new(PrimitiveType::LineLoop, &vertices, 12, 3, None).unwrap();
        let mut fb = RecordingFramebuffer { pixels: Vec::new() };

        renderer.draw(&call, &mut fb);

        // Three open segments plus the closing edge back to the first vertex.
        assert!(!fb.pixels.is_empty());
    }

    /// A depth-tracking framebuffer, for tests that need to inspect the
    /// final color/depth at a pixel rather than just whether it was hit.
    struct DepthFramebuffer {
        width: u16,
        color: Vec<Vec3>,
        depth: Vec<f32>,
    }

    impl DepthFramebuffer {
        fn new(width: u16, height: u16) -> DepthFramebuffer {
            let n = width as usize * height as usize;
            DepthFramebuffer { width, color: vec![Vec3::default(); n], depth: vec![-1.0; n] }
        }

        fn index(&self, x: u16, y: u16) -> usize { y as usize * self.width as usize + x as usize }

        fn color_at(&self, x: u16, y: u16) -> Vec3 { self.color[self.index(x, y)] }
    }

    impl Framebuffer for DepthFramebuffer {
        fn set_pixel(&mut self, x: u16, y: u16, depth: f32, color: Vec3) {
            let i = self.index(x, y);
            self.color[i] = color;
            self.depth[i] = depth;
        }

        fn get_depth(&self, x: u16, y: u16) -> f32 { self.depth[self.index(x, y)] }
    }

    /// Scenario S1: a red point at the NDC origin against a 4x4 viewport
    /// lands exactly at the center pixel with depth 0.5.
    #[test]
    fn scenario_s1_point_at_ndc_origin_shades_viewport_center_red_at_half_depth() {
        let shader = ShaderBinding::new(passthrough_vertex_shader, |_: &[f32]| Vec4::new(1.0, 0.0, 0.0, 1.0), 3).unwrap();
        let viewport = Viewport::new(0, 0, 4, 4).unwrap();
        let mut renderer = Renderer::new(shader, viewport, FaceWinding::CounterClockwise, true);

        let vertices = vertex_bytes(0.0, 0.0, 0.0);
        let call = DrawCall::new(PrimitiveType::Points, &vertices, 12, 1, None).unwrap();
        let mut fb = DepthFramebuffer::new(4, 4);

        renderer.draw(&call, &mut fb);

        assert_eq!(fb.color_at(2, 2), Vec3::new(1.0, 0.0, 0.0));
        assert!((fb.get_depth(2, 2) - 0.5).abs() < 1e-6);
    }

    /// Scenario S4 / testable property 4 (depth monotonicity): two fully
    /// overlapping triangles at different depths must leave the nearer
    /// one's color at every shared pixel, regardless of submission order.
    #[test]
    fn overlapping_triangles_resolve_to_the_nearer_ones_color_regardless_of_draw_order() {
        let viewport = Viewport::new(0, 0, 20, 20).unwrap();
        let far_tri = [vertex_bytes(-1.0, -1.0, 0.5), vertex_bytes(1.0, -1.0, 0.5), vertex_bytes(0.0, 1.0, 0.5)];
        let near_tri = [vertex_bytes(-1.0, -1.0, 0.3), vertex_bytes(1.0, -1.0, 0.3), vertex_bytes(0.0, 1.0, 0.3)];

        let draw_pair = |first: &[[u8; 12]; 3], first_color: Vec4, second: &[[u8; 12]; 3], second_color: Vec4| {
            let mut fb = DepthFramebuffer::new(20, 20);

            for (tri, color) in [(first, first_color), (second, second_color)] {
                let shader = ShaderBinding::new(passthrough_vertex_shader, move |_: &[f32]| color, 3).unwrap();
                let mut renderer = Renderer::new(shader, viewport, FaceWinding::CounterClockwise, true);
                let mut buf = Vec::new();
                for v in tri {
                    buf.extend_from_slice(v);
                }
                let call = DrawCall::new(PrimitiveType::Triangles, &buf, 12, 3, None).unwrap();
                renderer.draw(&call, &mut fb);
            }

            fb
        };

        let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let green = Vec4::new(0.0, 1.0, 0.0, 1.0);

        // far (red) then near (green): near wins.
        let fb_a = draw_pair(&far_tri, red, &near_tri, green);
        // near (green) then far (red): near still wins, despite being drawn first.
        let fb_b = draw_pair(&near_tri, green, &far_tri, red);

        assert_eq!(fb_a.color_at(10, 10), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(fb_b.color_at(10, 10), Vec3::new(0.0, 1.0, 0.0));
    }
}
