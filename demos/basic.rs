//! Renders a spinning, per-vertex-colored cube with the library's public API
//! and writes the result to a PPM image. Stands in for the LCD panel and
//! mesh-decoding glue that application code is expected to own rather than
//! the core crate. This binary owns the framebuffer, the vertex layout, and
//! the mesh data; the library only ever sees raw bytes, a stride, and two
//! callbacks.

use bytemuck::{Pod, Zeroable};

use microraster::math::{Mat4, Vec3, Vec4};
use microraster::renderer::{DrawCall, PrimitiveType, Renderer};
use microraster::shader::{FaceWinding, ShaderBinding};
use microraster::viewport::Viewport;
use microraster::Framebuffer;

const WIDTH: u16 = 256;
const HEIGHT: u16 = 256;

/// The raw per-vertex layout the vertex shader below decodes. `Pod` lets the
/// cube's vertex array be reinterpreted as bytes without `unsafe` transmutes.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct CubeVertex {
    position: Vec3,
    color: Vec3,
}

/// An in-memory color + depth target. A real embedded port would implement
/// the same trait directly against a memory-mapped LCD controller and a
/// 16-bit depth plane; this one just owns two `Vec`s.
struct Canvas {
    width: u16,
    height: u16,
    color: Vec<Vec3>,
    depth: Vec<f32>,
}

impl Canvas {
    fn new(width: u16, height: u16) -> Canvas {
        let count = width as usize * height as usize;
        Canvas { width, height, color: vec![Vec3::new(0.05, 0.05, 0.08); count], depth: vec![-1.0; count] }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize { y as usize * self.width as usize + x as usize }

    fn write_ppm(&self, path: &str) -> std::io::Result<()> {
        use std::io::Write;

        let mut out = std::fs::File::create(path)?;
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;

        let mut bytes = Vec::with_capacity(self.color.len() * 3);
        for c in &self.color {
            bytes.push((c.x.clamp(0.0, 1.0) * 255.0) as u8);
            bytes.push((c.y.clamp(0.0, 1.0) * 255.0) as u8);
            bytes.push((c.z.clamp(0.0, 1.0) * 255.0) as u8);
        }
        out.write_all(&bytes)
    }
}

impl Framebuffer for Canvas {
    fn set_pixel(&mut self, x: u16, y: u16, _depth: f32, color: Vec3) {
        let i = self.index(x, y);
        self.color[i] = color;
        self.depth[i] = _depth;
    }

    fn get_depth(&self, x: u16, y: u16) -> f32 { self.depth[self.index(x, y)] }
}

/// 8 corners of a unit cube, each colored by its own octant.
fn cube_vertices() -> [CubeVertex; 8] {
    let signs = [-1.0f32, 1.0];
    let mut vertices = [CubeVertex { position: Vec3::new(0.0, 0.0, 0.0), color: Vec3::new(0.0, 0.0, 0.0) }; 8];
    let mut i = 0;
    for &sx in &signs {
        for &sy in &signs {
            for &sz in &signs {
                vertices[i] = CubeVertex {
                    position: Vec3::new(sx, sy, sz),
                    color: Vec3::new((sx + 1.0) * 0.5, (sy + 1.0) * 0.5, (sz + 1.0) * 0.5),
                };
                i += 1;
            }
        }
    }
    vertices
}

/// 12 triangles (2 per face), wound counter-clockwise when viewed from
/// outside the cube.
const CUBE_INDICES: [u16; 36] = [
    0, 1, 3, 0, 3, 2, // -x face
    5, 4, 6, 5, 6, 7, // +x face
    0, 4, 5, 0, 5, 1, // -y face
    2, 3, 7, 2, 7, 6, // +y face
    0, 2, 6, 0, 6, 4, // -z face
    1, 5, 7, 1, 7, 3, // +z face
];

fn main() {
    env_logger::init();

    let vertices = cube_vertices();
    let vertex_bytes: &[u8] = bytemuck::cast_slice(&vertices);

    let model = Mat4::rotation(32.0, Vec3::new(0.4, 1.0, 0.2));
    let view = Mat4::look_at(Vec3::new(2.5, 2.0, 3.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
    let projection = Mat4::perspective(60.0, WIDTH as f32 / HEIGHT as f32, 0.1, 100.0);
    let mvp = projection * view * model;

    // out[0..3] = NDC position, out[3..6] = interpolated vertex color.
    let vertex_shader = move |raw: &[u8], out: &mut [f32]| {
        let v: &CubeVertex = bytemuck::from_bytes(raw);
        let clip = mvp.transform(Vec4::from_xyz(v.position, 1.0));
        let ndc = clip.perspective_divide();

        out[0] = ndc.x;
        out[1] = ndc.y;
        out[2] = ndc.z;
        out[3] = v.color.x;
        out[4] = v.color.y;
        out[5] = v.color.z;
    };

    let fragment_shader = |attrs: &[f32]| Vec4::new(attrs[3], attrs[4], attrs[5], 1.0);

    let shader = ShaderBinding::new(vertex_shader, fragment_shader, 6).expect("vertex_out_elements in range");
    let viewport = Viewport::new(0, 0, WIDTH, HEIGHT).expect("nonzero viewport");
    let mut renderer = Renderer::new(shader, viewport, FaceWinding::CounterClockwise, true);

    let call = DrawCall::new(
        PrimitiveType::Triangles,
        vertex_bytes,
        std::mem::size_of::<CubeVertex>(),
        CUBE_INDICES.len() as u32,
        Some(&CUBE_INDICES),
    )
    .expect("stride covers CubeVertex");

    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    renderer.draw(&call, &mut canvas);

    canvas.write_ppm("demos/basic.ppm").expect("write output image");
}
