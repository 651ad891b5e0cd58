//! Shader binding: the pair of callbacks a draw call is parameterized over.
//!
//! Both callbacks are generic parameters on [`crate::renderer::Renderer`]
//! rather than `dyn Fn` trait objects, so a draw call monomorphizes down to
//! direct calls with no vtable indirection and no heap allocation. This is
//! the same tradeoff `arrayvec` makes for the primitive assembler's buffer.

use crate::error::{check_vertex_out_elements, RendererResult};
use crate::math::Vec4;

/// Winding order that is considered front-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceWinding {
    Clockwise,
    CounterClockwise,
}

/// A vertex shader maps one input vertex (the raw bytes of a single record
/// from the vertex buffer, `stride` bytes wide) to `vertex_out_elements`
/// floats. Slots 0, 1, 2 of the output MUST be the clip-space `x, y, z` in
/// normalized device coordinates; any remaining slots are varyings carried
/// through rasterization untouched (interpolated, never reinterpreted).
pub trait VertexShader: Fn(&[u8], &mut [f32]) {}
impl<T: Fn(&[u8], &mut [f32]) + ?Sized> VertexShader for T {}

/// A fragment shader maps an interpolated attribute record to an RGBA color;
/// the alpha channel is accepted but unused (there is no blending stage).
pub trait FragmentShader: Fn(&[f32]) -> Vec4 {}
impl<T: Fn(&[f32]) -> Vec4 + ?Sized> FragmentShader for T {}

/// Couples a vertex/fragment shader pair with the output record width they
/// agree on.
pub struct ShaderBinding<V, F> {
    pub(crate) vertex_shader: V,
    pub(crate) fragment_shader: F,
    pub(crate) vertex_out_elements: usize,
}

impl<V, F> ShaderBinding<V, F>
where
    V: VertexShader,
    F: FragmentShader,
{
    /// `vertex_out_elements` must be in `3..=MAX_ATTRS`; the first three
    /// slots are reserved for clip-space `x, y, z`.
    pub fn new(vertex_shader: V, fragment_shader: F, vertex_out_elements: usize) -> RendererResult<Self> {
        check_vertex_out_elements(vertex_out_elements)?;
        Ok(ShaderBinding { vertex_shader, fragment_shader, vertex_out_elements })
    }

    #[inline]
    pub fn vertex_out_elements(&self) -> usize { self.vertex_out_elements }

    #[inline]
    pub(crate) fn run_vertex(&self, vertex: &[u8], out: &mut [f32]) {
        (self.vertex_shader)(vertex, out)
    }
}
