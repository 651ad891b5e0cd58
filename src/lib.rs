//! Allocation-free software 3D rasterizer for resource-constrained targets.
//!
//! The entry point is [`renderer::Renderer`]: configure a [`shader::ShaderBinding`]
//! and a [`viewport::Viewport`], then call [`renderer::Renderer::draw`] once per
//! primitive stream. The renderer never allocates and never touches pixel
//! storage directly; callers implement [`fragment::Framebuffer`] against
//! whatever backs their color and depth planes.

pub mod assembler;
pub mod error;
pub mod fragment;
pub mod interpolate;
pub mod math;
pub mod raster;
pub mod renderer;
pub mod shader;
pub mod texture;
pub mod viewport;

/// Upper bound on a vertex's attribute record width (the first 3 slots are
/// always NDC x/y/z; the rest are opaque varyings).
pub const MAX_ATTRS: usize = 16;

/// Capacity of the primitive assembler's working buffer. 4 is enough for
/// every supported primitive type (triangles need 3; nothing needs more).
pub const MAX_PRIMITIVE_VERTICES: usize = 4;

pub use error::{RendererError, RendererResult};
pub use fragment::Framebuffer;
pub use renderer::{DrawCall, PrimitiveType, Renderer};
pub use shader::{FaceWinding, ShaderBinding};
pub use viewport::Viewport;
