//! WebGPU rendering module
//!
//! The scene is rebuilt every frame as flat-colored triangles in surface
//! pixels and drawn with a single vertex-color pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use scene::compose;
pub use vertex::Vertex;
