//! Rendering module
//!
//! The scene is expressed as draw primitives on a [`Canvas`]; the WebGPU
//! pipeline presents the tessellated result.

pub mod canvas;
pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, Stroke, VertexCanvas};
pub use pipeline::RenderState;
pub use scene::draw_scene;
