//! WebGPU rendering module
//!
//! The scene is a flat list of colored rectangles rebuilt from the game state
//! every frame. HUD text lives in the DOM.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
