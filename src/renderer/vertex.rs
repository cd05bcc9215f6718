//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::RivalColor;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const GRASS: [f32; 4] = [0.102, 0.176, 0.075, 1.0];
    pub const ASPHALT: [f32; 4] = [0.063, 0.094, 0.125, 1.0];
    pub const LANE_LINE: [f32; 4] = [0.961, 0.984, 1.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.973, 0.890, 0.298, 1.0];
    pub const RIVAL_GREEN: [f32; 4] = [0.361, 0.875, 0.408, 1.0];
    pub const RIVAL_CYAN: [f32; 4] = [0.329, 0.784, 1.0, 1.0];
    pub const RIVAL_PURPLE: [f32; 4] = [0.706, 0.365, 1.0, 1.0];
    pub const RIVAL_CORAL: [f32; 4] = [1.0, 0.482, 0.361, 1.0];
    /// Dims the road once the round is over
    pub const GAME_OVER_SHADE: [f32; 4] = [0.0, 0.0, 0.0, 0.65];
}

pub fn rival_color(color: RivalColor) -> [f32; 4] {
    match color {
        RivalColor::Green => colors::RIVAL_GREEN,
        RivalColor::Cyan => colors::RIVAL_CYAN,
        RivalColor::Purple => colors::RIVAL_PURPLE,
        RivalColor::Coral => colors::RIVAL_CORAL,
    }
}
