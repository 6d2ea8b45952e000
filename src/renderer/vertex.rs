//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

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

/// Colors for game elements (sRGB, 0-1)
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const RED: [f32; 4] = rgb(230, 41, 55);
    pub const GREEN: [f32; 4] = rgb(0, 228, 48);
    pub const BLUE: [f32; 4] = rgb(0, 121, 241);
    pub const YELLOW: [f32; 4] = rgb(253, 249, 0);
    pub const PURPLE: [f32; 4] = rgb(200, 122, 255);
    pub const SKYBLUE: [f32; 4] = rgb(102, 191, 255);
    pub const PINK: [f32; 4] = rgb(255, 109, 194);
    pub const BROWN: [f32; 4] = rgb(127, 106, 79);

    pub const GRAY: [f32; 4] = rgb(130, 130, 130);
    pub const BACKGROUND: [f32; 4] = rgb(255, 255, 255);

    /// Button colors, reused cyclically when there are more buttons
    pub const BUTTONS: [[f32; 4]; 8] = [RED, GREEN, BLUE, YELLOW, PURPLE, SKYBLUE, PINK, BROWN];

    /// Color of button `index`
    pub fn button(index: usize) -> [f32; 4] {
        BUTTONS[index % BUTTONS.len()]
    }

    /// Darken (factor < 0) or lighten (factor > 0) a color.
    ///
    /// `factor` is clamped to -1..=1; alpha is untouched.
    pub fn brightness(color: [f32; 4], factor: f32) -> [f32; 4] {
        let factor = factor.clamp(-1.0, 1.0);
        let adjust = |c: f32| {
            if factor < 0.0 {
                c * (1.0 + factor)
            } else {
                c + (1.0 - c) * factor
            }
        };
        [adjust(color[0]), adjust(color[1]), adjust(color[2]), color[3]]
    }

    /// Convert an sRGB component to linear space
    pub fn srgb_to_linear(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

}
