//! Core types for the rasterizer

use serde::{Serialize, Deserialize};
use super::math::Vec2;

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const YELLOW: Color = Color { r: 255, g: 255, b: 0, a: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Pack as 0xAARRGGBB, the pixel buffer's native format
    pub fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack from 0xAARRGGBB
    pub fn from_argb(argb: u32) -> Self {
        Self {
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
            a: (argb >> 24) as u8,
        }
    }
}

/// A projected triangle ready for rasterization
#[derive(Debug, Clone, Copy)]
pub struct ScreenTriangle {
    pub points: [Vec2; 3],
    pub color: Color,
    /// Mean pre-projection depth, used for painter's ordering
    pub avg_depth: f32,
}

impl ScreenTriangle {
    pub fn new(points: [Vec2; 3], color: Color, avg_depth: f32) -> Self {
        Self { points, color, avg_depth }
    }
}

/// Which passes the renderer draws each frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Dotted background grid
    pub draw_grid: bool,
    /// Solid triangle interiors
    pub fill_triangles: bool,
    /// Triangle edges
    pub draw_wireframe: bool,
    /// 3x3 markers on projected vertices
    pub draw_vertices: bool,
    /// Skip faces pointing away from the camera
    pub backface_culling: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            draw_grid: true,
            fill_triangles: true,
            draw_wireframe: true,
            draw_vertices: false,
            backface_culling: true,
        }
    }
}
