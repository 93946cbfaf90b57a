//! Window presentation, input and frame pacing

use std::time::{Duration, Instant};
use macroquad::prelude::*;
use crate::raster::{Color, ColorBuffer, RenderOptions};

/// Frame rate the viewer paces itself to
pub const TARGET_FPS: u32 = 30;

/// Expand packed 0xAARRGGBB pixels into RGBA byte order
fn argb_to_rgba(pixels: &[u32], out: &mut [u8]) {
    for (bytes, px) in out.chunks_exact_mut(4).zip(pixels) {
        let color = Color::from_argb(*px);
        bytes[0] = color.r;
        bytes[1] = color.g;
        bytes[2] = color.b;
        bytes[3] = color.a;
    }
}

/// Uploads the pixel buffer to the window every frame
pub struct Presenter {
    staging: Vec<u8>,
}

impl Presenter {
    pub fn new(buffer: &ColorBuffer) -> Self {
        Self {
            staging: vec![0; buffer.width * buffer.height * 4],
        }
    }

    /// Copy the buffer out and stretch it over the whole window
    pub fn present(&mut self, buffer: &ColorBuffer) {
        argb_to_rgba(&buffer.pixels, &mut self.staging);

        let texture = Texture2D::from_rgba8(buffer.width as u16, buffer.height as u16, &self.staging);
        texture.set_filter(FilterMode::Nearest);

        draw_texture_ex(
            &texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
    }
}

/// Sleeps away the remainder of each frame to hold a fixed rate
pub struct FrameLimiter {
    frame_budget: Duration,
    last_frame: Instant,
}

impl FrameLimiter {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / target_fps,
            last_frame: Instant::now(),
        }
    }

    /// Block until this frame's budget is spent
    pub fn wait(&mut self) {
        let elapsed = self.last_frame.elapsed();
        if elapsed < self.frame_budget {
            std::thread::sleep(self.frame_budget - elapsed);
        }
        self.last_frame = Instant::now();
    }
}

/// Apply this frame's key presses to the render toggles
///
/// Returns false once the user asks to quit.
pub fn handle_input(options: &mut RenderOptions) -> bool {
    if is_key_pressed(KeyCode::Escape) {
        return false;
    }
    if is_key_pressed(KeyCode::F) {
        options.fill_triangles = !options.fill_triangles;
    }
    if is_key_pressed(KeyCode::W) {
        options.draw_wireframe = !options.draw_wireframe;
    }
    if is_key_pressed(KeyCode::V) {
        options.draw_vertices = !options.draw_vertices;
    }
    if is_key_pressed(KeyCode::G) {
        options.draw_grid = !options.draw_grid;
    }
    if is_key_pressed(KeyCode::C) {
        options.backface_culling = !options.backface_culling;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_bytes_land_in_rgba_order() {
        let pixels = [0xFFAABBCCu32, 0x80102030];
        let mut out = [0u8; 8];
        argb_to_rgba(&pixels, &mut out);
        assert_eq!(&out[0..4], &[0xAA, 0xBB, 0xCC, 0xFF]);
        assert_eq!(&out[4..8], &[0x10, 0x20, 0x30, 0x80]);
    }

    #[test]
    fn test_frame_limiter_holds_the_budget() {
        let mut limiter = FrameLimiter::new(100);
        let start = Instant::now();
        limiter.wait();
        limiter.wait();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
