//! Pixel buffer and drawing primitives
//! Scanline triangle fill with the flat-top/flat-bottom split

use super::types::Color;

/// Spacing of the background grid dots, in pixels
const GRID_STEP: usize = 10;

/// 2D grid of packed 0xAARRGGBB pixels
pub struct ColorBuffer {
    pub pixels: Vec<u32>,
    pub width: usize,
    pub height: usize,
}

impl ColorBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
        }
    }

    /// Fill the whole buffer with one color
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_argb());
    }

    /// Write a single pixel; out-of-bounds coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.pixels[y as usize * self.width + x as usize] = color.to_argb();
        }
    }

    /// Drop a dot every few pixels along both axes
    pub fn draw_grid(&mut self, color: Color) {
        let argb = color.to_argb();
        for y in (0..self.height).step_by(GRID_STEP) {
            for x in (0..self.width).step_by(GRID_STEP) {
                self.pixels[y * self.width + x] = argb;
            }
        }
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        for i in 0..w {
            for j in 0..h {
                self.set_pixel(x + i, y + j, color);
            }
        }
    }

    /// DDA line; both endpoints are plotted
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = x1 - x0;
        let dy = y1 - y0;

        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            self.set_pixel(x0, y0, color);
            return;
        }

        let x_step = dx as f32 / steps as f32;
        let y_step = dy as f32 / steps as f32;

        let mut x = x0 as f32;
        let mut y = y0 as f32;

        for _ in 0..=steps {
            self.set_pixel(x.round() as i32, y.round() as i32, color);
            x += x_step;
            y += y_step;
        }
    }

    pub fn draw_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.draw_line(x0, y0, x1, y1, color);
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x0, y0, color);
    }

    /// Fill a triangle by splitting it into a flat-bottom and a flat-top half
    pub fn draw_filled_triangle(
        &mut self,
        mut x0: i32,
        mut y0: i32,
        mut x1: i32,
        mut y1: i32,
        mut x2: i32,
        mut y2: i32,
        color: Color,
    ) {
        // Sort the vertices by ascending y
        if y0 > y1 {
            std::mem::swap(&mut y0, &mut y1);
            std::mem::swap(&mut x0, &mut x1);
        }
        if y1 > y2 {
            std::mem::swap(&mut y1, &mut y2);
            std::mem::swap(&mut x1, &mut x2);
        }
        if y0 > y1 {
            std::mem::swap(&mut y0, &mut y1);
            std::mem::swap(&mut x0, &mut x1);
        }

        if y1 == y2 {
            self.fill_flat_bottom(x0, y0, x1, y1, x2, y2, color);
        } else if y0 == y1 {
            self.fill_flat_top(x0, y0, x1, y1, x2, y2, color);
        } else {
            // Midpoint on the v0-v2 edge at the height of v1
            let my = y1;
            let mx = ((x2 - x0) as f32 * (y1 - y0) as f32 / (y2 - y0) as f32 + x0 as f32) as i32;

            self.fill_flat_bottom(x0, y0, x1, y1, mx, my, color);
            self.fill_flat_top(x1, y1, mx, my, x2, y2, color);
        }
    }

    /// Scanlines from the apex (x0, y0) down to the flat edge at y1 == y2
    fn fill_flat_bottom(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        if y1 == y0 || y2 == y0 {
            return;
        }
        let inv_slope_1 = (x1 - x0) as f32 / (y1 - y0) as f32;
        let inv_slope_2 = (x2 - x0) as f32 / (y2 - y0) as f32;

        let mut x_start = x0 as f32;
        let mut x_end = x0 as f32;

        for y in y0..=y2 {
            self.draw_line(x_start as i32, y, x_end as i32, y, color);
            x_start += inv_slope_1;
            x_end += inv_slope_2;
        }
    }

    /// Scanlines from the bottom vertex (x2, y2) up to the flat edge at y0 == y1
    fn fill_flat_top(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        if y2 == y0 || y2 == y1 {
            return;
        }
        let inv_slope_1 = (x2 - x0) as f32 / (y2 - y0) as f32;
        let inv_slope_2 = (x2 - x1) as f32 / (y2 - y1) as f32;

        let mut x_start = x2 as f32;
        let mut x_end = x2 as f32;

        for y in (y0..=y2).rev() {
            self.draw_line(x_start as i32, y, x_end as i32, y, color);
            x_start -= inv_slope_1;
            x_end -= inv_slope_2;
        }
    }
}
