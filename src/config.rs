//! Viewer configuration
//!
//! Settings come from an optional RON file next to the working
//! directory; every field falls back to a default so a partial file
//! is fine.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::raster::{Color, RenderOptions, Vec3};

/// Tunable viewer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Window and pixel buffer width
    pub window_width: usize,
    /// Window and pixel buffer height
    pub window_height: usize,
    /// Projection scale factor (screen units per unit of x/z)
    pub fov_factor: f32,
    /// Distance the mesh is pushed along +z after rotation
    pub camera_distance: f32,
    /// Rotation added every frame, in radians per axis
    pub spin: Vec3,
    pub background: Color,
    pub grid_color: Color,
    pub fill_color: Color,
    pub wire_color: Color,
    pub vertex_color: Color,
    /// Initial state of the render toggles
    pub options: RenderOptions,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            fov_factor: 640.0,
            camera_distance: 5.0,
            spin: Vec3::new(0.01, 0.0, 0.0),
            background: Color::BLACK,
            grid_color: Color::new(51, 51, 51),
            fill_color: Color::new(85, 85, 85),
            wire_color: Color::YELLOW,
            vertex_color: Color::RED,
            options: RenderOptions::default(),
        }
    }
}

/// Load settings from a RON file, falling back to defaults
///
/// A missing file is normal; a file that fails to parse is reported and
/// the defaults are used so the viewer still starts.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> ViewerConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => match ron::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Ignoring config {}: {}", path.display(), e);
                ViewerConfig::default()
            }
        },
        Err(_) => ViewerConfig::default(),
    }
}
