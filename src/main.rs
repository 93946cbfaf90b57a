//! meshspin: a software 3D rasterizer that spins meshes in a window
//!
//! Loads a Wavefront OBJ mesh (or falls back to a built-in cube),
//! rotates it a little every frame, and rasterizes it on the CPU:
//! - Backface culling against a fixed camera
//! - Simple perspective projection
//! - Scanline-filled triangles, wireframe and vertex overlays
//! - Painter's ordering by average depth

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod display;
mod mesh;
mod raster;

use std::sync::OnceLock;
use macroquad::prelude::*;
use config::ViewerConfig;
use display::{FrameLimiter, Presenter, TARGET_FPS};
use mesh::Mesh;
use raster::Renderer;

/// Settings file looked up in the working directory
const CONFIG_PATH: &str = "meshspin.ron";

static CONFIG: OnceLock<ViewerConfig> = OnceLock::new();

/// Shared between the window setup and the main loop
fn viewer_config() -> &'static ViewerConfig {
    CONFIG.get_or_init(|| config::load_or_default(CONFIG_PATH))
}

fn window_conf() -> Conf {
    let config = viewer_config();
    Conf {
        window_title: format!("meshspin v{}", VERSION),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = viewer_config();

    let mesh = match std::env::args().nth(1) {
        Some(path) => match mesh::load_obj(&path) {
            Ok(mesh) => {
                println!(
                    "Loaded {}: {} vertices, {} faces",
                    path,
                    mesh.vertices().len(),
                    mesh.faces().len()
                );
                mesh
            }
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            println!("No mesh given, spinning the built-in cube");
            Mesh::unit_cube()
        }
    };

    let mut renderer = Renderer::new(mesh, config);
    let mut presenter = Presenter::new(&renderer.buffer);
    let mut limiter = FrameLimiter::new(TARGET_FPS);

    println!("=== meshspin v{} ===", VERSION);
    println!("Keys: F fill, W wireframe, V vertices, G grid, C culling, Esc quit");

    loop {
        if !display::handle_input(&mut renderer.options) {
            break;
        }

        renderer.update();
        renderer.draw();

        presenter.present(&renderer.buffer);
        renderer.clear_frame();

        limiter.wait();
        next_frame().await;
    }
}
