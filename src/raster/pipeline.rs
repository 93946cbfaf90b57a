//! Per-frame render pipeline
//! Rotate, transform, cull, project, then rasterize into the pixel buffer

use crate::config::ViewerConfig;
use crate::mesh::Mesh;
use super::buffer::ColorBuffer;
use super::math::{Vec2, Vec3};
use super::types::{Color, RenderOptions, ScreenTriangle};

/// Eye position used for visibility checks
const CAMERA_POSITION: Vec3 = Vec3 { x: 0.0, y: 0.0, z: -5.0 };

/// Faces with any vertex closer than this after the camera offset are skipped
const NEAR_Z: f32 = 0.1;

/// Side length of the projected vertex markers
const MARKER_SIZE: i32 = 3;

/// Owns the mesh, the pixel buffer and the per-frame triangle list
pub struct Renderer {
    pub buffer: ColorBuffer,
    pub options: RenderOptions,
    mesh: Mesh,
    fov_factor: f32,
    camera_distance: f32,
    spin: Vec3,
    background: Color,
    grid_color: Color,
    fill_color: Color,
    wire_color: Color,
    vertex_color: Color,
    triangles: Vec<ScreenTriangle>,
}

impl Renderer {
    pub fn new(mesh: Mesh, config: &ViewerConfig) -> Self {
        let mut buffer = ColorBuffer::new(config.window_width, config.window_height);
        buffer.clear(config.background);

        Self {
            buffer,
            options: config.options,
            mesh,
            fov_factor: config.fov_factor,
            camera_distance: config.camera_distance,
            spin: config.spin,
            background: config.background,
            grid_color: config.grid_color,
            fill_color: config.fill_color,
            wire_color: config.wire_color,
            vertex_color: config.vertex_color,
            triangles: Vec::new(),
        }
    }

    /// Advance the spin and rebuild the list of triangles to draw
    pub fn update(&mut self) {
        self.triangles.clear();

        self.mesh.advance_rotation(self.spin);
        let rotation = self.mesh.rotation();

        let center = Vec2::new(
            self.buffer.width as f32 / 2.0,
            self.buffer.height as f32 / 2.0,
        );

        for face in self.mesh.faces() {
            let verts = match (
                self.mesh.vertex(face.a),
                self.mesh.vertex(face.b),
                self.mesh.vertex(face.c),
            ) {
                (Some(a), Some(b), Some(c)) => [a, b, c],
                _ => continue,
            };

            let mut transformed = [Vec3::ZERO; 3];
            for (i, vertex) in verts.into_iter().enumerate() {
                let mut t = vertex
                    .rotate_x(rotation.x)
                    .rotate_y(rotation.y)
                    .rotate_z(rotation.z);
                t.z += self.camera_distance;
                transformed[i] = t;
            }

            if transformed.iter().any(|v| v.z <= NEAR_Z) {
                continue;
            }

            if self.options.backface_culling
                && !face_visible(CAMERA_POSITION, transformed[0], transformed[1], transformed[2])
            {
                continue;
            }

            let points = [
                project(transformed[0], self.fov_factor) + center,
                project(transformed[1], self.fov_factor) + center,
                project(transformed[2], self.fov_factor) + center,
            ];
            let avg_depth = (transformed[0].z + transformed[1].z + transformed[2].z) / 3.0;

            self.triangles.push(ScreenTriangle::new(points, self.fill_color, avg_depth));
        }

        // Painter's order, farthest first
        self.triangles.sort_by(|a, b| b.avg_depth.total_cmp(&a.avg_depth));
    }

    /// Rasterize the collected triangles plus any enabled overlays
    pub fn draw(&mut self) {
        if self.options.draw_grid {
            self.buffer.draw_grid(self.grid_color);
        }

        for tri in &self.triangles {
            let [p0, p1, p2] = tri.points;
            let (x0, y0) = (p0.x as i32, p0.y as i32);
            let (x1, y1) = (p1.x as i32, p1.y as i32);
            let (x2, y2) = (p2.x as i32, p2.y as i32);

            if self.options.fill_triangles {
                self.buffer.draw_filled_triangle(x0, y0, x1, y1, x2, y2, tri.color);
            }
            if self.options.draw_wireframe {
                self.buffer.draw_triangle(x0, y0, x1, y1, x2, y2, self.wire_color);
            }
            if self.options.draw_vertices {
                self.buffer.draw_rect(x0, y0, MARKER_SIZE, MARKER_SIZE, self.vertex_color);
                self.buffer.draw_rect(x1, y1, MARKER_SIZE, MARKER_SIZE, self.vertex_color);
                self.buffer.draw_rect(x2, y2, MARKER_SIZE, MARKER_SIZE, self.vertex_color);
            }
        }
    }

    /// Reset the buffer to the background color after a frame is handed off
    pub fn clear_frame(&mut self) {
        self.buffer.clear(self.background);
    }
}

/// Perspective divide into screen offsets from the center
fn project(v: Vec3, fov_factor: f32) -> Vec2 {
    Vec2::new(fov_factor * v.x / v.z, fov_factor * v.y / v.z)
}

/// Backface test against the ray from the first vertex back to the eye.
/// Strictly negative alignment culls; zero keeps the face.
fn face_visible(camera_position: Vec3, a: Vec3, b: Vec3, c: Vec3) -> bool {
    let ab = (b - a).normalize();
    let ac = (c - a).normalize();
    let normal = ab.cross(ac).normalize();
    let camera_ray = camera_position - a;
    camera_ray.dot(normal) >= 0.0
}
