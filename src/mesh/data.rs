//! Triangle mesh data
//!
//! Faces hold 1-based indices into the vertex list, the way OBJ files
//! number their vertices.

use crate::raster::Vec3;

/// Corner indices of one triangle, 1-based
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }
}

/// A triangulated mesh plus its accumulated rotation
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    rotation: Vec3,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            faces,
            rotation: Vec3::ZERO,
        }
    }

    /// Fallback cube centered on the origin, two triangles per side
    pub fn unit_cube() -> Self {
        let vertices = vec![
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, 1.0),
        ];

        let faces = vec![
            // front
            Face::new(1, 2, 3),
            Face::new(1, 3, 4),
            // right
            Face::new(4, 3, 5),
            Face::new(4, 5, 6),
            // back
            Face::new(6, 5, 7),
            Face::new(6, 7, 8),
            // left
            Face::new(8, 7, 2),
            Face::new(8, 2, 1),
            // top
            Face::new(2, 7, 5),
            Face::new(2, 5, 3),
            // bottom
            Face::new(6, 8, 1),
            Face::new(6, 1, 4),
        ];

        Self::new(vertices, faces)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Resolve a 1-based index; zero and out-of-range give None
    pub fn vertex(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index.checked_sub(1)?).copied()
    }

    /// Accumulate one frame's worth of rotation, in radians per axis
    pub fn advance_rotation(&mut self, delta: Vec3) {
        self.rotation = self.rotation + delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cube_shape() {
        let cube = Mesh::unit_cube();
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.faces().len(), 12);
        for face in cube.faces() {
            for index in [face.a, face.b, face.c] {
                assert!(index >= 1 && index <= 8);
            }
        }
    }

    #[test]
    fn test_vertex_lookup_is_one_based() {
        let cube = Mesh::unit_cube();
        let first = cube.vertex(1).unwrap();
        assert!((first.x - cube.vertices()[0].x).abs() < 0.001);
        assert!((first.y - cube.vertices()[0].y).abs() < 0.001);
        assert!(cube.vertex(0).is_none());
        assert!(cube.vertex(9).is_none());
    }

    #[test]
    fn test_advance_rotation_accumulates() {
        let mut mesh = Mesh::unit_cube();
        mesh.advance_rotation(Vec3::new(0.01, 0.02, 0.03));
        mesh.advance_rotation(Vec3::new(0.01, 0.02, 0.03));
        let rot = mesh.rotation();
        assert!((rot.x - 0.02).abs() < 0.001);
        assert!((rot.y - 0.04).abs() < 0.001);
        assert!((rot.z - 0.06).abs() < 0.001);
    }

    #[test]
    fn test_rotation_never_wraps() {
        let mut mesh = Mesh::unit_cube();
        mesh.advance_rotation(Vec3::new(7.0, 0.0, 0.0));
        mesh.advance_rotation(Vec3::new(7.0, 0.0, 0.0));
        assert!((mesh.rotation().x - 14.0).abs() < 0.001);
    }
}
