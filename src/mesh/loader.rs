//! Wavefront OBJ loading
//!
//! Reads the subset this viewer needs: `v x y z` vertex lines and
//! `f a/t/n b/t/n c/t/n` face lines (texture and normal indices are
//! accepted and ignored). Anything else is skipped.

use std::fs;
use std::path::Path;
use crate::raster::Vec3;
use super::{Face, Mesh};

/// Error type for mesh loading
#[derive(Debug)]
pub enum MeshError {
    IoError(std::io::Error),
}

impl From<std::io::Error> for MeshError {
    fn from(e: std::io::Error) -> Self {
        MeshError::IoError(e)
    }
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

/// Load a mesh from an OBJ file
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, MeshError> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_obj(&contents))
}

/// Parse OBJ text (for embedded meshes or testing)
///
/// Malformed lines are skipped; faces pointing outside the vertex list
/// are dropped with a warning.
pub fn parse_obj(contents: &str) -> Mesh {
    let mut vertices: Vec<Vec3> = Vec::new();
    let mut raw_faces: Vec<Face> = Vec::new();

    for line in contents.lines() {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                if let Some(vertex) = parse_vertex(parts) {
                    vertices.push(vertex);
                }
            }
            Some("f") => {
                if let Some(face) = parse_face(parts) {
                    raw_faces.push(face);
                }
            }
            _ => {}
        }
    }

    let count = vertices.len();
    let in_range = |i: usize| i >= 1 && i <= count;
    let mut faces = Vec::with_capacity(raw_faces.len());
    let mut dropped = 0usize;
    for face in raw_faces {
        if in_range(face.a) && in_range(face.b) && in_range(face.c) {
            faces.push(face);
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        eprintln!("Dropped {} face(s) with out-of-range vertex indices", dropped);
    }

    Mesh::new(vertices, faces)
}

fn parse_vertex<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<Vec3> {
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let z = parts.next()?.parse().ok()?;
    Some(Vec3::new(x, y, z))
}

fn parse_face<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<Face> {
    let a = parse_index(parts.next()?)?;
    let b = parse_index(parts.next()?)?;
    let c = parse_index(parts.next()?)?;
    Some(Face::new(a, b, c))
}

/// First slash-separated component of an OBJ face token
fn parse_index(token: &str) -> Option<usize> {
    token.split('/').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vertices_and_plain_faces() {
        let mesh = parse_obj("v 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 1.0 0.0\nf 1 2 3\n");
        assert_eq!(mesh.vertices().len(), 3);
        assert_eq!(mesh.faces().len(), 1);
        assert_eq!(mesh.faces()[0].a, 1);
        assert_eq!(mesh.faces()[0].c, 3);
    }

    #[test]
    fn test_face_texture_and_normal_indices_ignored() {
        let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/4/7 2/5/8 3/6/9\n");
        assert_eq!(mesh.faces().len(), 1);
        let face = mesh.faces()[0];
        assert_eq!((face.a, face.b, face.c), (1, 2, 3));
    }

    #[test]
    fn test_face_without_texture_index() {
        let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1//2 2//3 3//1\n");
        assert_eq!(mesh.faces().len(), 1);
        assert_eq!(mesh.faces()[0].b, 2);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let text = "v 0 0 0\nv abc 0 0\nv 1 0\nv 1 0 0\nv 0 1 0\nf 1 2\nf x y z\nf 1 2 3\n";
        let mesh = parse_obj(text);
        assert_eq!(mesh.vertices().len(), 3);
        assert_eq!(mesh.faces().len(), 1);
    }

    #[test]
    fn test_unrelated_prefixes_are_skipped() {
        let text = "# comment\no cube\nvt 0.5 0.5\nvn 0 0 1\ns off\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = parse_obj(text);
        assert_eq!(mesh.vertices().len(), 3);
        assert_eq!(mesh.faces().len(), 1);
    }

    #[test]
    fn test_out_of_range_faces_are_dropped() {
        let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\nf 0 1 2\nf 1 2 3\n");
        assert_eq!(mesh.faces().len(), 1);
        assert_eq!((mesh.faces()[0].a, mesh.faces()[0].b, mesh.faces()[0].c), (1, 2, 3));
    }

    #[test]
    fn test_extra_vertex_components_ignored() {
        // OBJ allows a w component on vertex lines
        let mesh = parse_obj("v 1.5 2.5 3.5 1.0\n");
        assert_eq!(mesh.vertices().len(), 1);
        assert!((mesh.vertices()[0].z - 3.5).abs() < 0.001);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_obj("no/such/mesh.obj");
        assert!(matches!(result, Err(MeshError::IoError(_))));
    }
}
