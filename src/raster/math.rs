//! Vector math for the rasterizer

use std::ops::{Add, Div, Mul, Sub};
use serde::{Serialize, Deserialize};

/// 3D Vector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotate around the x axis by `angle` radians
    pub fn rotate_x(self, angle: f32) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y * angle.cos() - self.z * angle.sin(),
            z: self.y * angle.sin() + self.z * angle.cos(),
        }
    }

    /// Rotate around the y axis by `angle` radians
    pub fn rotate_y(self, angle: f32) -> Vec3 {
        Vec3 {
            x: self.x * angle.cos() - self.z * angle.sin(),
            y: self.y,
            z: self.x * angle.sin() + self.z * angle.cos(),
        }
    }

    /// Rotate around the z axis by `angle` radians
    pub fn rotate_z(self, angle: f32) -> Vec3 {
        Vec3 {
            x: self.x * angle.cos() - self.y * angle.sin(),
            y: self.x * angle.sin() + self.y * angle.cos(),
            z: self.z,
        }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit-length copy; the zero vector stays zero
    pub fn normalize(self) -> Vec3 {
        let m = self.magnitude();
        if m == 0.0 {
            return Vec3::ZERO;
        }
        Vec3 {
            x: self.x / m,
            y: self.y / m,
            z: self.z / m,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x / s,
            y: self.y / s,
            z: self.z / s,
        }
    }
}

/// 2D Vector (screen space)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product, the signed area of the parallelogram
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit-length copy; the zero vector stays zero
    pub fn normalize(self) -> Vec2 {
        let m = self.magnitude();
        if m == 0.0 {
            return Vec2::ZERO;
        }
        Vec2 {
            x: self.x / m,
            y: self.y / m,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    fn div(self, s: f32) -> Vec2 {
        Vec2 {
            x: self.x / s,
            y: self.y / s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!((a.dot(b) - 32.0).abs() < 0.001);
    }

    #[test]
    fn test_vec3_cross() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let c = a.cross(b);
        assert!((c.z - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_cross_anticommutative() {
        let a = Vec3::new(1.5, -2.0, 0.5);
        let b = Vec3::new(3.0, 1.0, -4.0);
        let ab = a.cross(b);
        let ba = b.cross(a);
        assert!((ab.x + ba.x).abs() < 0.001);
        assert!((ab.y + ba.y).abs() < 0.001);
        assert!((ab.z + ba.z).abs() < 0.001);
    }

    #[test]
    fn test_rotation_preserves_magnitude() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let m = v.magnitude();
        for angle in [0.0, 0.3, 1.0, std::f32::consts::PI, 5.5] {
            assert!((v.rotate_x(angle).magnitude() - m).abs() < 0.001);
            assert!((v.rotate_y(angle).magnitude() - m).abs() < 0.001);
            assert!((v.rotate_z(angle).magnitude() - m).abs() < 0.001);
        }
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let v = Vec3::new(1.0, 0.0, 0.0).rotate_z(std::f32::consts::FRAC_PI_2);
        assert!(v.x.abs() < 0.001);
        assert!((v.y - 1.0).abs() < 0.001);
        assert!(v.z.abs() < 0.001);
    }

    #[test]
    fn test_normalize_unit_magnitude() {
        let v = Vec3::new(3.0, 4.0, 0.0).normalize();
        assert!((v.magnitude() - 1.0).abs() < 0.001);
        assert!((v.x - 0.6).abs() < 0.001);
        assert!((v.y - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = Vec3::new(2.0, -5.0, 1.0).normalize();
        let twice = once.normalize();
        assert!((once.x - twice.x).abs() < 0.001);
        assert!((once.y - twice.y).abs() < 0.001);
        assert!((once.z - twice.z).abs() < 0.001);
    }

    #[test]
    fn test_normalize_zero_stays_zero() {
        let v = Vec3::ZERO.normalize();
        assert!(v.x == 0.0 && v.y == 0.0 && v.z == 0.0);
    }

    #[test]
    fn test_vec2_cross_is_scalar_area() {
        assert!((Vec2::new(1.0, 0.0).cross(Vec2::new(0.0, 1.0)) - 1.0).abs() < 0.001);
        assert!((Vec2::new(3.0, 2.0).cross(Vec2::new(5.0, 4.0)) - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_vec3_scalar_ops() {
        let v = Vec3::new(2.0, 4.0, 6.0) * 0.5;
        assert!((v.x - 1.0).abs() < 0.001);
        let w = Vec3::new(2.0, 4.0, 6.0) / 2.0;
        assert!((w.z - 3.0).abs() < 0.001);
    }
}
