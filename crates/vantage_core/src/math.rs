//! Vector and spherical math for camera motion
//!
//! The motion subsystem only needs vectors, orbit-style spherical
//! coordinates, and axis-angle rotation, so the math stays in-house
//! rather than pulling in a full linear algebra stack.

use std::f32::consts::PI;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Polar angles closer to the poles than this are clamped away to keep
/// the view basis well defined.
pub const POLE_EPS: f32 = 1e-4;

/// 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
    pub const UP: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const FORWARD: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: -1.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn distance(&self, other: Vec3) -> f32 {
        (*self - other).length()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len, self.z / len)
        } else {
            Self::ZERO
        }
    }

    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn lerp(&self, other: Vec3, t: f32) -> Vec3 {
        Vec3::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Componentwise approximate equality
    pub fn approx_eq(&self, other: Vec3, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Orbit-style spherical coordinates around a target point
///
/// `theta` is the azimuth around the world up axis (measured from +Z),
/// `phi` the polar angle from +Y. The offset convention matches what an
/// orbiting viewer camera expects:
///
/// ```text
/// x = radius * sin(phi) * sin(theta)
/// y = radius * cos(phi)
/// z = radius * sin(phi) * cos(theta)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Spherical {
    pub const fn new(radius: f32, theta: f32, phi: f32) -> Self {
        Self { radius, theta, phi }
    }

    /// Build from a camera-to-target offset (`position - target`)
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius < 1e-8 {
            return Self::new(0.0, 0.0, PI * 0.5);
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    /// Convert back to a world offset
    pub fn to_offset(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }

    /// Clamp the polar angle away from the poles
    pub fn clamp_poles(mut self) -> Self {
        self.phi = self.phi.clamp(POLE_EPS, PI - POLE_EPS);
        self
    }
}

/// Rotate `v` around `axis` by `angle` radians (Rodrigues' formula)
///
/// A degenerate axis leaves the vector unchanged.
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let len = axis.length();
    if len < 1e-6 {
        return v;
    }
    let k = axis * (1.0 / len);
    let (sin, cos) = angle.sin_cos();
    v * cos + k.cross(v) * sin + k * (k.dot(v) * (1.0 - cos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert!((a.dot(b) - 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_vec3_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);

        // Zero vector stays zero instead of producing NaN
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_vec3_lerp() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(10.0, 20.0, 30.0);
        let mid = a.lerp(b, 0.5);

        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 10.0).abs() < 1e-6);
        assert!((mid.z - 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_spherical_round_trip() {
        let offset = Vec3::new(1.5, 2.0, -0.5);
        let s = Spherical::from_offset(offset);
        let back = s.to_offset();

        assert!(back.approx_eq(offset, 1e-5));
        assert!((s.radius - offset.length()).abs() < 1e-6);
    }

    #[test]
    fn test_spherical_pole_clamp() {
        // Straight up would put phi at 0; clamping keeps it off the pole
        let s = Spherical::from_offset(Vec3::new(0.0, 3.0, 0.0)).clamp_poles();
        assert!(s.phi >= POLE_EPS);

        let down = Spherical::from_offset(Vec3::new(0.0, -3.0, 0.0)).clamp_poles();
        assert!(down.phi <= PI - POLE_EPS);
    }

    #[test]
    fn test_rotate_about_axis() {
        // Quarter turn of +X around +Y lands on -Z
        let v = rotate_about_axis(Vec3::new(1.0, 0.0, 0.0), Vec3::UP, PI * 0.5);
        assert!(v.approx_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));

        // Rotation preserves length
        let w = rotate_about_axis(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.3, 1.0, -0.2), 1.234);
        assert!((w.length() - Vec3::new(1.0, 2.0, 3.0).length()).abs() < 1e-5);

        // Degenerate axis is a no-op
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(rotate_about_axis(v, Vec3::ZERO, 1.0), v);
    }
}
