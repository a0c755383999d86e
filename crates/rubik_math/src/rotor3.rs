//! 3D Rotor for representing rotations
//!
//! In geometric algebra a 3D rotation lives in one of the 3 planes XY, XZ, YZ
//! (or any combination). A rotor has 4 components: 1 scalar and 3 bivectors.
//! This is the even subalgebra of Cl(3), so a rotor behaves like a unit
//! quaternion, but the plane-based constructors match how twists are specified.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use crate::Vec3;

/// The 3 rotation planes in 3D space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationPlane {
    /// XY plane - rotation around the Z axis (X toward Y at positive angles)
    XY,
    /// XZ plane - rotation around the Y axis (X toward Z at positive angles)
    XZ,
    /// YZ plane - rotation around the X axis (Y toward Z at positive angles)
    YZ,
}

/// 3D Rotor for representing rotations
///
/// Rotor = scalar + bivectors
/// R = s + b_xy*e12 + b_xz*e13 + b_yz*e23
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rotor3 {
    /// Scalar component
    pub s: f32,
    /// Bivector component for the XY plane (e12)
    pub b_xy: f32,
    /// Bivector component for the XZ plane (e13)
    pub b_xz: f32,
    /// Bivector component for the YZ plane (e23)
    pub b_yz: f32,
}

impl Default for Rotor3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rotor3 {
    /// Identity rotor (no rotation)
    pub const IDENTITY: Self = Self {
        s: 1.0,
        b_xy: 0.0,
        b_xz: 0.0,
        b_yz: 0.0,
    };

    /// Create a rotor for rotation in a single plane
    ///
    /// For a rotation by angle θ in a plane, the rotor is
    /// R = cos(θ/2) - sin(θ/2) * B, where B is the unit bivector for that
    /// plane. Positive angles rotate the plane's first axis toward its second.
    pub fn from_plane_angle(plane: RotationPlane, angle: f32) -> Self {
        let half = angle * 0.5;
        let cos_h = half.cos();
        let sin_h = half.sin();

        let mut r = Self::IDENTITY;
        r.s = cos_h;

        match plane {
            RotationPlane::XY => r.b_xy = -sin_h,
            RotationPlane::XZ => r.b_xz = -sin_h,
            RotationPlane::YZ => r.b_yz = -sin_h,
        }

        r
    }

    /// Create a rotor for a right-handed rotation around a unit axis
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let sin_h = half.sin();

        Self {
            s: half.cos(),
            b_xy: -sin_h * axis.z,
            b_xz: sin_h * axis.y,
            b_yz: -sin_h * axis.x,
        }
    }

    /// Quaternion view of this rotor: (w, x, y, z)
    ///
    /// The bivector signs follow from e12 ↔ k, e13 ↔ -j, e23 ↔ i.
    #[inline]
    fn quat(&self) -> (f32, f32, f32, f32) {
        (self.s, -self.b_yz, self.b_xz, -self.b_xy)
    }

    #[inline]
    fn from_quat(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self {
            s: w,
            b_xy: -z,
            b_xz: y,
            b_yz: -x,
        }
    }

    /// Compute the squared magnitude of the rotor
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.s * self.s
            + self.b_xy * self.b_xy
            + self.b_xz * self.b_xz
            + self.b_yz * self.b_yz
    }

    /// Compute the magnitude of the rotor
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Normalize the rotor to unit magnitude
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            let inv = 1.0 / mag;
            Self {
                s: self.s * inv,
                b_xy: self.b_xy * inv,
                b_xz: self.b_xz * inv,
                b_yz: self.b_yz * inv,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// The reverse rotor (inverse rotation for unit rotors)
    pub fn reverse(&self) -> Self {
        Self {
            s: self.s,
            b_xy: -self.b_xy,
            b_xz: -self.b_xz,
            b_yz: -self.b_yz,
        }
    }

    /// Compose two rotors: result applies `other` first, then `self`
    pub fn compose(&self, other: &Self) -> Self {
        let (w1, x1, y1, z1) = self.quat();
        let (w2, x2, y2, z2) = other.quat();

        Self::from_quat(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        )
    }

    /// Rotate a vector by this rotor (sandwich product)
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let (w, x, y, z) = self.quat();
        let qv = Vec3::new(x, y, z);

        // v' = v + 2w(qv × v) + 2 qv × (qv × v)
        let t = qv.cross(v) * 2.0;
        v + t * w + qv.cross(t)
    }

    /// Convert to a column-major 4x4 rotation matrix
    pub fn to_matrix(&self) -> [[f32; 4]; 4] {
        let cx = self.rotate(Vec3::X);
        let cy = self.rotate(Vec3::Y);
        let cz = self.rotate(Vec3::Z);

        [
            [cx.x, cx.y, cx.z, 0.0],
            [cy.x, cy.y, cy.z, 0.0],
            [cz.x, cz.y, cz.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    #[test]
    fn test_identity_rotation() {
        let r = Rotor3::IDENTITY;
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(r.rotate(v), v));
    }

    #[test]
    fn test_xy_quarter_turn() {
        let r = Rotor3::from_plane_angle(RotationPlane::XY, FRAC_PI_2);
        assert!(vec_approx_eq(r.rotate(Vec3::X), Vec3::Y));
        assert!(vec_approx_eq(r.rotate(Vec3::Y), -Vec3::X));
        assert!(vec_approx_eq(r.rotate(Vec3::Z), Vec3::Z));
    }

    #[test]
    fn test_xz_quarter_turn() {
        let r = Rotor3::from_plane_angle(RotationPlane::XZ, FRAC_PI_2);
        assert!(vec_approx_eq(r.rotate(Vec3::X), Vec3::Z));
        assert!(vec_approx_eq(r.rotate(Vec3::Z), -Vec3::X));
        assert!(vec_approx_eq(r.rotate(Vec3::Y), Vec3::Y));
    }

    #[test]
    fn test_yz_quarter_turn() {
        let r = Rotor3::from_plane_angle(RotationPlane::YZ, FRAC_PI_2);
        assert!(vec_approx_eq(r.rotate(Vec3::Y), Vec3::Z));
        assert!(vec_approx_eq(r.rotate(Vec3::Z), -Vec3::Y));
        assert!(vec_approx_eq(r.rotate(Vec3::X), Vec3::X));
    }

    #[test]
    fn test_axis_angle_matches_plane() {
        // Rotation about +Z is rotation in the XY plane
        let a = Rotor3::from_axis_angle(Vec3::Z, 0.7);
        let b = Rotor3::from_plane_angle(RotationPlane::XY, 0.7);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(a.rotate(v), b.rotate(v)));
    }

    #[test]
    fn test_axis_angle_right_handed() {
        // Right-hand rule about +X: Y goes to Z
        let r = Rotor3::from_axis_angle(Vec3::X, FRAC_PI_2);
        assert!(vec_approx_eq(r.rotate(Vec3::Y), Vec3::Z));
    }

    #[test]
    fn test_compose_applies_other_first() {
        let first = Rotor3::from_plane_angle(RotationPlane::XY, FRAC_PI_2); // X -> Y
        let then = Rotor3::from_plane_angle(RotationPlane::YZ, FRAC_PI_2); // Y -> Z
        let combined = then.compose(&first);
        assert!(vec_approx_eq(combined.rotate(Vec3::X), Vec3::Z));
    }

    #[test]
    fn test_reverse_undoes_rotation() {
        let r = Rotor3::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 1.2);
        let v = Vec3::new(1.0, 2.0, 3.0);
        let back = r.reverse().rotate(r.rotate(v));
        assert!(vec_approx_eq(back, v));
    }

    #[test]
    fn test_full_turn_is_identity() {
        let r = Rotor3::from_plane_angle(RotationPlane::XZ, PI);
        let twice = r.compose(&r);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(twice.rotate(v), v));
    }

    #[test]
    fn test_normalize() {
        let mut r = Rotor3::from_plane_angle(RotationPlane::XY, 0.5);
        r.s *= 3.0;
        r.b_xy *= 3.0;
        let n = r.normalize();
        assert!((n.magnitude() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_to_matrix_columns() {
        let r = Rotor3::from_plane_angle(RotationPlane::XY, FRAC_PI_2);
        let m = r.to_matrix();
        // Column 0 is the image of the X axis, which is Y
        assert!((m[0][0]).abs() < EPSILON);
        assert!((m[0][1] - 1.0).abs() < EPSILON);
    }
}
