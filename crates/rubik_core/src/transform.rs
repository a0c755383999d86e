//! 3D Transform (position, rotation, scale)
//!
//! A Transform3 represents the placement of a cubelet in world space.

use rubik_math::{Rotor3, Vec3};
use serde::{Serialize, Deserialize};

/// A 3D transform with position, rotation, and uniform scale
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Transform3 {
    /// Position in world space
    pub position: Vec3,
    /// Rotation as a rotor
    pub rotation: Rotor3,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3 {
    /// Create an identity transform (no translation, rotation, or scale change)
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Rotor3::IDENTITY,
            scale: 1.0,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Rotor3::IDENTITY,
            scale: 1.0,
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Rotor3) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
        }
    }

    /// Transform a point from local space to world space
    ///
    /// Applies scale, then rotation, then translation.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let scaled = p * self.scale;
        let rotated = self.rotation.rotate(scaled);
        rotated + self.position
    }

    /// Transform a direction from local space to world space
    ///
    /// Applies rotation only; directions are unaffected by scale magnitude
    /// changes other than length, which callers normalize away.
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        self.rotation.rotate(d)
    }

    /// Compute the inverse transform
    pub fn inverse(&self) -> Self {
        let inv_scale = if self.scale.abs() > 1e-10 {
            1.0 / self.scale
        } else {
            1.0
        };
        let inv_rotation = self.rotation.reverse();
        let inv_position = inv_rotation.rotate(-self.position) * inv_scale;

        Self {
            position: inv_position,
            rotation: inv_rotation,
            scale: inv_scale,
        }
    }

    /// Compose two transforms: result = self * other
    ///
    /// The composed transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            position: self.transform_point(other.position),
            rotation: self.rotation.compose(&other.rotation),
            scale: self.scale * other.scale,
        }
    }

    /// Translate the transform by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Rotate the transform by a rotor
    pub fn rotate(&mut self, rotor: Rotor3) {
        self.rotation = rotor.compose(&self.rotation).normalize();
    }
}
