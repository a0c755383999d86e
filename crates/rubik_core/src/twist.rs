//! Twist vocabulary: axes, faces, slice rotations, and the snap animation
//!
//! A twist rotates one layer of the cube a whole number of quarter turns
//! around a coordinate axis. While the user drags (or a released drag snaps
//! into place), the in-flight rotation is a [`SliceRotation`] applied at
//! render time; only when the animation lands on its target does the cube
//! state permute.

use rubik_math::{Rotor3, Vec3};
use serde::{Serialize, Deserialize};
use std::f32::consts::FRAC_PI_2;

/// A coordinate axis of the cube
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis (0, 1, 2)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// The two axes perpendicular to this one
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

/// A face of the cube, which doubles as a sticker color identity
///
/// The order matches the classic box material order: +X, -X, +Y, -Y, +Z, -Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// +X (red)
    Right,
    /// -X (orange)
    Left,
    /// +Y (white)
    Up,
    /// -Y (yellow)
    Down,
    /// +Z (green)
    Front,
    /// -Z (blue)
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
    ];

    /// Material-slot index of this face (0..6)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Face::Right => 0,
            Face::Left => 1,
            Face::Up => 2,
            Face::Down => 3,
            Face::Front => 4,
            Face::Back => 5,
        }
    }

    /// The axis this face lies on
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Face::Right | Face::Left => Axis::X,
            Face::Up | Face::Down => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// Sign of this face along its axis (+1 or -1)
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Face::Right | Face::Up | Face::Front => 1,
            Face::Left | Face::Down | Face::Back => -1,
        }
    }

    /// Outward lattice normal of this face
    pub fn lattice_normal(self) -> [i8; 3] {
        let mut n = [0i8; 3];
        n[self.axis().index()] = self.sign();
        n
    }

    /// Outward unit normal of this face
    pub fn normal(self) -> Vec3 {
        self.axis().unit() * self.sign() as f32
    }

    /// Face with the given axis and sign
    pub fn from_axis_sign(axis: Axis, sign: i8) -> Self {
        match (axis, sign >= 0) {
            (Axis::X, true) => Face::Right,
            (Axis::X, false) => Face::Left,
            (Axis::Y, true) => Face::Up,
            (Axis::Y, false) => Face::Down,
            (Axis::Z, true) => Face::Front,
            (Axis::Z, false) => Face::Back,
        }
    }

    /// Face whose normal best matches the given direction
    pub fn from_normal(dir: Vec3) -> Self {
        let abs = dir.abs();
        let axis = if abs.x >= abs.y && abs.x >= abs.z {
            Axis::X
        } else if abs.y >= abs.z {
            Axis::Y
        } else {
            Axis::Z
        };
        let sign = if dir.component(axis.index()) >= 0.0 { 1 } else { -1 };
        Self::from_axis_sign(axis, sign)
    }
}

/// A committed twist: a layer rotated a whole number of quarter turns
///
/// `quarters` is signed; positive turns are right-handed around the positive
/// axis direction. `layer` is the lattice coordinate of the slice (-1, 0, 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Twist {
    pub axis: Axis,
    pub layer: i8,
    pub quarters: i32,
}

impl Twist {
    pub fn new(axis: Axis, layer: i8, quarters: i32) -> Self {
        Self { axis, layer, quarters }
    }
}

/// An in-flight rotation of one slice, applied at render time
///
/// This replaces the invisible proxy mesh the scene would otherwise carry:
/// members of the slice are rotated by [`SliceRotation::rotor`] while the
/// rest of the cube stays put.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceRotation {
    pub axis: Axis,
    pub layer: i8,
    /// Current rotation angle in radians (right-handed around the axis)
    pub angle: f32,
}

impl SliceRotation {
    pub fn new(axis: Axis, layer: i8, angle: f32) -> Self {
        Self { axis, layer, angle }
    }

    /// Whether a cubelet at the given lattice position belongs to this slice
    #[inline]
    pub fn contains(&self, pos: [i8; 3]) -> bool {
        pos[self.axis.index()] == self.layer
    }

    /// The group rotor for the current angle
    pub fn rotor(&self) -> Rotor3 {
        Rotor3::from_axis_angle(self.axis.unit(), self.angle)
    }
}

/// Animates a slice rotation toward the nearest quarter-turn boundary
///
/// Advanced once per frame from the render loop; when the angle reaches its
/// target the caller commits the resulting [`Twist`] (if any) to the cube.
#[derive(Clone, Copy, Debug)]
pub struct TwistAnimation {
    slice: SliceRotation,
    target: f32,
    speed: f32,
}

impl TwistAnimation {
    /// Snap a released drag to the nearest multiple of 90 degrees
    ///
    /// A sub-45-degree drag snaps back to zero and commits nothing.
    pub fn snap(slice: SliceRotation, speed: f32) -> Self {
        let target = (slice.angle / FRAC_PI_2).round() * FRAC_PI_2;
        Self {
            slice,
            target,
            speed: speed.abs().max(0.01),
        }
    }

    /// Animate a full quarter-turn twist from rest
    pub fn quarter_turn(axis: Axis, layer: i8, quarters: i32, speed: f32) -> Self {
        Self {
            slice: SliceRotation::new(axis, layer, 0.0),
            target: quarters as f32 * FRAC_PI_2,
            speed: speed.abs().max(0.01),
        }
    }

    /// Advance the animation; returns true once the target angle is reached
    pub fn advance(&mut self, dt: f32) -> bool {
        let remaining = self.target - self.slice.angle;
        let step = self.speed * dt;
        if remaining.abs() <= step {
            self.slice.angle = self.target;
            true
        } else {
            self.slice.angle += step * remaining.signum();
            false
        }
    }

    /// The current slice rotation for rendering
    pub fn slice(&self) -> &SliceRotation {
        &self.slice
    }

    /// Whether the animation has reached its target
    pub fn is_finished(&self) -> bool {
        self.slice.angle == self.target
    }

    /// The twist to commit once finished (None for a snap back to zero)
    pub fn committed_twist(&self) -> Option<Twist> {
        let quarters = (self.target / FRAC_PI_2).round() as i32;
        if quarters == 0 {
            None
        } else {
            Some(Twist::new(self.slice.axis, self.slice.layer, quarters))
        }
    }
}
