//! Twist controller: pointer drags on the cube become slice rotations
//!
//! The event contract mirrors the browser original: pointer-down picks a
//! cubelet face, pointer-move drives the live rotation, pointer-up hands the
//! final angle back for snapping. The application feeds camera-plane drag
//! vectors in world units; this controller decides the twist axis, layer, and
//! signed angle.

use rubik_core::{Axis, Cube, CubeletHandle, Face, SliceRotation};
use rubik_math::{Ray, Vec3};

/// A successful pick: which cubelet was hit, on which world face
#[derive(Clone, Copy, Debug)]
pub struct PickResult {
    pub handle: CubeletHandle,
    pub face: Face,
    /// Distance along the ray to the hit
    pub t: f32,
}

/// Cast a ray against every cubelet box and return the nearest hit
///
/// Cubelet orientations are always whole quarter turns, so resting boxes stay
/// axis-aligned and a slab test per cubelet suffices.
pub fn pick_cubelet(
    ray: &Ray,
    cube: &Cube,
    spacing: f32,
    cubelet_size: f32,
) -> Option<PickResult> {
    let half = cubelet_size * 0.5;
    let mut nearest: Option<PickResult> = None;

    for (handle, cubelet) in cube.iter_with_handles() {
        let center = Vec3::new(
            cubelet.pos[0] as f32 * spacing,
            cubelet.pos[1] as f32 * spacing,
            cubelet.pos[2] as f32 * spacing,
        );
        let extent = Vec3::new(half, half, half);

        if let Some(hit) = ray.intersect_aabb(center - extent, center + extent) {
            if nearest.map_or(true, |n| hit.t < n.t) {
                nearest = Some(PickResult {
                    handle,
                    face: Face::from_normal(hit.normal),
                    t: hit.t,
                });
            }
        }
    }

    nearest
}

/// Drag progress of the active twist gesture
#[derive(Clone, Copy, Debug)]
enum DragState {
    Idle,
    /// Face grabbed, twist axis not yet decided
    Pending {
        pos: [i8; 3],
        normal: Vec3,
        accum: Vec3,
    },
    /// Axis locked; angle follows drag travel along the motion direction
    Locked {
        slice: SliceRotation,
        motion: Vec3,
        travel: f32,
    },
}

/// Turns pointer drags into slice rotations
pub struct TwistController {
    state: DragState,

    /// Radians of twist per world unit of drag
    pub sensitivity: f32,
    /// Drag distance (world units) before the twist axis locks
    pub lock_threshold: f32,
}

impl Default for TwistController {
    fn default() -> Self {
        Self::new()
    }
}

impl TwistController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            sensitivity: 1.2,
            lock_threshold: 0.05,
        }
    }

    /// Builder: set twist sensitivity (radians per world unit)
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Builder: set the axis-lock threshold in world units
    pub fn with_lock_threshold(mut self, threshold: f32) -> Self {
        self.lock_threshold = threshold;
        self
    }

    /// Start a drag by picking the cubelet under the pointer
    ///
    /// Returns true when a cubelet face was grabbed.
    pub fn begin(&mut self, ray: &Ray, cube: &Cube, spacing: f32, cubelet_size: f32) -> bool {
        match pick_cubelet(ray, cube, spacing, cubelet_size) {
            Some(pick) => {
                let pos = cube
                    .get(pick.handle)
                    .map(|c| c.pos)
                    .unwrap_or([0, 0, 0]);
                self.state = DragState::Pending {
                    pos,
                    normal: pick.face.normal(),
                    accum: Vec3::ZERO,
                };
                true
            }
            None => {
                self.state = DragState::Idle;
                false
            }
        }
    }

    /// Feed a camera-plane drag delta in world units
    ///
    /// Returns the live slice rotation once the axis has locked.
    pub fn drag(&mut self, delta: Vec3) -> Option<SliceRotation> {
        match self.state {
            DragState::Idle => None,

            DragState::Pending { pos, normal, accum } => {
                let accum = accum + delta;
                if accum.length() < self.lock_threshold {
                    self.state = DragState::Pending { pos, normal, accum };
                    return None;
                }

                // Of the two axes tangent to the grabbed face, lock the one
                // whose sticker-motion direction best matches the drag.
                let face_axis = Face::from_normal(normal).axis();
                let mut best: Option<(Axis, Vec3, f32)> = None;
                for axis in face_axis.others() {
                    let motion = axis.unit().cross(normal);
                    let score = accum.dot(motion);
                    if best.map_or(true, |(_, _, s)| score.abs() > s.abs()) {
                        best = Some((axis, motion, score));
                    }
                }

                let (axis, motion, travel) = best?;
                let layer = pos[axis.index()];
                let slice = SliceRotation::new(axis, layer, travel * self.sensitivity);
                self.state = DragState::Locked {
                    slice,
                    motion,
                    travel,
                };
                Some(slice)
            }

            DragState::Locked {
                mut slice,
                motion,
                travel,
            } => {
                let travel = travel + delta.dot(motion);
                slice.angle = travel * self.sensitivity;
                self.state = DragState::Locked {
                    slice,
                    motion,
                    travel,
                };
                Some(slice)
            }
        }
    }

    /// Finish the drag, returning the rotation to snap (None if never locked)
    pub fn release(&mut self) -> Option<SliceRotation> {
        let result = match self.state {
            DragState::Locked { slice, .. } => Some(slice),
            _ => None,
        };
        self.state = DragState::Idle;
        result
    }

    /// Abandon the drag without producing a rotation
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Whether a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// The live slice rotation, if the axis has locked
    pub fn active_slice(&self) -> Option<SliceRotation> {
        match self.state {
            DragState::Locked { slice, .. } => Some(slice),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACING: f32 = 1.0;
    const SIZE: f32 = 0.96;

    fn front_ray(x: f32, y: f32) -> Ray {
        Ray::new(Vec3::new(x, y, 10.0), -Vec3::Z)
    }

    #[test]
    fn test_pick_front_center() {
        let cube = Cube::solved();
        let pick = pick_cubelet(&front_ray(0.0, 0.0), &cube, SPACING, SIZE).unwrap();
        assert_eq!(pick.face, Face::Front);
        assert_eq!(cube.get(pick.handle).unwrap().pos, [0, 0, 1]);
    }

    #[test]
    fn test_pick_nearest_of_stacked_boxes() {
        let cube = Cube::solved();
        // The ray passes through (1,1,1), (1,1,0) and (1,1,-1); the front
        // corner must win.
        let pick = pick_cubelet(&front_ray(1.0, 1.0), &cube, SPACING, SIZE).unwrap();
        assert_eq!(cube.get(pick.handle).unwrap().pos, [1, 1, 1]);
        assert_eq!(pick.face, Face::Front);
    }

    #[test]
    fn test_pick_side_face() {
        let cube = Cube::solved();
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), -Vec3::X);
        let pick = pick_cubelet(&ray, &cube, SPACING, SIZE).unwrap();
        assert_eq!(pick.face, Face::Right);
        assert_eq!(cube.get(pick.handle).unwrap().pos, [1, 0, 0]);
    }

    #[test]
    fn test_pick_miss() {
        let cube = Cube::solved();
        assert!(pick_cubelet(&front_ray(5.0, 5.0), &cube, SPACING, SIZE).is_none());
    }

    #[test]
    fn test_begin_requires_hit() {
        let cube = Cube::solved();
        let mut controller = TwistController::new();

        assert!(!controller.begin(&front_ray(5.0, 5.0), &cube, SPACING, SIZE));
        assert!(!controller.is_dragging());

        assert!(controller.begin(&front_ray(0.0, 0.0), &cube, SPACING, SIZE));
        assert!(controller.is_dragging());
    }

    #[test]
    fn test_horizontal_drag_on_front_locks_y_axis() {
        let cube = Cube::solved();
        let mut controller = TwistController::new();
        controller.begin(&front_ray(0.0, 1.0), &cube, SPACING, SIZE);

        // Drag right across the up-front edge piece
        let slice = controller.drag(Vec3::new(0.3, 0.0, 0.0)).unwrap();
        assert_eq!(slice.axis, Axis::Y);
        assert_eq!(slice.layer, 1);
        // Right-handed turn about +Y carries front stickers toward +X
        assert!(slice.angle > 0.0);
    }

    #[test]
    fn test_vertical_drag_on_front_locks_x_axis() {
        let cube = Cube::solved();
        let mut controller = TwistController::new();
        controller.begin(&front_ray(1.0, 0.0), &cube, SPACING, SIZE);

        // Drag up on the right-front edge piece
        let slice = controller.drag(Vec3::new(0.0, 0.3, 0.0)).unwrap();
        assert_eq!(slice.axis, Axis::X);
        assert_eq!(slice.layer, 1);
        // Lifting the front face is a negative turn about +X
        assert!(slice.angle < 0.0);
    }

    #[test]
    fn test_sub_threshold_drag_stays_pending() {
        let cube = Cube::solved();
        let mut controller = TwistController::new();
        controller.begin(&front_ray(0.0, 0.0), &cube, SPACING, SIZE);

        assert!(controller.drag(Vec3::new(0.01, 0.0, 0.0)).is_none());
        assert!(controller.active_slice().is_none());
        assert!(controller.release().is_none());
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_drag_accumulates_angle() {
        let cube = Cube::solved();
        let mut controller = TwistController::new();
        controller.begin(&front_ray(0.0, -1.0), &cube, SPACING, SIZE);

        let first = controller.drag(Vec3::new(0.2, 0.0, 0.0)).unwrap();
        let second = controller.drag(Vec3::new(0.2, 0.0, 0.0)).unwrap();
        assert_eq!(first.axis, second.axis);
        assert!(second.angle > first.angle);

        let released = controller.release().unwrap();
        assert_eq!(released.angle, second.angle);
    }

    #[test]
    fn test_axis_stays_locked_against_later_motion() {
        let cube = Cube::solved();
        let mut controller = TwistController::new();
        controller.begin(&front_ray(0.0, 0.0), &cube, SPACING, SIZE);

        let locked = controller.drag(Vec3::new(0.3, 0.0, 0.0)).unwrap();
        // A later vertical move must not switch the axis
        let after = controller.drag(Vec3::new(0.0, 0.5, 0.0)).unwrap();
        assert_eq!(after.axis, locked.axis);
        assert_eq!(after.layer, locked.layer);
    }

    #[test]
    fn test_cancel_discards_gesture() {
        let cube = Cube::solved();
        let mut controller = TwistController::new();
        controller.begin(&front_ray(0.0, 0.0), &cube, SPACING, SIZE);
        controller.drag(Vec3::new(0.3, 0.0, 0.0));
        controller.cancel();

        assert!(!controller.is_dragging());
        assert!(controller.release().is_none());
    }
}
