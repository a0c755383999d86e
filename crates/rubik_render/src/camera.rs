//! Orbit camera circling the cube
//!
//! The camera looks at a fixed target (the cube center) from a yaw/pitch/
//! distance triple. Distance is clamped to a configured range, pitch stays
//! shy of the poles. The camera also unprojects pointer positions into
//! world-space rays for picking.

use rubik_input::OrbitControl;
use rubik_math::{mat4, Mat4, Ray, Vec3};

/// Pitch limit just short of the poles, in radians
const PITCH_LIMIT: f32 = 1.55;

/// Orbit camera for viewing the cube
pub struct OrbitCamera {
    /// Point the camera orbits and looks at
    pub target: Vec3,
    /// Rotation around the Y axis (radians)
    pub yaw: f32,
    /// Elevation above the XZ plane (radians)
    pub pitch: f32,
    /// Distance from the target
    pub distance: f32,
    /// Dolly range
    pub min_distance: f32,
    pub max_distance: f32,
    /// Vertical field of view (radians)
    pub fov: f32,
    pub near: f32,
    pub far: f32,

    // Starting view for reset
    start_yaw: f32,
    start_pitch: f32,
    start_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Create a camera with the default framing
    pub fn new() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: 8.0,
            min_distance: 7.0,
            max_distance: 10.0,
            fov: 50.0f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            start_yaw: 0.0,
            start_pitch: 0.0,
            start_distance: 8.0,
        }
    }

    /// Builder: set the starting yaw and pitch (radians)
    pub fn with_angles(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.start_yaw = self.yaw;
        self.start_pitch = self.pitch;
        self
    }

    /// Builder: set the starting distance (clamped to the dolly range)
    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance.clamp(self.min_distance, self.max_distance);
        self.start_distance = self.distance;
        self
    }

    /// Builder: set the dolly range
    pub fn with_distance_range(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self.distance = self.distance.clamp(min, max);
        self.start_distance = self.distance;
        self
    }

    /// Builder: set the projection parameters (fov in radians)
    pub fn with_projection(mut self, fov: f32, near: f32, far: f32) -> Self {
        self.fov = fov;
        self.near = near;
        self.far = far;
        self
    }

    /// Eye position in world space
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(
                self.distance * cos_pitch * sin_yaw,
                self.distance * sin_pitch,
                self.distance * cos_pitch * cos_yaw,
            )
    }

    /// Unit vector from the eye toward the target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye()).normalized()
    }

    /// Camera-right unit vector
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalized()
    }

    /// Camera-up unit vector
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// View matrix looking from the eye at the target
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye(), self.target, Vec3::Y)
    }

    /// Projection matrix for the given aspect ratio
    pub fn proj_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov, aspect, self.near, self.far)
    }

    /// World-space ray through a pointer position in NDC ([-1, 1] each way)
    pub fn pointer_ray(&self, ndc_x: f32, ndc_y: f32, aspect: f32) -> Ray {
        let half_height = (self.fov * 0.5).tan();
        let dir = self.forward()
            + self.right() * (ndc_x * half_height * aspect)
            + self.up() * (ndc_y * half_height);
        Ray::new(self.eye(), dir)
    }

    /// World units covered by one vertical pixel at the target's depth
    pub fn world_units_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * self.distance * (self.fov * 0.5).tan() / viewport_height.max(1.0)
    }
}

impl OrbitControl for OrbitCamera {
    fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    fn dolly(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(self.min_distance, self.max_distance);
    }

    fn reset(&mut self) {
        self.yaw = self.start_yaw;
        self.pitch = self.start_pitch;
        self.distance = self.start_distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    #[test]
    fn test_default_eye_on_z_axis() {
        let cam = OrbitCamera::new();
        assert!(vec_approx_eq(cam.eye(), Vec3::new(0.0, 0.0, 8.0)));
        assert!(vec_approx_eq(cam.forward(), -Vec3::Z));
    }

    #[test]
    fn test_pitch_raises_eye() {
        let cam = OrbitCamera::new().with_angles(0.0, 0.5);
        assert!(cam.eye().y > 0.0);
    }

    #[test]
    fn test_orbit_clamps_pitch() {
        let mut cam = OrbitCamera::new();
        cam.orbit(0.0, 10.0);
        assert!(cam.pitch <= PITCH_LIMIT);
        cam.orbit(0.0, -20.0);
        assert!(cam.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn test_dolly_clamps_distance() {
        let mut cam = OrbitCamera::new().with_distance_range(7.0, 10.0);
        cam.dolly(-100.0);
        assert_eq!(cam.distance, 7.0);
        cam.dolly(100.0);
        assert_eq!(cam.distance, 10.0);
    }

    #[test]
    fn test_reset_restores_start_view() {
        let mut cam = OrbitCamera::new()
            .with_angles(-0.4, 0.3)
            .with_distance(8.0);
        cam.orbit(1.0, 0.5);
        cam.dolly(1.5);
        cam.reset();
        assert!((cam.yaw - -0.4).abs() < EPSILON);
        assert!((cam.pitch - 0.3).abs() < EPSILON);
        assert_eq!(cam.distance, 8.0);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let cam = OrbitCamera::new().with_angles(-0.4, 0.3);
        let ray = cam.pointer_ray(0.0, 0.0, 16.0 / 9.0);
        assert!(vec_approx_eq(ray.origin, cam.eye()));
        assert!(vec_approx_eq(ray.dir, cam.forward()));
    }

    #[test]
    fn test_center_ray_hits_cube() {
        let cam = OrbitCamera::new().with_angles(-25.0f32.to_radians(), 20.0f32.to_radians());
        let ray = cam.pointer_ray(0.0, 0.0, 1.5);
        let hit = ray.intersect_aabb(
            Vec3::new(-1.5, -1.5, -1.5),
            Vec3::new(1.5, 1.5, 1.5),
        );
        assert!(hit.is_some());
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let cam = OrbitCamera::new().with_angles(1.1, -0.7);
        let f = cam.forward();
        let r = cam.right();
        let u = cam.up();
        assert!(f.dot(r).abs() < EPSILON);
        assert!(f.dot(u).abs() < EPSILON);
        assert!(r.dot(u).abs() < EPSILON);
        assert!((r.length() - 1.0).abs() < EPSILON);
    }
}
