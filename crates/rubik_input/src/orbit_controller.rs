//! Orbit controller for camera input
//!
//! Controls:
//! - Right-click + drag: orbit around the cube
//! - Mouse wheel: dolly in/out (clamped by the camera)
//!
//! Left-button input never reaches this controller; it belongs to the twist
//! handler.

use winit::event::{ElementState, MouseButton};

/// Trait for orbit camera control
///
/// Allows the controller to work with different camera implementations.
pub trait OrbitControl {
    /// Add to the yaw and pitch angles (radians)
    fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32);
    /// Move toward (negative) or away from (positive) the target
    fn dolly(&mut self, delta: f32);
    /// Return to the configured starting view
    fn reset(&mut self);
}

/// Accumulates pointer input and applies it to an orbit camera with damping
pub struct OrbitController {
    // Mouse state
    rotating: bool, // Right button held
    pending_yaw: f32,
    pending_pitch: f32,
    pending_dolly: f32,

    // Damping state
    smooth_yaw: f32,
    smooth_pitch: f32,

    // Configuration
    pub rotate_sensitivity: f32,
    pub dolly_sensitivity: f32,
    pub damping_half_life: f32, // Exponential smoothing half-life in seconds
    pub damping_enabled: bool,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            rotating: false,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_dolly: 0.0,

            smooth_yaw: 0.0,
            smooth_pitch: 0.0,

            rotate_sensitivity: 0.005,
            dolly_sensitivity: 0.5,
            damping_half_life: 0.05,
            damping_enabled: true,
        }
    }

    /// Process mouse button input; only the right button is claimed here
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Right {
            self.rotating = state == ElementState::Pressed;
        }
    }

    /// Process raw mouse movement
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.rotating {
            self.pending_yaw += delta_x as f32;
            self.pending_pitch += delta_y as f32;
        }
    }

    /// Process scroll wheel input (positive = toward the cube)
    pub fn process_scroll(&mut self, delta: f32) {
        self.pending_dolly += delta;
    }

    /// Whether the right button is currently held
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Update the camera from the accumulated input
    pub fn update<C: OrbitControl>(&mut self, camera: &mut C, dt: f32) {
        // Exponential smoothing of the rotation input
        // factor = 2^(-dt / half_life); smaller half_life = faster response
        let (yaw_input, pitch_input) = if self.damping_enabled && dt > 0.0 {
            let smooth_factor = 2.0f32.powf(-dt / self.damping_half_life);
            self.smooth_yaw =
                self.smooth_yaw * smooth_factor + self.pending_yaw * (1.0 - smooth_factor);
            self.smooth_pitch =
                self.smooth_pitch * smooth_factor + self.pending_pitch * (1.0 - smooth_factor);
            (self.smooth_yaw, self.smooth_pitch)
        } else {
            (self.pending_yaw, self.pending_pitch)
        };

        // Dragging right orbits the camera left around the target, so the
        // scene appears to follow the pointer; dragging down lowers the eye.
        if yaw_input != 0.0 || pitch_input != 0.0 {
            camera.orbit(
                -yaw_input * self.rotate_sensitivity,
                -pitch_input * self.rotate_sensitivity,
            );
        }

        if self.pending_dolly != 0.0 {
            camera.dolly(-self.pending_dolly * self.dolly_sensitivity);
        }

        // Reset pending input
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_dolly = 0.0;
    }

    /// Toggle damping on/off
    pub fn toggle_damping(&mut self) -> bool {
        self.damping_enabled = !self.damping_enabled;
        self.smooth_yaw = 0.0;
        self.smooth_pitch = 0.0;
        self.damping_enabled
    }

    /// Builder: set rotation sensitivity
    pub fn with_rotate_sensitivity(mut self, sensitivity: f32) -> Self {
        self.rotate_sensitivity = sensitivity;
        self
    }

    /// Builder: set dolly sensitivity
    pub fn with_dolly_sensitivity(mut self, sensitivity: f32) -> Self {
        self.dolly_sensitivity = sensitivity;
        self
    }

    /// Builder: set damping half-life (lower = more responsive)
    pub fn with_damping_half_life(mut self, half_life: f32) -> Self {
        self.damping_half_life = half_life;
        self
    }

    /// Builder: enable or disable damping
    pub fn with_damping(mut self, enabled: bool) -> Self {
        self.damping_enabled = enabled;
        self
    }
}
