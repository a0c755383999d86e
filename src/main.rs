//! Rubik - Interactive 3D Rubik's cube viewer
//!
//! Scene assembly, orbit controls, and the render loop. Twist gestures are
//! handled by the controllers in `rubik_input` and animated here each frame.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use rubik_core::{SliceRotation, TwistAnimation};
use rubik_input::{OrbitControl, OrbitController, TwistController};
use rubik_math::Vec3;
use rubik_render::{CubeGeometry, OrbitCamera};

use rubik::config::AppConfig;
use rubik::input::{InputAction, InputMapper};
use rubik::scene::{CubeScene, CubeSceneBuilder};
use rubik::systems::{RenderError, RenderSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    /// The cube and its visual layout parameters
    scene: CubeScene,
    /// Cached geometry (rebuilt when the cube changes or a twist is live)
    geometry: CubeGeometry,
    camera: OrbitCamera,
    orbit: OrbitController,
    twist: TwistController,
    /// Snap animation for a released twist drag
    animation: Option<TwistAnimation>,
    /// Whether a slice rotation was rendered last frame
    slice_was_active: bool,
    cursor: Option<winit::dpi::PhysicalPosition<f64>>,
    last_frame: std::time::Instant,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let scene = CubeSceneBuilder::from_config(&config.cube).build();

        let camera = OrbitCamera::new()
            .with_projection(
                config.camera.fov.to_radians(),
                config.camera.near,
                config.camera.far,
            )
            .with_distance_range(config.camera.min_distance, config.camera.max_distance)
            .with_distance(config.camera.distance)
            .with_angles(
                config.camera.yaw.to_radians(),
                config.camera.pitch.to_radians(),
            );

        let orbit = OrbitController::new()
            .with_rotate_sensitivity(config.input.rotate_sensitivity)
            .with_dolly_sensitivity(config.input.dolly_sensitivity)
            .with_damping_half_life(config.input.damping_half_life)
            .with_damping(config.input.damping_enabled);

        let twist = TwistController::new()
            .with_sensitivity(config.input.twist_sensitivity)
            .with_lock_threshold(config.input.lock_threshold);

        let geometry = CubeGeometry::from_cube(
            &scene.cube,
            None,
            &scene.palette,
            scene.spacing,
            scene.cubelet_size,
        );

        log::info!(
            "Cube ready: {} cubelets, {} face vertices",
            scene.cube.cubelet_count(),
            geometry.vertex_count()
        );

        Self {
            config,
            window: None,
            render: None,
            scene,
            geometry,
            camera,
            orbit,
            twist,
            animation: None,
            slice_was_active: false,
            cursor: None,
            last_frame: std::time::Instant::now(),
        }
    }

    /// The slice rotation currently in flight, from drag or snap animation
    fn active_slice(&self) -> Option<SliceRotation> {
        self.twist
            .active_slice()
            .or_else(|| self.animation.as_ref().map(|a| *a.slice()))
    }

    /// Convert the tracked cursor position to NDC
    fn cursor_ndc(&self) -> Option<(f32, f32)> {
        let cursor = self.cursor?;
        let (width, height) = self.render.as_ref()?.size();
        if width == 0 || height == 0 {
            return None;
        }
        Some((
            (2.0 * cursor.x as f32 / width as f32) - 1.0,
            1.0 - (2.0 * cursor.y as f32 / height as f32),
        ))
    }

    /// Start a twist drag at the current cursor position
    fn begin_twist(&mut self) {
        // Never grab a slice while a snap is still in flight
        if self.animation.is_some() {
            return;
        }
        let Some((ndc_x, ndc_y)) = self.cursor_ndc() else {
            return;
        };
        let aspect = self
            .render
            .as_ref()
            .map(|r| {
                let (w, h) = r.size();
                w as f32 / h.max(1) as f32
            })
            .unwrap_or(1.0);

        let ray = self.camera.pointer_ray(ndc_x, ndc_y, aspect);
        if self.twist.begin(
            &ray,
            &self.scene.cube,
            self.scene.spacing,
            self.scene.cubelet_size,
        ) {
            log::debug!("Twist drag started");
        }
    }

    /// Feed cursor motion to the twist drag as a camera-plane world delta
    fn drag_twist(&mut self, dx: f64, dy: f64) {
        if !self.twist.is_dragging() {
            return;
        }
        let height = self
            .render
            .as_ref()
            .map(|r| r.size().1 as f32)
            .unwrap_or(720.0);
        let scale = self.camera.world_units_per_pixel(height);
        let delta: Vec3 =
            (self.camera.right() * dx as f32 - self.camera.up() * dy as f32) * scale;
        self.twist.drag(delta);
    }

    /// Release the twist drag into a snap animation
    fn release_twist(&mut self) {
        if let Some(slice) = self.twist.release() {
            self.animation = Some(TwistAnimation::snap(slice, self.config.input.snap_speed));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = WindowSystem::create(event_loop, &self.config.window)
                .expect("Failed to create window");

            let mut render = RenderSystem::new(
                Arc::clone(window.window()),
                self.config.rendering.clone(),
                self.config.window.vsync,
            );
            render.upload_geometry(&self.geometry);

            self.window = Some(window);
            self.render = Some(render);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => {
                            event_loop.exit();
                        }
                        Some(InputAction::ResetView) => {
                            self.camera.reset();
                            log::info!("Camera reset to starting view");
                        }
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        Some(InputAction::ToggleDamping) => {
                            let enabled = self.orbit.toggle_damping();
                            log::info!("Orbit damping: {}", if enabled { "ON" } else { "OFF" });
                        }
                        None => {}
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.orbit.process_mouse_button(button, state);
                if button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => self.begin_twist(),
                        ElementState::Released => self.release_twist(),
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(previous) = self.cursor {
                    self.drag_twist(position.x - previous.x, position.y - previous.y);
                }
                self.cursor = Some(position);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => y,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.orbit.process_scroll(scroll);
            }

            WindowEvent::RedrawRequested => {
                // Calculate delta time, capped to avoid jumps after focus loss
                let now = std::time::Instant::now();
                let dt = (now - self.last_frame).as_secs_f32().min(1.0 / 30.0);
                self.last_frame = now;

                // 1. Apply accumulated orbit input with damping
                self.orbit.update(&mut self.camera, dt);

                // 2. Advance the snap animation and commit a finished twist
                if let Some(mut animation) = self.animation.take() {
                    if animation.advance(dt) {
                        if let Some(twist) = animation.committed_twist() {
                            self.scene.cube.apply_twist(&twist);
                            if self.config.debug.log_twists {
                                log::info!(
                                    "Twist committed: {:?} layer {} x{}",
                                    twist.axis,
                                    twist.layer,
                                    twist.quarters
                                );
                            }
                        }
                    } else {
                        self.animation = Some(animation);
                    }
                }

                // 3. Rebuild geometry while a slice is rotating, when the cube
                //    permuted, and once more after a rotation ends
                let slice = self.active_slice();
                if slice.is_some() || self.scene.cube.has_dirty() || self.slice_was_active {
                    self.geometry = CubeGeometry::from_cube(
                        &self.scene.cube,
                        slice.as_ref(),
                        &self.scene.palette,
                        self.scene.spacing,
                        self.scene.cubelet_size,
                    );
                    if let Some(render) = &mut self.render {
                        render.upload_geometry(&self.geometry);
                    }
                    self.scene.cube.clear_all_dirty();
                }
                self.slice_was_active = slice.is_some();

                // 4. Draw
                if let Some(render) = &mut self.render {
                    match render.render_frame(&self.camera) {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => {
                            let (width, height) = render.size();
                            render.resize(width, height);
                        }
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => {
                            log::warn!("Render error: {}", e);
                        }
                    }
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.orbit.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() {
    // Load configuration before logging so the default filter can come from it
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.debug.log_level),
    )
    .init();
    log::info!("Starting Rubik");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
