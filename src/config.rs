//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`RBK_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Cube layout configuration
    #[serde(default)]
    pub cube: CubeConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`RBK_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // RBK_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("RBK_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Rubik".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Starting distance from the cube
    pub distance: f32,
    /// Closest dolly distance
    pub min_distance: f32,
    /// Farthest dolly distance
    pub max_distance: f32,
    /// Starting yaw in degrees
    pub yaw: f32,
    /// Starting pitch in degrees
    pub pitch: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 50.0,
            near: 0.1,
            far: 1000.0,
            distance: 8.0,
            min_distance: 7.0,
            max_distance: 10.0,
            yaw: -25.0,
            pitch: 20.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Orbit sensitivity (radians per pixel)
    pub rotate_sensitivity: f32,
    /// Dolly sensitivity (units per scroll line)
    pub dolly_sensitivity: f32,
    /// Twist sensitivity (radians per world unit of drag)
    pub twist_sensitivity: f32,
    /// Drag distance before a twist axis locks (world units)
    pub lock_threshold: f32,
    /// Orbit damping half-life in seconds (lower = more responsive)
    pub damping_half_life: f32,
    /// Enable orbit damping by default
    pub damping_enabled: bool,
    /// Twist snap speed in radians per second
    pub snap_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            rotate_sensitivity: 0.005,
            dolly_sensitivity: 0.5,
            twist_sensitivity: 1.2,
            lock_threshold: 0.05,
            damping_half_life: 0.05,
            damping_enabled: true,
            snap_speed: 8.0,
        }
    }
}

/// Cube layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubeConfig {
    /// Distance between cubelet centers
    pub spacing: f32,
    /// Cubelet box size; below spacing leaves a visible seam
    pub cubelet_size: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            cubelet_size: 0.96,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Ambient light strength
    pub ambient_strength: f32,
    /// Headlight strength (bright light down the view axis)
    pub headlight_strength: f32,
    /// Corner fill light strength
    pub fill_strength: f32,
    /// Edge outline color [r, g, b, a]
    pub edge_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 0.0],
            ambient_strength: 0.05,
            headlight_strength: 0.73,
            fill_strength: 0.19,
            edge_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Default log filter (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log every committed twist at info level
    pub log_twists: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_twists: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
