//! Configuration management for the arm hold test application.
//!
//! Only ambient concerns are configurable: the rendering surface the
//! overlay is sized to, and replay pacing for recorded streams. The test
//! parameters themselves (target angle, tolerance, hold duration) are
//! fixed constants in [`crate::constants`].

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering surface configuration
    pub surface: SurfaceConfig,

    /// Recorded stream playback configuration
    pub playback: PlaybackConfig,
}

/// Rendering surface dimensions, matching the video preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in pixels
    pub width: u32,

    /// Surface height in pixels
    pub height: u32,
}

/// Playback parameters for recorded landmark streams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Frames per second to pace a replayed stream at
    pub fps: u32,

    /// Process the stream as fast as possible, ignoring `fps`
    pub unpaced: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_SURFACE_WIDTH,
            height: crate::constants::DEFAULT_SURFACE_HEIGHT,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { fps: 30, unpaced: false }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(Error::ConfigError(
                "Surface dimensions must be greater than 0".to_string(),
            ));
        }
        if self.playback.fps == 0 {
            return Err(Error::ConfigError("Playback FPS must be greater than 0".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Arm Hold Test Configuration

# Rendering surface, sized to the video preview
surface:
  width: 640
  height: 480

# Recorded stream playback
playback:
  fps: 30
  unpaced: false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.surface.width, 640);
        assert_eq!(config.surface.height, 480);
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.playback.fps, 30);
    }

    #[test]
    fn test_invalid_surface_rejected() {
        let mut config = Config::default();
        config.surface.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_fps_rejected() {
        let mut config = Config::default();
        config.playback.fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("surface:\n  width: 1280\n  height: 720\n").unwrap();
        assert_eq!(config.surface.width, 1280);
        assert_eq!(config.playback.fps, 30);
    }
}
