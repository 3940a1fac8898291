//! Application configuration
//!
//! Loaded from `stride.toml`. Every section is optional.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stride_animation::{MotionEnvironment, ParticleConfig};
use stride_core::Size;
use stride_platform::Viewport;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: MotionEnvironment,
    pub viewport: Viewport,
    pub particles: ParticleConfig,
    pub scene: SceneConfig,
}

/// Which presentation targets exist on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub background: bool,
    pub subject: bool,
    pub companion: bool,
    /// Logical size of the particle surface
    pub particle_surface: Size,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: true,
            subject: true,
            companion: true,
            particle_surface: Size::new(300.0, 300.0),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).context("Failed to parse stride configuration")
    }

    /// Load configuration from a TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize stride configuration")
    }

    /// Check every section
    pub fn validate(&self) -> Result<()> {
        self.environment
            .validate()
            .context("Invalid [environment] section")?;
        self.viewport.validate().context("Invalid [viewport] section")?;
        self.particles
            .validate()
            .context("Invalid [particles] section")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [environment]
            coarse_pointer = true

            [viewport]
            width = 390.0
            height = 844.0
            device_pixel_ratio = 3.0

            [particles]
            count = 8
            seed = 3

            [scene]
            companion = false
            "#,
        )
        .unwrap();

        assert!(config.environment.coarse_pointer);
        assert_eq!(config.environment.breakpoint_width, 480.0);
        assert_eq!(config.viewport.device_pixel_ratio, 3.0);
        assert_eq!(config.particles.count, 8);
        assert!(!config.scene.companion);
        assert!(config.scene.subject);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut config = AppConfig::default();
        config.particles.seed = Some(9);
        let text = config.to_toml_string().unwrap();
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_validate_reports_section() {
        let mut config = AppConfig::default();
        config.particles.count = 0;
        let err = config.validate().unwrap_err();
        assert!(format!("{err:#}").contains("[particles]"));
    }
}
