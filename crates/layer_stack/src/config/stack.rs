//! Layer stack settings

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::foundation::math::Vec2;
use crate::layers::ScreenSize;

fn unit() -> Vec2 {
    Vec2::new(1.0, 1.0)
}

/// Parallax parameters applied to a layer
///
/// Both fields default to `(1.0, 1.0)`: the layer tracks the camera exactly
/// and is drawn at native size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerParams {
    /// Multiplier applied to the camera position per axis.
    /// 0 keeps the layer fixed, values above 1 overshoot the camera.
    #[serde(default = "unit")]
    pub scroll_speed: Vec2,
    /// Zoom per axis; above 1 shows less of the world.
    #[serde(default = "unit")]
    pub scale: Vec2,
}

impl LayerParams {
    /// Create parameters from a scroll speed and a scale
    pub fn new(scroll_speed: Vec2, scale: Vec2) -> Self {
        Self { scroll_speed, scale }
    }

    /// Check that the scale is usable for drawing
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale.x > 0.0 && self.scale.y > 0.0 && self.scale.x.is_finite() && self.scale.y.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "layer scale must be positive and finite, got ({}, {})",
                self.scale.x, self.scale.y
            )));
        }
        if !(self.scroll_speed.x.is_finite() && self.scroll_speed.y.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "scroll speed must be finite, got ({}, {})",
                self.scroll_speed.x, self.scroll_speed.y
            )));
        }
        Ok(())
    }
}

impl Default for LayerParams {
    fn default() -> Self {
        Self {
            scroll_speed: unit(),
            scale: unit(),
        }
    }
}

/// Settings for a layer stack and the screen it is drawn to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Target screen size in pixels
    #[serde(default)]
    pub screen: ScreenSize,
    /// Parameters given to every newly added layer
    #[serde(default)]
    pub layer_defaults: LayerParams,
}

impl StackConfig {
    /// Check screen size and layer defaults
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen size must be non-zero, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        self.layer_defaults.validate()
    }
}

impl Config for StackConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_params_default() {
        let params = LayerParams::default();

        assert_eq!(params.scroll_speed, Vec2::new(1.0, 1.0));
        assert_eq!(params.scale, Vec2::new(1.0, 1.0));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_stack_config_from_toml() {
        let text = r#"
            [screen]
            width = 320
            height = 240

            [layer_defaults]
            scroll_speed = [0.5, 0.25]
        "#;

        let config = StackConfig::parse("stack.toml", text).unwrap();

        assert_eq!(config.screen, ScreenSize::new(320, 240));
        assert_eq!(config.layer_defaults.scroll_speed, Vec2::new(0.5, 0.25));
        assert_eq!(config.layer_defaults.scale, Vec2::new(1.0, 1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_stack_config_from_ron() {
        let text = "(screen: (width: 640, height: 480), layer_defaults: (scale: (2.0, 2.0)))";

        let config = StackConfig::parse("stack.ron", text).unwrap();

        assert_eq!(config.screen, ScreenSize::new(640, 480));
        assert_eq!(config.layer_defaults.scale, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_unsupported_format() {
        let result = StackConfig::parse("stack.json", "{}");

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = StackConfig::default();
        config.screen = ScreenSize::new(0, 600);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.screen = ScreenSize::new(800, 600);
        config.layer_defaults.scale = Vec2::new(0.0, 1.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.layer_defaults.scale = Vec2::new(1.0, 1.0);
        config.layer_defaults.scroll_speed = Vec2::new(f32::NAN, 1.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!("layer_stack_config_{}.toml", std::process::id()));
        let path = path.to_str().unwrap().to_string();
        let config = StackConfig {
            screen: ScreenSize::new(1024, 768),
            layer_defaults: LayerParams::new(Vec2::new(0.5, 0.5), Vec2::new(2.0, 2.0)),
        };

        config.save_to_file(&path).unwrap();
        let loaded = StackConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }
}
