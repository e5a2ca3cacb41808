//! Core resources - board presentation settings
//!
//! [`BoardSettings`] is loaded once at startup (see
//! [`super::settings_persistence`]) and read by the rendering plugins.

use super::error::{CoreError, CoreResult};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// User-tunable presentation settings
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct BoardSettings {
    /// Edge length of one tile in logical pixels
    pub tile_size: f32,

    /// Board color scheme
    pub theme: BoardTheme,

    /// How much the valid-drop highlight darkens a tile (0.0 to 1.0)
    pub highlight_strength: f32,

    /// Rate at which released pieces ease back to their tile, per second
    pub snap_speed: f32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            tile_size: 96.0,
            theme: BoardTheme::Wood,
            highlight_strength: 0.2,
            snap_speed: 14.0,
        }
    }
}

impl BoardSettings {
    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> CoreResult<()> {
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(CoreError::InvalidSettings {
                message: format!("tile_size must be positive, got {}", self.tile_size),
            });
        }
        if !(0.0..=1.0).contains(&self.highlight_strength) {
            return Err(CoreError::InvalidSettings {
                message: format!(
                    "highlight_strength must be within 0..=1, got {}",
                    self.highlight_strength
                ),
            });
        }
        if !self.snap_speed.is_finite() || self.snap_speed <= 0.0 {
            return Err(CoreError::InvalidSettings {
                message: format!("snap_speed must be positive, got {}", self.snap_speed),
            });
        }
        Ok(())
    }

    /// Full board edge in logical pixels
    pub fn board_size(&self) -> f32 {
        self.tile_size * 8.0
    }
}

/// Board visual themes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BoardTheme {
    Classic,
    Modern,
    #[default]
    Wood,
    Marble,
}

impl BoardTheme {
    pub fn name(&self) -> &'static str {
        match self {
            BoardTheme::Classic => "Classic",
            BoardTheme::Modern => "Modern",
            BoardTheme::Wood => "Wood",
            BoardTheme::Marble => "Marble",
        }
    }

    /// Returns (light_tile_color, dark_tile_color)
    pub fn colors(&self) -> (Color, Color) {
        match self {
            BoardTheme::Classic => (
                Color::srgb(0.93, 0.93, 0.82), // Cream
                Color::srgb(0.46, 0.59, 0.34), // Green
            ),
            BoardTheme::Modern => (
                Color::srgb(0.9, 0.9, 0.9), // Light gray
                Color::srgb(0.3, 0.3, 0.3), // Dark gray
            ),
            BoardTheme::Wood => (
                Color::srgb(0.85, 0.70, 0.55), // Light wood
                Color::srgb(0.55, 0.35, 0.20), // Dark wood
            ),
            BoardTheme::Marble => (
                Color::srgb(0.95, 0.95, 0.95), // White marble
                Color::srgb(0.15, 0.15, 0.15), // Black marble
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(BoardSettings::default().validate().is_ok());
        assert_eq!(BoardSettings::default().theme, BoardTheme::Wood);
    }

    #[test]
    fn test_validate_rejects_bad_tile_size() {
        for size in [0.0, -4.0, f32::NAN, f32::INFINITY] {
            let settings = BoardSettings {
                tile_size: size,
                ..default()
            };
            assert!(settings.validate().is_err(), "tile_size {} accepted", size);
        }
    }

    #[test]
    fn test_validate_rejects_bad_highlight() {
        let settings = BoardSettings {
            highlight_strength: 1.5,
            ..default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings: BoardSettings =
            serde_json::from_str(r#"{ "theme": "marble" }"#).expect("valid json");
        assert_eq!(settings.theme, BoardTheme::Marble);
        assert_eq!(settings.tile_size, BoardSettings::default().tile_size);
    }

    #[test]
    fn test_board_size() {
        let settings = BoardSettings {
            tile_size: 50.0,
            ..default()
        };
        assert_eq!(settings.board_size(), 400.0);
    }
}
