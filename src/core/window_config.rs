//! Primary window configuration
//!
//! The window is sized to fit the board plus a margin on each side. The binary
//! turns this into the `WindowPlugin` primary window before the app is built.

use super::BoardSettings;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

/// Margin around the board in logical pixels
const BOARD_MARGIN: f32 = 48.0;

/// Configuration for the primary application window
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::for_board(&BoardSettings::default())
    }
}

impl WindowConfig {
    /// Window large enough to show the whole board
    pub fn for_board(settings: &BoardSettings) -> Self {
        let side = (settings.board_size() + BOARD_MARGIN * 2.0).ceil() as u32;
        Self {
            title: "Chessy".to_string(),
            width: side,
            height: side,
            resizable: true,
        }
    }

    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_fits_board() {
        let settings = BoardSettings {
            tile_size: 50.0,
            ..default()
        };
        let config = WindowConfig::for_board(&settings);
        assert_eq!(config.width, 496);
        assert_eq!(config.height, 496);
        assert_eq!(config.title, "Chessy");
    }

    #[test]
    fn test_to_window_carries_config() {
        let config = WindowConfig::for_board(&BoardSettings::default());
        let window = config.to_window();
        assert_eq!(window.title, "Chessy");
        assert_eq!(window.resolution.physical_width(), config.width);
        assert!(window.resizable);
    }
}
