//! Core module - configuration and application infrastructure
//!
//! - [`BoardSettings`] - tile size, theme, highlight and snap tuning
//! - [`WindowConfig`] - primary window derived from the board size
//! - [`settings_persistence`] - JSON load/save in the platform config dir
//! - [`CorePlugin`] - inserts the settings and installs the panic hook
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use chessy::core::{resolve_settings, CorePlugin};
//!
//! let settings = resolve_settings(None)?;
//! App::new()
//!     .add_plugins(CorePlugin { settings })
//!     .add_plugins(DefaultPlugins)
//!     // ... other plugins
//! ```

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod window_config;

pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use settings_persistence::{
    default_settings_path, load_settings, resolve_settings, save_settings,
};
pub use window_config::WindowConfig;
