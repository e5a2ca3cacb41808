//! Core plugin for Chessy
//!
//! Provides fundamental application setup:
//! - Board settings resource
//! - Panic hook that reports the drag state at the time of the crash
//!
//! # Plugin Order
//!
//! 1. [`CorePlugin`] - settings and configuration
//! 2. [`bevy::DefaultPlugins`] - windowing, rendering, picking
//! 3. [`crate::game::GamePlugin`] - board state and drag logic
//! 4. Rendering and input plugins

use super::BoardSettings;
use crate::game::resources::{DragController, DragPhase};
use bevy::prelude::*;
use std::panic;
use std::sync::{Mutex, OnceLock};

/// Last observed drag phase, readable from the panic hook outside the ECS
static PANIC_DRAG_TRACKER: OnceLock<Mutex<Option<DragPhase>>> = OnceLock::new();

/// Core plugin for the Chessy application
#[derive(Default)]
pub struct CorePlugin {
    /// Settings resolved by the binary before the app is built
    pub settings: BoardSettings,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone());
        app.register_type::<BoardSettings>();

        app.add_systems(Startup, log_settings)
            .add_systems(Last, update_panic_drag_tracker);
    }

    fn finish(&self, _app: &mut App) {
        setup_panic_hook();
    }
}

/// Install a panic hook that prints the message, location and drag phase
fn setup_panic_hook() {
    PANIC_DRAG_TRACKER.get_or_init(|| Mutex::new(None));

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let drag_phase = PANIC_DRAG_TRACKER
            .get()
            .and_then(|tracker| tracker.lock().ok().and_then(|phase| *phase))
            .map_or_else(|| "<unknown>".to_string(), |phase| format!("{:?}", phase));

        let location = panic_info
            .location()
            .map_or_else(
                || "<unknown>".to_string(),
                |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
            );

        eprintln!(
            "PANIC DETECTED\n\
            ============================================\n\
            Location: {}\n\
            DragPhase: {}\n\
            ============================================",
            location, drag_phase
        );
        default_hook(panic_info);
    }));
}

fn log_settings(settings: Res<BoardSettings>) {
    info!(
        "[SETTINGS] {} theme, {} px tiles, highlight {:.2}",
        settings.theme.name(),
        settings.tile_size,
        settings.highlight_strength
    );
}

fn update_panic_drag_tracker(controller: Option<Res<DragController>>) {
    let Some(controller) = controller else {
        return;
    };
    if !controller.is_changed() {
        return;
    }
    if let Some(tracker) = PANIC_DRAG_TRACKER.get() {
        if let Ok(mut phase) = tracker.lock() {
            *phase = Some(controller.phase());
        }
    }
}
