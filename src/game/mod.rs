//! Board model and drag interaction
//!
//! # Module Organization
//!
//! - `types` - [`TileId`](types::TileId) addressing (1..=64, row-major)
//! - `components` - [`Piece`](components::Piece) and its color/kind
//! - `resources` - [`BoardState`](resources::BoardState) store and
//!   [`DragController`](resources::DragController) state machine
//! - `events` - [`DragInput`](events::DragInput) input boundary messages
//! - `view` - per-tile render boundary
//! - `systems` - drag resolution
//! - `plugin` - [`GamePlugin`] registration
//!
//! # Data Flow
//!
//! ```text
//! pointer observers --DragInput--> apply_drag_input --replace--> BoardState
//!                                        |                          |
//!                                  DragController             piece sync
//! ```

pub mod components;
pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;
pub mod types;
pub mod view;

pub use plugin::GamePlugin;
