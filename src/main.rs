use anyhow::Context;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use chessy::core::{
    default_settings_path, resolve_settings, save_settings, BoardTheme, CorePlugin, WindowConfig,
};
use chessy::game::GamePlugin;
use chessy::input::PointerEventsPlugin;
use chessy::rendering::{BoardPlugin, PiecePlugin};

/// Drag-and-drop chess board
#[derive(Parser, Debug)]
#[command(name = "chessy", version, about)]
struct Cli {
    /// Settings file (defaults to settings.json in the platform config dir)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Override the tile edge length in pixels
    #[arg(long)]
    tile_size: Option<f32>,

    /// Override the board theme
    #[arg(long, value_enum)]
    theme: Option<BoardTheme>,

    /// Log filter in tracing-subscriber syntax
    #[arg(long, default_value = "info,wgpu=error,naga=warn")]
    log_filter: String,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = resolve_settings(cli.settings.as_deref())
        .context("failed to load board settings")?;
    if let Some(tile_size) = cli.tile_size {
        settings.tile_size = tile_size;
    }
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    settings.validate().context("invalid board settings")?;

    if cli.save_settings {
        let path = cli.settings.clone().unwrap_or_else(default_settings_path);
        save_settings(&path, &settings)
            .with_context(|| format!("failed to save settings to {}", path.display()))?;
    }

    let window = WindowConfig::for_board(&settings).to_window();

    let exit = App::new()
        .add_plugins(CorePlugin { settings })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                .set(LogPlugin {
                    filter: cli.log_filter,
                    level: Level::INFO,
                    ..default()
                }),
        )
        .add_plugins(MeshPickingPlugin)
        .add_plugins(GamePlugin)
        .add_plugins(PointerEventsPlugin)
        .add_plugins(BoardPlugin)
        .add_plugins(PiecePlugin)
        .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.1)))
        .add_systems(Startup, setup_camera)
        .run();

    if let AppExit::Error(code) = exit {
        anyhow::bail!("chessy exited with code {}", code);
    }
    Ok(())
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
