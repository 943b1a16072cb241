use bevy::log::info;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod content;
mod deck;
mod imaging;
mod motion;
mod road;
mod state;
mod ui;

use state::AppState;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Portfolio Deck".into(),
                resolution: (1280., 900.).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .init_resource::<AppState>()
        .add_systems(Startup, setup)
        .add_systems(Update, ui::ui_system)
        .run();
}

fn setup(mut commands: Commands, mut state: ResMut<AppState>) {
    commands.spawn(Camera2d);
    *state = AppState::new();
    info!(
        "portfolio-deck started (reduced_motion={}, ui_scale={})",
        state.config.reduced_motion, state.config.ui_scale
    );
}
