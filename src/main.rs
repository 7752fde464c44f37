//! Snake - a grid arcade game. Eat fruit to grow and score, avoid your own tail.

mod flow;
mod fruit;
mod game;
mod hud;
mod rendering;
mod snake;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::{DEFAULT_FILTER, LogPlugin};
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use flow::FlowPlugin;
use fruit::FruitPlugin;
use game::{BACKGROUND_COLOR, WINDOW_HEIGHT, WINDOW_WIDTH};
use hud::HudPlugin;
use rendering::RenderingPlugin;
use snake::SnakePlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                        title: "Snake".to_string(),
                        resizable: false,
                        present_mode: PresentMode::AutoVsync,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: format!("{DEFAULT_FILTER},snake_arcade=debug"),
                    ..default()
                }),
            FrameTimeDiagnosticsPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .add_plugins((
            FlowPlugin,
            SnakePlugin,
            FruitPlugin,
            HudPlugin,
            RenderingPlugin,
        ))
        .run();
}
