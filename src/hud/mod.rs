//! HUD plugin - score/bonus/FPS labels, the game over overlay, and the frame limit toggle.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::window::{PresentMode, PrimaryWindow};

use crate::game::{
    BonusText, FpsText, FrameLimit, GameOverUI, GameSet, GameState, HUD_FONT_SIZE, HUD_HEIGHT,
    OVERLAY_COLOR, SCORE_COLOR, ScoreText, WINDOW_WIDTH,
};

/// Plugin for the HUD band and overlays.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameLimit>()
            .add_systems(Startup, setup_system)
            .add_systems(Update, toggle_frame_limit.in_set(GameSet::Input))
            .add_systems(
                Update,
                (
                    update_score_text,
                    update_bonus_text,
                    update_fps_text,
                    sync_game_over_screen,
                )
                    .in_set(GameSet::Presentation),
            );
    }
}

// Type alias for a recolourable HUD label
type LabelQuery<'w, 's, M> =
    Query<'w, 's, (&'static mut Text, &'static mut TextColor), With<M>>;

/// Initial setup system - camera and HUD labels.
fn setup_system(mut commands: Commands) {
    commands.spawn(Camera2d);

    let label_top = Val::Px(((HUD_HEIGHT as f32 - HUD_FONT_SIZE) / 2.0).max(0.0));
    let label = |text: &str, color: Color, left: f32| {
        (
            Text::from(text),
            TextFont {
                font_size: HUD_FONT_SIZE,
                ..default()
            },
            TextColor(color),
            Node {
                position_type: PositionType::Absolute,
                top: label_top,
                left: Val::Px(left),
                ..default()
            },
        )
    };

    commands.spawn((label("Score: 0", SCORE_COLOR, 10.0), ScoreText));
    commands.spawn((
        label("+0", SCORE_COLOR, WINDOW_WIDTH as f32 / 2.0 - 20.0),
        BonusText,
    ));
    commands.spawn((
        label("FPS: 0", Color::WHITE, WINDOW_WIDTH as f32 - 130.0),
        FpsText,
    ));
}

/// System to update the score display.
fn update_score_text(
    game_state: Res<GameState>,
    mut query: LabelQuery<ScoreText>,
) -> Result {
    let (mut text, mut color) = query.single_mut()?;
    *text = Text::from(format!("Score: {}", game_state.score));
    color.0 = game_state.score_color();
    Ok(())
}

/// System to update the pending bonus display.
fn update_bonus_text(
    game_state: Res<GameState>,
    mut query: LabelQuery<BonusText>,
) -> Result {
    let (mut text, mut color) = query.single_mut()?;
    *text = Text::from(format!("+{}", game_state.score_to_give));
    color.0 = game_state.score_color();
    Ok(())
}

/// System to show the smoothed frame rate reported by the engine.
fn update_fps_text(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) -> Result {
    let mut text = query.single_mut()?;
    if let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
    {
        *text = Text::from(format!("FPS: {fps:.0}"));
    }
    Ok(())
}

/// System to switch between vsync-capped and uncapped presentation.
fn toggle_frame_limit(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut frame_limit: ResMut<FrameLimit>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) -> Result {
    if !keyboard_input.just_pressed(KeyCode::KeyF) {
        return Ok(());
    }

    let mut window = windows.single_mut()?;
    frame_limit.toggle();
    window.present_mode = if frame_limit.capped {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    };
    info!("Frame limit {}", if frame_limit.capped { "on" } else { "off" });
    Ok(())
}

/// System to show the game over overlay while dead and remove it after a restart.
fn sync_game_over_screen(
    mut commands: Commands,
    game_state: Res<GameState>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if game_state.is_dead && game_over_ui.is_empty() {
        spawn_game_over_screen(&mut commands, game_state.score);
    } else if !game_state.is_dead {
        for entity in game_over_ui.iter() {
            commands.entity(entity).despawn();
        }
    }
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(commands: &mut Commands, score: i32) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(OVERLAY_COLOR),
            GameOverUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from("GAME OVER"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 0.3, 0.3, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from(format!("Final Score: {}", score)),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from("Press R to restart"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
            ));
        });
}
