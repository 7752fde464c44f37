//! Game constants for window and grid size, colors, timing, and scoring.

use bevy::prelude::*;
use std::time::Duration;

use super::Position;

// Window and grid dimensions
pub const WINDOW_WIDTH: u32 = 420;
pub const WINDOW_HEIGHT: u32 = 660;
pub const CELL_SIZE: i32 = 15;
pub const GRID_WIDTH: i32 = WINDOW_WIDTH as i32 / CELL_SIZE;
pub const GRID_HEIGHT: i32 = WINDOW_HEIGHT as i32 / CELL_SIZE;

// HUD band at the top of the window, in pixels and in rows
pub const HUD_HEIGHT: i32 = 30;
pub const HUD_ROWS: i32 = HUD_HEIGHT / CELL_SIZE;
pub const PLAYFIELD_ROWS: i32 = GRID_HEIGHT - HUD_ROWS;

// Timing
pub const INITIAL_MOVE_INTERVAL: Duration = Duration::from_millis(300);
pub const MIN_MOVE_INTERVAL: Duration = Duration::from_millis(50);
pub const SPEEDUP_STEP: Duration = Duration::from_millis(50);
pub const FRUIT_IDLE_TIMEOUT: Duration = Duration::from_secs(15);
pub const BONUS_DECAY_PERIOD: Duration = Duration::from_secs(1);
pub const FLASH_DURATION: Duration = Duration::from_millis(350);

// Scoring
pub const FRUIT_BONUS: i32 = 15;

// Initial positions
pub const SNAKE_START: Position = Position {
    x: GRID_WIDTH / 2 - 1,
    y: GRID_HEIGHT / 2 - 1,
};

// Colors
pub const BACKGROUND_COLOR: Color = Color::srgb(0.510, 0.510, 0.510);
pub const HUD_COLOR: Color = Color::srgb(0.314, 0.314, 0.314);
pub const SNAKE_HEAD_COLOR: Color = Color::srgb(0.902, 0.161, 0.216);
pub const SNAKE_SEGMENT_COLOR: Color = Color::srgb(0.745, 0.129, 0.216);
pub const FRUIT_COLOR: Color = Color::srgb(0.000, 0.459, 0.173);
pub const SCORE_COLOR: Color = Color::WHITE;
pub const SCORE_FLASH_COLOR: Color = Color::srgb(0.000, 0.620, 0.184);
pub const OVERLAY_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);

pub const HUD_FONT_SIZE: f32 = 24.0;

// Z-index constants for rendering layers
pub const Z_FRUIT: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;
pub const Z_HUD: f32 = 3.0;
