//! Grid types and ECS marker components for the snake game.

use bevy::prelude::*;

use super::{CELL_SIZE, GRID_WIDTH, HUD_ROWS, PLAYFIELD_ROWS};

/// A cell on the grid. Column 0 is the left edge and row 0 the top edge of the window.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Returns the neighbouring cell in `direction`, without wrapping.
    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Folds a position that left the playfield back in on the opposite edge.
    /// Rows inside the HUD band count as outside.
    pub fn wrapped(&self) -> Self {
        Position {
            x: self.x.rem_euclid(GRID_WIDTH),
            y: HUD_ROWS + (self.y - HUD_ROWS).rem_euclid(PLAYFIELD_ROWS),
        }
    }

    /// Pixel rectangle covered by this cell.
    pub fn rect(&self) -> Rect {
        let x = (self.x * CELL_SIZE) as f32;
        let y = (self.y * CELL_SIZE) as f32;
        Rect::new(x, y, x + CELL_SIZE as f32, y + CELL_SIZE as f32)
    }

    /// Axis-aligned overlap of the two cell rectangles. Cells sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Position) -> bool {
        !self.rect().intersect(other.rect()).is_empty()
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// Input priority order when several keys are held.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Cell delta; rows grow downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }

    pub fn keys(&self) -> [KeyCode; 2] {
        match self {
            Direction::Up => [KeyCode::ArrowUp, KeyCode::KeyW],
            Direction::Down => [KeyCode::ArrowDown, KeyCode::KeyS],
            Direction::Right => [KeyCode::ArrowRight, KeyCode::KeyD],
            Direction::Left => [KeyCode::ArrowLeft, KeyCode::KeyA],
        }
    }

    /// Reads keyboard input and returns the first held direction that is not a reversal of
    /// `current`.
    pub fn from_input(keyboard_input: &ButtonInput<KeyCode>, current: Direction) -> Option<Self> {
        Direction::ALL.into_iter().find(|direction| {
            *direction != current.opposite() && keyboard_input.any_pressed(direction.keys())
        })
    }
}

/// Component to mark the score label.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the pending bonus label.
#[derive(Component)]
pub struct BonusText;

/// Component to mark the FPS label.
#[derive(Component)]
pub struct FpsText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;
