//! Snake plugin - handles snake input, timed movement, wraparound, and self-collision.

use bevy::prelude::*;
use std::time::Duration;

use crate::game::{Direction, GameSet, GameState, Position, SNAKE_START, SnakeDied};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, snake_movement_input.in_set(GameSet::Input))
            .add_systems(Update, snake_movement.in_set(GameSet::Snake));
    }
}

/// The snake: body cells with the head at index 0.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Position>,
    pub direction: Direction,
    pub next_direction: Direction,
}

impl Default for Snake {
    fn default() -> Self {
        Snake::new(SNAKE_START)
    }
}

impl Snake {
    /// A single-segment snake heading up.
    pub fn new(head: Position) -> Self {
        Snake {
            body: vec![head],
            direction: Direction::Up,
            next_direction: Direction::Up,
        }
    }

    pub fn reset(&mut self) {
        *self = Snake::default();
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Buffer a turn for the next step. A reversal of the current direction is ignored.
    pub fn steer(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.next_direction = direction;
        }
    }

    /// Add a segment on top of the current tail; it separates on the next step.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    /// Commit the buffered direction and move one cell. Every trailing segment takes the
    /// place the segment ahead of it held. Returns true if the head ran into the body.
    pub fn step(&mut self) -> bool {
        self.direction = self.next_direction;

        let mut previous = self.body[0];
        self.body[0] = previous.moved(self.direction).wrapped();
        for segment in self.body.iter_mut().skip(1) {
            previous = std::mem::replace(segment, previous);
        }

        let head = self.body[0];
        self.body[1..].iter().any(|segment| segment.overlaps(&head))
    }
}

/// Outcome of one frame of snake simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeStep {
    /// Still accumulating time, or dead.
    Waiting,
    Moved,
    Died,
}

/// Advance the move timer by `delta` and step the snake once a full interval has built up.
pub fn advance_snake(state: &mut GameState, snake: &mut Snake, delta: Duration) -> SnakeStep {
    if state.is_dead || !state.tick_move_timer(delta) {
        return SnakeStep::Waiting;
    }

    if snake.step() {
        state.is_dead = true;
        SnakeStep::Died
    } else {
        SnakeStep::Moved
    }
}

/// System to read keyboard input into the buffered direction.
fn snake_movement_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    game_state: Res<GameState>,
    mut snake: ResMut<Snake>,
) {
    if game_state.is_dead {
        return;
    }

    if let Some(direction) = Direction::from_input(&keyboard_input, snake.direction) {
        snake.steer(direction);
    }
}

/// System to execute timed snake movement.
fn snake_movement(
    time: Res<Time>,
    mut game_state: ResMut<GameState>,
    mut snake: ResMut<Snake>,
    mut died_writer: MessageWriter<SnakeDied>,
) {
    if advance_snake(&mut game_state, &mut snake, time.delta()) == SnakeStep::Died {
        died_writer.write(SnakeDied {
            score: game_state.score,
            length: snake.len(),
        });
    }
}
