//! Game events (messages).

use bevy::prelude::*;

use super::Position;

/// Message sent when the player asks for a fresh game.
#[derive(Message)]
pub struct RestartRequested;

/// Message triggered when the snake eats the fruit.
#[derive(Message)]
pub struct FruitEaten {
    pub position: Position,
    pub awarded: i32,
}

/// Message triggered when the snake runs into itself.
#[derive(Message)]
pub struct SnakeDied {
    pub score: i32,
    pub length: usize,
}
