//! Core game module containing shared components, resources, events, and constants.

mod components;
mod constants;
mod events;
mod resources;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use resources::*;

use bevy::prelude::*;

/// Per-frame ordering of the game loop. Configured as a chain by the flow plugin.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    Restart,
    Input,
    Snake,
    Fruit,
    Presentation,
}
