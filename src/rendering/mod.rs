//! Rendering plugin - draws the playfield every frame with immediate-mode shapes.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::fruit::Fruit;
use crate::game::{
    CELL_SIZE, FRUIT_COLOR, GameSet, HUD_COLOR, HUD_HEIGHT, Position, SNAKE_HEAD_COLOR,
    SNAKE_SEGMENT_COLOR, WINDOW_HEIGHT, WINDOW_WIDTH, Z_FRUIT, Z_HUD, Z_SNAKE_HEAD,
    Z_SNAKE_SEGMENT,
};
use crate::snake::Snake;

/// Plugin for drawing the snake, the fruit, and the HUD band.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(Shape2dPlugin::default())
            .add_systems(Update, draw_playfield.in_set(GameSet::Presentation));
    }
}

/// World-space centre of a cell. The camera sits at the window centre with y pointing up,
/// while grid rows grow downwards from the top edge.
pub fn cell_to_world(position: Position, z: f32) -> Vec3 {
    let half_cell = CELL_SIZE as f32 / 2.0;
    Vec3::new(
        (position.x * CELL_SIZE) as f32 + half_cell - WINDOW_WIDTH as f32 / 2.0,
        WINDOW_HEIGHT as f32 / 2.0 - (position.y * CELL_SIZE) as f32 - half_cell,
        z,
    )
}

/// System to draw every cell for this frame.
fn draw_playfield(mut painter: ShapePainter, snake: Res<Snake>, fruit: Res<Fruit>) {
    let cell = Vec2::splat(CELL_SIZE as f32);

    painter.reset();
    for (i, segment) in snake.segments().iter().enumerate() {
        let (color, z) = if i == 0 {
            (SNAKE_HEAD_COLOR, Z_SNAKE_HEAD)
        } else {
            (SNAKE_SEGMENT_COLOR, Z_SNAKE_SEGMENT)
        };
        painter.color = color;
        painter.set_translation(cell_to_world(*segment, z));
        painter.rect(cell);
    }

    painter.color = FRUIT_COLOR;
    painter.set_translation(cell_to_world(fruit.position, Z_FRUIT));
    painter.rect(cell);

    // HUD band covers anything drawn beneath it
    painter.color = HUD_COLOR;
    painter.set_translation(Vec3::new(
        0.0,
        (WINDOW_HEIGHT as i32 - HUD_HEIGHT) as f32 / 2.0,
        Z_HUD,
    ));
    painter.rect(Vec2::new(WINDOW_WIDTH as f32, HUD_HEIGHT as f32));
}
