//! Flow plugin - owns the game resources, frame ordering, restart, and gameplay logging.

use bevy::prelude::*;
use rand::prelude::*;

use crate::fruit::Fruit;
use crate::game::{FruitEaten, GameSet, GameState, RestartRequested, SnakeDied};
use crate::snake::Snake;

/// Plugin for game flow: resources, system ordering, and restart.
pub struct FlowPlugin;

impl Plugin for FlowPlugin {
    fn build(&self, app: &mut App) {
        let snake = Snake::default();
        let fruit = Fruit::spawn(&mut rand::rng(), &snake);

        app.init_resource::<GameState>()
            .insert_resource(snake)
            .insert_resource(fruit)
            .add_message::<RestartRequested>()
            .add_message::<FruitEaten>()
            .add_message::<SnakeDied>()
            .configure_sets(
                Update,
                (
                    GameSet::Restart,
                    GameSet::Input,
                    GameSet::Snake,
                    GameSet::Fruit,
                    GameSet::Presentation,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (restart_input, restart_game)
                    .chain()
                    .in_set(GameSet::Restart),
            )
            .add_systems(Update, log_game_events.after(GameSet::Fruit));
    }
}

/// Put every piece of game state back to its starting value and place a new fruit.
pub fn restart(state: &mut GameState, snake: &mut Snake, fruit: &mut Fruit, rng: &mut impl Rng) {
    state.reset();
    snake.reset();
    fruit.relocate(rng, snake);
}

/// System to turn the restart key into a restart request.
fn restart_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut restart_writer: MessageWriter<RestartRequested>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        restart_writer.write(RestartRequested);
    }
}

/// System to reset the game when a restart was requested. Works mid-game and after death.
fn restart_game(
    mut restart_reader: MessageReader<RestartRequested>,
    mut game_state: ResMut<GameState>,
    mut snake: ResMut<Snake>,
    mut fruit: ResMut<Fruit>,
) {
    if restart_reader.read().next().is_none() {
        return;
    }

    let final_score = game_state.score;
    restart(&mut game_state, &mut snake, &mut fruit, &mut rand::rng());
    info!(
        "Game restarted (previous score {}), fruit at {:?}",
        final_score, fruit.position
    );
}

/// System to log eat and death events.
fn log_game_events(
    mut eaten_reader: MessageReader<FruitEaten>,
    mut died_reader: MessageReader<SnakeDied>,
) {
    for event in eaten_reader.read() {
        debug!("Fruit eaten at {:?} for {} points", event.position, event.awarded);
    }
    for event in died_reader.read() {
        info!(
            "Game Over! Final score: {} (length {})",
            event.score, event.length
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fruit::FruitPlugin;
    use crate::game::{Direction, FRUIT_BONUS, INITIAL_MOVE_INTERVAL, SNAKE_START};
    use crate::snake::SnakePlugin;
    use bevy::time::TimeUpdateStrategy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    /// Headless app whose clock advances by `frame` on every update.
    fn app_with_frame_time(frame: Duration) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
            .init_resource::<ButtonInput<KeyCode>>()
            .add_plugins((FlowPlugin, SnakePlugin, FruitPlugin));
        app.update();
        app
    }

    fn test_app() -> App {
        app_with_frame_time(Duration::ZERO)
    }

    fn press(app: &mut App, key: KeyCode) {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.release_all();
        keyboard.clear();
        keyboard.press(key);
    }

    #[test]
    fn test_restart_after_death() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = GameState::default();
        let mut snake = Snake::new(SNAKE_START);
        let mut fruit = Fruit::spawn(&mut rng, &snake);

        state.award_fruit();
        state.award_fruit();
        snake.grow();
        snake.grow();
        snake.steer(Direction::Left);
        snake.step();
        state.is_dead = true;

        restart(&mut state, &mut snake, &mut fruit, &mut rng);

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), SNAKE_START);
        assert_eq!(snake.direction, Direction::Up);
        assert_eq!(snake.next_direction, Direction::Up);
        assert!(!state.is_dead);
        assert_eq!(state.score, 0);
        assert_eq!(state.score_to_give, FRUIT_BONUS);
        assert_eq!(state.move_interval, INITIAL_MOVE_INTERVAL);
        assert_eq!(fruit.idle.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_restart_key_resets_running_app() {
        let mut app = test_app();
        {
            let mut state = app.world_mut().resource_mut::<GameState>();
            state.score = 40;
            state.move_interval = Duration::from_millis(100);
            state.is_dead = true;
        }
        app.world_mut().resource_mut::<Snake>().grow();

        press(&mut app, KeyCode::KeyR);
        app.update();

        let state = app.world().resource::<GameState>();
        assert!(!state.is_dead);
        assert_eq!(state.score, 0);
        assert_eq!(state.move_interval, INITIAL_MOVE_INTERVAL);
        let snake = app.world().resource::<Snake>();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), SNAKE_START);
    }

    #[test]
    fn test_direction_keys_steer_snake() {
        let mut app = test_app();

        press(&mut app, KeyCode::ArrowLeft);
        app.update();
        assert_eq!(
            app.world().resource::<Snake>().next_direction,
            Direction::Left
        );

        // Still heading up, so down is a reversal.
        press(&mut app, KeyCode::KeyS);
        app.update();
        assert_eq!(
            app.world().resource::<Snake>().next_direction,
            Direction::Left
        );
    }

    #[test]
    fn test_snake_moves_once_per_interval() {
        let mut app = app_with_frame_time(Duration::from_millis(100));
        let start = app.world().resource::<Snake>().head();

        app.update();
        assert_eq!(app.world().resource::<Snake>().head(), start);

        for _ in 0..3 {
            app.update();
        }
        let head = app.world().resource::<Snake>().head();
        assert_eq!(head, start.moved(Direction::Up));
    }

    #[test]
    fn test_dead_snake_ignores_direction_keys() {
        let mut app = test_app();
        app.world_mut().resource_mut::<GameState>().is_dead = true;

        press(&mut app, KeyCode::KeyD);
        app.update();

        assert_eq!(app.world().resource::<Snake>().next_direction, Direction::Up);
    }
}
