//! Fruit plugin - handles fruit spawning, consumption, bonus decay, and idle respawn.

use bevy::prelude::*;
use rand::prelude::*;
use std::time::Duration;

use crate::game::{
    FRUIT_BONUS, FRUIT_IDLE_TIMEOUT, FruitEaten, GRID_HEIGHT, GRID_WIDTH, GameSet, GameState,
    HUD_ROWS, PLAYFIELD_ROWS, Position,
};
use crate::snake::Snake;

/// Plugin for fruit-related systems.
pub struct FruitPlugin;

impl Plugin for FruitPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, fruit_update.in_set(GameSet::Fruit));
    }
}

/// The single fruit on the playfield.
#[derive(Resource, Debug, Clone)]
pub struct Fruit {
    pub position: Position,
    /// Time since the fruit was last placed.
    pub idle: Timer,
}

impl Fruit {
    /// Places a fresh fruit on a random free cell.
    pub fn spawn(rng: &mut impl Rng, snake: &Snake) -> Self {
        Fruit {
            position: random_free_cell(rng, snake),
            idle: Timer::new(FRUIT_IDLE_TIMEOUT, TimerMode::Once),
        }
    }

    pub fn relocate(&mut self, rng: &mut impl Rng, snake: &Snake) {
        self.position = random_free_cell(rng, snake);
        self.idle.reset();
    }
}

/// Inclusive random integer, as used for grid placement.
fn random_int(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// A uniformly random playfield cell (never inside the HUD band).
pub fn random_cell(rng: &mut impl Rng) -> Position {
    Position::new(
        random_int(rng, 0, GRID_WIDTH - 1),
        random_int(rng, HUD_ROWS, GRID_HEIGHT - 1),
    )
}

/// Keep drawing cells until one is not covered by the snake. A snake that fills the whole
/// playfield leaves no free cell, so any cell is accepted then.
fn random_free_cell(rng: &mut impl Rng, snake: &Snake) -> Position {
    let playfield_cells = (GRID_WIDTH * PLAYFIELD_ROWS) as usize;
    loop {
        let position = random_cell(rng);
        if snake.len() >= playfield_cells || !snake.segments().contains(&position) {
            return position;
        }
    }
}

/// Outcome of one frame of fruit simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitStep {
    Idle,
    /// The snake ate the fruit at `position` and scored `awarded`.
    Eaten { position: Position, awarded: i32 },
    /// The fruit sat uneaten too long and moved.
    TimedOut,
}

/// Advance fruit timers by `delta` and resolve consumption or idle timeout.
///
/// The bonus decays before consumption is checked, so a fruit eaten on the frame that
/// completes a second pays the already-decayed bonus. A timeout on the same frame as a decay
/// still leaves the bonus at its full value.
pub fn update_fruit(
    fruit: &mut Fruit,
    snake: &mut Snake,
    state: &mut GameState,
    delta: Duration,
    rng: &mut impl Rng,
) -> FruitStep {
    if state.is_dead {
        return FruitStep::Idle;
    }

    fruit.idle.tick(delta);
    state.decay_bonus(delta);

    if snake.head().overlaps(&fruit.position) {
        let position = fruit.position;
        snake.grow();
        let awarded = state.award_fruit();
        fruit.relocate(rng, snake);
        return FruitStep::Eaten { position, awarded };
    }

    state.flash.tick(delta);

    if fruit.idle.is_finished() {
        fruit.relocate(rng, snake);
        state.score_to_give = FRUIT_BONUS;
        return FruitStep::TimedOut;
    }

    FruitStep::Idle
}

/// System to run the fruit lifecycle for this frame.
fn fruit_update(
    time: Res<Time>,
    mut fruit: ResMut<Fruit>,
    mut snake: ResMut<Snake>,
    mut game_state: ResMut<GameState>,
    mut eaten_writer: MessageWriter<FruitEaten>,
) {
    let mut rng = rand::rng();
    let step = update_fruit(
        &mut fruit,
        &mut snake,
        &mut game_state,
        time.delta(),
        &mut rng,
    );

    match step {
        FruitStep::Eaten { position, awarded } => {
            eaten_writer.write(FruitEaten { position, awarded });
        }
        FruitStep::TimedOut => debug!("Fruit timed out, moved to {:?}", fruit.position),
        FruitStep::Idle => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{INITIAL_MOVE_INTERVAL, SNAKE_START};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const RNG_SEED: u64 = 0x5EED_F00D;

    fn fruit_at(position: Position) -> Fruit {
        Fruit {
            position,
            idle: Timer::new(FRUIT_IDLE_TIMEOUT, TimerMode::Once),
        }
    }

    fn away_from(snake: &Snake) -> Position {
        let head = snake.head();
        Position::new((head.x + 5) % GRID_WIDTH, head.y)
    }

    #[test]
    fn test_random_cells_stay_in_playfield() {
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        for _ in 0..2000 {
            let cell = random_cell(&mut rng);
            assert!((0..GRID_WIDTH).contains(&cell.x));
            assert!((HUD_ROWS..GRID_HEIGHT).contains(&cell.y));
        }
    }

    #[test]
    fn test_spawn_avoids_snake() {
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let snake = Snake::default();
        for _ in 0..500 {
            let fruit = Fruit::spawn(&mut rng, &snake);
            assert_ne!(fruit.position, SNAKE_START);
        }
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let mut snake = Snake::default();
        let mut state = GameState {
            score: 7,
            score_to_give: 11,
            ..GameState::default()
        };
        let mut fruit = fruit_at(snake.head());
        fruit.idle.tick(Duration::from_secs(4));

        let step = update_fruit(&mut fruit, &mut snake, &mut state, Duration::ZERO, &mut rng);

        assert_eq!(
            step,
            FruitStep::Eaten {
                position: SNAKE_START,
                awarded: 11
            }
        );
        assert_eq!(snake.len(), 2);
        assert_eq!(state.score, 18);
        assert_eq!(state.score_to_give, FRUIT_BONUS);
        assert_eq!(fruit.idle.elapsed(), Duration::ZERO);
        assert_ne!(fruit.position, SNAKE_START);
        assert!(state.flash.active);
    }

    #[test]
    fn test_eat_after_two_seconds_awards_decayed_bonus() {
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let mut snake = Snake::default();
        let mut state = GameState::default();
        let mut fruit = fruit_at(away_from(&snake));

        let step = update_fruit(&mut fruit, &mut snake, &mut state, Duration::from_secs(1), &mut rng);
        assert_eq!(step, FruitStep::Idle);
        assert_eq!(state.score_to_give, FRUIT_BONUS - 1);

        fruit.position = snake.head();
        let step = update_fruit(&mut fruit, &mut snake, &mut state, Duration::from_secs(1), &mut rng);

        assert_eq!(
            step,
            FruitStep::Eaten {
                position: SNAKE_START,
                awarded: 13
            }
        );
        assert_eq!(state.score, 13);
        assert_eq!(state.score_to_give, FRUIT_BONUS);
        assert_eq!(
            state.move_interval,
            INITIAL_MOVE_INTERVAL - Duration::from_millis(50)
        );
    }

    #[test]
    fn test_idle_fruit_relocates_after_timeout() {
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let mut snake = Snake::default();
        let mut state = GameState::default();
        let mut fruit = fruit_at(away_from(&snake));

        for _ in 0..14 {
            let step =
                update_fruit(&mut fruit, &mut snake, &mut state, Duration::from_secs(1), &mut rng);
            assert_eq!(step, FruitStep::Idle);
        }
        assert_eq!(state.score_to_give, 1);

        let step = update_fruit(&mut fruit, &mut snake, &mut state, Duration::from_secs(1), &mut rng);

        assert_eq!(step, FruitStep::TimedOut);
        assert_eq!(state.score_to_give, FRUIT_BONUS);
        assert_eq!(fruit.idle.elapsed(), Duration::ZERO);
        assert_eq!(state.score, 0);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_flash_runs_out_on_quiet_frames() {
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let mut snake = Snake::default();
        let mut state = GameState::default();
        let mut fruit = fruit_at(snake.head());

        update_fruit(&mut fruit, &mut snake, &mut state, Duration::ZERO, &mut rng);
        assert!(state.flash.active);

        fruit.position = away_from(&snake);
        update_fruit(&mut fruit, &mut snake, &mut state, Duration::from_millis(300), &mut rng);
        assert!(state.flash.active);
        update_fruit(&mut fruit, &mut snake, &mut state, Duration::from_millis(50), &mut rng);
        assert!(!state.flash.active);
    }

    #[test]
    fn test_dead_state_freezes_fruit() {
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let mut snake = Snake::default();
        let mut state = GameState {
            is_dead: true,
            ..GameState::default()
        };
        let mut fruit = fruit_at(snake.head());

        let step = update_fruit(&mut fruit, &mut snake, &mut state, Duration::from_secs(20), &mut rng);

        assert_eq!(step, FruitStep::Idle);
        assert_eq!(fruit.position, SNAKE_START);
        assert_eq!(snake.len(), 1);
        assert_eq!(state.score_to_give, FRUIT_BONUS);
    }
}
