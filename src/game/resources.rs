//! Game resources (singleton state).

use bevy::prelude::*;
use std::time::Duration;

use super::{
    BONUS_DECAY_PERIOD, FLASH_DURATION, FRUIT_BONUS, INITIAL_MOVE_INTERVAL, MIN_MOVE_INTERVAL,
    SCORE_COLOR, SCORE_FLASH_COLOR, SPEEDUP_STEP,
};

/// Short highlight of the score labels after a fruit is eaten.
#[derive(Debug, Clone)]
pub struct ScoreFlash {
    pub active: bool,
    pub timer: Timer,
}

impl Default for ScoreFlash {
    fn default() -> Self {
        ScoreFlash {
            active: false,
            timer: Timer::new(FLASH_DURATION, TimerMode::Once),
        }
    }
}

impl ScoreFlash {
    /// (Re)start the highlight from zero.
    pub fn start(&mut self) {
        self.active = true;
        self.timer.reset();
    }

    /// Advance the highlight; it clears once the timer runs out.
    pub fn tick(&mut self, delta: Duration) {
        if !self.active {
            return;
        }
        if self.timer.tick(delta).is_finished() {
            self.active = false;
            self.timer.reset();
        }
    }

    pub fn color(&self) -> Color {
        if self.active {
            SCORE_FLASH_COLOR
        } else {
            SCORE_COLOR
        }
    }
}

/// Main game state resource: score, bonus, speed, and the death flag.
#[derive(Resource, Debug, Clone)]
pub struct GameState {
    pub score: i32,
    /// Bonus awarded for the next fruit. Decays every second and is not clamped, so it may
    /// go negative.
    pub score_to_give: i32,
    pub score_decay: Timer,
    pub flash: ScoreFlash,
    /// Time accumulated towards the next snake step.
    pub move_elapsed: Duration,
    pub move_interval: Duration,
    pub is_dead: bool,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            score: 0,
            score_to_give: FRUIT_BONUS,
            score_decay: Timer::new(BONUS_DECAY_PERIOD, TimerMode::Repeating),
            flash: ScoreFlash::default(),
            move_elapsed: Duration::ZERO,
            move_interval: INITIAL_MOVE_INTERVAL,
            is_dead: false,
        }
    }
}

impl GameState {
    pub fn reset(&mut self) {
        *self = GameState::default();
    }

    /// Accumulate frame time. Returns true, and clears the accumulator, once a full move
    /// interval has built up.
    pub fn tick_move_timer(&mut self, delta: Duration) -> bool {
        self.move_elapsed += delta;
        if self.move_elapsed >= self.move_interval {
            self.move_elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// Take one point off the pending bonus for every full second that has passed.
    pub fn decay_bonus(&mut self, delta: Duration) {
        let elapsed_periods = self.score_decay.tick(delta).times_finished_this_tick();
        self.score_to_give -= elapsed_periods as i32;
    }

    /// Pay out the pending bonus and speed the snake up. Returns the amount awarded.
    pub fn award_fruit(&mut self) -> i32 {
        let awarded = self.score_to_give;
        self.score += awarded;
        self.score_to_give = FRUIT_BONUS;
        self.move_interval = self
            .move_interval
            .saturating_sub(SPEEDUP_STEP)
            .max(MIN_MOVE_INTERVAL);
        self.flash.start();
        awarded
    }

    pub fn score_color(&self) -> Color {
        self.flash.color()
    }
}

/// Whether presentation is capped to the display refresh rate.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLimit {
    pub capped: bool,
}

impl Default for FrameLimit {
    fn default() -> Self {
        FrameLimit { capped: true }
    }
}

impl FrameLimit {
    pub fn toggle(&mut self) {
        self.capped = !self.capped;
    }
}
