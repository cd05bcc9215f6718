//! Game context
//!
//! Owns everything one running game needs (state, input flags, frame clock,
//! random source) and drives a single simulation step per host frame.

use crate::hud::HudSnapshot;
use crate::sim::{FrameClock, GameState, InputFlags, Key, RandomSource, SeededRandom, tick};
use crate::tuning::{Tuning, TuningError};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game<R: RandomSource = SeededRandom> {
    state: GameState,
    input: InputFlags,
    clock: FrameClock,
    rng: R,
}

impl Game<SeededRandom> {
    /// New game with a seeded PCG random source
    pub fn seeded(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        let game = Self::new(tuning, SeededRandom::new(seed))?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(game)
    }
}

impl<R: RandomSource> Game<R> {
    /// Fails if `tuning` doesn't pass [`Tuning::validate`]
    pub fn new(tuning: Tuning, rng: R) -> Result<Self, TuningError> {
        let clock = FrameClock::new(tuning.max_frame_dt);
        let state = GameState::new(tuning)?;
        Ok(Self {
            state,
            input: InputFlags::default(),
            clock,
            rng,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &InputFlags {
        &self.input
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::from_state(&self.state)
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Route a DOM key name; returns false for keys the game ignores
    pub fn key_event(&mut self, key_name: &str, pressed: bool) -> bool {
        match Key::from_key_name(key_name) {
            Some(key) if pressed => {
                self.key_down(key);
                true
            }
            Some(key) => {
                self.key_up(key);
                true
            }
            None => false,
        }
    }

    /// Start a fresh round measured from `timestamp_ms`
    pub fn restart(&mut self, timestamp_ms: f64) {
        self.state.reset();
        self.clock.anchor(timestamp_ms);
        log::info!("Round restarted");
    }

    /// Run one host frame. Returns the simulated step in seconds.
    ///
    /// A pending reset restarts the round and skips simulation for this frame.
    pub fn frame(&mut self, timestamp_ms: f64) -> f32 {
        if self.input.take_reset() {
            self.restart(timestamp_ms);
            return 0.0;
        }

        let dt = self.clock.delta(timestamp_ms);
        tick(&mut self.state, &mut self.input, dt, &mut self.rng);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{EndReason, ScriptedRandom};

    fn scripted() -> Game<ScriptedRandom> {
        Game::new(Tuning::default(), ScriptedRandom::new(vec![0.5])).unwrap()
    }

    #[test]
    fn test_frames_use_clamped_delta() {
        let mut game = scripted();
        assert_eq!(game.frame(1000.0), 0.0);
        assert!((game.frame(1016.0) - 0.016).abs() < 1e-6);
        // Tab suspended for five seconds
        assert_eq!(game.frame(6016.0), 0.1);
        assert!((game.state().time_left - (180.0 - 0.116)).abs() < 1e-3);
    }

    #[test]
    fn test_key_routing() {
        let mut game = scripted();
        assert!(game.key_event("ArrowUp", true));
        assert!(game.input().up);
        assert!(game.key_event("w", false));
        assert!(!game.input().up);
        assert!(!game.key_event("Escape", true));
    }

    #[test]
    fn test_reset_key_restarts_round() {
        let mut game = scripted();
        game.frame(0.0);
        game.state.time_left = 0.01;
        game.frame(100.0);
        assert_eq!(game.state().end_reason(), Some(EndReason::Timeout));
        assert!(game.hud().banner.is_some());

        game.key_event("r", true);
        assert_eq!(game.frame(5000.0), 0.0);
        assert!(game.state().is_running());
        assert_eq!(game.state().time_left, 180.0);
        // Clock re-anchored at the reset frame
        assert!((game.frame(5050.0) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_seeded_games_match() {
        let mut a = Game::seeded(Tuning::default(), 7).unwrap();
        let mut b = Game::seeded(Tuning::default(), 7).unwrap();
        for i in 0..300 {
            let t = i as f64 * 16.0;
            if i % 40 == 0 {
                a.key_down(Key::Left);
                b.key_down(Key::Left);
            }
            a.frame(t);
            b.frame(t);
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_rejects_invalid_tuning() {
        let backwards_clock = Tuning {
            max_frame_dt: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            Game::seeded(backwards_clock, 1),
            Err(TuningError::InvalidDimension {
                field: "max_frame_dt",
                ..
            })
        ));

        let no_lanes = Tuning {
            lane_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            Game::new(no_lanes, ScriptedRandom::new(vec![0.5])),
            Err(TuningError::InvalidLaneCount)
        ));
    }
}
