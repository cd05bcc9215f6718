//! Per-frame simulation step
//!
//! Order within a live tick: round timer, player controls, spawner, then
//! motion and collision. An ended round is never mutated.

use super::input::InputFlags;
use super::lane::clamp_lane;
use super::motion::advance;
use super::random::RandomSource;
use super::spawner::try_spawn;
use super::state::{EndReason, GameState};

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &mut InputFlags, dt: f32, rng: &mut dyn RandomSource) {
    if !state.is_running() {
        return;
    }

    state.time_left -= dt;
    if state.time_left <= 0.0 {
        state.time_left = 0.0;
        state.end(EndReason::Timeout);
        return;
    }
    state.elapsed_ticks += 1;

    apply_controls(state, input);
    try_spawn(state, dt, rng);
    advance(state, dt);
}

/// Apply steering (one lane per press) and throttle (every tick while held)
pub fn apply_controls(state: &mut GameState, input: &mut InputFlags) {
    if !state.is_running() {
        return;
    }

    let step = input.take_lane_change();
    if step != 0 {
        state.player.lane = clamp_lane(&state.tuning, state.player.lane as i64 + step);
    }

    let tuning = &state.tuning;
    if input.up {
        state.speed = (state.speed + tuning.accel_step).min(tuning.max_speed);
    }
    if input.down {
        state.speed = (state.speed - tuning.brake_step).max(tuning.min_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Key;
    use crate::sim::random::{ScriptedRandom, SeededRandom};
    use crate::sim::state::{GamePhase, Rival, RivalColor};

    #[test]
    fn test_first_tick_from_start() {
        let mut state = GameState::default();
        let mut input = InputFlags::default();
        // lane 0.99 -> lane 2, speed 0.5 -> 1.0x player speed, color 0.3 -> Cyan
        let mut rng = ScriptedRandom::new(vec![0.99, 0.5, 0.3]);

        tick(&mut state, &mut input, 0.1, &mut rng);

        assert!(state.is_running());
        assert_eq!(state.elapsed_ticks, 1);
        assert!((state.time_left - 179.9).abs() < 1e-4);
        assert!((state.score - 2.88).abs() < 1e-4);
        assert_eq!(state.player.lane, 1);
        assert_eq!(state.speed, 60.0);

        assert_eq!(state.enemies.len(), 1);
        let rival = &state.enemies[0];
        assert_eq!(rival.lane, 2);
        assert_eq!(rival.color, RivalColor::Cyan);
        // Spawned at -64, then moved by 7.2 - 60 * 0.1 in the same tick
        assert!((rival.y - (-62.8)).abs() < 1e-4);
        // Next spawn after 1.2 * 1.24 seconds
        assert!((state.spawn_timer - 1.488).abs() < 1e-4);
    }

    #[test]
    fn test_timeout_clamps_and_freezes() {
        let mut state = GameState::default();
        state.time_left = 0.05;
        let mut input = InputFlags::default();
        let mut rng = ScriptedRandom::new(vec![0.5]);

        tick(&mut state, &mut input, 0.1, &mut rng);
        assert_eq!(state.time_left, 0.0);
        assert_eq!(state.phase, GamePhase::Ended(EndReason::Timeout));
        // Timeout short-circuits before scoring or spawning
        assert_eq!(state.elapsed_ticks, 0);
        assert_eq!(state.score, 0.0);
        assert!(state.enemies.is_empty());

        let frozen = state.clone();
        input.key_down(Key::Left);
        input.key_down(Key::Throttle);
        tick(&mut state, &mut input, 0.1, &mut rng);
        assert_eq!(state, frozen);
        // Ended ticks leave pending input alone
        assert!(input.left);
    }

    #[test]
    fn test_lane_change_once_per_press() {
        let mut state = GameState::default();
        let mut input = InputFlags::default();
        let mut rng = ScriptedRandom::new(vec![0.0]);
        // Keep the spawner out of the way
        state.spawn_timer = 100.0;

        input.key_down(Key::Left);
        tick(&mut state, &mut input, 0.016, &mut rng);
        assert_eq!(state.player.lane, 0);
        tick(&mut state, &mut input, 0.016, &mut rng);
        assert_eq!(state.player.lane, 0);

        // Already at the edge: clamped, flag still consumed
        input.key_down(Key::Left);
        tick(&mut state, &mut input, 0.016, &mut rng);
        assert_eq!(state.player.lane, 0);
        assert!(!input.left);

        for _ in 0..5 {
            input.key_down(Key::Right);
            tick(&mut state, &mut input, 0.016, &mut rng);
        }
        assert_eq!(state.player.lane, 2);
    }

    #[test]
    fn test_throttle_bounds() {
        let mut state = GameState::default();
        let mut input = InputFlags::default();
        input.key_down(Key::Throttle);
        for _ in 0..500 {
            apply_controls(&mut state, &mut input);
            assert!(state.speed <= state.tuning.max_speed);
        }
        assert_eq!(state.speed, 140.0);

        input.key_up(Key::Throttle);
        input.key_down(Key::Brake);
        for _ in 0..500 {
            apply_controls(&mut state, &mut input);
            assert!(state.speed >= state.tuning.min_speed);
        }
        assert_eq!(state.speed, 40.0);
    }

    #[test]
    fn test_brake_is_stronger_than_throttle() {
        let mut state = GameState::default();
        let mut input = InputFlags::default();
        input.key_down(Key::Throttle);
        apply_controls(&mut state, &mut input);
        assert!((state.speed - 60.6).abs() < 1e-4);

        input.key_up(Key::Throttle);
        input.key_down(Key::Brake);
        apply_controls(&mut state, &mut input);
        assert!((state.speed - 59.8).abs() < 1e-4);
    }

    #[test]
    fn test_crash_ends_round() {
        let mut state = GameState::default();
        state.spawn_timer = 100.0;
        let y = state.player.y;
        state.enemies.push(Rival {
            lane: 1,
            y: y - 10.0,
            width: 32.0,
            height: 56.0,
            speed: 60.0,
            color: RivalColor::Purple,
        });
        let mut input = InputFlags::default();
        let mut rng = ScriptedRandom::new(vec![0.0]);
        tick(&mut state, &mut input, 0.016, &mut rng);
        assert_eq!(state.end_reason(), Some(EndReason::Collision));
    }

    #[test]
    fn test_dodging_avoids_crash() {
        let mut state = GameState::default();
        state.spawn_timer = 100.0;
        let y = state.player.y;
        state.enemies.push(Rival {
            lane: 1,
            y: y - 10.0,
            width: 32.0,
            height: 56.0,
            speed: 60.0,
            color: RivalColor::Purple,
        });
        let mut input = InputFlags::default();
        input.key_down(Key::Right);
        let mut rng = ScriptedRandom::new(vec![0.0]);
        tick(&mut state, &mut input, 0.016, &mut rng);
        assert!(state.is_running());
        assert_eq!(state.player.lane, 2);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::default();
        let mut state2 = GameState::default();
        let mut rng1 = SeededRandom::new(99999);
        let mut rng2 = SeededRandom::new(99999);

        for i in 0..600 {
            let mut input1 = InputFlags {
                up: i % 3 == 0,
                left: i % 50 == 0,
                right: i % 70 == 0,
                ..Default::default()
            };
            let mut input2 = input1;
            tick(&mut state1, &mut input1, 1.0 / 60.0, &mut rng1);
            tick(&mut state2, &mut input2, 1.0 / 60.0, &mut rng2);
            assert_eq!(state1, state2);
        }
    }
}
