//! Timer-gated rival spawning
//!
//! A rival only enters a lane that has no other rival still near the top of
//! the screen, so two cars never stack right on top of each other. Faster
//! player speeds shorten the interval between spawns.

use super::random::RandomSource;
use super::state::{GameState, Rival, RivalColor};

/// Advance the spawn timer and maybe add a rival.
///
/// Returns the lane a rival was spawned into.
pub fn try_spawn(state: &mut GameState, dt: f32, rng: &mut dyn RandomSource) -> Option<u32> {
    state.spawn_timer -= dt;
    if state.spawn_timer > 0.0 || state.enemies.len() >= state.tuning.max_enemies {
        return None;
    }

    let free_lanes = free_lanes(state);
    if free_lanes.is_empty() {
        // Every lane is blocked near the top; retry shortly
        state.spawn_timer = state.tuning.spawn_cooldown;
        log::trace!("No free lane, retrying in {}s", state.spawn_timer);
        return None;
    }

    let tuning = &state.tuning;
    let lane = free_lanes[rng.pick_index(free_lanes.len())];
    let speed_factor = rng.range(tuning.rival_speed_min_factor, tuning.rival_speed_max_factor);
    let color = RivalColor::ALL[rng.pick_index(RivalColor::ALL.len())];

    let rival = Rival {
        lane,
        y: tuning.spawn_y,
        width: tuning.car_width,
        height: tuning.car_height,
        speed: state.speed * speed_factor,
        color,
    };
    log::debug!(
        "Spawned {:?} rival in lane {} at speed {:.1}",
        rival.color,
        rival.lane,
        rival.speed
    );
    state.enemies.push(rival);
    state.spawn_timer = spawn_interval(state);

    Some(lane)
}

/// Lanes with no rival above the near-top threshold
pub fn free_lanes(state: &GameState) -> Vec<u32> {
    let threshold = state.tuning.spawn_near_threshold;
    (0..state.tuning.lane_count)
        .filter(|&lane| {
            !state
                .enemies
                .iter()
                .any(|e| e.lane == lane && e.y < threshold)
        })
        .collect()
}

/// Delay until the next spawn: 1.4x the base interval at minimum speed,
/// down to 0.6x at maximum speed
pub fn spawn_interval(state: &GameState) -> f32 {
    let slowness = 1.0 - state.tuning.normalized_speed(state.speed);
    state.tuning.spawn_interval * (0.6 + 0.8 * slowness)
}
