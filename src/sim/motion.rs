//! Road scrolling and collision detection
//!
//! The player's car stays at a fixed screen height; the world moves past it.
//! Each rival moves down by the player's travel minus its own, so slower
//! rivals close in and faster ones pull away.

use glam::Vec2;

use super::lane::lane_center;
use super::state::{EndReason, GameState, Player, Rival};
use crate::tuning::Tuning;

/// Axis-aligned box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Box of `size` horizontally centered on `center_x` with its top at `top`
    pub fn centered_x(center_x: f32, top: f32, size: Vec2) -> Self {
        Self::new(Vec2::new(center_x - size.x / 2.0, top), size)
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Overlap test; touching edges count as overlapping
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        !(a_max.x < other.min.x
            || self.min.x > b_max.x
            || a_max.y < other.min.y
            || self.min.y > b_max.y)
    }
}

pub fn player_box(tuning: &Tuning, player: &Player) -> Aabb {
    Aabb::centered_x(
        lane_center(tuning, player.lane),
        player.y,
        Vec2::new(player.width, player.height),
    )
}

pub fn rival_box(tuning: &Tuning, rival: &Rival) -> Aabb {
    Aabb::centered_x(
        lane_center(tuning, rival.lane),
        rival.y,
        Vec2::new(rival.width, rival.height),
    )
}

pub fn check_collision(tuning: &Tuning, player: &Player, rival: &Rival) -> bool {
    player_box(tuning, player).overlaps(&rival_box(tuning, rival))
}

/// Apparent forward travel this tick, in pixels
#[inline]
pub fn scroll_delta(tuning: &Tuning, speed: f32, dt: f32) -> f32 {
    speed * dt * tuning.scroll_factor
}

/// Scroll the road, score the distance, move rivals and test for crashes.
///
/// Returns true if the player crashed this tick.
pub fn advance(state: &mut GameState, dt: f32) -> bool {
    if !state.is_running() {
        return false;
    }

    let scroll = scroll_delta(&state.tuning, state.speed, dt);
    state.score += scroll * state.tuning.score_factor;

    let exit_y = state.tuning.screen_height + state.tuning.offscreen_margin;
    state.enemies.retain(|e| e.y < exit_y);
    for rival in &mut state.enemies {
        rival.y += scroll - rival.speed * dt;
    }

    let crashed = state
        .enemies
        .iter()
        .any(|rival| check_collision(&state.tuning, &state.player, rival));
    if crashed {
        state.end(EndReason::Collision);
    }
    crashed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RivalColor;

    fn rival(lane: u32, y: f32, speed: f32) -> Rival {
        Rival {
            lane,
            y,
            width: 32.0,
            height: 56.0,
            speed,
            color: RivalColor::Cyan,
        }
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0))));
        // Shared edge counts
        assert!(a.overlaps(&Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0))));
        assert!(!a.overlaps(&Aabb::new(Vec2::new(10.5, 0.0), Vec2::new(10.0, 10.0))));
        assert!(!a.overlaps(&Aabb::new(Vec2::new(0.0, -10.5), Vec2::new(10.0, 10.0))));
    }

    #[test]
    fn test_same_lane_vertical_overlap_collides() {
        let state = GameState::default();
        let player = &state.player;
        for dy in [-55.0, -20.0, 0.0, 20.0, 55.0] {
            let r = rival(player.lane, player.y + dy, 60.0);
            assert!(check_collision(&state.tuning, player, &r), "dy={dy}");
        }
    }

    #[test]
    fn test_other_lane_never_collides() {
        let state = GameState::default();
        let player = &state.player;
        for lane in [0, 2] {
            let r = rival(lane, player.y, 60.0);
            assert!(!check_collision(&state.tuning, player, &r));
        }
    }

    #[test]
    fn test_advance_scores_distance() {
        let mut state = GameState::default();
        let crashed = advance(&mut state, 0.1);
        assert!(!crashed);
        // 60 * 0.1 * 1.2 * 0.4
        assert!((state.score - 2.88).abs() < 1e-4);
    }

    #[test]
    fn test_relative_motion() {
        let mut state = GameState::default();
        state.enemies.push(rival(0, 0.0, 30.0));
        state.enemies.push(rival(2, 0.0, 120.0));
        advance(&mut state, 0.1);
        // scroll = 7.2; slower rival closes in, faster one recedes
        assert!((state.enemies[0].y - 4.2).abs() < 1e-4);
        assert!((state.enemies[1].y + 4.8).abs() < 1e-4);
    }

    #[test]
    fn test_offscreen_rivals_removed() {
        let mut state = GameState::default();
        state.enemies.push(rival(0, 720.0, 60.0));
        state.enemies.push(rival(0, 719.0, 60.0));
        advance(&mut state, 0.1);
        assert_eq!(state.enemies.len(), 1);
        assert!((state.enemies[0].y - 720.2).abs() < 1e-3);
        // Removed on the following tick
        advance(&mut state, 0.1);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_collision_ends_round() {
        let mut state = GameState::default();
        let y = state.player.y;
        state.enemies.push(rival(1, y - 30.0, 60.0));
        assert!(advance(&mut state, 0.1));
        assert_eq!(state.end_reason(), Some(EndReason::Collision));

        // Nothing moves once ended
        let frozen = state.clone();
        assert!(!advance(&mut state, 0.1));
        assert_eq!(state, frozen);
    }
}
