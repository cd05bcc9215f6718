//! Game state and core simulation types
//!
//! Everything the renderer and HUD read each frame lives here.

use serde::{Deserialize, Serialize};

use crate::tuning::{Tuning, TuningError};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The round timer ran out
    Timeout,
    /// The player hit a rival
    Collision,
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Live gameplay
    Running,
    /// Round over; only a reset leaves this phase
    Ended(EndReason),
}

/// Rival paint colors (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RivalColor {
    Green,
    Cyan,
    Purple,
    Coral,
}

impl RivalColor {
    pub const ALL: [RivalColor; 4] = [
        RivalColor::Green,
        RivalColor::Cyan,
        RivalColor::Purple,
        RivalColor::Coral,
    ];
}

/// The player's car. Only the lane changes during a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub lane: u32,
    /// Screen y of the top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            lane: tuning.center_lane(),
            y: tuning.player_y(),
            width: tuning.car_width,
            height: tuning.car_height,
        }
    }
}

/// A rival car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rival {
    pub lane: u32,
    /// Screen y of the top edge (negative while above the view)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Own forward speed, fixed at spawn
    pub speed: f32,
    pub color: RivalColor,
}

/// Complete round state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Active rivals in spawn order
    pub enemies: Vec<Rival>,
    pub score: f32,
    /// Seconds remaining in the round
    pub time_left: f32,
    pub speed: f32,
    /// Countdown to the next spawn attempt
    pub spawn_timer: f32,
    /// Live ticks simulated this round
    pub elapsed_ticks: u64,
}

impl GameState {
    /// Fresh round; rejects tuning the simulation can't run with
    pub fn new(tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::with_valid_tuning(tuning))
    }

    fn with_valid_tuning(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Running,
            player: Player::new(&tuning),
            enemies: Vec::with_capacity(tuning.max_enemies),
            score: 0.0,
            time_left: tuning.duration,
            speed: tuning.start_speed,
            // Starts depleted so the first tick may spawn
            spawn_timer: 0.0,
            elapsed_ticks: 0,
            tuning,
        }
    }

    /// Restore every field to its start-of-round value
    pub fn reset(&mut self) {
        let tuning = self.tuning.clone();
        *self = Self::with_valid_tuning(tuning);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.phase {
            GamePhase::Running => None,
            GamePhase::Ended(reason) => Some(reason),
        }
    }

    /// Enter the terminal phase. The first reason sticks.
    pub fn end(&mut self, reason: EndReason) {
        if self.is_running() {
            self.phase = GamePhase::Ended(reason);
            log::info!(
                "Round ended ({:?}) score={:.0} time_left={:.1} ticks={}",
                reason,
                self.score,
                self.time_left,
                self.elapsed_ticks
            );
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_valid_tuning(Tuning::default())
    }
}
