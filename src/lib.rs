//! Auto Racer - A three-lane arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, spawning, scrolling, collisions)
//! - `game`: Owning context that threads state, input, clock and RNG through a frame
//! - `hud`: Heads-up display formatting and end-of-round messages
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod hud;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use hud::HudSnapshot;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (reference balance, see [`Tuning`])
pub mod consts {
    /// Playfield dimensions in pixels (y grows downward)
    pub const SCREEN_WIDTH: f32 = 360.0;
    pub const SCREEN_HEIGHT: f32 = 640.0;

    /// Road layout
    pub const ROAD_MARGIN: f32 = 48.0;
    pub const LANE_COUNT: u32 = 3;
    pub const LANE_LINE_WIDTH: f32 = 6.0;
    pub const LANE_DASH: f32 = 24.0;

    /// Player speed bounds (arbitrary speed units)
    pub const MIN_SPEED: f32 = 40.0;
    pub const START_SPEED: f32 = 60.0;
    pub const MAX_SPEED: f32 = 140.0;
    /// Throttle applied per tick while held; braking is deliberately stronger
    pub const ACCEL_STEP: f32 = 0.6;
    pub const BRAKE_STEP: f32 = 0.8;

    /// Round length in seconds
    pub const ROUND_DURATION: f32 = 180.0;

    /// Rival spawning
    pub const SPAWN_INTERVAL: f32 = 1.2;
    /// Retry delay when every lane is blocked near the top
    pub const SPAWN_COOLDOWN: f32 = 0.4;
    /// Rivals above this y still block their lane for new spawns
    pub const SPAWN_NEAR_THRESHOLD: f32 = 140.0;
    pub const SPAWN_Y: f32 = -64.0;
    pub const MAX_ENEMIES: usize = 5;
    /// Rival speed as a fraction of the player's speed at spawn time
    pub const RIVAL_SPEED_MIN_FACTOR: f32 = 0.7;
    pub const RIVAL_SPEED_MAX_FACTOR: f32 = 1.3;

    /// Car footprint (player and rivals share it)
    pub const CAR_WIDTH: f32 = 32.0;
    pub const CAR_HEIGHT: f32 = 56.0;
    /// Distance from the player's top edge to the bottom of the screen
    pub const PLAYER_BOTTOM_OFFSET: f32 = 90.0;

    /// Speed-to-pixels multiplier for the road scroll
    pub const SCROLL_FACTOR: f32 = 1.2;
    /// Score gained per scrolled pixel
    pub const SCORE_FACTOR: f32 = 0.4;
    /// Rivals this far below the screen are dropped
    pub const OFFSCREEN_MARGIN: f32 = 80.0;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
