//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied, clamped timestep
//! - Injected RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod input;
pub mod lane;
pub mod motion;
pub mod random;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use input::{InputFlags, Key};
pub use lane::{lane_center, lane_width};
pub use motion::{Aabb, advance, check_collision};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use spawner::try_spawn;
pub use state::{EndReason, GamePhase, GameState, Player, Rival, RivalColor};
pub use tick::{apply_controls, tick};
