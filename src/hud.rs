//! Heads-up display values
//!
//! Formats the numbers the HUD shows and picks the end-of-round banner.

use serde::Serialize;

use crate::sim::GameState;

pub const TIME_UP_MESSAGE: &str = "Time Up";
pub const CRASH_MESSAGE: &str = "Crash!";
pub const RESTART_PROMPT: &str = "Press R to Restart";

/// Text shown in the HUD for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    pub score: String,
    pub time: String,
    pub speed: String,
    /// Banner and prompt while the round is over
    pub banner: Option<(&'static str, &'static str)>,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: format_score(state.score),
            time: format_time(state.time_left),
            speed: format_speed(state.speed),
            banner: end_message(state).map(|msg| (msg, RESTART_PROMPT)),
        }
    }
}

/// Whole points, at least four digits
pub fn format_score(score: f32) -> String {
    format!("{:04}", score.max(0.0).floor() as u64)
}

/// Seconds rounded up, at least three digits
pub fn format_time(time_left: f32) -> String {
    format!("{:03}", time_left.max(0.0).ceil() as u64)
}

pub fn format_speed(speed: f32) -> String {
    format!("{}", speed.round() as i64)
}

/// Banner text once the round has ended
pub fn end_message(state: &GameState) -> Option<&'static str> {
    if state.is_running() {
        None
    } else if state.time_left <= 0.0 {
        Some(TIME_UP_MESSAGE)
    } else {
        Some(CRASH_MESSAGE)
    }
}
