//! Player input flags
//!
//! Key handlers write flags asynchronously; the tick reads them once per frame.
//! Lane changes and reset are edge-triggered (consumed when observed),
//! throttle and brake are level-triggered (held until key-up).

use serde::{Deserialize, Serialize};

/// Logical keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Throttle,
    Brake,
    Reset,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value (case-insensitive)
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "arrowleft" | "a" => Some(Key::Left),
            "arrowright" | "d" => Some(Key::Right),
            "arrowup" | "w" => Some(Key::Throttle),
            "arrowdown" | "s" => Some(Key::Brake),
            "r" => Some(Key::Reset),
            _ => None,
        }
    }
}

/// Input state shared between key handlers and the tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub reset: bool,
}

impl InputFlags {
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Throttle => self.up = true,
            Key::Brake => self.down = true,
            Key::Reset => self.reset = true,
        }
    }

    /// Only the held throttle flags react to key-up
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Throttle => self.up = false,
            Key::Brake => self.down = false,
            Key::Left | Key::Right | Key::Reset => {}
        }
    }

    /// Consume at most one pending lane change: -1, +1 or 0.
    ///
    /// Left wins when both are pending; a pending right waits for the next tick.
    pub fn take_lane_change(&mut self) -> i64 {
        if self.left {
            self.left = false;
            -1
        } else if self.right {
            self.right = false;
            1
        } else {
            0
        }
    }

    /// Consume a pending reset request
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset)
    }
}
