//! Lane geometry
//!
//! Maps lane indices to horizontal pixel positions on the road.

use crate::tuning::Tuning;

/// Width of a single lane in pixels
#[inline]
pub fn lane_width(tuning: &Tuning) -> f32 {
    (tuning.screen_width - tuning.road_margin * 2.0) / tuning.lane_count as f32
}

/// Horizontal center of `lane` in pixels
#[inline]
pub fn lane_center(tuning: &Tuning, lane: u32) -> f32 {
    tuning.road_margin + lane_width(tuning) * (lane as f32 + 0.5)
}

/// Clamp a lane index into the road
#[inline]
pub fn clamp_lane(tuning: &Tuning, lane: i64) -> u32 {
    lane.clamp(0, (tuning.lane_count as i64 - 1).max(0)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_width() {
        let tuning = Tuning::default();
        assert_eq!(lane_width(&tuning), 88.0);
    }

    #[test]
    fn test_lane_centers() {
        let tuning = Tuning::default();
        assert_eq!(lane_center(&tuning, 0), 92.0);
        assert_eq!(lane_center(&tuning, 1), 180.0);
        assert_eq!(lane_center(&tuning, 2), 268.0);
        // Middle lane sits on the screen's center line
        assert_eq!(lane_center(&tuning, 1), tuning.screen_width / 2.0);
    }

    #[test]
    fn test_clamp_lane() {
        let tuning = Tuning::default();
        assert_eq!(clamp_lane(&tuning, -1), 0);
        assert_eq!(clamp_lane(&tuning, 1), 1);
        assert_eq!(clamp_lane(&tuning, 7), 2);
    }

    #[test]
    fn test_clamp_lane_without_lanes() {
        let tuning = Tuning {
            lane_count: 0,
            ..Default::default()
        };
        assert_eq!(clamp_lane(&tuning, 1), 0);
        assert_eq!(clamp_lane(&tuning, -1), 0);
    }
}
