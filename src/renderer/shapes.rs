//! Shape generation for the road scene
//!
//! Everything is built from axis-aligned rectangles in screen pixels
//! (origin top-left, y down); the pipeline maps them to clip space.

use super::vertex::{Vertex, colors, rival_color};
use crate::consts::{LANE_DASH, LANE_LINE_WIDTH};
use crate::sim::GameState;
use crate::sim::lane::{lane_center, lane_width};
use crate::tuning::Tuning;

/// Two triangles covering `(x, y, w, h)`
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> [Vertex; 6] {
    let (x1, y1) = (x + w, y + h);
    [
        Vertex::new(x, y, color),
        Vertex::new(x, y1, color),
        Vertex::new(x1, y, color),
        Vertex::new(x1, y, color),
        Vertex::new(x, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Grass background and asphalt strip
pub fn road(tuning: &Tuning) -> Vec<Vertex> {
    let road_width = tuning.screen_width - tuning.road_margin * 2.0;
    let mut vertices = Vec::with_capacity(12);
    vertices.extend(rect(
        0.0,
        0.0,
        tuning.screen_width,
        tuning.screen_height,
        colors::GRASS,
    ));
    vertices.extend(rect(
        tuning.road_margin,
        0.0,
        road_width,
        tuning.screen_height,
        colors::ASPHALT,
    ));
    vertices
}

/// Dashed dividers between adjacent lanes
pub fn lane_dividers(tuning: &Tuning) -> Vec<Vertex> {
    let spacing = lane_width(tuning);
    let mut vertices = Vec::new();
    for i in 1..tuning.lane_count {
        let x = tuning.road_margin + spacing * i as f32 - LANE_LINE_WIDTH / 2.0;
        let mut y = 0.0;
        while y < tuning.screen_height {
            let len = LANE_DASH.min(tuning.screen_height - y);
            vertices.extend(rect(x, y, LANE_LINE_WIDTH, len, colors::LANE_LINE));
            y += LANE_DASH * 2.0;
        }
    }
    vertices
}

/// Player and rival cars
pub fn cars(state: &GameState) -> Vec<Vertex> {
    let tuning = &state.tuning;
    let mut vertices = Vec::with_capacity((state.enemies.len() + 1) * 6);

    let player = &state.player;
    let px = lane_center(tuning, player.lane) - player.width / 2.0;
    vertices.extend(rect(px, player.y, player.width, player.height, colors::PLAYER));

    for rival in &state.enemies {
        let rx = lane_center(tuning, rival.lane) - rival.width / 2.0;
        vertices.extend(rect(
            rx,
            rival.y,
            rival.width,
            rival.height,
            rival_color(rival.color),
        ));
    }
    vertices
}

/// Full frame: road, dividers, cars, and a shade once the round is over
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let tuning = &state.tuning;
    let mut vertices = road(tuning);
    vertices.extend(lane_dividers(tuning));
    vertices.extend(cars(state));
    if !state.is_running() {
        vertices.extend(rect(
            0.0,
            0.0,
            tuning.screen_width,
            tuning.screen_height,
            colors::GAME_OVER_SHADE,
        ));
    }
    vertices
}
