//! Rendering module
//!
//! The host owns the actual canvas. Everything here writes primitive draw
//! calls into a [`Surface`] and never reads it back.

pub mod shapes;

use glam::Vec2;

use crate::sim::{Entity, GameState};

/// RGBA color, components in `0.0..=1.0`
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const COLLECTOR: Color = [0.0, 0.0, 0.0, 1.0];
    pub const TOKEN: Color = [1.0, 0.8, 0.0, 1.0];
    pub const SPIKE: Color = [1.0, 0.4, 0.4, 1.0];
    pub const BOARD: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BOARD_FOCUSED: Color = [0.933, 0.933, 0.933, 1.0];
    pub const BOARD_OUTLINE: Color = [0.0, 0.0, 0.0, 1.0];
    pub const TEXT: Color = [0.0, 0.0, 0.0, 1.0];
    pub const GAME_OVER: Color = [1.0, 0.2, 0.2, 1.0];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
}

/// Drawing surface provided by the host
pub trait Surface {
    fn view_size(&self) -> Vec2;
    /// Fill the rectangle whose top-left corner is `min`
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color);
    fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle);
}

const INSTRUCTIONS: [&str; 3] = [
    "Click to direct black dot",
    "Collect yellow dots to speed up point scoring",
    "Avoid red dots",
];

/// Draw one entity
pub fn draw_entity(surface: &mut dyn Surface, entity: &Entity) {
    match entity {
        Entity::Board(board) => shapes::draw_board(surface, board),
        Entity::Collector(c) => shapes::draw_circle(surface, c.center, c.radius(), colors::COLLECTOR),
        Entity::Token(t) => shapes::draw_circle(surface, t.center, t.diameter / 2.0, colors::TOKEN),
        Entity::Spike(s) => shapes::draw_circle(surface, s.center, s.diameter / 2.0, colors::SPIKE),
    }
}

/// Draw a whole frame: entities by ascending z-index, then the HUD on top
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface) {
    for id in state.registry.draw_order() {
        if let Some(entity) = state.registry.get(id) {
            draw_entity(surface, entity);
        }
    }

    if state.is_over() {
        draw_game_over(state, surface);
    } else {
        draw_hud(state, surface);
    }
}

fn draw_hud(state: &GameState, surface: &mut dyn Surface) {
    let style = TextStyle {
        size: 14.0,
        color: colors::TEXT,
        align: TextAlign::Left,
    };
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        surface.fill_text(line, Vec2::new(8.0, 20.0 + 15.0 * i as f32), style);
    }
    let score = format!("Score: {}", state.score);
    surface.fill_text(&score, Vec2::new(8.0, 20.0 + 15.0 * INSTRUCTIONS.len() as f32), style);
}

fn draw_game_over(state: &GameState, surface: &mut dyn Surface) {
    let center = surface.view_size() / 2.0 + Vec2::new(0.0, 9.0);
    let style = TextStyle {
        size: 30.0,
        color: colors::GAME_OVER,
        align: TextAlign::Center,
    };
    surface.fill_text("GAME OVER", center, style);

    let score_style = TextStyle { size: 14.0, ..style };
    let score = format!("Score: {}", state.score);
    surface.fill_text(&score, center + Vec2::new(0.0, 24.0), score_style);
}
