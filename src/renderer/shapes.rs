//! Shape helpers shared by every drawable

use glam::Vec2;

use super::{Color, Surface, colors};
use crate::sim::Board;

/// Filled circle, shared by collectors, tokens and spikes
#[inline]
pub fn draw_circle(surface: &mut dyn Surface, center: Vec2, radius: f32, color: Color) {
    surface.fill_circle(center, radius, color);
}

/// Board background (shaded while focused) with a black outline
pub fn draw_board(surface: &mut dyn Surface, board: &Board) {
    let fill = if board.focused {
        colors::BOARD_FOCUSED
    } else {
        colors::BOARD
    };
    let (min, size) = (board.rect.min(), board.rect.size);
    surface.fill_rect(min, size, fill);
    surface.stroke_rect(min, size, colors::BOARD_OUTLINE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::tests::{Call, RecordingSurface};
    use crate::sim::{EntityId, Rect};

    #[test]
    fn test_focused_board_is_shaded() {
        let mut board = Board {
            rect: Rect::new(Vec2::new(50.0, 50.0), Vec2::new(100.0, 60.0)),
            focused: true,
            wall_thickness: 1.0,
            collector: EntityId::from_raw(2),
            token: None,
            spikes: Vec::new(),
        };
        let mut surface = RecordingSurface::new(Vec2::new(200.0, 200.0));
        draw_board(&mut surface, &board);
        board.focused = false;
        draw_board(&mut surface, &board);

        let min = Vec2::new(0.0, 20.0);
        let size = Vec2::new(100.0, 60.0);
        assert_eq!(
            surface.calls,
            vec![
                Call::FillRect(min, size, colors::BOARD_FOCUSED),
                Call::StrokeRect(min, size, colors::BOARD_OUTLINE),
                Call::FillRect(min, size, colors::BOARD),
                Call::StrokeRect(min, size, colors::BOARD_OUTLINE),
            ]
        );
    }
}
