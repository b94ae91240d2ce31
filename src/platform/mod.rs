//! Platform abstraction layer
//!
//! The host engine owns the input device; the simulation only sees a polled
//! [`TickInput`] snapshot per frame.

use glam::Vec2;

use crate::sim::TickInput;

/// Mouse buttons the host can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Button that steers the collector
    pub const PRIMARY: MouseButton = MouseButton::Left;
}

/// Polled input device supplied by the host
pub trait InputSource {
    /// Whether `button` is currently held
    fn is_down(&self, button: MouseButton) -> bool;
    /// Pointer position in view coordinates, `None` when off the view
    fn mouse_position(&self) -> Option<Vec2>;
}

/// Sample the input device for one tick
pub fn poll_input(source: &dyn InputSource) -> TickInput {
    TickInput {
        pointer: source.mouse_position(),
        primary_down: source.is_down(MouseButton::PRIMARY),
    }
}
