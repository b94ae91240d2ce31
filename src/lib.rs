//! Split Boards - collect tokens, split boards, dodge spikes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, board splitting)
//! - `math`: 2D vector helpers
//! - `renderer`: Drawing-surface boundary
//! - `platform`: Input-device boundary
//! - `settings`: Data-driven game balance

pub mod math;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Gap left between the window edge and the root board
    pub const ROOT_BOARD_MARGIN: f32 = 1.0;

    /// Pointer position used when no pointer is over the view
    pub const POINTER_SENTINEL: Vec2 = Vec2::new(-1.0, -1.0);
    /// Size of the synthetic pointer probe used for focus tests
    pub const POINTER_PROBE_SIZE: Vec2 = Vec2::new(1.0, 1.0);

    /// Draw ordering (lower is drawn first)
    pub const BOARD_ZINDEX: i32 = -1;
    pub const TOKEN_ZINDEX: i32 = 0;
    pub const SPIKE_ZINDEX: i32 = 0;
    pub const COLLECTOR_ZINDEX: i32 = 1;
}
