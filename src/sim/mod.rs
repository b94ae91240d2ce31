//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed per-frame speed
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod bodies;
pub mod board;
pub mod collision;
pub mod registry;
pub mod split;
pub mod state;
pub mod tick;

pub use bodies::{Collector, Spike, Token};
pub use board::{Board, BoardEvent, BoardSpec};
pub use collision::{Collidable, Rect, Shape, Side, is_intersecting};
pub use registry::{Entity, EntityId, EntityKind, Registry};
pub use split::{SplitAxis, split_board};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
