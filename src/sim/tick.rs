//! Per-frame simulation tick
//!
//! One tick updates every live entity once, in creation order, from a
//! snapshot of ids taken at the start of the sweep. Entities created during
//! the sweep wait for the next tick. Entities destroyed during it are skipped.

use glam::Vec2;

use super::board::{self, BoardEvent};
use super::registry::{EntityId, EntityKind, Registry};
use super::split::split_board;
use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer position, `None` when no pointer is over the view
    pub pointer: Option<Vec2>,
    /// Primary (left) button held
    pub primary_down: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Over => return,
        GamePhase::Ready => {
            for id in state.boards() {
                if let Some(board) = state.registry.board_mut(id) {
                    board.refresh_focus(input.pointer);
                }
            }
            // The first click only starts the run
            if input.primary_down {
                state.start();
            }
            return;
        }
        GamePhase::Running => {}
    }

    state.time_ticks += 1;

    for id in state.registry.ids() {
        let Some(kind) = state.registry.get(id).map(|e| e.kind()) else {
            continue; // Destroyed earlier in this sweep
        };

        match kind {
            EntityKind::Board => match board::update(&mut state.registry, id, input.pointer) {
                Some(BoardEvent::TokenCollected) => {
                    state.events.push(GameEvent::TokenCollected { board: id });
                    if let Some(children) =
                        split_board(&mut state.registry, id, &mut state.rng, &state.settings)
                    {
                        state.events.push(GameEvent::BoardSplit {
                            parent: id,
                            children,
                        });
                    }
                }
                Some(BoardEvent::SpikeHit) => {
                    state.over(Some(id));
                    break;
                }
                None => {}
            },
            EntityKind::Collector => update_collector(&mut state.registry, id, input),
            // Tokens and spikes never move
            EntityKind::Token | EntityKind::Spike => {}
        }
    }

    if state.phase == GamePhase::Running {
        state.score = state.score.saturating_add(state.points_per_tick());
    }
}

fn update_collector(registry: &mut Registry, id: EntityId, input: &TickInput) {
    let Some(owner) = registry.collector(id).map(|c| c.board) else {
        return;
    };
    let Some(board) = registry.board(owner) else {
        return;
    };
    let (arena, focused, wall_thickness) = (board.rect, board.focused, board.wall_thickness);

    if let Some(collector) = registry.collector_mut(id) {
        collector.update(&arena, focused, input, wall_thickness);
    }
}
