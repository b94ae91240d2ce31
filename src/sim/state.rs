//! Game state and run control
//!
//! `GameState` owns the registry of live entities, the seeded RNG and the
//! run phase. Boards report back to it through `over()`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::{self, BoardSpec};
use super::collision::Rect;
use super::registry::{EntityId, EntityKind, Registry};
use crate::consts::ROOT_BOARD_MARGIN;
use crate::settings::Settings;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board is laid out, waiting for the first click
    Ready,
    /// Active gameplay
    Running,
    /// A collector touched a spike
    Over,
}

/// Notable things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    TokenCollected { board: EntityId },
    BoardSplit { parent: EntityId, children: [EntityId; 2] },
    GameOver { board: Option<EntityId> },
    Restarted { seed: u64 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub settings: Settings,
    /// Size of the drawing surface the root board fills
    pub view_size: Vec2,
    pub registry: Registry,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter (running ticks only)
    pub time_ticks: u64,
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with its root board laid out
    pub fn new(seed: u64, view_size: Vec2, settings: Settings) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings,
            view_size,
            registry: Registry::new(),
            phase: GamePhase::Ready,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        };
        state.spawn_root_board();
        log::info!("New game: seed={} view={}", seed, view_size);
        state
    }

    /// The root board fills the view, leaving a margin on each side
    pub fn root_rect(&self) -> Rect {
        let size = self.view_size - Vec2::splat(ROOT_BOARD_MARGIN * 2.0);
        Rect::new(size / 2.0 + Vec2::splat(ROOT_BOARD_MARGIN), size)
    }

    fn spawn_root_board(&mut self) -> EntityId {
        let spec = BoardSpec::new(self.root_rect());
        board::spawn(&mut self.registry, spec, &mut self.rng, &self.settings)
    }

    /// Leave the ready screen
    pub fn start(&mut self) {
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Running;
            log::info!("Run started");
        }
    }

    /// End the run. Called when `board`'s collector hits a spike.
    pub fn over(&mut self, board: Option<EntityId>) {
        if self.phase == GamePhase::Over {
            return;
        }
        self.phase = GamePhase::Over;
        self.events.push(GameEvent::GameOver { board });
        log::info!(
            "Game over after {} ticks: score={} boards={}",
            self.time_ticks,
            self.score,
            self.board_count()
        );
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Throw away every entity and start a fresh run
    pub fn restart(&mut self, seed: u64) {
        self.registry.clear();
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.score = 0;
        self.time_ticks = 0;
        self.spawn_root_board();
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Restarted { seed });
        log::info!("Game restarted with seed: {}", seed);
    }

    /// Live board ids in creation order
    pub fn boards(&self) -> Vec<EntityId> {
        self.registry
            .all(Some(EntityKind::Board))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn board_count(&self) -> usize {
        self.registry.count(EntityKind::Board)
    }

    /// Score gained per running tick, growing exponentially with the board count
    pub fn points_per_tick(&self) -> u64 {
        match self.board_count() {
            0 => 0,
            n => {
                let exp = u32::try_from(n - 1).unwrap_or(u32::MAX);
                self.settings.score_base.saturating_pow(exp)
            }
        }
    }

    /// Take the events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
