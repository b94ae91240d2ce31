//! Split Boards entry point
//!
//! Runs a headless game driven by a simple autopilot and logs the result.
//! A windowed host plugs in through `platform::InputSource` and
//! `renderer::Surface`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use glam::Vec2;

    use split_boards::Settings;
    use split_boards::platform::{InputSource, MouseButton, poll_input};
    use split_boards::sim::{GameEvent, GameState, tick};

    /// Five minutes at 60 fps
    const MAX_TICKS: u32 = 60 * 60 * 5;
    const VIEW_SIZE: Vec2 = Vec2::new(402.0, 302.0);

    /// Fake mouse that holds the button over the closest token
    #[derive(Debug, Default)]
    struct Autopilot {
        target: Option<Vec2>,
    }

    impl Autopilot {
        /// Aim at the token nearest to its own board's collector
        fn observe(&mut self, state: &GameState) {
            let registry = &state.registry;
            self.target = state
                .boards()
                .into_iter()
                .filter_map(|id| {
                    let board = registry.board(id)?;
                    let token = registry.token(board.token?)?;
                    let collector = registry.collector(board.collector)?;
                    Some((token.center, collector.center.distance_squared(token.center)))
                })
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(center, _)| center)
                .or(Some(state.view_size / 2.0));
        }
    }

    impl InputSource for Autopilot {
        fn is_down(&self, button: MouseButton) -> bool {
            button == MouseButton::PRIMARY && self.target.is_some()
        }

        fn mouse_position(&self) -> Option<Vec2> {
            self.target
        }
    }

    fn load_settings() -> Settings {
        let Some(path) = std::env::args().nth(1) else {
            return Settings::default();
        };
        match Settings::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings from {}: {}; using defaults", path, e);
                Settings::default()
            }
        }
    }

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(12345)
    }

    pub fn run() {
        let settings = load_settings();
        let mut state = GameState::new(clock_seed(), VIEW_SIZE, settings);
        let mut pilot = Autopilot::default();

        for _ in 0..MAX_TICKS {
            pilot.observe(&state);
            tick(&mut state, &poll_input(&pilot));

            for event in state.drain_events() {
                if let GameEvent::BoardSplit { parent, children } = event {
                    log::debug!("Board {} split into {} and {}", parent, children[0], children[1]);
                }
            }
            if state.is_over() {
                break;
            }
        }

        log::info!(
            "Finished: phase={:?} boards={} score={} ticks={}",
            state.phase,
            state.board_count(),
            state.score,
            state.time_ticks
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Split Boards (headless) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives the library directly
}
