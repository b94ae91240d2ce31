//! Boards: rectangular play regions
//!
//! A board exclusively owns one collector, at most one token and one or more
//! spikes. Destroying a board destroys all of them in the same step.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bodies::{Collector, Spike, Token, random_direction};
use super::collision::{Collidable, Rect, Side, is_intersecting};
use super::registry::{Entity, EntityId, Registry};
use crate::consts::{POINTER_PROBE_SIZE, POINTER_SENTINEL};
use crate::settings::Settings;

/// A rectangular region of play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub rect: Rect,
    /// True while the pointer overlaps the board
    pub focused: bool,
    pub wall_thickness: f32,
    pub collector: EntityId,
    pub token: Option<EntityId>,
    pub spikes: Vec<EntityId>,
}

impl Board {
    #[inline]
    pub fn area(&self) -> f32 {
        self.rect.area()
    }

    pub fn top(&self) -> Rect {
        self.rect.side(Side::Top, self.wall_thickness)
    }

    pub fn bottom(&self) -> Rect {
        self.rect.side(Side::Bottom, self.wall_thickness)
    }

    pub fn left(&self) -> Rect {
        self.rect.side(Side::Left, self.wall_thickness)
    }

    pub fn right(&self) -> Rect {
        self.rect.side(Side::Right, self.wall_thickness)
    }

    /// Focus the board while a 1x1 probe at the pointer overlaps it
    pub fn refresh_focus(&mut self, pointer: Option<Vec2>) {
        let probe = Rect::new(pointer.unwrap_or(POINTER_SENTINEL), POINTER_PROBE_SIZE);
        self.focused = is_intersecting(&self.rect, &probe);
    }
}

impl Collidable for Board {
    fn center(&self) -> Vec2 {
        self.rect.center
    }

    fn size(&self) -> Vec2 {
        self.rect.size
    }
}

/// What a board needs to be built. Anything left as `None` is generated:
/// collector at the center with a random heading, spikes at random
/// positions. `Some` spike centers are used as given, even when empty.
#[derive(Debug, Clone)]
pub struct BoardSpec {
    pub rect: Rect,
    pub collector_center: Option<Vec2>,
    pub collector_vector: Option<Vec2>,
    pub spike_centers: Option<Vec<Vec2>>,
    pub spawn_token: bool,
}

impl BoardSpec {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            collector_center: None,
            collector_vector: None,
            spike_centers: None,
            spawn_token: true,
        }
    }
}

/// Outcome of a board update that the controller must act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// The collector reached the token; the board must split
    TokenCollected,
    /// The collector touched a spike; the run is over
    SpikeHit,
}

/// Create a board together with its collector, token and spikes
pub fn spawn<R: Rng + ?Sized>(
    registry: &mut Registry,
    spec: BoardSpec,
    rng: &mut R,
    settings: &Settings,
) -> EntityId {
    registry.create_with(|id, registry| {
        let rect = spec.rect;
        let vector = spec
            .collector_vector
            .unwrap_or_else(|| random_direction(&mut *rng));
        let collector = Collector::new(
            id,
            spec.collector_center.unwrap_or(rect.center),
            vector,
            settings.collector_diameter,
            settings.collector_speed,
        );
        let attempts = settings.spawn_attempts;

        let token = spec.spawn_token.then(|| {
            let center =
                clear_position(&mut *rng, &rect, settings.token_diameter, &collector, attempts);
            registry.create(Token {
                center,
                diameter: settings.token_diameter,
            })
        });

        let spike_centers = spec.spike_centers.unwrap_or_else(|| {
            (0..settings.spikes_per_board)
                .map(|_| clear_position(&mut *rng, &rect, settings.spike_diameter, &collector, attempts))
                .collect()
        });
        let spikes = spike_centers
            .into_iter()
            .map(|center| {
                registry.create(Spike {
                    center,
                    diameter: settings.spike_diameter,
                })
            })
            .collect();

        log::debug!(
            "Board {} spawned: size={} center={} token={}",
            id,
            rect.size,
            rect.center,
            token.is_some()
        );

        let collector = registry.create(collector);
        Entity::Board(Board {
            rect,
            focused: false,
            wall_thickness: settings.wall_thickness,
            collector,
            token,
            spikes,
        })
    })
}

/// Refresh focus, then check for a token pickup and a spike hit.
///
/// The token is checked first. When it is collected the spike check is
/// skipped, since the board is about to be replaced.
pub fn update(registry: &mut Registry, id: EntityId, pointer: Option<Vec2>) -> Option<BoardEvent> {
    registry.board_mut(id)?.refresh_focus(pointer);

    let board = registry.board(id)?;
    let collector = registry.collector(board.collector)?;

    let collected = board
        .token
        .and_then(|t| registry.token(t))
        .is_some_and(|token| is_intersecting(token, collector));
    if collected {
        return Some(BoardEvent::TokenCollected);
    }

    let hit = board
        .spikes
        .iter()
        .filter_map(|&s| registry.spike(s))
        .any(|spike| is_intersecting(spike, collector));
    hit.then_some(BoardEvent::SpikeHit)
}

/// Unregister a board and everything it owns. Returns false when `id` is
/// not a live board.
pub fn destroy(registry: &mut Registry, id: EntityId) -> bool {
    let Some(board) = registry.board(id) else {
        return false;
    };
    let owned: Vec<EntityId> = std::iter::once(board.collector)
        .chain(board.token)
        .chain(board.spikes.iter().copied())
        .collect();

    for dependent in owned {
        registry.destroy(dependent);
    }
    registry.destroy(id);
    true
}

/// Uniform position inside `rect`, inset by the body's diameter from each
/// edge. An axis too short for the inset collapses to the center.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, rect: &Rect, diameter: f32) -> Vec2 {
    let (min, max) = (rect.min(), rect.max());
    Vec2::new(
        sample_axis(rng, min.x, max.x, diameter),
        sample_axis(rng, min.y, max.y, diameter),
    )
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32, inset: f32) -> f32 {
    let span = hi - lo - inset * 2.0;
    if span > 0.0 {
        lo + inset + span * rng.random::<f32>()
    } else {
        (lo + hi) / 2.0
    }
}

/// Random position that does not overlap `avoid`; the last sample is used
/// if every attempt overlaps
fn clear_position<R, C>(rng: &mut R, rect: &Rect, diameter: f32, avoid: &C, attempts: u32) -> Vec2
where
    R: Rng + ?Sized,
    C: Collidable,
{
    let mut center = random_position(rng, rect, diameter);
    for _ in 1..attempts {
        let probe = Token { center, diameter };
        if !is_intersecting(&probe, avoid) {
            break;
        }
        center = random_position(rng, rect, diameter);
    }
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn square() -> Rect {
        Rect::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0))
    }

    fn setup(spec: BoardSpec) -> (Registry, EntityId) {
        let mut registry = Registry::new();
        let mut rng = Pcg32::seed_from_u64(42);
        let id = spawn(&mut registry, spec, &mut rng, &Settings::default());
        (registry, id)
    }

    fn place_collector(registry: &mut Registry, board: EntityId, at: Vec2) {
        let collector = registry.board(board).unwrap().collector;
        registry.collector_mut(collector).unwrap().center = at;
    }

    #[test]
    fn test_spawn_creates_owned_bodies() {
        let (registry, id) = setup(BoardSpec::new(square()));
        let board = registry.board(id).unwrap();

        let collector = registry.collector(board.collector).unwrap();
        assert_eq!(collector.board, id);
        assert_eq!(collector.center, Vec2::new(100.0, 100.0));
        assert!((collector.vector.length() - 1.0).abs() < 1e-5);
        assert!(board.token.is_some());
        assert_eq!(board.spikes.len(), 1);
        assert_eq!(registry.len(), 4);

        // The board is created before its dependents
        assert_eq!(registry.ids()[0], id);
    }

    #[test]
    fn test_spawn_uses_given_state() {
        let mut spec = BoardSpec::new(square());
        spec.collector_center = Some(Vec2::new(20.0, 30.0));
        spec.collector_vector = Some(Vec2::new(0.0, 1.0));
        spec.spike_centers = Some(vec![Vec2::new(150.0, 150.0), Vec2::new(40.0, 160.0)]);
        spec.spawn_token = false;
        let (registry, id) = setup(spec);
        let board = registry.board(id).unwrap();

        let collector = registry.collector(board.collector).unwrap();
        assert_eq!(collector.center, Vec2::new(20.0, 30.0));
        assert_eq!(collector.vector, Vec2::new(0.0, 1.0));
        assert!(board.token.is_none());
        let spikes: Vec<Vec2> = board
            .spikes
            .iter()
            .map(|&s| registry.spike(s).unwrap().center)
            .collect();
        assert_eq!(spikes, vec![Vec2::new(150.0, 150.0), Vec2::new(40.0, 160.0)]);
    }

    #[test]
    fn test_sides() {
        let (registry, id) = setup(BoardSpec::new(square()));
        let board = registry.board(id).unwrap();
        assert_eq!(board.top().center, Vec2::new(100.0, 0.5));
        assert_eq!(board.bottom().center, Vec2::new(100.0, 199.5));
        assert_eq!(board.left().size, Vec2::new(1.0, 200.0));
        assert_eq!(board.right().center, Vec2::new(199.5, 100.0));
    }

    #[test]
    fn test_focus_follows_pointer() {
        let (mut registry, id) = setup(BoardSpec::new(square()));

        update(&mut registry, id, Some(Vec2::new(10.0, 10.0)));
        assert!(registry.board(id).unwrap().focused);

        update(&mut registry, id, Some(Vec2::new(300.0, 10.0)));
        assert!(!registry.board(id).unwrap().focused);

        update(&mut registry, id, Some(Vec2::new(10.0, 10.0)));
        update(&mut registry, id, None);
        assert!(!registry.board(id).unwrap().focused);
    }

    #[test]
    fn test_token_pickup_detected() {
        let (mut registry, id) = setup(BoardSpec::new(square()));
        let token = registry.board(id).unwrap().token.unwrap();
        let at = registry.token(token).unwrap().center;
        place_collector(&mut registry, id, at);

        assert_eq!(update(&mut registry, id, None), Some(BoardEvent::TokenCollected));
    }

    #[test]
    fn test_spike_hit_detected() {
        let mut spec = BoardSpec::new(square());
        spec.spawn_token = false;
        spec.spike_centers = Some(vec![Vec2::new(50.0, 50.0)]);
        let (mut registry, id) = setup(spec);

        assert_eq!(update(&mut registry, id, None), None);
        place_collector(&mut registry, id, Vec2::new(53.0, 50.0));
        assert_eq!(update(&mut registry, id, None), Some(BoardEvent::SpikeHit));
    }

    #[test]
    fn test_token_takes_precedence_over_spike() {
        let mut spec = BoardSpec::new(square());
        spec.spike_centers = Some(vec![Vec2::new(50.0, 50.0)]);
        let (mut registry, id) = setup(spec);
        let token = registry.board(id).unwrap().token.unwrap();
        if let Some(Entity::Token(t)) = registry.get_mut(token) {
            t.center = Vec2::new(56.0, 50.0);
        }
        // Overlaps both the spike (3 away) and the token (3 away)
        place_collector(&mut registry, id, Vec2::new(53.0, 50.0));

        for _ in 0..5 {
            assert_eq!(update(&mut registry, id, None), Some(BoardEvent::TokenCollected));
        }
    }

    #[test]
    fn test_destroy_removes_dependents() {
        let mut spec = BoardSpec::new(square());
        spec.spike_centers = Some(vec![Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)]);
        let (mut registry, id) = setup(spec);
        assert_eq!(registry.len(), 5);

        assert!(destroy(&mut registry, id));
        assert!(registry.is_empty());
        // Second destroy is a no-op
        assert!(!destroy(&mut registry, id));
    }

    #[test]
    fn test_random_position_respects_inset() {
        let mut rng = Pcg32::seed_from_u64(3);
        let rect = Rect::new(Vec2::new(60.0, 40.0), Vec2::new(100.0, 50.0));
        for _ in 0..500 {
            let p = random_position(&mut rng, &rect, 7.0);
            assert!(p.x >= 10.0 + 7.0 && p.x <= 110.0 - 7.0);
            assert!(p.y >= 15.0 + 7.0 && p.y <= 65.0 - 7.0);
        }
    }

    #[test]
    fn test_random_position_tiny_board_uses_center() {
        let mut rng = Pcg32::seed_from_u64(3);
        let rect = Rect::new(Vec2::new(5.0, 50.0), Vec2::new(10.0, 100.0));
        let p = random_position(&mut rng, &rect, 7.0);
        assert_eq!(p.x, 5.0);
    }

    #[test]
    fn test_spawned_bodies_avoid_collector() {
        let mut registry = Registry::new();
        let mut rng = Pcg32::seed_from_u64(11);
        let settings = Settings::default();
        for _ in 0..50 {
            let id = spawn(&mut registry, BoardSpec::new(square()), &mut rng, &settings);
            let board = registry.board(id).unwrap().clone();
            let collector = registry.collector(board.collector).unwrap();
            let token = registry.token(board.token.unwrap()).unwrap();
            assert!(!is_intersecting(token, collector));
            for spike in &board.spikes {
                assert!(!is_intersecting(registry.spike(*spike).unwrap(), collector));
            }
            destroy(&mut registry, id);
        }
    }
}
