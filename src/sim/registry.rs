//! Live entity registry
//!
//! Entities are stored by id. Ids are allocated monotonically, so iterating
//! the map visits entities in creation order. Drawing uses a separate order
//! sorted by z-index.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bodies::{Collector, Spike, Token};
use super::board::Board;
use crate::consts::{BOARD_ZINDEX, COLLECTOR_ZINDEX, SPIKE_ZINDEX, TOKEN_ZINDEX};

/// Stable identity of a registered entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u32);

impl EntityId {
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Entity kinds, used to filter queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Board,
    Collector,
    Token,
    Spike,
}

/// A registered entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Entity {
    Board(Board),
    Collector(Collector),
    Token(Token),
    Spike(Spike),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Board(_) => EntityKind::Board,
            Entity::Collector(_) => EntityKind::Collector,
            Entity::Token(_) => EntityKind::Token,
            Entity::Spike(_) => EntityKind::Spike,
        }
    }

    /// Draw priority; higher is drawn on top
    pub fn zindex(&self) -> i32 {
        match self {
            Entity::Board(_) => BOARD_ZINDEX,
            Entity::Collector(_) => COLLECTOR_ZINDEX,
            Entity::Token(_) => TOKEN_ZINDEX,
            Entity::Spike(_) => SPIKE_ZINDEX,
        }
    }

    pub fn center(&self) -> Vec2 {
        match self {
            Entity::Board(b) => b.rect.center,
            Entity::Collector(c) => c.center,
            Entity::Token(t) => t.center,
            Entity::Spike(s) => s.center,
        }
    }
}

impl From<Collector> for Entity {
    fn from(c: Collector) -> Self {
        Entity::Collector(c)
    }
}

impl From<Token> for Entity {
    fn from(t: Token) -> Self {
        Entity::Token(t)
    }
}

impl From<Spike> for Entity {
    fn from(s: Spike) -> Self {
        Entity::Spike(s)
    }
}

impl From<Board> for Entity {
    fn from(b: Board) -> Self {
        Entity::Board(b)
    }
}

/// The set of live entities
#[derive(Debug, Clone)]
pub struct Registry {
    entities: BTreeMap<EntityId, Entity>,
    next_id: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a new entity and return its id
    pub fn create(&mut self, entity: impl Into<Entity>) -> EntityId {
        let id = self.allocate();
        self.entities.insert(id, entity.into());
        id
    }

    /// Register an entity that needs its own id (or to create dependents)
    /// while being built. The id is allocated before `build` runs, so the
    /// entity sorts ahead of anything `build` creates.
    pub fn create_with<F>(&mut self, build: F) -> EntityId
    where
        F: FnOnce(EntityId, &mut Registry) -> Entity,
    {
        let id = self.allocate();
        let entity = build(id, self);
        self.entities.insert(id, entity);
        id
    }

    /// Unregister an entity. Unknown or already destroyed ids are ignored.
    pub fn destroy(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    /// Drop every entity (ids keep counting up)
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All live entities in creation order, optionally of one kind only
    pub fn all(&self, kind: Option<EntityKind>) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.entities
            .iter()
            .filter(move |(_, e)| kind.is_none_or(|k| e.kind() == k))
            .map(|(id, e)| (*id, e))
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.all(Some(kind)).count()
    }

    /// Snapshot of the live ids in update (creation) order
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.keys().copied().collect()
    }

    /// Ids sorted by ascending z-index, ties broken by creation order
    pub fn draw_order(&self) -> Vec<EntityId> {
        let mut ids: Vec<(i32, EntityId)> =
            self.entities.iter().map(|(id, e)| (e.zindex(), *id)).collect();
        ids.sort();
        ids.into_iter().map(|(_, id)| id).collect()
    }

    pub fn board(&self, id: EntityId) -> Option<&Board> {
        match self.get(id) {
            Some(Entity::Board(b)) => Some(b),
            _ => None,
        }
    }

    pub fn board_mut(&mut self, id: EntityId) -> Option<&mut Board> {
        match self.get_mut(id) {
            Some(Entity::Board(b)) => Some(b),
            _ => None,
        }
    }

    pub fn collector(&self, id: EntityId) -> Option<&Collector> {
        match self.get(id) {
            Some(Entity::Collector(c)) => Some(c),
            _ => None,
        }
    }

    pub fn collector_mut(&mut self, id: EntityId) -> Option<&mut Collector> {
        match self.get_mut(id) {
            Some(Entity::Collector(c)) => Some(c),
            _ => None,
        }
    }

    pub fn token(&self, id: EntityId) -> Option<&Token> {
        match self.get(id) {
            Some(Entity::Token(t)) => Some(t),
            _ => None,
        }
    }

    pub fn spike(&self, id: EntityId) -> Option<&Spike> {
        match self.get(id) {
            Some(Entity::Spike(s)) => Some(s),
            _ => None,
        }
    }
}
