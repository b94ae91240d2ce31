//! The circular bodies living on a board
//!
//! The collector is the only body that moves. Tokens and spikes are fixed
//! markers that live and die with their board.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Collidable, Rect, Shape, Side, is_intersecting};
use super::registry::EntityId;
use super::tick::TickInput;
use crate::math::{unit_vector, vector_between};

/// The player-steered body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collector {
    /// Owning board (back-reference, the board owns the collector)
    pub board: EntityId,
    pub center: Vec2,
    pub diameter: f32,
    /// Unit direction of travel
    pub vector: Vec2,
    /// Distance covered per frame
    pub speed: f32,
}

impl Collector {
    pub fn new(board: EntityId, center: Vec2, vector: Vec2, diameter: f32, speed: f32) -> Self {
        Self {
            board,
            center,
            diameter,
            vector,
            speed,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Whether this frame's input steers the collector
    pub fn is_steering(board_focused: bool, input: &TickInput) -> bool {
        board_focused && input.primary_down
    }

    /// Advance one frame inside `arena`: steer, move, bounce off walls
    pub fn update(
        &mut self,
        arena: &Rect,
        board_focused: bool,
        input: &TickInput,
        wall_thickness: f32,
    ) {
        if Self::is_steering(board_focused, input) {
            if let Some(target) = input.pointer {
                self.steer_toward(target);
            }
        }

        self.center += self.vector * self.speed;
        self.bounce_off_walls(arena, wall_thickness);
    }

    /// Point the collector at `target`. A target at the collector's own
    /// center leaves the direction unchanged.
    pub fn steer_toward(&mut self, target: Vec2) {
        if let Some(dir) = unit_vector(vector_between(self.center, target)) {
            self.vector = dir;
        }
    }

    /// Clamp back inside any wall that is touched or already crossed and
    /// turn away from it. Each wall is tested independently so corners
    /// correct both axes.
    pub fn bounce_off_walls(&mut self, arena: &Rect, wall_thickness: f32) {
        let radius = self.radius();
        let (min, max) = (arena.min(), arena.max());

        for side in Side::ALL {
            // A fast collector can jump over the strip in one frame
            let crossed = match side {
                Side::Top => self.center.y < min.y + radius,
                Side::Bottom => self.center.y > max.y - radius,
                Side::Left => self.center.x < min.x + radius,
                Side::Right => self.center.x > max.x - radius,
            };
            if !crossed && !is_intersecting(&*self, &arena.side(side, wall_thickness)) {
                continue;
            }
            match side {
                Side::Top => {
                    self.center.y = self.center.y.max(min.y + radius);
                    self.vector.y = self.vector.y.abs();
                }
                Side::Bottom => {
                    self.center.y = self.center.y.min(max.y - radius);
                    self.vector.y = -self.vector.y.abs();
                }
                Side::Left => {
                    self.center.x = self.center.x.max(min.x + radius);
                    self.vector.x = self.vector.x.abs();
                }
                Side::Right => {
                    self.center.x = self.center.x.min(max.x - radius);
                    self.vector.x = -self.vector.x.abs();
                }
            }
        }
    }
}

impl Collidable for Collector {
    fn center(&self) -> Vec2 {
        self.center
    }

    fn size(&self) -> Vec2 {
        Vec2::splat(self.diameter)
    }

    fn shape(&self) -> Shape {
        Shape::Circle
    }
}

/// Pickup that splits its board when collected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub center: Vec2,
    pub diameter: f32,
}

impl Collidable for Token {
    fn center(&self) -> Vec2 {
        self.center
    }

    fn size(&self) -> Vec2 {
        Vec2::splat(self.diameter)
    }

    fn shape(&self) -> Shape {
        Shape::Circle
    }
}

/// Hazard that ends the run on contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spike {
    pub center: Vec2,
    pub diameter: f32,
}

impl Collidable for Spike {
    fn center(&self) -> Vec2 {
        self.center
    }

    fn size(&self) -> Vec2 {
        Vec2::splat(self.diameter)
    }

    fn shape(&self) -> Shape {
        Shape::Circle
    }
}

/// Random unit direction. Resamples on the (vanishingly rare) zero vector.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    loop {
        let v = Vec2::new(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5);
        if let Some(dir) = unit_vector(v) {
            return dir;
        }
    }
}
