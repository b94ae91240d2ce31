//! Collision detection between circles and axis-aligned rectangles
//!
//! Every collidable body exposes a center, a size (bounding extents) and a
//! [`Shape`]. Circles use `size.x` as their diameter.
//!
//! Boundary conventions:
//! - circle tests are strict (touching is not intersecting)
//! - rectangle/rectangle is closed (coinciding edges intersect)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Bounding shape used to pick the collision test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Rectangle,
}

/// Anything that can take part in a collision test
pub trait Collidable {
    fn center(&self) -> Vec2;
    fn size(&self) -> Vec2;

    /// Bodies without an explicit shape are treated as rectangles
    fn shape(&self) -> Shape {
        Shape::Rectangle
    }
}

/// One edge of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];
}

/// An axis-aligned rectangle described by its center and full size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.size / 2.0
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    /// Closed containment: points on the edge are inside
    pub fn contains_point(&self, p: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// Clamp `p` into the rectangle
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }

    /// A `thickness`-thick strip lying flush inside the given edge,
    /// spanning the full width (top/bottom) or height (left/right)
    pub fn side(&self, side: Side, thickness: f32) -> Rect {
        let (min, max) = (self.min(), self.max());
        let half = thickness / 2.0;
        match side {
            Side::Top => Rect::new(
                Vec2::new(self.center.x, min.y + half),
                Vec2::new(self.size.x, thickness),
            ),
            Side::Bottom => Rect::new(
                Vec2::new(self.center.x, max.y - half),
                Vec2::new(self.size.x, thickness),
            ),
            Side::Left => Rect::new(
                Vec2::new(min.x + half, self.center.y),
                Vec2::new(thickness, self.size.y),
            ),
            Side::Right => Rect::new(
                Vec2::new(max.x - half, self.center.y),
                Vec2::new(thickness, self.size.y),
            ),
        }
    }
}

impl Collidable for Rect {
    fn center(&self) -> Vec2 {
        self.center
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}

/// Check whether two bodies overlap.
///
/// Pure and symmetric: `is_intersecting(a, b) == is_intersecting(b, a)`.
pub fn is_intersecting<A, B>(a: &A, b: &B) -> bool
where
    A: Collidable + ?Sized,
    B: Collidable + ?Sized,
{
    match (a.shape(), b.shape()) {
        (Shape::Circle, Shape::Circle) => {
            circles_intersect(a.center(), a.size().x / 2.0, b.center(), b.size().x / 2.0)
        }
        (Shape::Rectangle, Shape::Rectangle) => rects_intersect(
            &Rect::new(a.center(), a.size()),
            &Rect::new(b.center(), b.size()),
        ),
        (Shape::Circle, Shape::Rectangle) => {
            circle_rect_intersect(a.center(), a.size().x / 2.0, &Rect::new(b.center(), b.size()))
        }
        (Shape::Rectangle, Shape::Circle) => {
            circle_rect_intersect(b.center(), b.size().x / 2.0, &Rect::new(a.center(), a.size()))
        }
    }
}

#[inline]
fn circles_intersect(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    let reach = r1 + r2;
    c1.distance_squared(c2) < reach * reach
}

#[inline]
fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    let gap = (a.center - b.center).abs();
    let reach = (a.size + b.size) / 2.0;
    gap.x <= reach.x && gap.y <= reach.y
}

#[inline]
fn circle_rect_intersect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.distance_squared(rect.closest_point(center)) < radius * radius
}
