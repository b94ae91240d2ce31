//! Board splitting
//!
//! Collecting a token replaces its board with two halves that tile it
//! exactly. The collector and spikes are carried into each half. A body
//! already inside a half keeps its position. Otherwise it is mirrored across
//! the parent's center line into that half.

use glam::Vec2;
use rand::Rng;

use super::board::{self, BoardSpec};
use super::collision::Rect;
use super::registry::{EntityId, Registry};
use crate::settings::Settings;

/// Direction of the cut through the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Vertical cut: left and right halves
    Vertical,
    /// Horizontal cut: top and bottom halves
    Horizontal,
}

impl SplitAxis {
    /// Cut across the longer side. A square is cut horizontally.
    pub fn for_size(size: Vec2) -> Self {
        if size.x > size.y {
            SplitAxis::Vertical
        } else {
            SplitAxis::Horizontal
        }
    }
}

/// The two halves of `parent`: left/right for a vertical cut, top/bottom
/// for a horizontal one
pub fn child_rects(parent: &Rect, axis: SplitAxis) -> [Rect; 2] {
    match axis {
        SplitAxis::Vertical => {
            let size = Vec2::new(parent.size.x / 2.0, parent.size.y);
            let offset = Vec2::new(size.x / 2.0, 0.0);
            [
                Rect::new(parent.center - offset, size),
                Rect::new(parent.center + offset, size),
            ]
        }
        SplitAxis::Horizontal => {
            let size = Vec2::new(parent.size.x, parent.size.y / 2.0);
            let offset = Vec2::new(0.0, size.y / 2.0);
            [
                Rect::new(parent.center - offset, size),
                Rect::new(parent.center + offset, size),
            ]
        }
    }
}

/// Reflect `point` across the line through `pivot` perpendicular to the
/// split (only the coordinate along the split changes)
pub fn mirror_point(point: Vec2, pivot: Vec2, axis: SplitAxis) -> Vec2 {
    match axis {
        SplitAxis::Vertical => Vec2::new(2.0 * pivot.x - point.x, point.y),
        SplitAxis::Horizontal => Vec2::new(point.x, 2.0 * pivot.y - point.y),
    }
}

/// Where a body at `point` in the parent ends up inside `child`
pub fn map_into_child(point: Vec2, child: &Rect, parent_center: Vec2, axis: SplitAxis) -> Vec2 {
    if child.contains_point(point) {
        point
    } else {
        mirror_point(point, parent_center, axis)
    }
}

/// Replace a board with its two halves.
///
/// Everything needed from the parent is read before it is destroyed.
/// Returns the child ids, or `None` if `id` is not a live board.
pub fn split_board<R: Rng + ?Sized>(
    registry: &mut Registry,
    id: EntityId,
    rng: &mut R,
    settings: &Settings,
) -> Option<[EntityId; 2]> {
    let parent = registry.board(id)?.clone();
    let collector = registry.collector(parent.collector)?;
    let (collector_center, collector_vector) = (collector.center, collector.vector);
    let spike_centers: Vec<Vec2> = parent
        .spikes
        .iter()
        .filter_map(|&s| registry.spike(s).map(|spike| spike.center))
        .collect();

    let axis = SplitAxis::for_size(parent.rect.size);
    let spawn_token = parent.area() > settings.token_area_threshold;
    let center = parent.rect.center;

    let children = child_rects(&parent.rect, axis).map(|rect| {
        let spec = BoardSpec {
            rect,
            collector_center: Some(map_into_child(collector_center, &rect, center, axis)),
            collector_vector: Some(collector_vector),
            spike_centers: Some(
                spike_centers
                    .iter()
                    .map(|&s| map_into_child(s, &rect, center, axis))
                    .collect(),
            ),
            spawn_token,
        };
        board::spawn(registry, spec, &mut *rng, settings)
    });

    board::destroy(registry, id);

    log::debug!(
        "Board {} split {:?} into {} and {} (tokens: {})",
        id,
        axis,
        children[0],
        children[1],
        spawn_token
    );
    Some(children)
}
