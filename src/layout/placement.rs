//! Placement search: validating candidate positions and picking the first
//! valid one, nearest edge first.

use tracing::trace;

use super::candidates::{centered, edges_by_proximity, generate_edge_positions, generate_for_size};
use super::config::AdjustConfig;
use super::geometry::overlap_area;
use super::types::{Annotation, BoundingBox, Point};

/// Check a candidate position against the container margins and every other
/// annotation's current box. Any positive overlap invalidates the candidate.
pub fn is_valid_position(
    position: Point,
    annotation: &Annotation,
    others: &[Annotation],
    container: &BoundingBox,
    config: &AdjustConfig,
) -> bool {
    let (width, height) = annotation.size();
    let candidate = BoundingBox::at(position, width, height);
    within_margins(&candidate, container, config.margin_from_bounds)
        && is_clear(&candidate, others.iter().filter(|o| o.id != annotation.id))
}

/// Find the first valid position for `annotation`, trying the container edge
/// nearest its leader anchor first.
///
/// When no edge yields a valid candidate the annotation stays where it is.
pub fn find_nearest_valid_position(
    annotation: &Annotation,
    others: &[Annotation],
    container: &BoundingBox,
    config: &AdjustConfig,
) -> Point {
    let leader = annotation.leader();

    for edge in edges_by_proximity(leader, container) {
        let found = generate_edge_positions(annotation, edge, container, leader, config)
            .into_iter()
            .find(|&p| is_valid_position(p, annotation, others, container, config));
        if let Some(position) = found {
            return position;
        }
    }

    trace!(id = %annotation.id, "no valid position found, keeping current position");
    annotation.position()
}

/// Default position for a new comment box: parked against the edge nearest the
/// leader anchor, centered on the anchor along that edge.
///
/// Equal distances prefer top, then bottom, left and right.
pub fn default_position(
    leader: Point,
    (width, height): (f64, f64),
    container: &BoundingBox,
    config: &AdjustConfig,
) -> Point {
    let margin = config.default_placement_margin;
    let max_x = container.width - width - margin;
    let max_y = container.height - height - margin;

    let to_top = leader.y;
    let to_bottom = container.height - leader.y;
    let to_left = leader.x;
    let to_right = container.width - leader.x;
    let nearest = to_top.min(to_bottom).min(to_left).min(to_right);

    if nearest == to_top {
        Point::new(centered(leader.x, width, margin, max_x), margin)
    } else if nearest == to_bottom {
        Point::new(centered(leader.x, width, margin, max_x), max_y)
    } else if nearest == to_left {
        Point::new(margin, centered(leader.y, height, margin, max_y))
    } else {
        Point::new(max_x, centered(leader.y, height, margin, max_y))
    }
}

/// Position for a brand-new annotation anchored at `leader`.
///
/// The default position is returned as-is when it does not collide with any
/// placed annotation; otherwise the edge search runs. Unplaced annotations are
/// not obstacles. If nothing fits, the default position is returned.
pub fn find_non_overlapping_position(
    leader: Point,
    size: (f64, f64),
    annotations: &[Annotation],
    container: &BoundingBox,
    config: &AdjustConfig,
) -> Point {
    let placed: Vec<&Annotation> = annotations.iter().filter(|a| a.is_placed()).collect();
    let default = default_position(leader, size, container, config);

    if is_clear(&BoundingBox::at(default, size.0, size.1), placed.iter().copied()) {
        return default;
    }

    for edge in edges_by_proximity(leader, container) {
        let found = generate_for_size(size, edge, container, leader, config)
            .into_iter()
            .find(|&p| {
                let candidate = BoundingBox::at(p, size.0, size.1);
                within_margins(&candidate, container, config.margin_from_bounds)
                    && is_clear(&candidate, placed.iter().copied())
            });
        if let Some(position) = found {
            return position;
        }
    }

    trace!("no free position for new annotation, using default placement");
    default
}

/// Apply a drag delta to an annotation, keeping the box inside the container.
///
/// When the box is larger than the container the top-left corner is pinned at 0.
pub fn constrain_drag_position(
    annotation: &Annotation,
    delta: Point,
    container: &BoundingBox,
) -> Point {
    let (width, height) = annotation.size();
    let current = annotation.position();
    Point::new(
        (current.x + delta.x).min(container.width - width).max(0.0),
        (current.y + delta.y).min(container.height - height).max(0.0),
    )
}

fn within_margins(candidate: &BoundingBox, container: &BoundingBox, margin: f64) -> bool {
    candidate.x >= margin
        && candidate.y >= margin
        && candidate.right() <= container.width - margin
        && candidate.bottom() <= container.height - margin
}

fn is_clear<'a>(candidate: &BoundingBox, obstacles: impl IntoIterator<Item = &'a Annotation>) -> bool {
    obstacles
        .into_iter()
        .all(|other| overlap_area(candidate, &other.bounds()) <= 0.0)
}
