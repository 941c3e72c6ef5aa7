//! Candidate positions for a comment box along the container edges
//!
//! Candidates are produced nearest-first: the anchor-aligned ideal position,
//! then alternating `-step`, `+step` offsets along the edge. Callers take the
//! first candidate that validates, so this ordering is the tie-break policy.

use super::config::AdjustConfig;
use super::types::{Annotation, BoundingBox, Edge, Point};

/// Generate candidate positions for `annotation` parked against `edge`.
pub fn generate_edge_positions(
    annotation: &Annotation,
    edge: Edge,
    container: &BoundingBox,
    leader: Point,
    config: &AdjustConfig,
) -> Vec<Point> {
    generate_for_size(annotation.size(), edge, container, leader, config)
}

/// Same as [`generate_edge_positions`] for a box that exists only as a size.
pub(crate) fn generate_for_size(
    (width, height): (f64, f64),
    edge: Edge,
    container: &BoundingBox,
    leader: Point,
    config: &AdjustConfig,
) -> Vec<Point> {
    let margin = config.margin_from_bounds;
    let max_x = container.width - width - margin;
    let max_y = container.height - height - margin;

    // Perpendicular coordinate is pinned to the edge; the other one slides.
    let (fixed, ideal, slide_max) = match edge {
        Edge::Top => (margin, centered(leader.x, width, margin, max_x), max_x),
        Edge::Bottom => (max_y, centered(leader.x, width, margin, max_x), max_x),
        Edge::Left => (margin, centered(leader.y, height, margin, max_y), max_y),
        Edge::Right => (max_x, centered(leader.y, height, margin, max_y), max_y),
    };
    let at = |along: f64| {
        if edge.is_horizontal() {
            Point::new(along, fixed)
        } else {
            Point::new(fixed, along)
        }
    };

    let steps = config.fan_out_steps();
    let mut positions = Vec::with_capacity(steps.saturating_mul(2).saturating_add(1));
    positions.push(at(ideal));

    for i in 1..=steps {
        let offset = config.step_size * i as f64;
        let before = ideal - offset;
        let after = ideal + offset;
        if before >= margin {
            positions.push(at(before));
        }
        if after <= slide_max {
            positions.push(at(after));
        }
    }

    positions
}

/// Center a box of `extent` on `anchor`, kept within `[margin, max]`.
///
/// The upper bound is applied first, so a container too small for the box
/// yields `margin` rather than a position beyond it.
pub(crate) fn centered(anchor: f64, extent: f64, margin: f64, max: f64) -> f64 {
    (anchor - extent / 2.0).min(max).max(margin)
}

/// The four edges ordered by distance from the leader anchor, nearest first.
///
/// Equal distances keep the order top, right, bottom, left.
pub fn edges_by_proximity(leader: Point, container: &BoundingBox) -> [Edge; 4] {
    let mut edges = Edge::ALL.map(|edge| (edge, edge_distance(edge, leader, container)));
    edges.sort_by(|a, b| a.1.total_cmp(&b.1));
    edges.map(|(edge, _)| edge)
}

/// Distance from the leader anchor to a container edge
pub fn edge_distance(edge: Edge, leader: Point, container: &BoundingBox) -> f64 {
    match edge {
        Edge::Top => leader.y,
        Edge::Right => container.width - leader.x,
        Edge::Bottom => container.height - leader.y,
        Edge::Left => leader.x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page() -> BoundingBox {
        BoundingBox::container(800.0, 600.0)
    }

    #[test]
    fn test_top_edge_ideal_is_centered_on_anchor() {
        let ann = Annotation::new("a");
        let positions =
            generate_edge_positions(&ann, Edge::Top, &page(), Point::new(400.0, 50.0), &AdjustConfig::default());
        assert_eq!(positions[0], Point::new(325.0, 15.0));
        assert_eq!(positions[1], Point::new(320.0, 15.0));
        assert_eq!(positions[2], Point::new(330.0, 15.0));
        assert_eq!(positions.len(), 41);
        assert_eq!(positions[40], Point::new(425.0, 15.0));
    }

    #[test]
    fn test_each_edge_pins_the_perpendicular_coordinate() {
        let ann = Annotation::new("a");
        let config = AdjustConfig::default();
        let leader = Point::new(400.0, 300.0);
        let first = |edge| generate_edge_positions(&ann, edge, &page(), leader, &config)[0];

        assert_eq!(first(Edge::Top), Point::new(325.0, 15.0));
        assert_eq!(first(Edge::Bottom), Point::new(325.0, 545.0));
        assert_eq!(first(Edge::Left), Point::new(15.0, 280.0));
        assert_eq!(first(Edge::Right), Point::new(635.0, 280.0));
    }

    #[test]
    fn test_ideal_is_clamped_into_margins() {
        let ann = Annotation::new("a");
        let config = AdjustConfig::default();
        let near_left = generate_edge_positions(&ann, Edge::Top, &page(), Point::new(0.0, 0.0), &config);
        assert_eq!(near_left[0], Point::new(15.0, 15.0));
        // No candidate may slide past the left margin
        assert!(near_left.iter().all(|p| p.x >= 15.0));
        // Only rightward candidates remain after the ideal
        assert_eq!(near_left.len(), 21);

        let near_right =
            generate_edge_positions(&ann, Edge::Bottom, &page(), Point::new(800.0, 600.0), &config);
        assert_eq!(near_right[0], Point::new(635.0, 545.0));
        assert!(near_right.iter().all(|p| p.x <= 635.0));
        assert_eq!(near_right.len(), 21);
    }

    #[test]
    fn test_candidates_are_ordered_by_distance_from_ideal() {
        let ann = Annotation::new("a");
        let positions = generate_edge_positions(
            &ann,
            Edge::Left,
            &page(),
            Point::new(10.0, 300.0),
            &AdjustConfig::default(),
        );
        let ideal = positions[0].y;
        let offsets: Vec<f64> = positions.iter().map(|p| (p.y - ideal).abs()).collect();
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(positions[1].y, ideal - 5.0);
        assert_eq!(positions[2].y, ideal + 5.0);
    }

    #[test]
    fn test_container_too_small_yields_margin() {
        let ann = Annotation::new("a");
        let tiny = BoundingBox::container(100.0, 30.0);
        let positions =
            generate_edge_positions(&ann, Edge::Top, &tiny, Point::new(50.0, 10.0), &AdjustConfig::default());
        assert_eq!(positions, vec![Point::new(15.0, 15.0)]);
    }

    #[test]
    fn test_tiny_step_is_bounded() {
        let ann = Annotation::new("a");
        let config = AdjustConfig::default().with_step_size(1e-300);
        let positions = generate_edge_positions(&ann, Edge::Top, &page(), Point::new(400.0, 0.0), &config);
        assert!(positions.len() <= 1 + 2 * crate::layout::config::MAX_FAN_OUT_STEPS);
        assert_eq!(positions[0], Point::new(325.0, 15.0));
    }

    #[test]
    fn test_zero_step_emits_only_ideal() {
        let ann = Annotation::new("a");
        let config = AdjustConfig::default().with_step_size(0.0);
        let positions = generate_edge_positions(&ann, Edge::Top, &page(), Point::new(400.0, 0.0), &config);
        assert_eq!(positions.len(), 1);
    }

    #[test]
    fn test_uses_annotation_size() {
        let ann = Annotation::new("a").with_size(200.0, 100.0);
        let positions = generate_edge_positions(
            &ann,
            Edge::Right,
            &page(),
            Point::new(700.0, 300.0),
            &AdjustConfig::default(),
        );
        assert_eq!(positions[0], Point::new(585.0, 250.0));
    }

    #[test]
    fn test_edges_by_proximity() {
        let container = page();
        assert_eq!(
            edges_by_proximity(Point::new(780.0, 300.0), &container),
            [Edge::Right, Edge::Top, Edge::Bottom, Edge::Left]
        );
        assert_eq!(
            edges_by_proximity(Point::new(100.0, 580.0), &container),
            [Edge::Bottom, Edge::Left, Edge::Top, Edge::Right]
        );
    }

    #[test]
    fn test_edges_by_proximity_ties_keep_canonical_order() {
        let container = BoundingBox::container(200.0, 200.0);
        assert_eq!(
            edges_by_proximity(Point::new(100.0, 100.0), &container),
            [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left]
        );
        assert_eq!(
            edges_by_proximity(Point::new(0.0, 0.0), &container),
            [Edge::Top, Edge::Left, Edge::Right, Edge::Bottom]
        );
    }
}
