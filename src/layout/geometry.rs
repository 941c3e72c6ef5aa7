//! Geometry primitives shared by collision detection, placement and rendering
//!
//! Every consumer that draws or measures a leader line goes through
//! [`line_box_intersection`].

use super::types::{BoundingBox, Point};

/// Area of the intersection of two boxes. Disjoint or touching boxes yield 0.
pub fn overlap_area(a: &BoundingBox, b: &BoundingBox) -> f64 {
    let x_overlap = (a.right().min(b.right()) - a.x.max(b.x)).max(0.0);
    let y_overlap = (a.bottom().min(b.bottom()) - a.y.max(b.y)).max(0.0);
    x_overlap * y_overlap
}

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Point where the leader line enters the comment box.
///
/// The line runs from `leader` towards the box center. Each of the four edges
/// is intersected parametrically (`p = leader + t * (center - leader)`) and the
/// hit with the smallest `t > 0` that lies on the finite edge wins.
///
/// Falls back to the box center when the anchor sits inside or on the box
/// (including the zero-length case where anchor and center coincide), or when
/// rounding leaves no edge hit.
pub fn line_box_intersection(leader: Point, bounds: &BoundingBox) -> Point {
    let center = bounds.center();
    if bounds.contains(leader) {
        return center;
    }

    let dx = center.x - leader.x;
    let dy = center.y - leader.y;
    if dx == 0.0 && dy == 0.0 {
        return center;
    }

    let mut best: Option<(f64, Point)> = None;
    let mut consider = |t: f64, point: Point| {
        if t > 0.0 && best.map_or(true, |(best_t, _)| t < best_t) {
            best = Some((t, point));
        }
    };

    if dy != 0.0 {
        for edge_y in [bounds.y, bounds.bottom()] {
            let t = (edge_y - leader.y) / dy;
            let x = leader.x + t * dx;
            if x >= bounds.x && x <= bounds.right() {
                consider(t, Point::new(x, edge_y));
            }
        }
    }

    if dx != 0.0 {
        for edge_x in [bounds.x, bounds.right()] {
            let t = (edge_x - leader.x) / dx;
            let y = leader.y + t * dy;
            if y >= bounds.y && y <= bounds.bottom() {
                consider(t, Point::new(edge_x, y));
            }
        }
    }

    best.map(|(_, point)| point).unwrap_or(center)
}
