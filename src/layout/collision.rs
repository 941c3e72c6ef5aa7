//! Pairwise collision detection between comment boxes
//!
//! Every unordered pair is checked, so a scan is O(n²) in the number of
//! annotations on a page.

use super::geometry::overlap_area;
use super::types::{Annotation, CollisionResult, OverlapInfo};

/// Find every pair of annotations whose boxes overlap.
pub fn detect_collisions(annotations: &[Annotation]) -> CollisionResult {
    let bounds: Vec<_> = annotations.iter().map(Annotation::bounds).collect();
    let mut overlaps = Vec::new();
    let mut total_overlap_area = 0.0;

    for i in 0..bounds.len() {
        for j in (i + 1)..bounds.len() {
            let area = overlap_area(&bounds[i], &bounds[j]);
            if area > 0.0 {
                overlaps.push(OverlapInfo {
                    first: i,
                    second: j,
                    area,
                });
                total_overlap_area += area;
            }
        }
    }

    CollisionResult {
        has_collision: !overlaps.is_empty(),
        total_overlap_area,
        overlaps,
    }
}

/// Fast predicate: does any pair of annotations overlap?
pub fn has_collisions(annotations: &[Annotation]) -> bool {
    if annotations.len() < 2 {
        return false;
    }
    let bounds: Vec<_> = annotations.iter().map(Annotation::bounds).collect();
    bounds.iter().enumerate().any(|(i, a)| {
        bounds[i + 1..]
            .iter()
            .any(|b| overlap_area(a, b) > 0.0)
    })
}
