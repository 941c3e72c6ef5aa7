//! Collision resolution scenarios and properties on a standard 800x600 page

use annotation_layout::layout::{
    detect_collisions, find_nearest_valid_position, has_collisions, is_valid_position,
    line_box_intersection, overlap_area, resolve,
};
use annotation_layout::{
    adjust_annotations_layout, AdjustConfig, Annotation, BoundingBox, Point,
};
use pretty_assertions::assert_eq;

fn page() -> BoundingBox {
    BoundingBox::container(800.0, 600.0)
}

fn boxed(id: &str, x: f64, y: f64) -> Annotation {
    Annotation::new(id).with_position(x, y).with_size(150.0, 40.0)
}

/// A deterministic spread of boxes, some overlapping, some not
fn sample_boxes() -> Vec<BoundingBox> {
    let mut boxes = Vec::new();
    for i in 0..6 {
        for j in 0..4 {
            let x = (i * 37 % 11) as f64 * 20.0 - 30.0;
            let y = (j * 53 % 7) as f64 * 15.0 + i as f64 * 3.0;
            boxes.push(BoundingBox::new(x, y, 40.0 + j as f64 * 25.0, 20.0 + i as f64 * 10.0));
        }
    }
    boxes
}

#[test]
fn test_two_overlapping_boxes_move_exactly_one() {
    let annotations = vec![boxed("a", 0.0, 0.0), boxed("b", 50.0, 0.0)];
    assert_eq!(detect_collisions(&annotations).total_overlap_area, 4000.0);

    let results = adjust_annotations_layout(&annotations, &page(), &AdjustConfig::default());
    assert_eq!(results.iter().filter(|r| r.moved).count(), 1);

    let adjusted: Vec<Annotation> = results.into_iter().map(|r| r.annotation).collect();
    assert!(!detect_collisions(&adjusted).has_collision);
}

#[test]
fn test_single_annotation_has_no_collisions() {
    let result = detect_collisions(&[boxed("a", 100.0, 100.0)]);
    assert!(!result.has_collision);
    assert!(result.overlaps.is_empty());
    assert_eq!(result.total_overlap_area, 0.0);
}

#[test]
fn test_box_outside_bounds_is_brought_inside_margins() {
    let config = AdjustConfig::default();
    let stray = boxed("a", -50.0, 100.0).with_leader(10.0, 120.0);
    let position = find_nearest_valid_position(&stray, &[], &page(), &config);
    assert!(position.x >= config.margin_from_bounds);
    assert!(is_valid_position(position, &stray, &[], &page(), &config));
}

#[test]
fn test_anchor_at_box_corner_yields_center() {
    let bounds = BoundingBox::new(100.0, 100.0, 150.0, 40.0);
    let hit = line_box_intersection(Point::new(100.0, 100.0), &bounds);
    assert_eq!(hit, Point::new(175.0, 120.0));
    assert!(hit.x.is_finite() && hit.y.is_finite());
}

#[test]
fn test_crowded_small_container_terminates() {
    let annotations = vec![
        boxed("a", 20.0, 20.0),
        boxed("b", 30.0, 30.0),
        boxed("c", 40.0, 40.0),
    ];
    let container = BoundingBox::container(200.0, 200.0);
    let config = AdjustConfig::default().with_margin(15.0);
    let resolution = resolve(&annotations, &container, &config);
    assert!(resolution.iterations <= 50);
    assert_eq!(resolution.results.len(), 3);
}

#[test]
fn test_overlap_area_is_symmetric_and_non_negative() {
    let boxes = sample_boxes();
    for a in &boxes {
        for b in &boxes {
            let ab = overlap_area(a, b);
            assert_eq!(ab, overlap_area(b, a));
            assert!(ab >= 0.0);
            let disjoint_x = a.right() <= b.x || b.right() <= a.x;
            let disjoint_y = a.bottom() <= b.y || b.bottom() <= a.y;
            if disjoint_x || disjoint_y {
                assert_eq!(ab, 0.0);
            }
        }
    }
}

#[test]
fn test_collision_free_page_is_left_alone() {
    let annotations = vec![
        boxed("a", 20.0, 20.0),
        boxed("b", 200.0, 20.0),
        boxed("c", 20.0, 300.0),
        // Touching edges do not collide
        boxed("d", 170.0, 300.0),
    ];
    assert!(!has_collisions(&annotations));
    let results = adjust_annotations_layout(&annotations, &page(), &AdjustConfig::default());
    assert!(results.iter().all(|r| !r.moved));
}

#[test]
fn test_found_positions_pass_the_validator() {
    let config = AdjustConfig::default();
    let others = vec![
        boxed("x", 15.0, 15.0),
        boxed("y", 300.0, 15.0),
        boxed("z", 635.0, 200.0),
    ];
    let anchors = [
        Point::new(40.0, 40.0),
        Point::new(400.0, 10.0),
        Point::new(790.0, 250.0),
        Point::new(400.0, 590.0),
        Point::new(5.0, 300.0),
    ];
    for (i, anchor) in anchors.iter().enumerate() {
        let ann = boxed(&format!("n{i}"), 300.0, 300.0).with_leader(anchor.x, anchor.y);
        let position = find_nearest_valid_position(&ann, &others, &page(), &config);
        if position != ann.position() {
            assert!(
                is_valid_position(position, &ann, &others, &page(), &config),
                "anchor {anchor:?} produced invalid {position:?}"
            );
        }
    }
}

#[test]
fn test_iteration_budget_bounds_a_pathological_pile() {
    let annotations: Vec<Annotation> = (0..40)
        .map(|i| boxed(&format!("a{i}"), 100.0 + i as f64, 100.0 + i as f64))
        .collect();
    for budget in [0, 1, 7, 50] {
        let config = AdjustConfig::default().with_max_iterations(budget);
        let resolution = resolve(&annotations, &page(), &config);
        assert!(resolution.iterations <= budget);
        assert_eq!(resolution.results.len(), annotations.len());
    }
}

#[test]
fn test_overlap_area_does_not_grow_between_iterations() {
    let annotations = vec![
        boxed("a", 100.0, 100.0),
        boxed("b", 160.0, 110.0),
        boxed("c", 220.0, 120.0),
        boxed("d", 400.0, 300.0),
        boxed("e", 430.0, 310.0),
    ];
    let mut previous = detect_collisions(&annotations).total_overlap_area;
    for budget in 1..=10 {
        let config = AdjustConfig::default().with_max_iterations(budget);
        let resolution = resolve(&annotations, &page(), &config);
        let area = detect_collisions(&resolution.annotations()).total_overlap_area;
        assert!(area <= previous, "area grew from {previous} to {area} at step {budget}");
        previous = area;
        if resolution.converged {
            break;
        }
    }
    assert_eq!(previous, 0.0);
}

#[test]
fn test_resolution_is_deterministic() {
    let annotations = vec![
        boxed("a", 100.0, 100.0).with_leader(90.0, 90.0),
        boxed("b", 120.0, 110.0).with_leader(500.0, 500.0),
        boxed("c", 140.0, 120.0).with_leader(700.0, 50.0),
    ];
    let config = AdjustConfig::default();
    let first = resolve(&annotations, &page(), &config);
    let second = resolve(&annotations, &page(), &config);
    assert_eq!(first, second);
}
