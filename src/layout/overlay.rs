//! In-flight positions of comment boxes being dragged
//!
//! The preview renderer draws dragged boxes at their proposed position before
//! the move is committed. The resolver never sees this overlay: it always works
//! on committed positions supplied by the caller.

use std::collections::HashMap;

use super::types::{Annotation, Point};

/// Mapping from annotation id to a proposed, uncommitted position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragOverlay {
    proposed: HashMap<String, Point>,
}

impl DragOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `annotation` from its committed position
    pub fn begin(&mut self, annotation: &Annotation) {
        self.proposed
            .insert(annotation.id.clone(), annotation.position());
    }

    /// Move the in-flight position of `id`
    pub fn update(&mut self, id: impl Into<String>, position: Point) {
        self.proposed.insert(id.into(), position);
    }

    /// Finish a drag, returning the position to persist
    pub fn commit(&mut self, id: &str) -> Option<Point> {
        self.proposed.remove(id)
    }

    /// Abandon a drag without persisting anything
    pub fn cancel(&mut self, id: &str) {
        self.proposed.remove(id);
    }

    /// Proposed position for `id`, if it is being dragged
    pub fn get(&self, id: &str) -> Option<Point> {
        self.proposed.get(id).copied()
    }

    pub fn is_dragging(&self, id: &str) -> bool {
        self.proposed.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.proposed.is_empty()
    }

    /// The annotation as it should be drawn: overlaid position if dragging,
    /// committed position otherwise
    pub fn apply(&self, annotation: &Annotation) -> Annotation {
        match self.get(&annotation.id) {
            Some(position) => annotation.moved_to(position),
            None => annotation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides_only_dragged_boxes() {
        let mut overlay = DragOverlay::new();
        overlay.update("a", Point::new(40.0, 50.0));

        let a = Annotation::new("a").with_position(10.0, 10.0);
        let b = Annotation::new("b").with_position(10.0, 10.0);

        assert_eq!(overlay.apply(&a).position(), Point::new(40.0, 50.0));
        assert_eq!(overlay.apply(&b), b);
    }

    #[test]
    fn test_commit_removes_entry() {
        let mut overlay = DragOverlay::new();
        overlay.update("a", Point::new(1.0, 2.0));
        overlay.update("a", Point::new(3.0, 4.0));
        assert!(overlay.is_dragging("a"));
        assert_eq!(overlay.commit("a"), Some(Point::new(3.0, 4.0)));
        assert!(!overlay.is_dragging("a"));
        assert_eq!(overlay.commit("a"), None);
    }

    #[test]
    fn test_begin_starts_from_committed_position() {
        let mut overlay = DragOverlay::new();
        overlay.begin(&Annotation::new("a").with_position(7.0, 9.0));
        assert_eq!(overlay.get("a"), Some(Point::new(7.0, 9.0)));
    }

    #[test]
    fn test_cancel_discards_entry() {
        let mut overlay = DragOverlay::new();
        overlay.update("a", Point::new(1.0, 2.0));
        overlay.cancel("a");
        assert!(overlay.is_empty());
        assert_eq!(overlay.get("a"), None);
    }
}
