//! Core types for the layout engine

use std::fmt;

use serde::{Deserialize, Serialize};

/// Width used for a comment box whose size has not been set
pub const DEFAULT_ANNOTATION_WIDTH: f64 = 150.0;

/// Height used for a comment box whose size has not been set
pub const DEFAULT_ANNOTATION_HEIGHT: f64 = 40.0;

/// A 2D point in page coordinates. Also used for box positions (top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A container rooted at the origin, as produced by a rendered page
    pub fn container(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Create a box of the given size with its top-left corner at `origin`
    pub fn at(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this bounding box contains a point (edges included)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Shrink the box by `margin` on every side
    pub fn inset(&self, margin: f64) -> BoundingBox {
        BoundingBox::new(
            self.x + margin,
            self.y + margin,
            self.width - 2.0 * margin,
            self.height - 2.0 * margin,
        )
    }

    /// Check if `other` lies completely within this box (edges included)
    pub fn encloses(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// One of the four container edges a comment box can be parked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in their canonical order
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Whether a box parked on this edge slides horizontally
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Top => write!(f, "top"),
            Edge::Right => write!(f, "right"),
            Edge::Bottom => write!(f, "bottom"),
            Edge::Left => write!(f, "left"),
        }
    }
}

/// A leader-lined comment box on a page.
///
/// Position and size are optional because records coming from storage may not
/// have been placed or measured yet. Every geometric query goes through
/// [`Annotation::bounds`], which substitutes `x = y = 0` and the default box size.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_y: Option<f64>,
    #[serde(default)]
    pub content: String,
}

impl Annotation {
    /// Create an unplaced annotation with default size
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the top-left position
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Set the box size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the leader anchor
    pub fn with_leader(mut self, x: f64, y: f64) -> Self {
        self.leader_x = Some(x);
        self.leader_y = Some(y);
        self
    }

    /// Set the comment text
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Whether the annotation has been given a position
    pub fn is_placed(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    /// Current top-left position, missing coordinates reported as 0
    pub fn position(&self) -> Point {
        Point::new(coordinate(self.x), coordinate(self.y))
    }

    /// Box size, falling back to the default comment box size
    pub fn size(&self) -> (f64, f64) {
        (
            dimension(self.width, DEFAULT_ANNOTATION_WIDTH),
            dimension(self.height, DEFAULT_ANNOTATION_HEIGHT),
        )
    }

    /// Bounding box of the comment box with defaults substituted
    pub fn bounds(&self) -> BoundingBox {
        let (width, height) = self.size();
        BoundingBox::at(self.position(), width, height)
    }

    /// Leader anchor; a missing coordinate falls back to the box's top-left corner
    pub fn leader(&self) -> Point {
        let position = self.position();
        Point::new(
            self.leader_x.filter(|v| v.is_finite()).unwrap_or(position.x),
            self.leader_y.filter(|v| v.is_finite()).unwrap_or(position.y),
        )
    }

    /// Hard-wrap the text content and resize the box to fit it
    pub fn fit_to_content(&mut self) {
        self.content = crate::text::apply_auto_line_breaks(&self.content);
        let (width, height) = crate::text::textarea_size(&self.content);
        self.width = Some(width);
        self.height = Some(height);
    }

    /// Return a copy moved to `position`
    pub fn moved_to(&self, position: Point) -> Self {
        Self {
            x: Some(position.x),
            y: Some(position.y),
            ..self.clone()
        }
    }
}

fn coordinate(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn dimension(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(default)
}

/// A pair of overlapping annotations, referenced by index into the scanned slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlapInfo {
    pub first: usize,
    pub second: usize,
    pub area: f64,
}

/// Outcome of a collision scan
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CollisionResult {
    pub has_collision: bool,
    pub total_overlap_area: f64,
    /// Overlapping pairs in scan order (`first < second`, row-major)
    pub overlaps: Vec<OverlapInfo>,
}

impl CollisionResult {
    /// Overlaps ordered by area, largest first. Equal areas keep scan order.
    pub fn sorted_by_area(&self) -> Vec<OverlapInfo> {
        let mut overlaps = self.overlaps.clone();
        overlaps.sort_by(|a, b| b.area.total_cmp(&a.area));
        overlaps
    }

    /// The largest overlap, earliest in scan order on ties
    pub fn worst(&self) -> Option<OverlapInfo> {
        self.overlaps
            .iter()
            .copied()
            .reduce(|best, o| if o.area > best.area { o } else { best })
    }
}

/// Final placement of one annotation after a resolution pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustmentResult {
    pub moved: bool,
    pub new_position: Point,
    pub annotation: Annotation,
}
