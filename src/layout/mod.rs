//! Layout engine for leader-lined comment boxes
//!
//! Detects overlapping boxes on a page and moves them, one at a time, to the
//! nearest collision-free slot along the page edges. Everything here is pure:
//! positions come in as slices and go out as new values.

pub mod candidates;
pub mod collision;
pub mod config;
pub mod error;
pub mod geometry;
pub mod lint;
pub mod overlay;
pub mod placement;
pub mod resolver;
pub mod types;

pub use candidates::{edges_by_proximity, generate_edge_positions};
pub use collision::{detect_collisions, has_collisions};
pub use config::AdjustConfig;
pub use error::LayoutError;
pub use geometry::{line_box_intersection, overlap_area};
pub use lint::{LintCategory, LintWarning};
pub use overlay::DragOverlay;
pub use placement::{
    constrain_drag_position, default_position, find_nearest_valid_position,
    find_non_overlapping_position, is_valid_position,
};
pub use resolver::{adjust_annotations_layout, resolve, Resolution};
pub use types::*;
