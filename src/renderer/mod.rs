//! SVG preview renderer
//!
//! Draws a page container and its comment boxes, each with a leader line
//! from its anchor to the nearest point of the box boundary. Boxes that are
//! being dragged are drawn from a [`DragOverlay`](crate::layout::DragOverlay).

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{leader_line, render_svg};
