//! Annotation Layout - automatic placement of leader-lined comment boxes
//!
//! This library detects overlapping comment boxes on a page, moves them to
//! collision-free slots along the page edges, and renders an SVG preview of
//! the result.
//!
//! # Example
//!
//! ```rust
//! use annotation_layout::adjust;
//!
//! let report = adjust(r#"
//! [page]
//! width = 800
//! height = 600
//!
//! [[annotations]]
//! id = "a"
//! x = 0
//! y = 0
//!
//! [[annotations]]
//! id = "b"
//! x = 50
//! y = 0
//! "#).unwrap();
//!
//! assert!(report.converged);
//! assert_eq!(report.moved, 1);
//! ```

pub mod document;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod text;

pub use document::{PageDocument, PageSize};
pub use error::InputError;
pub use layout::{
    adjust_annotations_layout, AdjustConfig, AdjustmentResult, Annotation, BoundingBox,
    LayoutError, Point,
};
pub use renderer::{render_svg, SvgConfig};

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during the adjust pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// The page document or configuration could not be read
    #[error(transparent)]
    Input(#[from] InputError),

    /// The page document or configuration is inconsistent
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Outcome of adjusting one page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustReport {
    /// Relocation steps performed
    pub iterations: usize,
    /// Whether the page ended collision-free
    pub converged: bool,
    /// Number of annotations whose position changed
    pub moved: usize,
    /// Overlap area left when the iteration budget ran out
    pub remaining_overlap_area: f64,
    pub page: PageSize,
    pub results: Vec<AdjustmentResult>,
}

impl AdjustReport {
    /// The adjusted annotations, in input order
    pub fn annotations(&self) -> Vec<Annotation> {
        self.results.iter().map(|r| r.annotation.clone()).collect()
    }

    /// The adjusted page as a document that can be written back
    pub fn document(&self) -> PageDocument {
        PageDocument {
            page: self.page,
            annotations: self.annotations(),
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Adjust a TOML page document with the default configuration
pub fn adjust(source: &str) -> Result<AdjustReport, Error> {
    adjust_with_config(source, &AdjustConfig::default())
}

/// Adjust a TOML page document with a custom configuration
///
/// # Example
///
/// ```rust
/// use annotation_layout::{adjust_with_config, AdjustConfig};
///
/// let config = AdjustConfig::default().with_max_iterations(5);
/// let report = adjust_with_config("[page]\nwidth = 400\nheight = 300\n", &config).unwrap();
/// assert_eq!(report.iterations, 0);
/// assert!(report.results.is_empty());
/// ```
pub fn adjust_with_config(source: &str, config: &AdjustConfig) -> Result<AdjustReport, Error> {
    let doc = PageDocument::parse(source)?;
    Ok(adjust_document(&doc, config)?)
}

/// Validate a parsed document and resolve its overlaps
pub fn adjust_document(
    doc: &PageDocument,
    config: &AdjustConfig,
) -> Result<AdjustReport, LayoutError> {
    config.validate()?;
    doc.validate()?;

    let resolution = layout::resolve(&doc.annotations, &doc.container(), config);
    let remaining = layout::detect_collisions(&resolution.annotations()).total_overlap_area;

    Ok(AdjustReport {
        iterations: resolution.iterations,
        converged: resolution.converged,
        moved: resolution.moved_count(),
        remaining_overlap_area: remaining,
        page: doc.page,
        results: resolution.results,
    })
}

/// Lint an adjusted page
pub fn lint(report: &AdjustReport, config: &AdjustConfig) -> Vec<layout::LintWarning> {
    layout::lint::check(&report.annotations(), &report.page.container(), config)
}
