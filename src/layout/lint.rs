//! Lint engine for detecting layout defects on a page.
//!
//! Runs on committed positions, typically after a resolution pass, so the
//! caller can tell the user what could not be fixed automatically: boxes that
//! still overlap, boxes outside the page margins, leader anchors off the page
//! and annotations that were never placed.

use std::fmt;

use super::collision::detect_collisions;
use super::config::AdjustConfig;
use super::types::{Annotation, BoundingBox};

/// A lint warning about a layout defect
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Overlap,
    Bounds,
    Anchor,
    Unplaced,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Bounds => write!(f, "bounds"),
            LintCategory::Anchor => write!(f, "anchor"),
            LintCategory::Unplaced => write!(f, "unplaced"),
        }
    }
}

/// Run all lint checks on a page.
pub fn check(
    annotations: &[Annotation],
    container: &BoundingBox,
    config: &AdjustConfig,
) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_unplaced(annotations, &mut warnings);
    check_overlaps(annotations, &mut warnings);
    check_bounds(annotations, container, config, &mut warnings);
    check_anchors(annotations, container, &mut warnings);
    warnings
}

// ── Unplaced ──────────────────────────────────────────────────────

fn check_unplaced(annotations: &[Annotation], warnings: &mut Vec<LintWarning>) {
    for ann in annotations.iter().filter(|a| !a.is_placed()) {
        warnings.push(LintWarning {
            category: LintCategory::Unplaced,
            message: format!("\"{}\" has no position, treated as (0, 0)", ann.id),
        });
    }
}

// ── Overlaps ──────────────────────────────────────────────────────

/// Largest overlaps first, equal areas in scan order
fn check_overlaps(annotations: &[Annotation], warnings: &mut Vec<LintWarning>) {
    for overlap in detect_collisions(annotations).sorted_by_area() {
        warnings.push(LintWarning {
            category: LintCategory::Overlap,
            message: format!(
                "\"{}\" and \"{}\" overlap by {:.0} px²",
                annotations[overlap.first].id, annotations[overlap.second].id, overlap.area
            ),
        });
    }
}

// ── Margins ───────────────────────────────────────────────────────

fn check_bounds(
    annotations: &[Annotation],
    container: &BoundingBox,
    config: &AdjustConfig,
    warnings: &mut Vec<LintWarning>,
) {
    let allowed = container.inset(config.margin_from_bounds);
    for ann in annotations {
        let bounds = ann.bounds();
        if !allowed.encloses(&bounds) {
            warnings.push(LintWarning {
                category: LintCategory::Bounds,
                message: format!(
                    "\"{}\" at ({:.0}, {:.0}) size {:.0}x{:.0} leaves the {:.0} px page margin",
                    ann.id,
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    bounds.height,
                    config.margin_from_bounds
                ),
            });
        }
    }
}

// ── Leader anchors ────────────────────────────────────────────────

fn check_anchors(
    annotations: &[Annotation],
    container: &BoundingBox,
    warnings: &mut Vec<LintWarning>,
) {
    for ann in annotations {
        let leader = ann.leader();
        if !container.contains(leader) {
            warnings.push(LintWarning {
                category: LintCategory::Anchor,
                message: format!(
                    "leader anchor of \"{}\" at ({:.0}, {:.0}) is outside the page",
                    ann.id, leader.x, leader.y
                ),
            });
        }
    }
}
