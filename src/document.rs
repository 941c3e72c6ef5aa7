//! Page documents: one page's size and its annotations, stored as TOML
//!
//! ```toml
//! [page]
//! width = 800
//! height = 600
//!
//! [[annotations]]
//! id = "a"
//! x = 0
//! y = 0
//! leader_x = 40
//! leader_y = 20
//! content = "Check this figure"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::layout::{Annotation, BoundingBox, LayoutError};

/// Pixel size of the rendered page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// The page as a layout container rooted at the origin
    pub fn container(&self) -> BoundingBox {
        BoundingBox::container(self.width, self.height)
    }
}

/// A page and the comment boxes placed on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageDocument {
    pub page: PageSize,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl PageDocument {
    pub fn new(width: f64, height: f64, annotations: Vec<Annotation>) -> Self {
        Self {
            page: PageSize { width, height },
            annotations,
        }
    }

    /// Parse a page document from TOML source
    pub fn parse(source: &str) -> Result<Self, InputError> {
        toml::from_str(source).map_err(InputError::from)
    }

    /// Read and parse a page document
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
        Self::parse(&source)
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The page as a layout container
    pub fn container(&self) -> BoundingBox {
        self.page.container()
    }

    /// Check the page size and that every annotation has a unique, non-empty id.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let PageSize { width, height } = self.page;
        if !(width.is_finite() && width > 0.0) {
            return Err(LayoutError::invalid_page(
                width,
                height,
                "width must be positive",
            ));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(LayoutError::invalid_page(
                width,
                height,
                "height must be positive",
            ));
        }

        let mut seen = HashSet::new();
        for (index, ann) in self.annotations.iter().enumerate() {
            if ann.id.trim().is_empty() {
                return Err(LayoutError::EmptyIdentifier { index });
            }
            if !seen.insert(ann.id.as_str()) {
                return Err(LayoutError::duplicate(&ann.id));
            }
        }
        Ok(())
    }

    /// Size every box from its text content
    pub fn fit_to_content(&mut self) {
        for ann in &mut self.annotations {
            ann.fit_to_content();
        }
    }
}
