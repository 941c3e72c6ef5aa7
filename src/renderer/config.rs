//! Configuration for the SVG page preview

/// How a page and its comment boxes are drawn
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Space left around the page in the viewBox
    pub viewbox_padding: f64,

    /// Emit the XML declaration
    pub standalone: bool,

    /// Indent nested elements, one per line
    pub pretty_print: bool,

    /// Prepended to every CSS class token (e.g., "al-" for "al-box")
    pub class_prefix: Option<String>,

    /// Distance from the box border to its first text line
    pub text_inset: f64,

    /// Vertical advance between comment lines
    pub line_height: f64,

    /// Corner radius of comment boxes; 0 draws square corners
    pub corner_radius: f64,

    /// Radius of the dot marking the leader anchor
    pub anchor_radius: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 20.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("al-".to_string()),
            text_inset: 6.0,
            line_height: 16.0,
            corner_radius: 8.0,
            anchor_radius: 2.0,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Emit bare class names
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set where comment text starts inside its box
    pub fn with_text_inset(mut self, inset: f64) -> Self {
        self.text_inset = inset;
        self
    }

    pub fn with_line_height(mut self, height: f64) -> Self {
        self.line_height = height;
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_anchor_radius(mut self, radius: f64) -> Self {
        self.anchor_radius = radius;
        self
    }

    /// Class attribute value for space-separated `kinds`, each token prefixed
    pub fn class_list(&self, kinds: &str) -> String {
        let prefix = self.class_prefix.as_deref().unwrap_or("");
        kinds
            .split_whitespace()
            .map(|kind| format!("{prefix}{kind}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
