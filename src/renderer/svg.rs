//! SVG preview of a page: container, comment boxes and leader lines

use crate::layout::{line_box_intersection, Annotation, BoundingBox, DragOverlay, Point};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn class_list(&self, kind: &str) -> String {
        self.config.class_list(kind)
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, bounds: &BoundingBox, kind: &str, rx: f64) {
        let radius = if rx > 0.0 {
            format!(r#" rx="{}""#, rx)
        } else {
            String::new()
        };
        self.elements.push(format!(
            r#"{}<rect class="{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            self.class_list(kind),
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            radius
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, center: Point, r: f64, kind: &str) {
        self.elements.push(format!(
            r#"{}<circle class="{}" cx="{}" cy="{}" r="{}"/>"#,
            self.indent_str(),
            self.class_list(kind),
            center.x,
            center.y,
            r
        ));
    }

    /// Add a line element
    pub fn add_line(&mut self, from: Point, to: Point, kind: &str) {
        self.elements.push(format!(
            r#"{}<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            self.indent_str(),
            self.class_list(kind),
            from.x,
            from.y,
            to.x,
            to.y
        ));
    }

    /// Add a text element, one `tspan` per line
    pub fn add_text(&mut self, text: &str, x: f64, y: f64) {
        let spans: String = text
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                let dy = if i == 0 { 0.0 } else { self.config.line_height };
                format!(r#"<tspan x="{}" dy="{}">{}</tspan>"#, x, dy, escape_xml(line))
            })
            .collect();
        self.elements.push(format!(
            r#"{}<text class="{}" x="{}" y="{}" dominant-baseline="hanging">{}</text>"#,
            self.indent_str(),
            self.class_list("text"),
            x,
            y,
            spans
        ));
    }

    /// Add a group element with an id and a class
    pub fn start_group(&mut self, id: &str, kind: &str) {
        self.elements.push(format!(
            r#"{}<g id="{}" class="{}">"#,
            self.indent_str(),
            escape_xml(id),
            self.class_list(kind)
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a page to SVG.
///
/// Boxes listed in `overlay` are drawn at their in-flight drag position.
pub fn render_svg(
    page: &BoundingBox,
    annotations: &[Annotation],
    overlay: &DragOverlay,
    config: &SvgConfig,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_rect(page, "page", 0.0);

    for annotation in annotations {
        let shown = overlay.apply(annotation);
        render_annotation(
            &shown,
            overlay.is_dragging(&annotation.id),
            config,
            &mut builder,
        );
    }

    builder.build(*page)
}

/// Endpoints of the leader line drawn for `annotation`: anchor to box boundary
pub fn leader_line(annotation: &Annotation) -> (Point, Point) {
    let leader = annotation.leader();
    (leader, line_box_intersection(leader, &annotation.bounds()))
}

fn render_annotation(
    annotation: &Annotation,
    dragging: bool,
    config: &SvgConfig,
    builder: &mut SvgBuilder,
) {
    let bounds = annotation.bounds();
    let (from, to) = leader_line(annotation);
    let kind = if dragging {
        "annotation dragging"
    } else {
        "annotation"
    };

    builder.start_group(&annotation.id, kind);
    builder.add_line(from, to, "leader");
    builder.add_circle(from, config.anchor_radius, "anchor");
    builder.add_rect(&bounds, "box", config.corner_radius);
    if !annotation.content.is_empty() {
        builder.add_text(
            &annotation.content,
            bounds.x + config.text_inset,
            bounds.y + config.text_inset,
        );
    }
    builder.end_group();
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
