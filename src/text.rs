//! Comment box sizing from text content
//!
//! Sizes are estimated from glyph classes rather than measured from a font:
//! single-byte code points count as half-width, everything else as full-width.

/// Width of a half-width glyph
const HALF_WIDTH: f64 = 7.0;

/// Full-width glyphs relative to half-width ones
const FULL_WIDTH_RATIO: f64 = 1.4;

/// Height of one line of text, including leading
const LINE_HEIGHT: f64 = 16.0;

/// Horizontal padding around the text
const HORIZONTAL_PADDING: f64 = 18.0;

/// Vertical padding around the text
const VERTICAL_PADDING: f64 = 12.0;

const MIN_WIDTH: f64 = 26.0;
const MIN_HEIGHT: f64 = 28.0;

/// Lines longer than this are hard-wrapped by [`apply_auto_line_breaks`]
pub const MAX_CHARS_PER_LINE: usize = 20;

/// Box size `(width, height)` needed to show `content`.
///
/// Empty content is measured as a single full-width glyph so a fresh box is
/// never collapsed.
pub fn textarea_size(content: &str) -> (f64, f64) {
    let content = if content.is_empty() { "\u{3042}" } else { content };
    let lines: Vec<&str> = content.split('\n').collect();

    let widest = lines.iter().map(|line| line_width(line)).fold(0.0, f64::max);
    let width = (widest + HORIZONTAL_PADDING).max(MIN_WIDTH);
    let height = (lines.len() as f64 * LINE_HEIGHT + VERTICAL_PADDING).max(MIN_HEIGHT);

    (width.ceil(), height.ceil())
}

fn line_width(line: &str) -> f64 {
    if line.is_empty() {
        return HALF_WIDTH * 3.0;
    }
    line.chars()
        .map(|c| {
            if u32::from(c) > 0xFF {
                HALF_WIDTH * FULL_WIDTH_RATIO
            } else {
                HALF_WIDTH
            }
        })
        .sum()
}

/// Hard-wrap every line at [`MAX_CHARS_PER_LINE`] characters.
pub fn apply_auto_line_breaks(text: &str) -> String {
    text.split('\n')
        .flat_map(|line| {
            let chars: Vec<char> = line.chars().collect();
            if chars.is_empty() {
                vec![String::new()]
            } else {
                chars
                    .chunks(MAX_CHARS_PER_LINE)
                    .map(|chunk| chunk.iter().collect())
                    .collect()
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}
