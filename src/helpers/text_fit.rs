//! Shrink-to-fit text sizing
//!
//! GPUI lays text out at a fixed size, so a minimum scale factor has to be
//! resolved to a concrete font size before rendering. The estimate uses an
//! average glyph advance rather than shaping the text.

/// Smallest fraction of the nominal size text may shrink to
pub const MIN_SCALE_FACTOR: f32 = 0.5;

/// Average glyph advance as a fraction of the font size
const AVERAGE_GLYPH_WIDTH: f32 = 0.55;

/// Estimated single-line width of `text` at `size`
pub fn estimate_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * AVERAGE_GLYPH_WIDTH * size
}

/// Font size that lets `text` fit in `max_lines` lines of `available_width`,
/// never smaller than `size * min_scale`.
///
/// Returns `size` unchanged when there is nothing to fit against.
pub fn fit_font_size(text: &str, size: f32, available_width: f32, max_lines: usize, min_scale: f32) -> f32 {
    if size <= 0.0 || available_width <= 0.0 || max_lines == 0 || text.is_empty() {
        return size;
    }

    let natural = estimate_text_width(text, size);
    let capacity = available_width * max_lines as f32;
    if natural <= capacity {
        return size;
    }

    let floor = size * min_scale.clamp(0.0, 1.0);
    (size * capacity / natural).max(floor)
}
