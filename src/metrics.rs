use crate::error::WrapError;
use crate::units::Pt;

/// The measuring capability the wrapping algorithm needs from a font.
///
/// Implementers report the rendered width of a run of text (which must not
/// contain line breaks) and the face's cap height. The crate ships a
/// TTF/OTF-backed implementation in [`Font`](crate::Font), but any source of
/// glyph metrics works: the wrapping and measuring functions are generic over
/// this trait and never inspect the font itself.
///
/// Implementations should be deterministic. All of the algorithms here treat
/// a measurement failure as fatal and propagate it, so there is no point in
/// retrying internally.
pub trait FontMetrics {
    /// Measure the rendered width of `text` at the given font size, assuming
    /// no line breaks. Fails if any character of `text` cannot be measured.
    fn measure(&self, text: &str, size: Pt) -> Result<Pt, WrapError>;

    /// The face's cap height, in thousandths of an em (the PDF
    /// font-descriptor convention). Fails if the face carries no such metric.
    fn cap_height(&self) -> Result<f32, WrapError>;
}

/// Splits text on `\r?\n` into hard segments that are never merged.
///
/// Matches the splitting used by cell values throughout: text without any
/// newline is a single segment (even when empty), otherwise trailing empty
/// segments are dropped while interior empty segments survive.
pub(crate) fn hard_segments(text: &str) -> Vec<&str> {
    if !text.contains('\n') {
        return vec![text];
    }

    let mut segments: Vec<&str> = text
        .split('\n')
        .map(|segment| segment.strip_suffix('\r').unwrap_or(segment))
        .collect();
    while segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }
    segments
}

/// Computes the width of a string of (possibly multi-line) text in points.
///
/// The text is split into hard segments on newlines and only the segment with
/// the most characters is measured. This is a heuristic upper bound: for
/// proportional fonts a shorter segment can render wider, but column sizing
/// relies on the character-count tie-break, so it is kept as-is. Ties keep
/// the earliest segment.
///
/// Fails with [`WrapError::EmptyText`] when the text is empty or consists of
/// nothing but newlines, and propagates any measurement failure from `font`.
pub fn string_width<M: FontMetrics>(text: &str, font: &M, size: Pt) -> Result<Pt, WrapError> {
    if text.is_empty() {
        return Err(WrapError::EmptyText);
    }

    let segments = hard_segments(text);
    let mut longest = *segments.first().ok_or(WrapError::EmptyText)?;
    for segment in &segments[1..] {
        if segment.chars().count() > longest.chars().count() {
            longest = *segment;
        }
    }

    font.measure(longest, size)
}

/// Computes the height of a line of text in points, derived from the font's
/// cap height: `cap_height / 1000 × size`. Table rows use this times the
/// number of wrapped lines in a cell.
pub fn font_height<M: FontMetrics>(font: &M, size: Pt) -> Result<Pt, WrapError> {
    Ok(size * (font.cap_height()? / 1000.0))
}
