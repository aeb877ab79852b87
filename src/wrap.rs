use crate::error::WrapError;
use crate::metrics::{hard_segments, FontMetrics};
use crate::units::Pt;

/// Splits cell text into lines that each fit within `max_width` points.
///
/// The text is first split on explicit newlines (`\r?\n`) into hard segments
/// which are wrapped independently and never merged. A segment that already
/// fits is emitted unchanged. A segment that does not fit is broken greedily
/// at word boundaries, preferring the largest prefix that fits; when even the
/// first word alone is too wide, the segment is broken mid-word instead and
/// the break is marked with a trailing hyphen.
///
/// Consecutive spaces are significant: tokens are split on single spaces, so
/// runs of spaces survive wrapping wherever a line is not broken inside them.
///
/// Every returned line measures at or below `max_width`. If `max_width` is so
/// narrow that not even a single hyphenated character fits, wrapping fails
/// with [`WrapError::NoFit`] rather than silently dropping text; a
/// measurement failure from `font` is likewise propagated.
///
/// # Example
///
/// ```
/// use pdf_textwrap::{wrap, Font, Pt};
///
/// # fn example(font: &Font) -> Result<(), pdf_textwrap::WrapError> {
/// let lines = wrap("hello world", font, Pt(12.0), Pt(34.0))?;
/// for line in &lines {
///     assert!(pdf_textwrap::string_width(line, font, Pt(12.0))? <= Pt(34.0));
/// }
/// # Ok(())
/// # }
/// ```
pub fn wrap<M: FontMetrics>(
    text: &str,
    font: &M,
    size: Pt,
    max_width: Pt,
) -> Result<Vec<String>, WrapError> {
    let mut lines = Vec::new();

    for segment in hard_segments(text) {
        if fits(segment, font, size, max_width)? {
            lines.push(segment.to_string());
        } else {
            wrap_line(segment, font, size, max_width, &mut lines)?;
        }
    }

    Ok(lines)
}

/// Wraps a single hard segment (no newlines), appending the resulting lines
/// to `out`. Recursion terminates because every split strictly shortens the
/// remainder: word splits drop at least one token, character splits drop at
/// least one character.
fn wrap_line<M: FontMetrics>(
    line: &str,
    font: &M,
    size: Pt,
    max_width: Pt,
    out: &mut Vec<String>,
) -> Result<(), WrapError> {
    if fits(line, font, size, max_width)? {
        out.push(line.to_string());
        return Ok(());
    }

    if !split_by_words(line, font, size, max_width, out)? {
        split_by_chars(line, font, size, max_width, out)?;
    }

    Ok(())
}

/// Tries to break `line` at a word boundary, scanning boundaries from the
/// rightmost token towards the left and accepting the first (largest)
/// non-empty prefix that fits. Returns whether a break was found; when the
/// first token alone is already too wide, no prefix can fit and the caller
/// falls back to character splitting.
fn split_by_words<M: FontMetrics>(
    line: &str,
    font: &M,
    size: Pt,
    max_width: Pt,
    out: &mut Vec<String>,
) -> Result<bool, WrapError> {
    let tokens = space_tokens(line);

    for i in (1..tokens.len()).rev() {
        let prefix = tokens[..i].join(" ");
        if prefix.is_empty() || !fits(&prefix, font, size, max_width)? {
            continue;
        }

        out.push(prefix);

        let remainder = tokens[i..].join(" ");
        // a remainder identical to the input means no progress was made;
        // recursing on it would never terminate
        if remainder != line {
            wrap_line(&remainder, font, size, max_width, out)?;
        }
        return Ok(true);
    }

    Ok(false)
}

/// Breaks `line` mid-word, scanning break positions from the rightmost
/// character towards the left and accepting the first hyphenated prefix that
/// fits. The remainder goes back through the full wrap-line procedure, since
/// it may still need word or character splits of its own.
fn split_by_chars<M: FontMetrics>(
    line: &str,
    font: &M,
    size: Pt,
    max_width: Pt,
    out: &mut Vec<String>,
) -> Result<(), WrapError> {
    let boundaries: Vec<usize> = line.char_indices().map(|(i, _)| i).collect();

    for i in (1..boundaries.len()).rev() {
        let at = boundaries[i];
        let candidate = format!("{}-", &line[..at]);

        if fits(&candidate, font, size, max_width)? {
            out.push(candidate);
            wrap_line(&line[at..], font, size, max_width, out)?;
            return Ok(());
        }
    }

    Err(WrapError::NoFit(max_width))
}

/// Tokenizes a line on single spaces. Consecutive spaces produce empty
/// interior tokens (which `join` restores); trailing empty tokens are
/// dropped, and a line without any space is a single token.
fn space_tokens(line: &str) -> Vec<&str> {
    if !line.contains(' ') {
        return vec![line];
    }

    let mut tokens: Vec<&str> = line.split(' ').collect();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}

fn fits<M: FontMetrics>(line: &str, font: &M, size: Pt, max_width: Pt) -> Result<bool, WrapError> {
    // hard segments carry no newlines, so the line measures directly
    Ok(font.measure(line, size)? <= max_width)
}
