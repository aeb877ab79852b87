//! Deterministic [FontMetrics](crate::FontMetrics) implementations for tests.

use crate::error::WrapError;
use crate::metrics::FontMetrics;
use crate::units::Pt;
use std::collections::HashMap;

/// Every character advances by the same number of points per point of font
/// size, so at `Pt(1.0)` a line's width equals its character count times the
/// advance.
pub(crate) struct Monospace {
    advance: f32,
    cap_height: f32,
}

impl Monospace {
    pub(crate) fn new(advance: f32) -> Monospace {
        Monospace::with_cap_height(advance, 700.0)
    }

    pub(crate) fn with_cap_height(advance: f32, cap_height: f32) -> Monospace {
        Monospace {
            advance,
            cap_height,
        }
    }
}

impl FontMetrics for Monospace {
    fn measure(&self, text: &str, size: Pt) -> Result<Pt, WrapError> {
        Ok(size * (self.advance * text.chars().count() as f32))
    }

    fn cap_height(&self) -> Result<f32, WrapError> {
        Ok(self.cap_height)
    }
}

/// Per-character advances from a table; characters outside the table have no
/// glyph and fail to measure, like a real face missing a code point.
pub(crate) struct Proportional {
    advances: HashMap<char, f32>,
}

impl Proportional {
    pub(crate) fn new(advances: &[(char, f32)]) -> Proportional {
        Proportional {
            advances: advances.iter().copied().collect(),
        }
    }
}

impl FontMetrics for Proportional {
    fn measure(&self, text: &str, size: Pt) -> Result<Pt, WrapError> {
        let mut width = 0.0;
        for ch in text.chars() {
            width += self
                .advances
                .get(&ch)
                .copied()
                .ok_or(WrapError::MissingGlyph(ch))?;
        }
        Ok(size * width)
    }

    fn cap_height(&self) -> Result<f32, WrapError> {
        Ok(700.0)
    }
}
