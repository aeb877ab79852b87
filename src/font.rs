use crate::error::WrapError;
use crate::metrics::FontMetrics;
use crate::units::Pt;
use owned_ttf_parser::{AsFaceRef, OwnedFace};

/// A parsed TTF or OTF font face, the crate's built-in [FontMetrics] backend.
///
/// The face is read-only after loading, so a `Font` can be shared freely
/// between threads wrapping independent cells.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if
    /// the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, WrapError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    fn glyph_advance(&self, ch: char) -> Result<u16, WrapError> {
        let face = self.face.as_face_ref();
        let gid = face.glyph_index(ch).ok_or(WrapError::MissingGlyph(ch))?;
        Ok(face.glyph_hor_advance(gid).unwrap_or_default())
    }
}

impl FontMetrics for Font {
    /// Calculate the width of a run of text as the sum of its glyphs'
    /// horizontal advances at the given size. A character with no glyph in
    /// the face is a hard failure; wrapping against guessed widths would
    /// overflow cells silently.
    fn measure(&self, text: &str, size: Pt) -> Result<Pt, WrapError> {
        let scaling = size / self.face.as_face_ref().units_per_em() as f32;
        let mut width = Pt(0.0);
        for ch in text.chars() {
            width += scaling * self.glyph_advance(ch)? as f32;
        }
        Ok(width)
    }

    fn cap_height(&self) -> Result<f32, WrapError> {
        let face = self.face.as_face_ref();
        let scaling = 1000.0 / face.units_per_em() as f32;
        face.capital_height()
            .map(|height| height as f32 * scaling)
            .ok_or(WrapError::MissingCapHeight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_rejects_bytes_that_are_not_a_font() {
        let result = Font::load(vec![0u8; 16]);
        assert!(matches!(result, Err(WrapError::FaceParsingError(_))));
    }
}
