use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum WrapError {
    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    /// The font has no glyph for a character, so the text cannot be measured
    #[error("no glyph for character {0:?} in the font")]
    MissingGlyph(char),

    /// The font face does not report a capital height metric
    #[error("the font has no cap height metric")]
    MissingCapHeight,

    /// Width was requested for text with no measurable segments (an empty
    /// string, or nothing but newlines)
    #[error("cannot measure the width of an empty string")]
    EmptyText,

    /// The width budget is too narrow to fit even a single hyphenated character
    #[error("no character of the text fits within a width of {0}pt")]
    NoFit(Pt),
}
