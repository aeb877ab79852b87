mod error;
pub use error::*;

mod font;
pub use font::*;

mod metrics;
pub use metrics::*;

mod units;
pub use units::*;

mod wrap;
pub use wrap::*;

#[cfg(test)]
pub(crate) mod test_fonts;
