//! Input / output file resolution.
//!
//! Finds the newest rotated access log by the date embedded in its file name
//! and decides where (and whether) its report has to be written.

mod discover;
mod error;
mod pattern;
mod plan;

#[cfg(test)]
mod tests;

pub use discover::*;
pub use error::*;
pub use pattern::*;
pub use plan::*;
