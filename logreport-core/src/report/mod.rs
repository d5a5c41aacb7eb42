//! Aggregation Engine and report output.
//!
//! stream of LogRecord
//! ReportAggregator (one pass, per-endpoint accumulators)
//! ReportRow (sorted by time_sum, truncated to N)
//! template substitution -> report-YYYY.MM.DD.html
//!

mod aggregation;
mod error;
mod row;
mod stats;
mod template;
mod writer;


pub use aggregation::*;
pub use error::*;
pub use row::*;
pub use stats::*;
pub use template::*;
pub use writer::*;
