//! Record Decoder
//!
//! Turns an nginx access log (plain or gzip) into a lazy stream of [`LogRecord`]s.
//!
//! Lines that do not match the structural pattern, carry an unparsable
//! `request_time`, or are not valid UTF-8 never reach the consumer. They are
//! counted in [`ParseQuality`] and reported once, in aggregate, when the reader
//! is finished or dropped.
//!
//! The overall data processing architecture is:
//!
//! file (.log | .gz)
//! LogRecordReader (line by line)
//! LinePattern::parse
//! LogRecord
//! ParseQuality -> info / warn signal
//!

mod error;
mod pattern;
mod quality;
mod reader;
mod record;


pub use error::*;
pub use pattern::*;
pub use quality::*;
pub use reader::*;
pub use record::*;
