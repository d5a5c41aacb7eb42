pub mod fixtures;
pub mod workspace;

pub use fixtures::{BANNER_DATASET_LINES, banner_log, gzip};
pub use logreport_core::test_support::{CapturedEvent, capture, log_line, warnings};
pub use workspace::{REPORT_TEMPLATE, Workspace};
