pub mod cli;
pub mod conf;
pub mod decode;
pub mod logging;
pub mod report;
pub mod run;
pub mod selection;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
