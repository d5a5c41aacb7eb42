mod error;
mod loader;
mod resolve;
mod types;


pub use error::ConfigError;
pub use loader::{export_config, load_config};
pub use types::{AnalyzerConfig, ResolvedConfig};
