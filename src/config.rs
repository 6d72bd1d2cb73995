// Configuration types and file loading

mod storage;
mod types;

pub use storage::{load_config, read_config_file};
pub use types::{Config, PollerConfig, UiConfig};
