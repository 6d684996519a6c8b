//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod dirs;
#[cfg(feature = "http")]
pub mod http;
pub mod memory;
pub mod runtime;
pub mod settings;

pub use dirs::{ensure_log_dir, get_config_dir, get_log_dir};
#[cfg(feature = "http")]
pub use http::HttpHierarchyApi;
pub use memory::MemoryHierarchyApi;
pub use runtime::{AppMessage, NavRuntime};
pub use settings::{
    ensure_config_file, ensure_config_file_at, get_config_path, load_config,
    load_config_or_default, ConfigError,
};
