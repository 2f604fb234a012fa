pub mod bundle;
pub mod config;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use config::*;
pub use dev::*;
pub use error::*;

// Re-export discovery and validation
pub use discovery::{discover, discover_with_profile, ConfigDiscovery, CONFIG_FILE, ENV_PREFIX};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
