pub mod args;
pub mod config;
pub mod error;

pub use args::ReadAfterOpTimeArgs;
pub use config::{ParserConfig, TimeoutScope};
pub use error::ConfigError;

/// Reserved field names. Case-sensitive.
pub mod fields {
    /// Top-level field opting a command into read-after-optime.
    pub const ROOT: &str = "$readAfterOpTime";
    /// Optime sub-document inside the root.
    pub const OP_TIME: &str = "ot";
    /// Timestamp leaf inside the optime sub-document.
    pub const TIMESTAMP: &str = "ts";
    /// Term leaf inside the optime sub-document.
    pub const TERM: &str = "t";
    /// Wait timeout in milliseconds.
    pub const TIMEOUT: &str = "timeout";
}
