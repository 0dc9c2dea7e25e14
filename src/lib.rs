// dirmirror Library - Public API

// Re-export error types
pub mod error;
pub use error::{MirrorError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use self::core::config::MirrorConfig;
pub use self::core::mirror::{Mirror, MirrorSummary, NodeOutcome};
pub use self::core::transport::{HttpTransport, Page, Transport};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
