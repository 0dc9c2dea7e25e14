// Core business logic module

pub mod config;
pub mod links;
pub mod mirror;
pub mod transport;
pub mod validation;

// Re-export commonly used items
pub use config::MirrorConfig;
pub use mirror::{Mirror, MirrorSummary, NodeOutcome};
pub use transport::{HttpTransport, Page, Transport};
