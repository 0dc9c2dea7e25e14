// Command handlers module
pub mod config;
pub mod mirror;
pub mod version;

// Re-exports for cleaner imports
pub use mirror::execute as mirror;
pub use version::execute as version;
