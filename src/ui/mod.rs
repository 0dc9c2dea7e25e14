// UI and formatting module

pub mod formatters;
pub mod progress;

// Re-export commonly used items for cleaner imports
pub use formatters::format_size;
