//! Common module
//!
//! Shared utility functions used throughout the application.

pub mod log;

// Re-export commonly used functions
pub use log::init_logger;
