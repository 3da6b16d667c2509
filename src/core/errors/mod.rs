//! Error types for filter translation
//!
//! One module per error family; everything is re-exported here.

pub mod config_error;
pub mod core_error;
pub mod filter_error;
pub mod model_error;

// Re-export all error types
pub use config_error::*;
pub use core_error::*;
pub use filter_error::*;
pub use model_error::*;
