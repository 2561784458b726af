// All scanning functionality is in giftshop-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod logging;

// Re-export core types for convenience
pub use giftshop_core::*;
