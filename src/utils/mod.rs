// Utility functions
pub mod blocking;
pub mod error;
