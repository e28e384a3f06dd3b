// Shared kernel: error types, application-layer patterns, utilities

pub mod application;
pub mod errors;
pub mod utils;
