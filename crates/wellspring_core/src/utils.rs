//! Utility modules

pub mod error_logging;
