//! Core module - rates and errors shared by every quote

pub mod config;
pub mod error;

pub use config::{RateConfig, RateOverrides};
pub use error::{ConfigError, QuoteError};
