//! Parse diagnostics for quote and rate documents

pub mod diagnostics;

pub use diagnostics::YamlSyntaxError;
