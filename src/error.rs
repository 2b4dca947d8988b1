//! Error types for navigation and configuration.
//!
//! The entry guard itself never fails: every input maps to a decision.
//! Failures only surface from the navigator (no route, redirect loop) and
//! from parsing configuration.

/// Failure to commit a navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches path: {0}")]
    NoMatch(String),
    #[error("redirect limit of {limit} exceeded at path: {path}")]
    RedirectLoop { path: String, limit: usize },
}

/// Failure to parse navigator configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    Invalid { var: String, value: String },
}
