//! Defines structured error types for parsing cgroup pids interface files.
//!
//! # Example
//!
//! ```rust
//! use container_pids_exporter::cgroup::stats::{PidsCurrent, StatParseError};
//!
//! let err = "not-a-number".parse::<PidsCurrent>().unwrap_err();
//! assert!(matches!(err, StatParseError::InvalidValue { .. }));
//! ```

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatParseError {
    #[error("invalid value '{value}': {source}")]
    InvalidValue {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parses an already trimmed numeric value.
pub(super) fn parse_value(value: &str) -> Result<f64, StatParseError> {
    value
        .parse::<f64>()
        .map_err(|source| StatParseError::InvalidValue {
            value: value.to_string(),
            source,
        })
}
