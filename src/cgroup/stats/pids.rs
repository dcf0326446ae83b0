//! Parsing of the cgroup `pids` controller interface files.
//!
//! - `pids.max` holds either the keyword `max` (no limit) or a decimal ceiling
//!   on the number of processes in the cgroup.
//! - `pids.current` holds the decimal number of processes currently in the
//!   cgroup.
//!
//! Both files usually end with a newline; surrounding whitespace is ignored.
//!
//! # Examples
//!
//! ```rust
//! use container_pids_exporter::cgroup::stats::{PidsCurrent, PidsLimit};
//!
//! let limit: PidsLimit = "max\n".parse().unwrap();
//! assert_eq!(limit, PidsLimit::Unlimited);
//! assert_eq!(limit.gauge_value(), -1.0);
//!
//! let current: PidsCurrent = "7\n".parse().unwrap();
//! assert_eq!(current.count, 7.0);
//! ```

use std::str::FromStr;

use super::StatParseError;
use super::error::parse_value;

/// Keyword the kernel writes to `pids.max` when no limit is configured.
const UNLIMITED_KEYWORD: &str = "max";

/// Represents the process-count ceiling from `pids.max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PidsLimit {
    /// `max`: no limit is configured.
    Unlimited,
    /// A numeric ceiling.
    Limited(f64),
}

impl PidsLimit {
    /// Gauge value exported for [`PidsLimit::Unlimited`].
    pub const UNLIMITED_SENTINEL: f64 = -1.0;

    /// Returns the value exported for this limit, mapping "unlimited" to
    /// [`PidsLimit::UNLIMITED_SENTINEL`].
    pub fn gauge_value(&self) -> f64 {
        match self {
            PidsLimit::Unlimited => Self::UNLIMITED_SENTINEL,
            PidsLimit::Limited(v) => *v,
        }
    }
}

impl FromStr for PidsLimit {
    type Err = StatParseError;

    /// Parses `pids.max` content.
    ///
    /// Anything starting with `max` (case-sensitive) is [`PidsLimit::Unlimited`].
    ///
    /// # Errors
    ///
    /// Returns [`StatParseError::InvalidValue`] if the content is neither the
    /// `max` keyword nor a number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with(UNLIMITED_KEYWORD) {
            return Ok(PidsLimit::Unlimited);
        }
        parse_value(s).map(PidsLimit::Limited)
    }
}

/// Represents the live process count from `pids.current`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PidsCurrent {
    /// Number of processes currently in the cgroup.
    pub count: f64,
}

impl FromStr for PidsCurrent {
    type Err = StatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = parse_value(s.trim())?;
        Ok(PidsCurrent { count })
    }
}
