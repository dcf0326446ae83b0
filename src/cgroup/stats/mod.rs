//! Typed values read from the cgroup `pids` controller.
//!
//! - [`PidsLimit`]: the ceiling from `pids.max`, either unlimited or numeric.
//! - [`PidsCurrent`]: the live process count from `pids.current`.
//!
//! Parsing goes through [`std::str::FromStr`] and fails with
//! [`StatParseError`].

mod error;
mod pids;

pub use error::StatParseError;
pub use pids::{PidsCurrent, PidsLimit};

/// Name of the file holding the process-count ceiling of a cgroup.
pub const PIDS_MAX_FILE: &str = "pids.max";
/// Name of the file holding the live process count of a cgroup.
pub const PIDS_CURRENT_FILE: &str = "pids.current";
