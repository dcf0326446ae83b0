//! Process-count accounting read from the cgroup `pids` controller.
//!
//! This module walks the `pids` hierarchy of the cgroup filesystem and reads,
//! for every directory found, the configured ceiling (`pids.max`) and the
//! live process count (`pids.current`).
//!
//! # Key Components
//!
//! - [`Scanner`]: walks `<cgroup root>/pids` and emits a [`Finding`] per value read.
//! - [`FindingSink`]: receives findings inline as they are discovered.
//! - [`ScanResult`]: a [`FindingSink`] grouping findings into [`ContainerEntry`] values.
//!
//! # Failure handling
//!
//! Every failure is local to one directory: it is logged and the walk goes on.
//! A directory removed between being listed and being read is simply skipped.
//!
//! # Platform Requirements
//!
//! - Linux with the cgroup v1 `pids` controller mounted below the cgroup root.
//! - Read access to `/sys/fs/cgroup/pids`.
mod container;
mod scanner;
pub mod stats;

pub use container::{ContainerEntry, ScanResult};
pub use scanner::{Finding, FindingSink, ScanError, Scanner};
