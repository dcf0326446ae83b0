use std::path::{Path, PathBuf};
use std::str::FromStr;

use walkdir::WalkDir;

use crate::container::ContainerID;
use crate::error::ResultOkLogExt;
use crate::fsutil::{self, FileReadError};

use super::container::ScanResult;
use super::stats::{PIDS_CURRENT_FILE, PIDS_MAX_FILE, PidsCurrent, PidsLimit, StatParseError};

/// Name of the pids controller hierarchy below the cgroup root.
const PIDS_HIERARCHY: &str = "pids";

/// A single value read from a cgroup directory.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// Value of `pids.max`.
    Max { id: ContainerID, limit: PidsLimit },
    /// Value of `pids.current`.
    Current {
        id: ContainerID,
        current: PidsCurrent,
    },
}

/// Receives findings as soon as the [`Scanner`] produces them.
pub trait FindingSink {
    fn record(&mut self, finding: Finding);
}

impl FindingSink for Vec<Finding> {
    fn record(&mut self, finding: Finding) {
        self.push(finding);
    }
}

/// Reasons a directory (or the whole walk) yields no further findings.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Read(#[from] FileReadError),
    #[error("failed to parse file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: StatParseError,
    },
    #[error("failed to walk cgroup tree: {0}")]
    Walk(#[from] walkdir::Error),
}

type Result<T> = std::result::Result<T, ScanError>;

/// Walks `<cgroup root>/pids` and reads the pids interface files of every
/// directory below it.
#[derive(Debug, Clone)]
pub struct Scanner {
    pids_root: PathBuf,
}

impl Scanner {
    /// Creates a scanner for the cgroup filesystem mounted at `cgroup_root`.
    pub fn new(cgroup_root: impl AsRef<Path>) -> Self {
        Self {
            pids_root: cgroup_root.as_ref().join(PIDS_HIERARCHY),
        }
    }

    pub fn pids_root(&self) -> &Path {
        &self.pids_root
    }

    /// Walks the pids hierarchy depth first, including its root, and hands
    /// every finding to `sink` as soon as it is read.
    ///
    /// Failures never abort the walk. A directory whose `pids.max` cannot be
    /// read or parsed produces no findings; a directory whose `pids.current`
    /// cannot be read or parsed produces only its max finding. A missing
    /// pids hierarchy yields no findings at all. Every failure is logged at
    /// warning level.
    pub fn scan(&self, sink: &mut impl FindingSink) {
        for entry in WalkDir::new(&self.pids_root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("{}", ScanError::from(err));
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            log::debug!("Inspecting: {}", entry.path().display());
            scan_container_dir(entry.path(), sink).ok_log_warn();
        }
    }

    /// Runs [`Scanner::scan`] and collects the findings per container.
    pub fn scan_all(&self) -> ScanResult {
        let mut result = ScanResult::default();
        self.scan(&mut result);
        result.mark_up();
        result
    }
}

/// Reads `pids.max` then `pids.current` of one directory, stopping at the
/// first failure.
fn scan_container_dir(dir: &Path, sink: &mut impl FindingSink) -> Result<()> {
    let id = ContainerID::from_cgroup_dir(dir);

    let limit = read_stat::<PidsLimit>(&dir.join(PIDS_MAX_FILE))?;
    sink.record(Finding::Max {
        id: id.clone(),
        limit,
    });

    let current = read_stat::<PidsCurrent>(&dir.join(PIDS_CURRENT_FILE))?;
    sink.record(Finding::Current { id, current });

    Ok(())
}

fn read_stat<T>(path: &Path) -> Result<T>
where
    T: FromStr<Err = StatParseError>,
{
    let content = fsutil::read_file_to_string(path)?;
    content.parse().map_err(|source| ScanError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
