use crate::container::ContainerID;

use super::scanner::{Finding, FindingSink};
use super::stats::{PidsCurrent, PidsLimit};

/// Values found for one cgroup directory during a single scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerEntry {
    id: ContainerID,
    max: Option<PidsLimit>,
    current: Option<PidsCurrent>,
}

impl ContainerEntry {
    pub fn new(id: ContainerID) -> Self {
        Self {
            id,
            max: None,
            current: None,
        }
    }

    pub fn id(&self) -> &ContainerID {
        &self.id
    }

    /// Returns the ceiling from `pids.max`, if it was read successfully.
    pub fn max(&self) -> Option<PidsLimit> {
        self.max
    }

    /// Returns the live count from `pids.current`, if it was read successfully.
    pub fn current(&self) -> Option<PidsCurrent> {
        self.current
    }
}

/// Everything one walk of the cgroup tree produced.
///
/// Collects the findings of a [`super::Scanner`] into per-container entries.
/// Findings for a directory arrive back to back, so the `current` value is
/// attached to the most recent entry when the ids match.
#[derive(Debug, Default)]
pub struct ScanResult {
    entries: Vec<ContainerEntry>,
    up: bool,
}

impl ScanResult {
    pub fn entries(&self) -> &[ContainerEntry] {
        self.entries.as_slice()
    }

    /// Returns the entry for `id`, if any value was found for it.
    pub fn entry(&self, id: &str) -> Option<&ContainerEntry> {
        self.entries.iter().find(|entry| entry.id.as_ref() == id)
    }

    /// `true` once the scan routine ran to completion, even if every entry
    /// was skipped.
    pub fn up(&self) -> bool {
        self.up
    }

    pub(super) fn mark_up(&mut self) {
        self.up = true;
    }

    fn entry_for(&mut self, id: ContainerID) -> &mut ContainerEntry {
        let matches_last = self.entries.last().is_some_and(|last| last.id == id);
        if !matches_last {
            self.entries.push(ContainerEntry::new(id));
        }
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }
}

impl FindingSink for ScanResult {
    fn record(&mut self, finding: Finding) {
        match finding {
            Finding::Max { id, limit } => self.entry_for(id).max = Some(limit),
            Finding::Current { id, current } => self.entry_for(id).current = Some(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> ContainerID {
        ContainerID::from_cgroup_dir(name)
    }

    #[test]
    fn test_scan_result_merges_consecutive_findings() {
        let mut result = ScanResult::default();
        result.record(Finding::Max {
            id: id("a"),
            limit: PidsLimit::Limited(100.0),
        });
        result.record(Finding::Current {
            id: id("a"),
            current: PidsCurrent { count: 3.0 },
        });
        result.record(Finding::Max {
            id: id("b"),
            limit: PidsLimit::Unlimited,
        });

        assert_eq!(result.entries().len(), 2);
        let a = result.entry("/a").unwrap();
        assert_eq!(a.max(), Some(PidsLimit::Limited(100.0)));
        assert_eq!(a.current(), Some(PidsCurrent { count: 3.0 }));
        let b = result.entry("/b").unwrap();
        assert_eq!(b.max(), Some(PidsLimit::Unlimited));
        assert_eq!(b.current(), None);
    }

    #[test]
    fn test_scan_result_starts_down_and_empty() {
        let result = ScanResult::default();
        assert!(!result.up());
        assert!(result.entries().is_empty());
        assert!(result.entry("/a").is_none());
    }
}
