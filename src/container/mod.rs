use std::borrow::Borrow;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Identifier of a container, derived from its cgroup directory.
///
/// The identifier is the directory's base name prefixed with `/`.
///
/// # Examples
///
/// ```
/// # use container_pids_exporter::container::ContainerID;
/// let id = ContainerID::from_cgroup_dir("/sys/fs/cgroup/pids/docker/abc123");
/// assert_eq!(id.as_ref(), "/abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerID(Arc<str>);

impl ContainerID {
    /// Builds the identifier for the cgroup directory at `dir`.
    ///
    /// A path without a final component (e.g. `/`) yields `/`.
    pub fn from_cgroup_dir(dir: impl AsRef<Path>) -> Self {
        let base = dir
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        Self(format!("/{base}").into())
    }
}

impl AsRef<str> for ContainerID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContainerID {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
