use prometheus::{Gauge, Opts, Registry};

/// Name of the exporter, used as metric namespace and in log output.
pub const EXPORTER_NAME: &str = "container_pids_exporter";

/// Version string printed by `--version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (revision: ",
    env!("PIDS_EXPORTER_REVISION"),
    ", ",
    env!("PIDS_EXPORTER_RUST_VERSION"),
    ")"
);

/// Build context captured at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub revision: &'static str,
    pub rust_version: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            revision: env!("PIDS_EXPORTER_REVISION"),
            rust_version: env!("PIDS_EXPORTER_RUST_VERSION"),
        }
    }

    /// Registers `container_pids_exporter_build_info`, a constant `1`
    /// labeled with the build context.
    ///
    /// # Errors
    ///
    /// Returns a [`prometheus::Error`] if the gauge is invalid or already registered.
    pub fn register(&self, registry: &Registry) -> prometheus::Result<()> {
        let opts = Opts::new(
            "build_info",
            format!(
                "A metric with a constant '1' value labeled by version, revision and rustversion from which {EXPORTER_NAME} was built."
            ),
        )
        .namespace(EXPORTER_NAME)
        .const_label("version", self.version)
        .const_label("revision", self.revision)
        .const_label("rustversion", self.rust_version);

        let gauge = Gauge::with_opts(opts)?;
        gauge.set(1.0);
        registry.register(Box::new(gauge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_build_info() {
        let registry = Registry::new();
        let info = BuildInfo {
            version: "1.2.3",
            revision: "abc1234",
            rust_version: "rustc 1.88.0",
        };
        info.register(&registry).unwrap();

        let families = registry.gather();
        assert_eq!(families.len(), 1);
        let family = &families[0];
        assert_eq!(family.get_name(), "container_pids_exporter_build_info");

        let metric = &family.get_metric()[0];
        assert_eq!(metric.get_gauge().value(), 1.0);
        let labels: Vec<_> = metric
            .get_label()
            .iter()
            .map(|pair| (pair.get_name(), pair.get_value()))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("revision", "abc1234"),
                ("rustversion", "rustc 1.88.0"),
                ("version", "1.2.3"),
            ]
        );
    }

    #[test]
    fn test_register_twice_fails() {
        let registry = Registry::new();
        let info = BuildInfo::current();
        info.register(&registry).unwrap();
        assert!(info.register(&registry).is_err());
    }

    #[test]
    fn test_long_version_starts_with_package_version() {
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
    }
}
