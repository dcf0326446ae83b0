//! Prometheus side of the exporter.
//!
//! - [`MetricDescriptors`]: the `container_pids_{up,max,current}` descriptors.
//! - [`MetricEmitter`]: maps scanner findings 1:1 onto gauge samples.
//! - [`PidsCollector`]: the collector invoked by the registry on each scrape.
//! - [`BuildInfo`]: the `container_pids_exporter_build_info` gauge.
mod build_info;
mod collector;
mod descriptors;
mod emitter;

pub use build_info::{BuildInfo, EXPORTER_NAME, LONG_VERSION};
pub use collector::PidsCollector;
pub use descriptors::{ID_LABEL, MetricDescriptors, NAMESPACE};
pub use emitter::MetricEmitter;

use prometheus::Registry;

use crate::cgroup::Scanner;

/// Builds the registry served on `/metrics`.
///
/// Holds the pids collector, the build info gauge and, on Linux, the
/// exporter's own process metrics.
///
/// # Errors
///
/// Returns a [`prometheus::Error`] if a collector cannot be registered.
pub fn build_registry(scanner: Scanner, build_info: &BuildInfo) -> prometheus::Result<Registry> {
    let registry = Registry::new();
    let collector = PidsCollector::new(MetricDescriptors::new()?, scanner);
    registry.register(Box::new(collector))?;
    build_info.register(&registry)?;

    #[cfg(target_os = "linux")]
    registry.register(Box::new(
        prometheus::process_collector::ProcessCollector::for_self(),
    ))?;

    Ok(registry)
}
