//! Container pids exporter: publishes the cgroup `pids` controller of every
//! container as Prometheus metrics.
//!
//! On each scrape of `/metrics` the exporter walks `<cgroup root>/pids`, reads
//! `pids.max` and `pids.current` of every directory and reports them as
//! `container_pids_max{id}` and `container_pids_current{id}`, alongside an
//! unconditional `container_pids_up 1`. Nothing is cached between scrapes.
pub mod api;
pub mod cgroup;
pub mod config;
pub mod container;
pub mod error;
pub mod exporter;
pub mod fsutil;

use config::Config;
use exporter::{BuildInfo, EXPORTER_NAME};

/// Runs the exporter until interrupted.
///
/// # Errors
///
/// Possible errors include:
/// - Failure to build the metrics registry.
/// - Failure to bind the listen address.
/// - I/O errors of the HTTP server.
pub async fn run(config: Config) -> error::Result<()> {
    let build_info = BuildInfo::current();
    log::info!(
        "Starting {} (version={}, revision={})",
        EXPORTER_NAME,
        build_info.version,
        build_info.revision
    );
    log::info!("Build context (rustversion={})", build_info.rust_version);

    let scanner = cgroup::Scanner::new(&config.cgroup_root);
    log::debug!("Pids hierarchy: {}", scanner.pids_root().display());

    let registry = exporter::build_registry(scanner, &build_info)?;
    api::APIServer::new(registry)
        .listen(config.bind_address())
        .await
}
