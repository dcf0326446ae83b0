use std::path::PathBuf;

use clap::Parser;

use crate::exporter::LONG_VERSION;

/// Exposes the cgroup pids controller of every container as Prometheus metrics.
#[derive(Debug, Clone, Parser)]
#[command(name = "container_pids_exporter", version, long_version = LONG_VERSION)]
pub struct Config {
    /// Address to listen on for web interface and telemetry.
    #[arg(
        long = "web.listen-address",
        env = "PIDS_EXPORTER_LISTEN_ADDRESS",
        value_name = "ADDR",
        default_value = ":8099"
    )]
    pub listen_address: String,

    /// Mount point of the cgroup filesystem holding the `pids` hierarchy.
    #[arg(
        long = "cgroup.root",
        env = "PIDS_EXPORTER_CGROUP_ROOT",
        value_name = "PATH",
        default_value = "/sys/fs/cgroup"
    )]
    pub cgroup_root: PathBuf,
}

impl Config {
    /// Returns the address to bind.
    ///
    /// An address without host (`:8099`) listens on all IPv4 interfaces.
    pub fn bind_address(&self) -> String {
        if self.listen_address.starts_with(':') {
            format!("0.0.0.0{}", self.listen_address)
        } else {
            self.listen_address.clone()
        }
    }
}
