use clap::Parser;

use container_pids_exporter::config::Config;

/// Entry point for the container pids exporter.
///
/// Parses the command line, sets up logging (`RUST_LOG`, default `info`) and
/// serves `/metrics` until interrupted. Exits with a nonzero status if the
/// exporter cannot start, e.g. when the listen address cannot be bound.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug cargo run -- --web.listen-address=:8099 --cgroup.root=/sys/fs/cgroup
/// ```
#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    if let Err(err) = container_pids_exporter::run(config).await {
        log::error!("{err}");
        std::process::exit(1);
    }
}
