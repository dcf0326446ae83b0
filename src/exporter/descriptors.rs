use std::collections::HashMap;

use prometheus::Opts;
use prometheus::core::Desc;

/// Prefix shared by all pids metrics.
pub const NAMESPACE: &str = "container_pids";
/// Label carrying the container identifier.
pub const ID_LABEL: &str = "id";

/// Descriptors of the three pids metrics, built once at startup.
#[derive(Debug, Clone)]
pub struct MetricDescriptors {
    up: Opts,
    max: Opts,
    current: Opts,
    descs: Vec<Desc>,
}

impl MetricDescriptors {
    /// Builds and validates the descriptors.
    ///
    /// # Errors
    ///
    /// Returns a [`prometheus::Error`] if a metric name or label is invalid.
    pub fn new() -> prometheus::Result<Self> {
        let up =
            Opts::new("up", "Was the last query of pids check successful.").namespace(NAMESPACE);
        let max =
            Opts::new("max", "Current pids.max value of the container.").namespace(NAMESPACE);
        let current = Opts::new("current", "Current pids.current value of the container.")
            .namespace(NAMESPACE);

        let descs = vec![
            describe(&up, &[])?,
            describe(&max, &[ID_LABEL])?,
            describe(&current, &[ID_LABEL])?,
        ];

        Ok(Self {
            up,
            max,
            current,
            descs,
        })
    }

    pub fn up(&self) -> &Opts {
        &self.up
    }

    pub fn max(&self) -> &Opts {
        &self.max
    }

    pub fn current(&self) -> &Opts {
        &self.current
    }

    pub fn descs(&self) -> Vec<&Desc> {
        self.descs.iter().collect()
    }
}

fn describe(opts: &Opts, labels: &[&str]) -> prometheus::Result<Desc> {
    Desc::new(
        opts.fq_name(),
        opts.help.clone(),
        labels.iter().map(|label| (*label).to_owned()).collect(),
        HashMap::new(),
    )
}
