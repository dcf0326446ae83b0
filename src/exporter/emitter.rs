use prometheus::core::Collector;
use prometheus::proto::MetricFamily;
use prometheus::{Gauge, GaugeVec};

use crate::cgroup::{Finding, FindingSink};

use super::descriptors::{ID_LABEL, MetricDescriptors};

/// Value of `container_pids_up` whenever a scrape starts collecting.
const UP: f64 = 1.0;

/// Turns findings into gauge samples as they arrive.
///
/// An emitter holds the samples of exactly one scrape; a fresh one is built
/// for every collection so concurrent scrapes never share values.
pub struct MetricEmitter {
    up: Gauge,
    max: GaugeVec,
    current: GaugeVec,
}

impl MetricEmitter {
    /// # Errors
    ///
    /// Returns a [`prometheus::Error`] if the descriptors are invalid.
    pub fn new(descriptors: &MetricDescriptors) -> prometheus::Result<Self> {
        Ok(Self {
            up: Gauge::with_opts(descriptors.up().clone())?,
            max: GaugeVec::new(descriptors.max().clone(), &[ID_LABEL])?,
            current: GaugeVec::new(descriptors.current().clone(), &[ID_LABEL])?,
        })
    }

    /// Records the liveness sample.
    pub fn emit_up(&mut self) {
        self.up.set(UP);
    }

    /// Returns the recorded samples, omitting metrics without any sample.
    pub fn finish(self) -> Vec<MetricFamily> {
        let mut families = self.up.collect();
        families.extend(self.max.collect());
        families.extend(self.current.collect());
        families.retain(|family| !family.get_metric().is_empty());
        families
    }
}

impl FindingSink for MetricEmitter {
    fn record(&mut self, finding: Finding) {
        match finding {
            Finding::Max { id, limit } => self
                .max
                .with_label_values(&[id.as_ref()])
                .set(limit.gauge_value()),
            Finding::Current { id, current } => self
                .current
                .with_label_values(&[id.as_ref()])
                .set(current.count),
        }
    }
}
