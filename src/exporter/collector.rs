use std::time::Instant;

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;

use crate::cgroup::Scanner;

use super::descriptors::MetricDescriptors;
use super::emitter::MetricEmitter;

/// Pull collector publishing `pids.max` and `pids.current` of every cgroup.
///
/// Each call to [`Collector::collect`] reports `container_pids_up 1` and then
/// performs one full scan of the pids hierarchy. Nothing is cached between
/// scrapes and failures never surface to the caller; they are only logged.
#[derive(Debug)]
pub struct PidsCollector {
    descriptors: MetricDescriptors,
    scanner: Scanner,
}

impl PidsCollector {
    pub fn new(descriptors: MetricDescriptors, scanner: Scanner) -> Self {
        Self {
            descriptors,
            scanner,
        }
    }
}

impl Collector for PidsCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.descriptors.descs()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let mut emitter = match MetricEmitter::new(&self.descriptors) {
            Ok(emitter) => emitter,
            Err(err) => {
                log::error!("failed to prepare pids metrics: {err}");
                return Vec::new();
            }
        };
        emitter.emit_up();

        let before = Instant::now();
        self.scanner.scan(&mut emitter);
        log::debug!(
            "scan of {} took {} microseconds",
            self.scanner.pids_root().display(),
            before.elapsed().as_micros()
        );

        emitter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::{Encoder, Registry, TextEncoder};
    use std::fs;
    use std::path::Path;

    fn collector(root: &Path) -> PidsCollector {
        PidsCollector::new(MetricDescriptors::new().unwrap(), Scanner::new(root))
    }

    fn add_container(root: &Path, name: &str, max: &str, current: Option<&str>) {
        let dir = root.join("pids").join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("pids.max"), max).unwrap();
        if let Some(current) = current {
            fs::write(dir.join("pids.current"), current).unwrap();
        }
    }

    fn scrape(registry: &Registry) -> String {
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&registry.gather(), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample_lines(text: &str) -> Vec<&str> {
        text.lines().filter(|line| !line.starts_with('#')).collect()
    }

    #[test]
    fn test_collect_without_containers_emits_only_up() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("pids")).unwrap();

        let families = collector(root.path()).collect();
        assert_eq!(families.len(), 1);
        assert_eq!(families[0].get_name(), "container_pids_up");
        assert_eq!(families[0].get_metric().len(), 1);
        assert_eq!(families[0].get_metric()[0].get_gauge().value(), 1.0);
    }

    #[test]
    fn test_collect_missing_hierarchy_still_up() {
        let root = tempfile::tempdir().unwrap();

        let registry = Registry::new();
        registry
            .register(Box::new(collector(root.path())))
            .unwrap();
        assert_eq!(sample_lines(&scrape(&registry)), vec!["container_pids_up 1"]);
    }

    #[test]
    fn test_collect_scenarios() {
        let root = tempfile::tempdir().unwrap();
        add_container(root.path(), "container-A", "100\n", Some("3\n"));
        add_container(root.path(), "container-B", "max\n", Some("7"));
        add_container(root.path(), "container-C", "notanumber", Some("1\n"));
        add_container(root.path(), "container-D", "32\n", None);

        let registry = Registry::new();
        registry
            .register(Box::new(collector(root.path())))
            .unwrap();

        let text = scrape(&registry);
        let mut samples = sample_lines(&text);
        samples.sort_unstable();
        assert_eq!(
            samples,
            vec![
                "container_pids_current{id=\"/container-A\"} 3",
                "container_pids_current{id=\"/container-B\"} 7",
                "container_pids_max{id=\"/container-A\"} 100",
                "container_pids_max{id=\"/container-B\"} -1",
                "container_pids_max{id=\"/container-D\"} 32",
                "container_pids_up 1",
            ]
        );
    }

    #[test]
    fn test_collect_reflects_changes_between_scrapes() {
        let root = tempfile::tempdir().unwrap();
        add_container(root.path(), "c", "10\n", Some("1\n"));
        let collector = collector(root.path());

        assert_eq!(collector.collect().len(), 3);

        fs::remove_dir_all(root.path().join("pids").join("c")).unwrap();
        let families = collector.collect();
        assert_eq!(families.len(), 1);
        assert_eq!(families[0].get_name(), "container_pids_up");
    }

    #[test]
    fn test_desc_reports_all_metrics() {
        let root = tempfile::tempdir().unwrap();
        assert_eq!(collector(root.path()).desc().len(), 3);
    }
}
