//! Fixed-order registry of the kinds a full run sweeps.

use sweeper_config::Endpoints;

use super::composer::ComposerEnvironments;
use super::compute::ComputeKind;
use super::container::ContainerClusters;
use super::dataproc::DataprocClusters;
use super::redis::RedisInstances;
use super::traits::ResourceKind;

/// One entry in the sweep order.
pub struct KindEntry {
    /// Operator-facing label used in run logs and the summary.
    pub label: &'static str,
    pub kind: Box<dyn ResourceKind>,
}

/// All kinds in dependency order: managed environments and clusters first
/// (they hold compute underneath), then the compute primitives, then caches.
pub fn default_kinds(endpoints: &Endpoints) -> Vec<KindEntry> {
    vec![
        KindEntry {
            label: "composer environments",
            kind: Box::new(ComposerEnvironments::new(&endpoints.composer)),
        },
        KindEntry {
            label: "container clusters",
            kind: Box::new(ContainerClusters::new(&endpoints.container)),
        },
        KindEntry {
            label: "dataproc clusters",
            kind: Box::new(DataprocClusters::new(&endpoints.dataproc)),
        },
        KindEntry {
            label: "compute instances",
            kind: Box::new(ComputeKind::instances(&endpoints.compute)),
        },
        KindEntry {
            label: "compute disks",
            kind: Box::new(ComputeKind::disks(&endpoints.compute)),
        },
        KindEntry {
            label: "memorystore redis instances",
            kind: Box::new(RedisInstances::new(&endpoints.redis)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::traits::ListScope;

    #[test]
    fn test_kinds_run_in_dependency_order() {
        let kinds = default_kinds(&Endpoints::default());
        let labels: Vec<&str> = kinds.iter().map(|entry| entry.label).collect();
        assert_eq!(
            labels,
            vec![
                "composer environments",
                "container clusters",
                "dataproc clusters",
                "compute instances",
                "compute disks",
                "memorystore redis instances",
            ]
        );
    }

    #[test]
    fn test_only_container_clusters_use_the_wildcard_listing() {
        let kinds = default_kinds(&Endpoints::default());
        let wildcard: Vec<&str> = kinds
            .iter()
            .filter(|entry| entry.kind.scope() == ListScope::AllLocations)
            .map(|entry| entry.label)
            .collect();
        assert_eq!(wildcard, vec!["container clusters"]);
    }
}
