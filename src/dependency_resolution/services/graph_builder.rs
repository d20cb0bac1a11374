use super::PackageFilter;
use crate::dependency_resolution::domain::{DependencyGraph, PackageRecord};

/// GraphBuilder - builds the filtered dependency graph from index records
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the graph
    ///
    /// Records without a name are skipped. A record whose name is excluded
    /// by `filter` is dropped entirely; excluded names are also removed from
    /// every dependency list. A repeated name replaces the earlier entry.
    pub fn build(records: &[PackageRecord], filter: &PackageFilter) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        for record in records {
            let Some(name) = record.name() else {
                continue;
            };
            if filter.excludes(name) {
                continue;
            }

            let dependencies = record
                .dependencies()
                .filter(|dep| filter.keeps(dep))
                .map(str::to_string)
                .collect();

            graph.insert(name, dependencies);
        }

        graph
    }
}
