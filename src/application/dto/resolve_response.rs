use crate::dependency_resolution::domain::DependencyGraph;

/// ResolveResponse - everything the formatters need, as plain data
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    pub package: String,
    /// Dependencies declared by the package itself, unfiltered
    pub direct_dependencies: Vec<String>,
    /// Filtered graph of the whole index
    pub graph: DependencyGraph,
    /// Reachable packages in traversal order, excluding `package`
    pub transitive_dependencies: Vec<String>,
}

impl ResolveResponse {
    pub fn new(
        package: String,
        direct_dependencies: Vec<String>,
        graph: DependencyGraph,
        transitive_dependencies: Vec<String>,
    ) -> Self {
        Self {
            package,
            direct_dependencies,
            graph,
            transitive_dependencies,
        }
    }
}
