use crate::dependency_resolution::domain::RepoSource;

/// ResolveRequest - input of the dependency resolution use case
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Package whose dependencies are resolved
    pub package_name: String,
    /// Where the index (or graph file) is read from
    pub source: RepoSource,
    /// Names containing this substring are left out of the graph; empty keeps all
    pub filter_substring: String,
}

impl ResolveRequest {
    pub fn new(
        package_name: impl Into<String>,
        source: RepoSource,
        filter_substring: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            source,
            filter_substring: filter_substring.into(),
        }
    }
}
