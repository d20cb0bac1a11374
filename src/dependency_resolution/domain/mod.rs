pub mod dependency_graph;
pub mod package_record;
pub mod repo_source;

pub use dependency_graph::DependencyGraph;
pub use package_record::PackageRecord;
pub use repo_source::{RepoSource, INDEX_ARTIFACT_NAMES};
