use crate::dependency_resolution::domain::{DependencyGraph, PackageRecord};
use crate::shared::{ApkError, Result};

/// DirectDependencyQuery - the dependencies a package lists itself
///
/// Unlike [`super::TransitiveResolver`], an unknown package is an error here.
pub struct DirectDependencyQuery;

impl DirectDependencyQuery {
    /// Looks up the first record named `package` and returns its `D` field
    ///
    /// The exclusion filter is not applied: this reports what the index
    /// declares.
    ///
    /// # Errors
    /// Returns [`ApkError::PackageNotFound`] if no record has that name
    pub fn from_records(records: &[PackageRecord], package: &str) -> Result<Vec<String>> {
        let record = records
            .iter()
            .find(|record| record.name() == Some(package))
            .ok_or_else(|| ApkError::PackageNotFound {
                package: package.to_string(),
            })?;

        Ok(record.dependencies().map(str::to_string).collect())
    }

    /// Same lookup against an already built graph
    ///
    /// # Errors
    /// Returns [`ApkError::PackageNotFound`] if `package` is not a node
    pub fn from_graph(graph: &DependencyGraph, package: &str) -> Result<Vec<String>> {
        if !graph.contains(package) {
            return Err(ApkError::PackageNotFound {
                package: package.to_string(),
            }
            .into());
        }
        Ok(graph.dependencies_of(package).to_vec())
    }
}
