use crate::application::dto::ResolveResponse;
use crate::dependency_resolution::domain::DependencyGraph;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    package: &'a str,
    generated_at: String,
    direct_dependencies: &'a [String],
    graph: &'a DependencyGraph,
    transitive_dependencies: &'a [String],
}

/// JsonFormatter adapter for machine-readable output
///
/// `graph` is an object whose keys keep graph order.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &ResolveResponse) -> Result<String> {
        let report = JsonReport {
            package: &response.package,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            direct_dependencies: &response.direct_dependencies,
            graph: &response.graph,
            transitive_dependencies: &response.transitive_dependencies,
        };

        serde_json::to_string_pretty(&report).map_err(Into::into)
    }
}
