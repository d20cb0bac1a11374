use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::dependency_resolution::domain::DependencyGraph;
use crate::dependency_resolution::services::{
    DirectDependencyQuery, GraphBuilder, GraphFileParser, IndexDecoder, PackageFilter,
    RecordParser, TransitiveResolver,
};
use crate::ports::outbound::{FetchedIndex, IndexFetcher, ProgressReporter};
use crate::shared::Result;

/// Number of pipeline stages reported through `report_progress`
const PIPELINE_STEPS: usize = 5;

/// Direct dependencies of the requested package plus the filtered graph
type LoadedGraph = (Vec<String>, DependencyGraph);

/// ResolveDependenciesUseCase - Core use case for dependency resolution
///
/// Runs the pipeline fetch -> decode -> parse -> build -> resolve once per
/// request. The direct-dependency query is answered from the same parsed
/// records, so the index is never fetched twice.
///
/// # Type Parameters
/// * `F` - IndexFetcher implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<F, PR> {
    index_fetcher: F,
    progress_reporter: PR,
}

impl<F, PR> ResolveDependenciesUseCase<F, PR>
where
    F: IndexFetcher,
    PR: ProgressReporter,
{
    /// Creates a new ResolveDependenciesUseCase with injected dependencies
    pub fn new(index_fetcher: F, progress_reporter: PR) -> Self {
        Self {
            index_fetcher,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Fails if the index cannot be fetched or decoded, or if the package
    /// has no record of its own. The transitive walk itself never fails.
    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        // Step 1: Retrieve raw bytes
        let fetched = self.fetch_index(&request)?;

        let filter = PackageFilter::new(request.filter_substring.clone());

        // Steps 2-4: Decode, parse and build the graph
        let (direct_dependencies, graph) = if request.source.is_graph_file() {
            self.load_graph_file(&fetched, &request, &filter)?
        } else {
            self.load_index(&fetched, &request, &filter)?
        };
        self.warn_if_filter_unused(&filter);

        // Step 5: Walk the graph
        self.progress_reporter
            .report_progress(5, PIPELINE_STEPS, Some("Resolving transitive dependencies"));
        let transitive_dependencies = TransitiveResolver::resolve(&graph, &request.package_name);

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} transitive dependenc{} for '{}'",
            transitive_dependencies.len(),
            if transitive_dependencies.len() == 1 { "y" } else { "ies" },
            request.package_name
        ));

        Ok(ResolveResponse::new(
            request.package_name,
            direct_dependencies,
            graph,
            transitive_dependencies,
        ))
    }

    fn fetch_index(&self, request: &ResolveRequest) -> Result<FetchedIndex> {
        self.progress_reporter
            .report(&format!("📥 Fetching index from: {}", request.source));
        self.progress_reporter
            .report_progress(1, PIPELINE_STEPS, Some("Fetching index"));

        let fetched = self.index_fetcher.fetch_index(&request.source)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} byte(s) from {}",
            fetched.bytes.len(),
            fetched.origin
        ));
        Ok(fetched)
    }

    /// APKINDEX path: decode, parse records, answer the direct query, build
    fn load_index(
        &self,
        fetched: &FetchedIndex,
        request: &ResolveRequest,
        filter: &PackageFilter,
    ) -> Result<LoadedGraph> {
        self.progress_reporter
            .report_progress(2, PIPELINE_STEPS, Some("Decoding index"));
        let text = IndexDecoder::decode(&fetched.bytes)?;

        self.progress_reporter
            .report_progress(3, PIPELINE_STEPS, Some("Parsing records"));
        let records = RecordParser::parse(&text);
        self.progress_reporter
            .report(&format!("📖 Parsed {} package record(s)", records.len()));

        let direct_dependencies =
            DirectDependencyQuery::from_records(&records, &request.package_name)?;

        self.progress_reporter
            .report_progress(4, PIPELINE_STEPS, Some("Building dependency graph"));
        let graph = GraphBuilder::build(&records, filter);
        self.report_graph(&graph);

        Ok((direct_dependencies, graph))
    }

    /// Graph description path: the file already is the graph
    fn load_graph_file(
        &self,
        fetched: &FetchedIndex,
        request: &ResolveRequest,
        filter: &PackageFilter,
    ) -> Result<LoadedGraph> {
        self.progress_reporter
            .report_progress(2, PIPELINE_STEPS, Some("Reading graph file"));
        let text = String::from_utf8_lossy(&fetched.bytes);

        self.progress_reporter
            .report_progress(4, PIPELINE_STEPS, Some("Building dependency graph"));
        let graph = GraphFileParser::parse(&text, filter);
        self.report_graph(&graph);

        let direct_dependencies = DirectDependencyQuery::from_graph(&graph, &request.package_name)?;
        Ok((direct_dependencies, graph))
    }

    fn report_graph(&self, graph: &DependencyGraph) {
        self.progress_reporter.report(&format!(
            "🔗 Built dependency graph: {} package(s), {} edge(s)",
            graph.len(),
            graph.edge_count()
        ));
    }

    fn warn_if_filter_unused(&self, filter: &PackageFilter) {
        if filter.is_active() && !filter.has_matched() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Filter substring '{}' did not match any package.",
                filter.substring()
            ));
        }
    }
}

#[cfg(test)]
mod tests;
