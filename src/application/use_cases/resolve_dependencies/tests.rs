use super::*;
use crate::dependency_resolution::domain::RepoSource;
use crate::shared::ApkError;
use std::cell::RefCell;
use std::path::PathBuf;

// Mock implementations for testing
struct MockIndexFetcher {
    bytes: Vec<u8>,
    requested: RefCell<Vec<RepoSource>>,
}

impl MockIndexFetcher {
    fn new(content: &str) -> Self {
        Self {
            bytes: content.as_bytes().to_vec(),
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl IndexFetcher for MockIndexFetcher {
    fn fetch_index(&self, source: &RepoSource) -> Result<FetchedIndex> {
        self.requested.borrow_mut().push(source.clone());
        Ok(FetchedIndex::new("mock://APKINDEX", self.bytes.clone()))
    }
}

struct FailingIndexFetcher;

impl IndexFetcher for FailingIndexFetcher {
    fn fetch_index(&self, source: &RepoSource) -> Result<FetchedIndex> {
        Err(ApkError::FetchError {
            location: source.to_string(),
            details: "connection refused".to_string(),
            hint: "mock".to_string(),
        }
        .into())
    }
}

#[derive(Default)]
struct MockProgressReporter {
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, _message: &str) {}
}

const INDEX: &str = "P:busybox\nD:libc musl\n\nP:libc\n\nP:musl\n";

fn remote_request(package: &str, filter: &str) -> ResolveRequest {
    ResolveRequest::new(
        package,
        RepoSource::Remote("https://mirror.example/alpine/v3.18/main/x86_64".to_string()),
        filter,
    )
}

#[test]
fn test_execute_without_filter() {
    let use_case =
        ResolveDependenciesUseCase::new(MockIndexFetcher::new(INDEX), MockProgressReporter::default());

    let response = use_case.execute(remote_request("busybox", "")).unwrap();

    assert_eq!(response.package, "busybox");
    assert_eq!(response.direct_dependencies, vec!["libc", "musl"]);
    assert_eq!(response.graph.len(), 3);
    assert_eq!(response.transitive_dependencies, vec!["musl", "libc"]);
}

#[test]
fn test_execute_with_filter() {
    let use_case =
        ResolveDependenciesUseCase::new(MockIndexFetcher::new(INDEX), MockProgressReporter::default());

    let response = use_case.execute(remote_request("busybox", "lib")).unwrap();

    // The direct view reports what the index declares; the graph is filtered.
    assert_eq!(response.direct_dependencies, vec!["libc", "musl"]);
    assert!(!response.graph.contains("libc"));
    assert_eq!(response.graph.dependencies_of("busybox"), &["musl".to_string()]);
    assert_eq!(response.transitive_dependencies, vec!["musl"]);
}

#[test]
fn test_execute_fetches_once() {
    let fetcher = MockIndexFetcher::new(INDEX);
    let use_case = ResolveDependenciesUseCase::new(fetcher, MockProgressReporter::default());

    use_case.execute(remote_request("busybox", "")).unwrap();

    assert_eq!(use_case.index_fetcher.requested.borrow().len(), 1);
}

#[test]
fn test_execute_unknown_package_is_not_found() {
    let use_case =
        ResolveDependenciesUseCase::new(MockIndexFetcher::new(INDEX), MockProgressReporter::default());

    let err = use_case.execute(remote_request("ghost", "")).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ApkError>(),
        Some(ApkError::PackageNotFound { .. })
    ));
}

#[test]
fn test_execute_propagates_fetch_error() {
    let use_case = ResolveDependenciesUseCase::new(FailingIndexFetcher, MockProgressReporter::default());

    let err = use_case.execute(remote_request("busybox", "")).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ApkError>(),
        Some(ApkError::FetchError { .. })
    ));
}

#[test]
fn test_execute_warns_about_unused_filter() {
    let use_case =
        ResolveDependenciesUseCase::new(MockIndexFetcher::new(INDEX), MockProgressReporter::default());

    use_case.execute(remote_request("busybox", "python")).unwrap();

    let errors = use_case.progress_reporter.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("'python' did not match"));
}

#[test]
fn test_execute_graph_file_source() {
    let graph_text = "# test graph\nA: B C\nB: D\nC:\nD: A\n";
    let use_case = ResolveDependenciesUseCase::new(
        MockIndexFetcher::new(graph_text),
        MockProgressReporter::default(),
    );
    let request = ResolveRequest::new("A", RepoSource::GraphFile(PathBuf::from("graph.txt")), "");

    let response = use_case.execute(request).unwrap();

    assert_eq!(response.direct_dependencies, vec!["B", "C"]);
    assert_eq!(response.transitive_dependencies, vec!["C", "B", "D"]);
}

#[test]
fn test_execute_graph_file_unknown_package() {
    let use_case =
        ResolveDependenciesUseCase::new(MockIndexFetcher::new("A: B\n"), MockProgressReporter::default());
    let request = ResolveRequest::new("Z", RepoSource::GraphFile(PathBuf::from("graph.txt")), "");

    assert!(use_case.execute(request).is_err());
}

#[test]
fn test_execute_package_without_dependencies() {
    let use_case =
        ResolveDependenciesUseCase::new(MockIndexFetcher::new(INDEX), MockProgressReporter::default());

    let response = use_case.execute(remote_request("musl", "")).unwrap();

    assert!(response.direct_dependencies.is_empty());
    assert!(response.transitive_dependencies.is_empty());
}
