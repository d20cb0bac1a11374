//! apk-deps - dependency resolver for Alpine Linux package indexes
//!
//! This library reads an APKINDEX (remote, local, or plain text), builds a
//! dependency graph of the packages it lists, and resolves the direct and
//! transitive dependencies of one package. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_resolution`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//! - **Config** (`config`): Loading and validation of the CSV configuration
//!
//! # Example
//!
//! ```no_run
//! use apk_deps::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let index_fetcher =
//!     RepositoryIndexFetcher::new(HttpIndexClient::new()?, FileSystemIndexReader::new());
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ResolveDependenciesUseCase::new(index_fetcher, progress_reporter);
//!
//! // Execute
//! let request = ResolveRequest::new(
//!     "busybox",
//!     RepoSource::Remote("https://dl-cdn.alpinelinux.org/alpine/v3.18/main/x86_64/".into()),
//!     "",
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = TextFormatter::new().with_ascii_tree(true).format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemIndexReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::HttpIndexClient;
    pub use crate::adapters::outbound::RepositoryIndexFetcher;
    pub use crate::application::dto::{OutputFormat, ResolveRequest, ResolveResponse};
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::ports::outbound::{
        FetchedIndex, IndexFetcher, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::dependency_resolution::domain::{DependencyGraph, PackageRecord, RepoSource};
    pub use crate::dependency_resolution::services::{
        DirectDependencyQuery, GraphBuilder, GraphFileParser, IndexDecoder, PackageFilter,
        RecordParser, TransitiveResolver,
    };
    pub use crate::shared::Result;
}
