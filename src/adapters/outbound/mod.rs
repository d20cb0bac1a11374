/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;
mod repository_index_fetcher;

pub use repository_index_fetcher::RepositoryIndexFetcher;
