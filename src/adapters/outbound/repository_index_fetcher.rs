use crate::adapters::outbound::filesystem::FileSystemIndexReader;
use crate::adapters::outbound::network::HttpIndexClient;
use crate::dependency_resolution::domain::RepoSource;
use crate::ports::outbound::{FetchedIndex, IndexFetcher};
use crate::shared::Result;

/// RepositoryIndexFetcher - IndexFetcher that routes on the source kind
///
/// Remote sources go to the HTTP client, everything else to the filesystem
/// reader.
pub struct RepositoryIndexFetcher {
    http_client: HttpIndexClient,
    file_reader: FileSystemIndexReader,
}

impl RepositoryIndexFetcher {
    pub fn new(http_client: HttpIndexClient, file_reader: FileSystemIndexReader) -> Self {
        Self {
            http_client,
            file_reader,
        }
    }
}

impl IndexFetcher for RepositoryIndexFetcher {
    fn fetch_index(&self, source: &RepoSource) -> Result<FetchedIndex> {
        match source {
            RepoSource::Remote(url) => self.http_client.fetch(url),
            RepoSource::Local(path) => self.file_reader.read_local(path),
            RepoSource::GraphFile(path) => self.file_reader.read_graph_file(path),
        }
    }
}
