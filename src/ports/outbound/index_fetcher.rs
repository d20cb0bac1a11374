use crate::dependency_resolution::domain::RepoSource;
use crate::shared::Result;

/// Raw bytes of an index artifact together with where they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedIndex {
    /// URL or path of the artifact that was actually read
    pub origin: String,
    pub bytes: Vec<u8>,
}

impl FetchedIndex {
    pub fn new(origin: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            origin: origin.into(),
            bytes,
        }
    }
}

/// IndexFetcher port for retrieving raw index bytes
///
/// This port abstracts the network and file system access needed to get
/// an APKINDEX. Implementations do not parse or decompress anything.
pub trait IndexFetcher {
    /// Retrieves the index artifact described by `source`
    ///
    /// # Errors
    /// Returns an error if:
    /// - Every remote candidate failed or returned an empty body
    /// - The local directory holds neither `APKINDEX.tar.gz` nor `APKINDEX`
    /// - The local file does not exist or is not an index artifact
    fn fetch_index(&self, source: &RepoSource) -> Result<FetchedIndex>;
}
