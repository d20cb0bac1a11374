use apk_deps::prelude::*;
use apk_deps::shared::ApkError;
use std::collections::HashMap;

/// Mock IndexFetcher serving canned bytes per source
#[derive(Default)]
pub struct MockIndexFetcher {
    indexes: HashMap<String, Vec<u8>>,
}

#[allow(dead_code)]
impl MockIndexFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(mut self, source: &RepoSource, bytes: impl Into<Vec<u8>>) -> Self {
        self.indexes.insert(source.to_string(), bytes.into());
        self
    }
}

impl IndexFetcher for MockIndexFetcher {
    fn fetch_index(&self, source: &RepoSource) -> Result<FetchedIndex> {
        match self.indexes.get(&source.to_string()) {
            Some(bytes) => Ok(FetchedIndex::new(format!("mock:{}", source), bytes.clone())),
            None => Err(ApkError::FetchError {
                location: source.to_string(),
                details: "no index registered for this source".to_string(),
                hint: "register one with MockIndexFetcher::with_index".to_string(),
            }
            .into()),
        }
    }
}
