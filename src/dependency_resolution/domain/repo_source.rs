use std::fmt;
use std::path::PathBuf;

/// Index artifacts a repository may hold, in lookup order
pub const INDEX_ARTIFACT_NAMES: [&str; 2] = ["APKINDEX.tar.gz", "APKINDEX"];

/// Where the package index comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSource {
    /// Base URL of a repository serving `APKINDEX.tar.gz` / `APKINDEX`
    Remote(String),
    /// A repository directory, or a single index file
    Local(PathBuf),
    /// A plain `name: dep dep` graph description, used for testing
    GraphFile(PathBuf),
}

impl RepoSource {
    pub fn is_graph_file(&self) -> bool {
        matches!(self, RepoSource::GraphFile(_))
    }
}

impl fmt::Display for RepoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoSource::Remote(url) => write!(f, "{}", url),
            RepoSource::Local(path) | RepoSource::GraphFile(path) => {
                write!(f, "{}", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let remote = RepoSource::Remote("https://dl-cdn.alpinelinux.org/alpine/v3.18/main/x86_64/".into());
        assert_eq!(
            remote.to_string(),
            "https://dl-cdn.alpinelinux.org/alpine/v3.18/main/x86_64/"
        );

        let local = RepoSource::Local(PathBuf::from("/srv/mirror"));
        assert_eq!(local.to_string(), "/srv/mirror");
    }

    #[test]
    fn test_is_graph_file() {
        assert!(RepoSource::GraphFile(PathBuf::from("graph.txt")).is_graph_file());
        assert!(!RepoSource::Local(PathBuf::from("APKINDEX")).is_graph_file());
    }
}
