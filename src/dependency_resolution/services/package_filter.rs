use std::cell::Cell;

/// PackageFilter - Excludes every name containing a substring
///
/// An empty substring disables the filter. The same rule applies to graph
/// nodes and to dependency names, so the filtered graph never points at a
/// node it excluded.
#[derive(Debug, Default)]
pub struct PackageFilter {
    substring: String,
    matched: Cell<bool>,
}

impl PackageFilter {
    pub fn new(substring: impl Into<String>) -> Self {
        Self {
            substring: substring.into(),
            matched: Cell::new(false),
        }
    }

    /// A filter that keeps everything
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.substring.is_empty()
    }

    pub fn substring(&self) -> &str {
        &self.substring
    }

    /// Returns true if `name` must be dropped
    pub fn excludes(&self, name: &str) -> bool {
        let excluded = self.is_active() && name.contains(self.substring.as_str());
        if excluded {
            self.matched.set(true);
        }
        excluded
    }

    pub fn keeps(&self, name: &str) -> bool {
        !self.excludes(name)
    }

    /// Whether any name checked so far was excluded
    ///
    /// Call after filtering to warn about a substring that had no effect.
    pub fn has_matched(&self) -> bool {
        self.matched.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = PackageFilter::none();
        assert!(!filter.is_active());
        assert!(filter.keeps("libc"));
        assert!(filter.keeps(""));
        assert!(!filter.has_matched());
    }

    #[test]
    fn test_substring_anywhere_excludes() {
        let filter = PackageFilter::new("lib");
        assert!(filter.excludes("libc"));
        assert!(filter.excludes("glibc-dev"));
        assert!(filter.keeps("musl"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let filter = PackageFilter::new("Lib");
        assert!(filter.keeps("libc"));
    }

    #[test]
    fn test_has_matched_tracks_exclusions() {
        let filter = PackageFilter::new("busy");
        assert!(filter.keeps("musl"));
        assert!(!filter.has_matched());

        assert!(filter.excludes("busybox"));
        assert!(filter.has_matched());
    }
}
