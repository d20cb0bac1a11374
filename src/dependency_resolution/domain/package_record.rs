use std::collections::BTreeMap;

/// Field code holding the package name
const FIELD_NAME: &str = "P";
/// Field code holding the space-separated dependency list
const FIELD_DEPENDS: &str = "D";

/// One block of an APKINDEX, as `field code -> value` pairs.
///
/// Only `P` and `D` carry meaning for resolution; every other field is kept
/// as-is so callers can still look at it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRecord {
    fields: BTreeMap<String, String>,
}

impl PackageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field; a repeated key replaces the earlier value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Package name (`P`), `None` if the block has no name
    pub fn name(&self) -> Option<&str> {
        self.get(FIELD_NAME).filter(|name| !name.is_empty())
    }

    /// Dependency tokens of the `D` field in source order
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.get(FIELD_DEPENDS).unwrap_or_default().split_whitespace()
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PackageRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = PackageRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_dependencies() {
        let record: PackageRecord = [("P", "busybox"), ("V", "1.36.1-r5"), ("D", "libc  musl")]
            .into_iter()
            .collect();

        assert_eq!(record.name(), Some("busybox"));
        assert_eq!(record.get("V"), Some("1.36.1-r5"));
        assert_eq!(record.dependencies().collect::<Vec<_>>(), vec!["libc", "musl"]);
    }

    #[test]
    fn test_missing_depends_field_means_no_dependencies() {
        let record: PackageRecord = [("P", "musl")].into_iter().collect();
        assert_eq!(record.dependencies().count(), 0);
    }

    #[test]
    fn test_empty_name_is_treated_as_missing() {
        let record: PackageRecord = [("P", ""), ("D", "libc")].into_iter().collect();
        assert!(record.name().is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut record = PackageRecord::new();
        record.insert("P", "first");
        record.insert("P", "second");
        assert_eq!(record.name(), Some("second"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_opaque_fields_are_kept() {
        let record: PackageRecord = [("P", "zlib"), ("A", "x86_64"), ("T", "A compression library")]
            .into_iter()
            .collect();
        assert_eq!(record.get("A"), Some("x86_64"));
        assert_eq!(record.fields().len(), 3);
    }
}
