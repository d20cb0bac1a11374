use crate::dependency_resolution::domain::PackageRecord;

/// RecordParser - splits APKINDEX text into package records
///
/// The index is a sequence of blocks separated by a blank line; each line
/// of a block is `key:value`. Parsing never fails: lines without a colon
/// and blocks without any pair are skipped.
pub struct RecordParser;

impl RecordParser {
    pub fn parse(text: &str) -> Vec<PackageRecord> {
        let normalized = text.replace("\r\n", "\n");

        normalized
            .trim()
            .split("\n\n")
            .filter_map(Self::parse_block)
            .collect()
    }

    fn parse_block(block: &str) -> Option<PackageRecord> {
        let record: PackageRecord = block
            .trim()
            .lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key, value.trim()))
            .collect();

        (!record.is_empty()).then_some(record)
    }
}
