use crate::shared::{ApkError, Result};
use flate2::read::MultiGzDecoder;
use std::io::Read;
use tar::Archive;

/// Name of the index entry inside `APKINDEX.tar.gz`
const INDEX_ENTRY_NAME: &str = "APKINDEX";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// IndexDecoder - turns raw index bytes into text
///
/// Accepts either a gzip-compressed tar archive holding an `APKINDEX` entry
/// or the index text itself. Bytes that are not a gzip/tar container are
/// returned as text unchanged.
pub struct IndexDecoder;

impl IndexDecoder {
    /// Decodes raw bytes into index text
    ///
    /// Invalid UTF-8 is replaced, never rejected.
    ///
    /// A gzip stream holding no tar entry at all (empty input, or a tar
    /// made only of end-of-archive blocks) is treated like any other
    /// non-archive and returned as text.
    ///
    /// # Errors
    /// Returns [`ApkError::DecodeError`] if the archive opened but contains
    /// no `APKINDEX` entry, or an entry after the first could not be read.
    pub fn decode(raw: &[u8]) -> Result<String> {
        if !raw.starts_with(&GZIP_MAGIC) {
            return Ok(Self::as_text(raw));
        }

        // Alpine ships the signature and the index as two concatenated gzip
        // members; a single-member decoder would stop after the signature.
        let mut archive = Archive::new(MultiGzDecoder::new(raw));
        let entries = match archive.entries() {
            Ok(entries) => entries,
            Err(_) => return Ok(Self::as_text(raw)),
        };

        let mut has_entries = false;
        for (position, entry) in entries.enumerate() {
            let mut entry = match entry {
                Ok(entry) => entry,
                // The first header could not be read: not a tar.gz at all.
                Err(_) if position == 0 => return Ok(Self::as_text(raw)),
                Err(e) => {
                    return Err(ApkError::DecodeError {
                        details: format!("Archive entry #{} is unreadable: {}", position, e),
                    }
                    .into())
                }
            };
            has_entries = true;

            let is_index = entry
                .path()
                .map(|path| path.to_string_lossy().ends_with(INDEX_ENTRY_NAME))
                .unwrap_or(false);
            if !is_index {
                continue;
            }

            let mut content = Vec::new();
            entry
                .read_to_end(&mut content)
                .map_err(|e| ApkError::DecodeError {
                    details: format!("Failed to extract {} from archive: {}", INDEX_ENTRY_NAME, e),
                })?;
            return Ok(Self::as_text(&content));
        }

        if !has_entries {
            return Ok(Self::as_text(raw));
        }

        Err(ApkError::DecodeError {
            details: format!("{} not found inside archive", INDEX_ENTRY_NAME),
        }
        .into())
    }

    fn as_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
