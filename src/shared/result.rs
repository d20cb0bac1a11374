/// Result alias used throughout the crate.
///
/// Typed failures are raised as [`crate::shared::ApkError`] and travel inside
/// `anyhow::Error`, so callers can downcast them to pick an exit code.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
