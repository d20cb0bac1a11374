use crate::application::dto::ResolveResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering a resolution result
///
/// This port abstracts the output format (plain text, JSON, ...).
pub trait ReportFormatter {
    /// Formats the response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ResolveResponse) -> Result<String>;
}
