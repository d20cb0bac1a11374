use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Belongs to the application layer: it picks an infrastructure adapter
/// for an application-level choice.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`
    ///
    /// `ascii_tree` only affects the text report, which then appends a
    /// dependency tree rooted at the requested package.
    ///
    /// # Examples
    /// ```
    /// use apk_deps::application::dto::OutputFormat;
    /// use apk_deps::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Text, true);
    /// ```
    pub fn create(format: OutputFormat, ascii_tree: bool) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new().with_ascii_tree(ascii_tree)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use apk_deps::application::dto::OutputFormat;
    /// use apk_deps::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating text report...",
            OutputFormat::Json => "📝 Generating JSON report...",
        }
    }
}
