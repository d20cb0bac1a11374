/// Formatter adapters for the resolution report
mod json_formatter;
mod text_formatter;
mod tree_renderer;

pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;
