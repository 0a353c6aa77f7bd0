use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::InspectionFormatter;

/// Factory for creating listing formatters
///
/// Selects the formatter adapter for an output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use qf_inspect::application::dto::OutputFormat;
    /// use qf_inspect::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// let output = formatter.format_items(&[]).unwrap();
    /// assert!(output.contains("\"count\": 0"));
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn InspectionFormatter> {
        match format {
            OutputFormat::Table => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Table => "📝 Rendering Markdown table...",
            OutputFormat::Json => "📝 Rendering JSON listing...",
        }
    }
}
