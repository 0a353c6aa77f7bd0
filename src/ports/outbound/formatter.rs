use crate::inspection::domain::{EnrichedHead, ItemRecord, LineRecord};
use crate::shared::Result;

/// InspectionFormatter port for rendering query results as text
///
/// This port abstracts the textual output formats (Markdown table, JSON).
pub trait InspectionFormatter {
    /// Formats enriched head records (the inspection history view)
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_heads(&self, heads: &[EnrichedHead]) -> Result<String>;

    /// Formats the detail lines of one inspection
    fn format_lines(&self, lines: &[LineRecord]) -> Result<String>;

    /// Formats an item master listing
    fn format_items(&self, items: &[ItemRecord]) -> Result<String>;
}
