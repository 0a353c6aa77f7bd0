use crate::inspection::domain::{EnrichedHead, ItemRecord, LineRecord};
use crate::ports::outbound::InspectionFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Listing<'a, T> {
    kind: &'static str,
    count: usize,
    records: &'a [T],
}

/// JsonFormatter adapter for machine-readable output
///
/// Each listing is wrapped in `{"kind", "count", "records"}`; records keep
/// the backend's camelCase field names.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn listing<T: Serialize>(kind: &'static str, records: &[T]) -> Result<String> {
        let listing = Listing {
            kind,
            count: records.len(),
            records,
        };
        let mut output = serde_json::to_string_pretty(&listing)?;
        output.push('\n');
        Ok(output)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectionFormatter for JsonFormatter {
    fn format_heads(&self, heads: &[EnrichedHead]) -> Result<String> {
        Self::listing("inspectionHistory", heads)
    }

    fn format_lines(&self, lines: &[LineRecord]) -> Result<String> {
        Self::listing("inspectionResults", lines)
    }

    fn format_items(&self, items: &[ItemRecord]) -> Result<String> {
        Self::listing("items", items)
    }
}
