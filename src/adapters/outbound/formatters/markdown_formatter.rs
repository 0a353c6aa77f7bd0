use crate::inspection::domain::{EnrichedHead, ItemRecord, LineRecord};
use crate::ports::outbound::InspectionFormatter;
use crate::shared::Result;

/// Column headers of the inspection history table
const HEAD_COLUMNS: [&str; 10] = [
    "Job",
    "Op No",
    "Op Code",
    "Item Code",
    "Item Name",
    "Lot",
    "Inspection Date",
    "Inspector",
    "Equipment",
    "Inspection",
];

/// Column headers of the inspection result table
const LINE_COLUMNS: [&str; 12] = [
    "Class",
    "Check Item",
    "Method",
    "Device",
    "Value",
    "Unit",
    "Standard",
    "Upper",
    "Lower",
    "Pass",
    "Created By",
    "Created",
];

const ITEM_COLUMNS: [&str; 6] = [
    "Item Code",
    "Item Name",
    "Type",
    "Product Group",
    "Buy/Make",
    "Status",
];

/// MarkdownFormatter adapter for human-readable tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn cell(value: &Option<String>) -> String {
        Self::escape_markdown_table_cell(value.as_deref().unwrap_or(""))
    }

    fn render_table<const N: usize>(
        output: &mut String,
        columns: &[&str; N],
        rows: impl Iterator<Item = [String; N]>,
    ) {
        output.push_str(&format!("| {} |\n", columns.join(" | ")));
        output.push_str(&format!(
            "|{}\n",
            columns
                .iter()
                .map(|c| format!("{}|", "-".repeat(c.len() + 2)))
                .collect::<String>()
        ));
        for row in rows {
            output.push_str(&format!("| {} |\n", row.join(" | ")));
        }
    }

    fn render_section<const N: usize>(
        title: &str,
        empty_message: &str,
        count: usize,
        columns: &[&str; N],
        rows: impl Iterator<Item = [String; N]>,
    ) -> String {
        let mut output = format!("## {}\n\n", title);
        if count == 0 {
            output.push_str(empty_message);
            output.push('\n');
            return output;
        }
        output.push_str(&format!("Records: {}\n\n", count));
        Self::render_table(&mut output, columns, rows);
        output
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectionFormatter for MarkdownFormatter {
    fn format_heads(&self, heads: &[EnrichedHead]) -> Result<String> {
        let rows = heads.iter().map(|h| {
            [
                Self::cell(&h.head.job_name),
                Self::cell(&h.head.operation_num),
                Self::cell(&h.head.operation_code),
                Self::cell(&h.head.item_code),
                Self::cell(&h.head.item_name),
                Self::cell(&h.head.lot_code),
                Self::cell(&h.head.inspection_date),
                Self::cell(&h.head.person_name),
                Self::escape_markdown_table_cell(&h.equipment_display),
                Self::cell(&h.head.mfg_inspection_name),
            ]
        });
        Ok(Self::render_section(
            "Process Inspection History",
            "_No inspection records match the query._",
            heads.len(),
            &HEAD_COLUMNS,
            rows,
        ))
    }

    fn format_lines(&self, lines: &[LineRecord]) -> Result<String> {
        let rows = lines.iter().map(|l| {
            [
                Self::cell(&l.level2_class_name),
                Self::cell(&l.level3_class_name),
                Self::cell(&l.check_method),
                Self::cell(&l.check_device),
                Self::cell(&l.check_value),
                Self::cell(&l.unit),
                Self::cell(&l.standard_value),
                Self::cell(&l.upper_limit),
                Self::cell(&l.lower_limit),
                Self::cell(&l.pass_decision),
                Self::cell(&l.created_by),
                Self::cell(&l.creation_date),
            ]
        });
        Ok(Self::render_section(
            "Inspection Results",
            "_No inspection results recorded._",
            lines.len(),
            &LINE_COLUMNS,
            rows,
        ))
    }

    fn format_items(&self, items: &[ItemRecord]) -> Result<String> {
        let rows = items.iter().map(|i| {
            [
                Self::cell(&i.item_code),
                Self::cell(&i.item_name),
                Self::cell(&i.item_type),
                Self::cell(&i.product_group),
                Self::cell(&i.buy_make),
                Self::cell(&i.status),
            ]
        });
        Ok(Self::render_section(
            "Items",
            "_No items match the query._",
            items.len(),
            &ITEM_COLUMNS,
            rows,
        ))
    }
}
