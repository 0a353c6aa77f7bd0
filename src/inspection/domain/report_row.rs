use super::{EnrichedHead, LineRecord};

/// Column headers of the flat report table
pub const REPORT_COLUMNS: [&str; 11] = [
    "Group",
    "Item Code",
    "Item Name",
    "Workcenter",
    "Check Item",
    "Value",
    "Unit",
    "Standard",
    "Upper Limit",
    "Lower Limit",
    "Pass",
];

/// Check-item text of the placeholder row emitted for a group without details
pub const NO_DETAILS_LABEL: &str = "(no details)";

/// Tier of a report row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// One per head record
    Group,
    /// One per line record, or a single placeholder
    Detail,
}

impl RowKind {
    pub fn label(&self) -> &'static str {
        match self {
            RowKind::Group => "Item",
            RowKind::Detail => "Check",
        }
    }
}

/// ReportRow - one row of the two-tier report table
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub kind: RowKind,
    pub item_code: String,
    pub item_name: String,
    pub workcenter: String,
    pub check_item: String,
    pub value: String,
    pub unit: String,
    pub standard: String,
    pub upper_limit: String,
    pub lower_limit: String,
    pub pass_decision: String,
}

impl ReportRow {
    fn blank(kind: RowKind, head: &EnrichedHead) -> Self {
        Self {
            kind,
            item_code: head.head.item_code.clone().unwrap_or_default(),
            item_name: head.head.item_name.clone().unwrap_or_default(),
            workcenter: head.workcenter_label(),
            check_item: String::new(),
            value: String::new(),
            unit: String::new(),
            standard: String::new(),
            upper_limit: String::new(),
            lower_limit: String::new(),
            pass_decision: String::new(),
        }
    }

    pub fn group(head: &EnrichedHead) -> Self {
        Self::blank(RowKind::Group, head)
    }

    pub fn detail(head: &EnrichedHead, line: &LineRecord) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            check_item: text(&line.level3_class_name),
            value: text(&line.check_value),
            unit: text(&line.unit),
            standard: text(&line.standard_value),
            upper_limit: text(&line.upper_limit),
            lower_limit: text(&line.lower_limit),
            pass_decision: text(&line.pass_decision),
            ..Self::blank(RowKind::Detail, head)
        }
    }

    pub fn placeholder(head: &EnrichedHead) -> Self {
        Self {
            check_item: NO_DETAILS_LABEL.to_string(),
            ..Self::blank(RowKind::Detail, head)
        }
    }

    pub fn is_group(&self) -> bool {
        self.kind == RowKind::Group
    }

    /// Cells in `REPORT_COLUMNS` order
    pub fn cells(&self) -> [&str; 11] {
        [
            self.kind.label(),
            &self.item_code,
            &self.item_name,
            &self.workcenter,
            &self.check_item,
            &self.value,
            &self.unit,
            &self.standard,
            &self.upper_limit,
            &self.lower_limit,
            &self.pass_decision,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::domain::{EquipmentInfo, HeadRecord};

    fn head() -> EnrichedHead {
        EnrichedHead::new(
            HeadRecord {
                item_code: Some("AR-100".to_string()),
                item_name: Some("AR-100-NNB".to_string()),
                ..Default::default()
            },
            EquipmentInfo::new("WC1", "", ""),
        )
    }

    #[test]
    fn test_group_row_cells() {
        let row = ReportRow::group(&head());
        assert!(row.is_group());
        assert_eq!(
            row.cells(),
            ["Item", "AR-100", "AR-100-NNB", "WC1", "", "", "", "", "", "", ""]
        );
    }

    #[test]
    fn test_detail_row_cells() {
        let line = LineRecord {
            level3_class_name: Some("Diameter".to_string()),
            check_value: Some("10.02".to_string()),
            unit: Some("mm".to_string()),
            standard_value: Some("10".to_string()),
            upper_limit: Some("10.05".to_string()),
            lower_limit: Some("9.95".to_string()),
            pass_decision: Some("OK".to_string()),
            ..Default::default()
        };
        let row = ReportRow::detail(&head(), &line);
        assert_eq!(row.kind, RowKind::Detail);
        assert_eq!(
            row.cells(),
            [
                "Check",
                "AR-100",
                "AR-100-NNB",
                "WC1",
                "Diameter",
                "10.02",
                "mm",
                "10",
                "10.05",
                "9.95",
                "OK"
            ]
        );
    }

    #[test]
    fn test_placeholder_row() {
        let row = ReportRow::placeholder(&head());
        assert_eq!(row.kind, RowKind::Detail);
        assert_eq!(row.check_item, NO_DETAILS_LABEL);
        assert!(row.value.is_empty());
    }
}
