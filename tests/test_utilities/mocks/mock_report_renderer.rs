use qf_inspect::prelude::*;
use std::cell::RefCell;

/// Mock ReportRenderer that keeps the rows it was asked to render
#[derive(Default)]
pub struct MockReportRenderer {
    pub rendered: RefCell<Vec<ReportRow>>,
}

impl MockReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        self.rendered.borrow().clone()
    }
}

impl ReportRenderer for MockReportRenderer {
    fn render(&self, rows: &[ReportRow]) -> Result<Vec<u8>> {
        *self.rendered.borrow_mut() = rows.to_vec();
        Ok(format!("{} rows", rows.len()).into_bytes())
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}
