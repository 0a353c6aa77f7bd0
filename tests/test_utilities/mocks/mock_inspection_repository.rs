use qf_inspect::prelude::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Password accepted by the mock login
pub const MOCK_PASSWORD: &str = "secret";

/// Mock InspectionRepository serving in-memory collections page by page
///
/// Each collection is sliced by `(page, page_size)` and reports its full
/// length as the total unless `without_totals` is set. Requests are
/// recorded as `(page, page_size)` pairs.
#[derive(Default)]
pub struct MockInspectionRepository {
    pub heads: Vec<HeadRecord>,
    pub job_orders: Vec<JobOrderRecord>,
    pub lines: HashMap<i64, Vec<LineRecord>>,
    pub items: Vec<ItemRecord>,
    pub report_totals: bool,
    pub fail_heads: Cell<bool>,
    pub fail_job_orders: Cell<bool>,
    pub head_calls: RefCell<Vec<(u32, u32)>>,
    pub job_order_calls: RefCell<Vec<(u32, u32)>>,
    pub line_calls: RefCell<Vec<i64>>,
    pub item_calls: RefCell<Vec<(u32, u32)>>,
    pub head_filters: RefCell<Vec<HeadFilter>>,
    pub job_order_filters: RefCell<Vec<JobOrderFilter>>,
}

impl MockInspectionRepository {
    pub fn new() -> Self {
        Self {
            report_totals: true,
            ..Default::default()
        }
    }

    pub fn with_heads(mut self, heads: Vec<HeadRecord>) -> Self {
        self.heads = heads;
        self
    }

    pub fn with_job_orders(mut self, job_orders: Vec<JobOrderRecord>) -> Self {
        self.job_orders = job_orders;
        self
    }

    pub fn with_lines(mut self, mfg_inspection_id: i64, lines: Vec<LineRecord>) -> Self {
        self.lines.insert(mfg_inspection_id, lines);
        self
    }

    pub fn with_items(mut self, items: Vec<ItemRecord>) -> Self {
        self.items = items;
        self
    }

    pub fn without_totals(mut self) -> Self {
        self.report_totals = false;
        self
    }

    fn slice<T: Clone>(&self, rows: &[T], page: u32, page_size: u32) -> ListPage<T> {
        let start = ((page - 1) * page_size) as usize;
        let end = (start + page_size as usize).min(rows.len());
        let page_rows = if start < rows.len() {
            rows[start..end].to_vec()
        } else {
            Vec::new()
        };
        let total = self.report_totals.then_some(rows.len() as u64);
        ListPage::new(page_rows, total)
    }
}

impl Authenticator for MockInspectionRepository {
    fn login(&self, credentials: &Credentials) -> Result<()> {
        if credentials.password != MOCK_PASSWORD {
            return Err(InspectError::AuthenticationFailed {
                message: "invalid password".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl InspectionRepository for MockInspectionRepository {
    fn head_page(
        &self,
        filter: &HeadFilter,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<HeadRecord>> {
        self.head_calls.borrow_mut().push((page, page_size));
        self.head_filters.borrow_mut().push(filter.clone());
        if self.fail_heads.get() {
            return Err(InspectError::HttpStatus {
                url: "mock://head-list".to_string(),
                status: 500,
                body_head: "Internal Server Error".to_string(),
            }
            .into());
        }
        Ok(self.slice(&self.heads, page, page_size))
    }

    fn line_page(
        &self,
        mfg_inspection_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<LineRecord>> {
        self.line_calls.borrow_mut().push(mfg_inspection_id);
        let lines = self
            .lines
            .get(&mfg_inspection_id)
            .cloned()
            .unwrap_or_default();
        Ok(self.slice(&lines, page, page_size))
    }

    fn job_order_page(
        &self,
        filter: &JobOrderFilter,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<JobOrderRecord>> {
        self.job_order_calls.borrow_mut().push((page, page_size));
        self.job_order_filters.borrow_mut().push(filter.clone());
        if self.fail_job_orders.get() {
            return Err(InspectError::Transport {
                url: "mock://joborder-list".to_string(),
                details: "connection reset".to_string(),
            }
            .into());
        }
        Ok(self.slice(&self.job_orders, page, page_size))
    }

    fn item_page(
        &self,
        _filter: &ItemFilter,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<ItemRecord>> {
        self.item_calls.borrow_mut().push((page, page_size));
        Ok(self.slice(&self.items, page, page_size))
    }
}
