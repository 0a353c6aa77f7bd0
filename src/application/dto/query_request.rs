use crate::inspection::domain::{DateWindow, HeadFilter};
use crate::shared::error::InspectError;
use crate::shared::Result;

/// Page sizes offered for a single-page query
pub const PAGE_LIMITS: [u32; 5] = [20, 50, 100, 200, 500];

/// Days added on both sides of the inspection window when loading job orders
pub const DEFAULT_RELEASE_WINDOW_DAYS: i64 = 7;

/// Largest accepted release window, in days
pub const MAX_RELEASE_WINDOW_DAYS: i64 = 366;

/// How head records are fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Every page until the collection is exhausted
    Full,
    /// Only the first page, with the given page size
    Paged { limit: u32 },
}

impl FetchMode {
    /// Single-page mode; `limit` must be one of `PAGE_LIMITS`
    pub fn paged(limit: u32) -> Result<Self> {
        if !PAGE_LIMITS.contains(&limit) {
            return Err(InspectError::Validation {
                message: format!(
                    "Invalid page limit {} (expected one of {:?})",
                    limit, PAGE_LIMITS
                ),
            }
            .into());
        }
        Ok(FetchMode::Paged { limit })
    }
}

/// QueryRequest - filters and options of one query/export cycle
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    /// Inspection date window
    pub window: DateWindow,
    pub job_name: String,
    pub operation_code: String,
    pub item_code: String,
    /// AND-token query applied locally to item names (`AR%NNB`)
    pub item_name_query: String,
    pub check_class: String,
    pub fetch: FetchMode,
    pub release_window_days: i64,
}

impl QueryRequest {
    pub fn new(window: DateWindow) -> Self {
        Self {
            window,
            job_name: String::new(),
            operation_code: String::new(),
            item_code: String::new(),
            item_name_query: String::new(),
            check_class: "OPR".to_string(),
            fetch: FetchMode::Full,
            release_window_days: DEFAULT_RELEASE_WINDOW_DAYS,
        }
    }

    /// Server-side head filter
    ///
    /// The item name is never sent to the server; it is matched locally.
    pub fn head_filter(&self) -> HeadFilter {
        HeadFilter {
            item_code: self.item_code.trim().to_string(),
            job_name: self.job_name.trim().to_string(),
            operation_code: self.operation_code.trim().to_string(),
            check_class: self.check_class.clone(),
            ..HeadFilter::new(self.window)
        }
    }

    /// Window for the job-order (equipment) lookup
    pub fn release_window(&self) -> Result<DateWindow> {
        self.window.widened(self.release_window_days)
    }
}
