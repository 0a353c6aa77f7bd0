use crate::shared::error::InspectError;
use crate::shared::Result;
use chrono::{Days, NaiveDate};

/// Date format used by every endpoint
const DATE_FORMAT: &str = "%Y-%m-%d";

/// DateWindow - an inclusive date range, `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(InspectError::InvalidDateRange {
                from: from.format(DATE_FORMAT).to_string(),
                to: to.format(DATE_FORMAT).to_string(),
            }
            .into());
        }
        Ok(Self { from, to })
    }

    /// Single-day window
    pub fn day(date: NaiveDate) -> Self {
        Self {
            from: date,
            to: date,
        }
    }

    /// Parses a `YYYY-MM-DD` date
    pub fn parse_date(value: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
            InspectError::Validation {
                message: format!("Invalid date '{}' (expected YYYY-MM-DD): {}", value, e),
            }
            .into()
        })
    }

    /// Widens the window by `days` on both sides
    ///
    /// # Errors
    /// Returns a validation error if `days` is negative or the widened
    /// window leaves the supported calendar range
    pub fn widened(&self, days: i64) -> Result<Self> {
        let out_of_range = || InspectError::Validation {
            message: format!("release window of {} days is out of range", days),
        };
        let span = Days::new(u64::try_from(days).map_err(|_| out_of_range())?);
        let from = self.from.checked_sub_days(span).ok_or_else(out_of_range)?;
        let to = self.to.checked_add_days(span).ok_or_else(out_of_range)?;
        Ok(Self { from, to })
    }

    pub fn start(&self) -> NaiveDate {
        self.from
    }

    pub fn end(&self) -> NaiveDate {
        self.to
    }

    pub fn start_str(&self) -> String {
        self.from.format(DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.to.format(DATE_FORMAT).to_string()
    }
}

/// Server-side filters for the head-list endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct HeadFilter {
    pub window: DateWindow,
    pub item_code: String,
    pub item_name: String,
    pub job_name: String,
    pub operation_code: String,
    pub person_id: i64,
    pub check_class: String,
}

impl HeadFilter {
    pub fn new(window: DateWindow) -> Self {
        Self {
            window,
            item_code: String::new(),
            item_name: String::new(),
            job_name: String::new(),
            operation_code: String::new(),
            person_id: 0,
            check_class: "OPR".to_string(),
        }
    }
}

/// Server-side filters for the job-order endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct JobOrderFilter {
    pub window: DateWindow,
    pub item_code: String,
    pub item_name: String,
    pub job_name: String,
    pub workcenter_code: String,
    pub worker_result: String,
}

impl JobOrderFilter {
    pub fn new(window: DateWindow) -> Self {
        Self {
            window,
            item_code: String::new(),
            item_name: String::new(),
            job_name: String::new(),
            workcenter_code: String::new(),
            worker_result: "Y".to_string(),
        }
    }
}

/// Server-side filters for the item master listing
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFilter {
    pub status: String,
    pub item_plant: i64,
    pub item_code: String,
    pub item_name: String,
    pub item_type: String,
    pub product_group: String,
    pub buy_make: String,
    pub control_lot: String,
}

impl ItemFilter {
    pub fn new(item_plant: i64) -> Self {
        Self {
            status: "Y".to_string(),
            item_plant,
            item_code: String::new(),
            item_name: String::new(),
            item_type: String::new(),
            product_group: String::new(),
            buy_make: String::new(),
            control_lot: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        DateWindow::parse_date(s).unwrap()
    }

    #[test]
    fn test_window_rejects_reversed_range() {
        let result = DateWindow::new(date("2024-05-10"), date("2024-05-01"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid date range"));
    }

    #[test]
    fn test_widened_window() {
        let window = DateWindow::new(date("2024-05-01"), date("2024-05-03")).unwrap();
        let released = window.widened(7).unwrap();
        assert_eq!(released.start_str(), "2024-04-24");
        assert_eq!(released.end_str(), "2024-05-10");
    }

    #[test]
    fn test_widened_window_out_of_range() {
        let window = DateWindow::day(date("2025-03-10"));
        let err = window.widened(1_000_000_000).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(window.widened(-1).is_err());
        assert_eq!(window.widened(0).unwrap(), window);
    }

    #[test]
    fn test_parse_date_invalid() {
        let result = DateWindow::parse_date("05/01/2024");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_head_filter_defaults() {
        let filter = HeadFilter::new(DateWindow::day(date("2024-05-01")));
        assert_eq!(filter.check_class, "OPR");
        assert_eq!(filter.person_id, 0);
        assert!(filter.item_name.is_empty());
    }
}
