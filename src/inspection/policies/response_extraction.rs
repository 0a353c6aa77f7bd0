use crate::inspection::domain::ListPage;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Known locations of the row list inside a response envelope, tried in order
const ROW_PATHS: &[&[&str]] = &[
    &["data", "list"],
    &["data", "rows"],
    &["data", "items"],
    &["result", "list"],
    &["result", "rows"],
    &["list"],
    &["rows"],
    &["items"],
];

/// Top-level keys that may carry the total row count, tried in order
const TOTAL_KEYS: &[&str] = &["total", "count", "recordsTotal", "totalCount"];

/// Per-row field some endpoints use to repeat the total count
const ROW_COUNT_FIELD: &str = "cnt";

/// ResponseExtraction policy for pulling rows and totals out of an envelope
///
/// Row extraction order:
/// 1. the response itself, when it is an array
/// 2. the first known path (`data.list`, `data.rows`, ...) holding an array
/// 3. the first top-level value that is a non-empty array of objects
///
/// A response matching none of these yields no rows. Schema drift on the
/// backend therefore shows up as an empty page, never as an error.
pub struct ResponseExtraction;

impl ResponseExtraction {
    /// Extracts rows and the reported total from a raw response
    pub fn extract_page(response: &Value) -> ListPage<Value> {
        let rows = Self::extract_rows(response);
        let total = Self::extract_total(response, &rows);
        ListPage::new(rows, total)
    }

    /// Extracts the row list using the ordered strategies above
    pub fn extract_rows(response: &Value) -> Vec<Value> {
        match response {
            Value::Array(rows) => rows.clone(),
            Value::Object(_) => Self::rows_at_known_path(response)
                .or_else(|| Self::first_record_list(response))
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Extracts the total matching row count, if the backend reports one
    ///
    /// Order: top-level `total`/`count`/`recordsTotal`/`totalCount`
    /// (integer or digit string), then `data.total`, then the `cnt` field of
    /// the first row.
    pub fn extract_total(response: &Value, rows: &[Value]) -> Option<u64> {
        response
            .as_object()
            .and_then(|object| {
                TOTAL_KEYS
                    .iter()
                    .find_map(|key| object.get(*key).and_then(Self::as_count))
            })
            .or_else(|| response.pointer("/data/total").and_then(Value::as_u64))
            .or_else(|| {
                rows.first()
                    .and_then(|row| row.get(ROW_COUNT_FIELD))
                    .and_then(Self::as_count)
            })
    }

    /// Decodes raw rows into typed records, skipping rows that are not records
    ///
    /// The raw row count is carried over so paging still sees the page as
    /// the backend sent it.
    pub fn decode_page<T: DeserializeOwned>(page: ListPage<Value>) -> ListPage<T> {
        let ListPage {
            rows,
            total,
            received,
        } = page;
        let rows = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<T>(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping row that is not a record: {}", e);
                    None
                }
            })
            .collect();
        ListPage::with_received(rows, total, received)
    }

    fn rows_at_known_path(response: &Value) -> Option<Vec<Value>> {
        ROW_PATHS.iter().find_map(|path| {
            let mut current = response;
            for key in *path {
                current = current.get(*key)?;
            }
            current.as_array().cloned()
        })
    }

    fn first_record_list(response: &Value) -> Option<Vec<Value>> {
        response.as_object()?.values().find_map(|value| match value {
            Value::Array(items) if items.first().is_some_and(Value::is_object) => {
                Some(items.clone())
            }
            _ => None,
        })
    }

    fn as_count(value: &Value) -> Option<u64> {
        match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) => {
                s.parse().ok()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::domain::HeadRecord;
    use serde_json::json;

    #[test]
    fn test_rows_from_data_list() {
        let response = json!({"success": true, "data": {"list": [{"a": 1}, {"a": 2}]}});
        assert_eq!(ResponseExtraction::extract_rows(&response).len(), 2);
    }

    #[test]
    fn test_rows_from_bare_array() {
        let response = json!([{"a": 1}]);
        assert_eq!(ResponseExtraction::extract_rows(&response).len(), 1);
    }

    #[test]
    fn test_known_path_order() {
        // data.rows is tried before result.list
        let response = json!({
            "result": {"list": [{"from": "result"}]},
            "data": {"rows": [{"from": "data"}]}
        });
        let rows = ResponseExtraction::extract_rows(&response);
        assert_eq!(rows, vec![json!({"from": "data"})]);
    }

    #[test]
    fn test_empty_list_at_known_path_wins() {
        let response = json!({"data": {"list": []}, "other": [{"a": 1}]});
        assert!(ResponseExtraction::extract_rows(&response).is_empty());
    }

    #[test]
    fn test_heuristic_fallback_first_record_list() {
        let response = json!({
            "codes": ["A", "B"],
            "payload": [{"jobName": "J1"}],
            "later": [{"jobName": "J2"}]
        });
        let rows = ResponseExtraction::extract_rows(&response);
        assert_eq!(rows, vec![json!({"jobName": "J1"})]);
    }

    #[test]
    fn test_all_miss_is_empty() {
        assert!(ResponseExtraction::extract_rows(&json!({"message": "ok"})).is_empty());
        assert!(ResponseExtraction::extract_rows(&json!("text")).is_empty());
        assert!(ResponseExtraction::extract_rows(&Value::Null).is_empty());
    }

    #[test]
    fn test_total_from_top_level_keys() {
        assert_eq!(
            ResponseExtraction::extract_total(&json!({"total": 42}), &[]),
            Some(42)
        );
        assert_eq!(
            ResponseExtraction::extract_total(&json!({"recordsTotal": "17"}), &[]),
            Some(17)
        );
        assert_eq!(
            ResponseExtraction::extract_total(&json!({"count": "n/a", "totalCount": 5}), &[]),
            Some(5)
        );
    }

    #[test]
    fn test_total_from_data_total() {
        let response = json!({"data": {"total": 9, "list": []}});
        assert_eq!(ResponseExtraction::extract_total(&response, &[]), Some(9));
    }

    #[test]
    fn test_total_from_first_row_count() {
        let response = json!({"data": {"list": [{"cnt": "3"}, {"cnt": "3"}]}});
        let page = ResponseExtraction::extract_page(&response);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.total, Some(3));
    }

    #[test]
    fn test_total_unknown() {
        let response = json!({"data": {"list": [{"jobName": "J1"}]}});
        assert_eq!(ResponseExtraction::extract_page(&response).total, None);
    }

    #[test]
    fn test_decode_page_skips_non_records() {
        let page = ListPage::new(
            vec![json!({"jobName": "J1"}), json!("garbage"), json!({"jobName": "J2"})],
            Some(3),
        );
        let decoded: ListPage<HeadRecord> = ResponseExtraction::decode_page(page);
        assert_eq!(decoded.rows.len(), 2);
        assert_eq!(decoded.rows[1].job_name.as_deref(), Some("J2"));
        assert_eq!(decoded.total, Some(3));
        assert_eq!(decoded.received, 3);
    }

    #[test]
    fn test_full_page_with_junk_row_keeps_paging() {
        use crate::inspection::services::CollectionFetcher;

        let responses = [
            json!({"data": {"list": [{"jobName": "J1"}, "junk"]}}),
            json!({"data": {"list": [{"jobName": "J2"}, {"jobName": "J3"}]}}),
            json!({"data": {"list": []}}),
        ];
        let fetcher = CollectionFetcher::new(2, 10).unwrap();
        let rows: Vec<HeadRecord> = fetcher
            .fetch_all(|page, _| {
                let response = &responses[page as usize - 1];
                Ok(ResponseExtraction::decode_page(
                    ResponseExtraction::extract_page(response),
                ))
            })
            .unwrap();

        let names: Vec<_> = rows.iter().filter_map(|r| r.job_name.as_deref()).collect();
        assert_eq!(names, vec!["J1", "J2", "J3"]);
    }
}
