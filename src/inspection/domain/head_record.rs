use super::lenient;
use serde::{Deserialize, Serialize};

/// HeadRecord - one process inspection event summary
///
/// Rows of the head-list endpoint. `job_name` is the join key against
/// job-order metadata and may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub job_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub operation_num: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub operation_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub item_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub lot_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub inspection_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub person_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mfg_inspection_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub mfg_inspection_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_by: Option<String>,
}

impl HeadRecord {
    /// Join key, treating an empty job name as absent
    pub fn join_key(&self) -> Option<&str> {
        self.job_name.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_row() {
        let row = serde_json::json!({
            "jobName": "J-2405-001",
            "operationNum": 10,
            "itemCode": "AR-100",
            "itemName": "AR-100-NNB",
            "mfgInspectionId": "8812",
            "unknownField": "ignored"
        });
        let head: HeadRecord = serde_json::from_value(row).unwrap();
        assert_eq!(head.job_name.as_deref(), Some("J-2405-001"));
        assert_eq!(head.operation_num.as_deref(), Some("10"));
        assert_eq!(head.mfg_inspection_id, Some(8812));
        assert!(head.person_name.is_none());
    }

    #[test]
    fn test_join_key_ignores_empty_job_name() {
        let head = HeadRecord {
            job_name: Some(String::new()),
            ..Default::default()
        };
        assert!(head.join_key().is_none());
    }
}
