use super::lenient;
use serde::{Deserialize, Serialize};

/// LineRecord - one measurement result belonging to a head record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub level2_class_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub level3_class_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub check_method: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub check_device: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub check_value: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub standard_value: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub upper_limit: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub lower_limit: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub pass_decision: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub creation_date: Option<String>,
}
