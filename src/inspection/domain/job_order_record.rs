use super::lenient;
use serde::{Deserialize, Serialize};

/// JobOrderRecord - a job order row carrying equipment metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOrderRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub job_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub item_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub workcenter_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub machine_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub resource_name: Option<String>,
}

impl JobOrderRecord {
    pub fn join_key(&self) -> Option<&str> {
        self.job_name.as_deref().filter(|name| !name.is_empty())
    }
}
