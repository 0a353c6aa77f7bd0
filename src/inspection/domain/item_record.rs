use super::lenient;
use serde::{Deserialize, Serialize};

/// ItemRecord - a row of the item master listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub item_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub item_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub item_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub product_group: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub buy_make: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: Option<String>,
}
