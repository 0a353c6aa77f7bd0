use super::JobOrderRecord;
use serde::Serialize;

/// Separator between the parts of the equipment display string
const DISPLAY_SEPARATOR: &str = " / ";

/// EquipmentInfo - workcenter/machine/resource names for one job
///
/// Missing names are stored as empty strings, so callers never see an
/// absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentInfo {
    pub workcenter_name: String,
    pub machine_name: String,
    pub resource_name: String,
}

impl EquipmentInfo {
    pub fn new(
        workcenter_name: impl Into<String>,
        machine_name: impl Into<String>,
        resource_name: impl Into<String>,
    ) -> Self {
        Self {
            workcenter_name: workcenter_name.into(),
            machine_name: machine_name.into(),
            resource_name: resource_name.into(),
        }
    }

    pub fn from_job_order(record: &JobOrderRecord) -> Self {
        Self::new(
            record.workcenter_name.clone().unwrap_or_default(),
            record.machine_name.clone().unwrap_or_default(),
            record.resource_name.clone().unwrap_or_default(),
        )
    }

    /// Joins the non-empty names with " / "; empty when all three are empty
    pub fn display(&self) -> String {
        [
            self.workcenter_name.as_str(),
            self.machine_name.as_str(),
            self.resource_name.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(DISPLAY_SEPARATOR)
    }
}
