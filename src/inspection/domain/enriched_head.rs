use super::{EquipmentInfo, HeadRecord};
use serde::Serialize;

/// EnrichedHead - a head record joined with its job's equipment metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedHead {
    #[serde(flatten)]
    pub head: HeadRecord,
    #[serde(flatten)]
    pub equipment: EquipmentInfo,
    pub equipment_display: String,
}

impl EnrichedHead {
    pub fn new(head: HeadRecord, equipment: EquipmentInfo) -> Self {
        let equipment_display = equipment.display();
        Self {
            head,
            equipment,
            equipment_display,
        }
    }

    /// Workcenter label used on report group rows.
    ///
    /// Falls back to the first segment of the equipment display and then to
    /// the record's author.
    pub fn workcenter_label(&self) -> String {
        let workcenter = self.equipment.workcenter_name.trim();
        if !workcenter.is_empty() {
            return workcenter.to_string();
        }

        let display = self.equipment_display.trim();
        if !display.is_empty() {
            return display.split('/').next().unwrap_or("").trim().to_string();
        }

        self.head
            .created_by
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_string()
    }
}
