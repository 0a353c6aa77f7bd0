use super::EquipmentIndex;
use crate::inspection::domain::{EnrichedHead, HeadRecord};

/// Enricher - attaches equipment metadata to head records
pub struct Enricher;

impl Enricher {
    /// Returns one enriched record per input record, in input order
    ///
    /// Heads without a job name, or whose job is not indexed, get empty
    /// equipment names and an empty display string.
    pub fn enrich(heads: &[HeadRecord], index: &EquipmentIndex) -> Vec<EnrichedHead> {
        heads
            .iter()
            .map(|head| {
                let equipment = head
                    .join_key()
                    .and_then(|key| index.get(key))
                    .cloned()
                    .unwrap_or_default();
                EnrichedHead::new(head.clone(), equipment)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::domain::{EquipmentInfo, JobOrderRecord};

    fn head(job: Option<&str>, item: &str) -> HeadRecord {
        HeadRecord {
            job_name: job.map(str::to_string),
            item_name: Some(item.to_string()),
            ..Default::default()
        }
    }

    fn index() -> EquipmentIndex {
        EquipmentIndex::from_job_orders(&[JobOrderRecord {
            job_name: Some("J1".to_string()),
            workcenter_name: Some("WC1".to_string()),
            machine_name: Some("M1".to_string()),
            ..Default::default()
        }])
    }

    #[test]
    fn test_enrich_preserves_order_and_count() {
        let heads = vec![head(Some("J2"), "B"), head(Some("J1"), "A"), head(None, "C")];
        let enriched = Enricher::enrich(&heads, &index());
        assert_eq!(enriched.len(), 3);
        let names: Vec<_> = enriched
            .iter()
            .map(|e| e.head.item_name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_matched_head_gets_metadata() {
        let enriched = Enricher::enrich(&[head(Some("J1"), "A")], &index());
        assert_eq!(enriched[0].equipment, EquipmentInfo::new("WC1", "M1", ""));
        assert_eq!(enriched[0].equipment_display, "WC1 / M1");
    }

    #[test]
    fn test_unmatched_head_gets_empty_metadata() {
        let enriched = Enricher::enrich(&[head(Some("J9"), "A"), head(Some(""), "B")], &index());
        for e in &enriched {
            assert_eq!(e.equipment, EquipmentInfo::default());
            assert_eq!(e.equipment_display, "");
        }
    }

    #[test]
    fn test_inputs_untouched() {
        let heads = vec![head(Some("J1"), "A")];
        let idx = index();
        let _ = Enricher::enrich(&heads, &idx);
        assert_eq!(heads[0], head(Some("J1"), "A"));
        assert_eq!(idx.len(), 1);
    }
}
