use crate::inspection::domain::{EquipmentInfo, JobOrderRecord};
use std::collections::HashMap;

/// JoinIndex - lookup from a join key to a value derived from one collection
///
/// Records without a key, or with an empty key, are skipped. When two
/// records share a key the later one wins; values are replaced, not merged.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinIndex<V> {
    entries: HashMap<String, V>,
}

impl<V> Default for JoinIndex<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> JoinIndex<V> {
    /// Builds an index over `records`
    ///
    /// # Arguments
    /// * `key` - Extracts the join key of a record
    /// * `value` - Projects a record onto the indexed value
    pub fn build<R>(
        records: &[R],
        key: impl Fn(&R) -> Option<&str>,
        value: impl Fn(&R) -> V,
    ) -> Self {
        let mut entries = HashMap::new();
        for record in records {
            match key(record) {
                Some(k) if !k.is_empty() => {
                    entries.insert(k.to_string(), value(record));
                }
                _ => {}
            }
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Job name → equipment metadata
pub type EquipmentIndex = JoinIndex<EquipmentInfo>;

impl JoinIndex<EquipmentInfo> {
    pub fn from_job_orders(job_orders: &[JobOrderRecord]) -> Self {
        Self::build(
            job_orders,
            JobOrderRecord::join_key,
            EquipmentInfo::from_job_order,
        )
    }
}
