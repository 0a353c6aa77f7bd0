use crate::inspection::domain::EnrichedHead;

/// QueryResponse - enriched and filtered head records of one query
#[derive(Debug, Clone)]
pub struct QueryResponse {
    /// Records after enrichment and the item-name filter, in server order
    pub heads: Vec<EnrichedHead>,
    /// Head records received before local filtering
    pub fetched_count: usize,
    /// Distinct job names in the equipment index
    pub indexed_jobs: usize,
}

impl QueryResponse {
    pub fn new(heads: Vec<EnrichedHead>, fetched_count: usize, indexed_jobs: usize) -> Self {
        Self {
            heads,
            fetched_count,
            indexed_jobs,
        }
    }

    pub fn filtered_out(&self) -> usize {
        self.fetched_count.saturating_sub(self.heads.len())
    }
}
