use crate::application::dto::{FetchMode, QueryRequest, QueryResponse};
use crate::inspection::domain::JobOrderFilter;
use crate::inspection::services::{CollectionFetcher, Enricher, EquipmentIndex, TokenFilter};
use crate::ports::outbound::{InspectionRepository, ProgressReporter};
use crate::shared::Result;

/// QueryInspectionsUseCase - one query cycle
///
/// Loads every job order released around the inspection window into an
/// equipment index, fetches the head records (all pages or the first page),
/// enriches them with equipment names and applies the item-name AND filter.
///
/// # Type Parameters
/// * `R` - InspectionRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct QueryInspectionsUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
    fetcher: CollectionFetcher,
}

impl<R, PR> QueryInspectionsUseCase<R, PR>
where
    R: InspectionRepository,
    PR: ProgressReporter,
{
    pub fn new(repository: R, progress_reporter: PR, fetcher: CollectionFetcher) -> Self {
        Self {
            repository,
            progress_reporter,
            fetcher,
        }
    }

    /// Executes the query
    ///
    /// # Errors
    /// Any failing page fetch aborts the cycle; nothing is returned partially.
    pub fn execute(&self, request: &QueryRequest) -> Result<QueryResponse> {
        let index = self.load_equipment_index(request)?;

        let head_filter = request.head_filter();
        let heads = match request.fetch {
            FetchMode::Full => self.fetcher.fetch_all(|page, page_size| {
                self.repository.head_page(&head_filter, page, page_size)
            })?,
            FetchMode::Paged { limit } => self.repository.head_page(&head_filter, 1, limit)?.rows,
        };
        let fetched_count = heads.len();
        self.progress_reporter.report(&format!(
            "📋 Fetched {} inspection record(s) for {} ~ {}",
            fetched_count,
            request.window.start_str(),
            request.window.end_str()
        ));

        let enriched = Enricher::enrich(&heads, &index);
        let filter = TokenFilter::parse(&request.item_name_query);
        let heads = filter.apply(enriched, |h| h.head.item_name.as_deref());

        if !filter.is_empty() {
            self.progress_reporter.report(&format!(
                "🔍 {} of {} record(s) match item name tokens {:?}",
                heads.len(),
                fetched_count,
                filter.tokens()
            ));
        }

        Ok(QueryResponse::new(heads, fetched_count, index.len()))
    }

    fn load_equipment_index(&self, request: &QueryRequest) -> Result<EquipmentIndex> {
        let release_window = request.release_window()?;
        self.progress_reporter.report(&format!(
            "🏭 Loading job orders released {} ~ {}",
            release_window.start_str(),
            release_window.end_str()
        ));

        let job_filter = JobOrderFilter::new(release_window);
        let job_orders = self.fetcher.fetch_all(|page, page_size| {
            self.repository.job_order_page(&job_filter, page, page_size)
        })?;
        let index = EquipmentIndex::from_job_orders(&job_orders);
        tracing::debug!(
            job_orders = job_orders.len(),
            indexed = index.len(),
            "built equipment index"
        );

        Ok(index)
    }
}
