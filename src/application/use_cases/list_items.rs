use crate::inspection::domain::{ItemFilter, ItemRecord};
use crate::inspection::services::CollectionFetcher;
use crate::ports::outbound::{InspectionRepository, ProgressReporter};
use crate::shared::Result;

/// ListItemsUseCase - the item master listing, all pages
pub struct ListItemsUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
    fetcher: CollectionFetcher,
}

impl<R, PR> ListItemsUseCase<R, PR>
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

    pub fn execute(&self, filter: &ItemFilter) -> Result<Vec<ItemRecord>> {
        let items = self.fetcher.fetch_all(|page, page_size| {
            self.repository.item_page(filter, page, page_size)
        })?;
        self.progress_reporter
            .report(&format!("📦 Fetched {} item(s)", items.len()));
        Ok(items)
    }
}
