/// Domain services - the pagination, join, filter and shaping engine
mod collection_fetcher;
mod enricher;
mod join_index;
mod report_shaper;
mod token_filter;

pub use collection_fetcher::{CollectionFetcher, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
pub use enricher::Enricher;
pub use join_index::{EquipmentIndex, JoinIndex};
pub use report_shaper::ReportShaper;
pub use token_filter::{TokenFilter, TOKEN_DELIMITER};
