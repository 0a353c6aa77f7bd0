/// Use cases module containing application business logic orchestration
mod export_inspections;
mod inspection_lines;
mod list_items;
mod query_inspections;

pub use export_inspections::ExportInspectionsUseCase;
pub use inspection_lines::{InspectionLinesUseCase, DEFAULT_LINE_PAGE_SIZE};
pub use list_items::ListItemsUseCase;
pub use query_inspections::QueryInspectionsUseCase;
