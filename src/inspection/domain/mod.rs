/// Domain value types for inspection records
mod enriched_head;
mod equipment_info;
mod filters;
mod head_record;
mod item_record;
mod job_order_record;
mod lenient;
mod line_record;
mod list_page;
mod report_row;

pub use enriched_head::EnrichedHead;
pub use equipment_info::EquipmentInfo;
pub use filters::{DateWindow, HeadFilter, ItemFilter, JobOrderFilter};
pub use head_record::HeadRecord;
pub use item_record::ItemRecord;
pub use job_order_record::JobOrderRecord;
pub use line_record::LineRecord;
pub use list_page::ListPage;
pub use report_row::{ReportRow, RowKind, NO_DETAILS_LABEL, REPORT_COLUMNS};
