/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod export_response;
mod output_format;
mod query_request;
mod query_response;

pub use export_response::ExportResponse;
pub use output_format::OutputFormat;
pub use query_request::{
    FetchMode, QueryRequest, DEFAULT_RELEASE_WINDOW_DAYS, MAX_RELEASE_WINDOW_DAYS, PAGE_LIMITS,
};
pub use query_response::QueryResponse;
