/// Spreadsheet adapters for the export artifact
mod xlsx_renderer;

pub use xlsx_renderer::XlsxReportRenderer;
