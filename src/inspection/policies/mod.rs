/// Policies for interpreting backend responses
pub mod response_extraction;

pub use response_extraction::ResponseExtraction;
