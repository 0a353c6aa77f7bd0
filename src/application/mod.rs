/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the inspection services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
mod session;
pub mod use_cases;

pub use session::{AppSession, SessionSettings};
