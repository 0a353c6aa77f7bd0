/// Network adapters for the remote QFactory service
mod qf3_client;

pub use qf3_client::{Qf3Client, Qf3Settings, RequestTrace};
