/// Filesystem adapters for file output
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
