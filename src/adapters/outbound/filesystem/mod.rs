/// Filesystem adapters for file I/O operations
mod file_writer;
mod json_report_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use json_report_reader::JsonReportReader;
