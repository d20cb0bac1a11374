/// Filesystem adapters for file I/O operations
mod file_writer;
mod index_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use index_reader::FileSystemIndexReader;
