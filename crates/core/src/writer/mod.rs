//! Output persistence.
//!
//! Writes produced text files into an output directory, creating the
//! directory on demand and overwriting any existing file. There is no
//! atomic-write guarantee; the pipelines are batch and re-runnable.

mod error;
mod text_writer;
mod types;

pub use error::WriteError;
pub use text_writer::TextWriter;
pub use types::OutputFile;
