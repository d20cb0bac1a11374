/// Shared kernel - error taxonomy, result alias and resource limits
pub mod error;
pub mod result;
pub mod security;

pub use error::{ApkError, ExitCode};
pub use result::Result;
