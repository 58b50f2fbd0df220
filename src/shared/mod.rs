/// Shared kernel: error taxonomy, result alias and file-access guards
pub mod error;
pub mod result;
pub mod security;

pub use error::{ComponentTreeError, ExitCode};
pub use result::Result;
