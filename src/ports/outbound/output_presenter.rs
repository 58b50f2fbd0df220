use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered component tree is presented.
pub trait OutputPresenter {
    /// Presents the rendered tree to the output destination
    ///
    /// # Arguments
    /// * `content` - The rendered tree
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
