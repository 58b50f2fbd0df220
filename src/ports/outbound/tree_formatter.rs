use crate::analysis::domain::{Component, CrawlerDepthLimit};
use crate::shared::Result;

/// TreeFormatter port for rendering a component tree
///
/// Implementations exist for an indented console tree and for JSON.
pub trait TreeFormatter {
    /// Renders the tree rooted at `root`
    ///
    /// # Arguments
    /// * `root` - Root of the tree to render
    /// * `max_depth` - Components deeper than this are left out
    ///
    /// # Returns
    /// The rendered tree
    ///
    /// # Errors
    /// Returns an error if serialization or crawling fails
    fn format(&self, root: &Component, max_depth: CrawlerDepthLimit) -> Result<String>;
}
