use crate::application::dto::{BuildTreeRequest, BuildTreeResponse};
use crate::shared::Result;

/// BuildComponentTreePort - Inbound port for one analysis run
///
/// This port defines the interface that external adapters (the CLI, tests)
/// use to turn a flat report into an identified component tree.
pub trait BuildComponentTreePort {
    /// Builds the component tree of the project and analyses it
    ///
    /// # Arguments
    /// * `request` - Project, branch and options of the run
    ///
    /// # Returns
    /// A summary of the run; the tree itself is kept by the implementation
    ///
    /// # Errors
    /// Returns an error if:
    /// - The flat report is inconsistent (unknown reference, bad root, bad file)
    /// - Stored components cannot be queried
    /// - A visitor fails while crawling the tree
    fn build_component_tree(&self, request: BuildTreeRequest) -> Result<BuildTreeResponse>;
}
