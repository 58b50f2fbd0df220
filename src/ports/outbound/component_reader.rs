use crate::analysis::domain::{RawComponent, ReportMetadata};
use crate::shared::Result;

/// ComponentReader port for reading the flat analysis report
///
/// This port abstracts where the flat report comes from (a JSON file,
/// an in-memory fixture, etc.). Nodes are addressed by their integer
/// reference.
pub trait ComponentReader {
    /// Reads the report-level metadata
    ///
    /// # Returns
    /// The metadata, including the reference of the root component
    ///
    /// # Errors
    /// Returns an error if the report cannot be read
    fn read_metadata(&self) -> Result<ReportMetadata>;

    /// Resolves a flat report reference to its raw node
    ///
    /// # Arguments
    /// * `reference` - Integer reference of the node
    ///
    /// # Returns
    /// The raw node
    ///
    /// # Errors
    /// Returns an error if no node has this reference
    fn component_by_ref(&self, reference: i32) -> Result<RawComponent>;
}
