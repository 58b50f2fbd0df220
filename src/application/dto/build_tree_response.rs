use crate::analysis::crawlers::VisitorDuration;
use crate::analysis::services::SizeMeasure;
use std::collections::BTreeMap;

/// BuildTreeResponse - Summary of one analysis run
///
/// The tree itself stays in the use case's tree root holder.
#[derive(Debug, Clone)]
pub struct BuildTreeResponse {
    /// User-facing key of the project
    pub project_key: String,
    /// Number of components in the tree
    pub component_count: usize,
    /// File and line counts per project and directory key
    pub measures: BTreeMap<String, SizeMeasure>,
    /// Branch the uuids were compared against, if any
    pub reference_branch: Option<String>,
    /// Files of the tree that exist on the reference branch
    pub files_on_reference_branch: usize,
    /// Keys of the files unknown to the reference branch
    pub new_files: Vec<String>,
    /// Stored components of the branch absent from the new tree
    pub disabled_components: usize,
    /// Per-visitor durations, when requested
    pub durations: Option<Vec<VisitorDuration>>,
}
