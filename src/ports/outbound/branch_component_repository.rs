use crate::shared::Result;

/// A component of another branch, keyed by its user-facing key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchComponent {
    pub key: String,
    pub uuid: String,
}

/// BranchComponentRepository port for listing the components of a branch
pub trait BranchComponentRepository {
    /// Lists the enabled components of a branch of the project
    ///
    /// # Arguments
    /// * `project_key` - Key of the project
    /// * `branch_name` - Name of the branch
    ///
    /// # Returns
    /// The components of the branch, empty if the branch is unknown
    ///
    /// # Errors
    /// Returns an error if storage cannot be queried
    fn components_of_branch(
        &self,
        project_key: &str,
        branch_name: &str,
    ) -> Result<Vec<BranchComponent>>;
}
