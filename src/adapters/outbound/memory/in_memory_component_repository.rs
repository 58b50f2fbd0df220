use crate::analysis::domain::Branch;
use crate::ports::outbound::{
    BranchComponent, BranchComponentRepository, ExistingComponentLookup, LegacyComponentUuid,
};
use crate::shared::security::read_regular_file;
use crate::shared::{ComponentTreeError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const FILE_DESCRIPTION: &str = "component snapshot";

fn default_branch() -> String {
    Branch::DEFAULT_MAIN_NAME.to_string()
}

fn default_enabled() -> bool {
    true
}

/// A component as stored by a previous analysis
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredComponent {
    pub uuid: String,
    pub db_key: String,
    /// User-facing key
    pub key: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Key the component would have today if it was stored under a module
    #[serde(default)]
    pub legacy_path_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    components: Vec<StoredComponent>,
}

/// InMemoryComponentRepository adapter over a snapshot of stored components
///
/// Implements both the existing-component lookup used to keep uuids stable
/// and the per-branch listing used to resolve reference branches.
#[derive(Debug, Default)]
pub struct InMemoryComponentRepository {
    components: Vec<StoredComponent>,
    by_db_key: HashMap<String, usize>,
}

impl InMemoryComponentRepository {
    pub fn new(components: Vec<StoredComponent>) -> Self {
        let by_db_key = components
            .iter()
            .enumerate()
            .map(|(i, c)| (c.db_key.clone(), i))
            .collect();
        Self {
            components,
            by_db_key,
        }
    }

    /// Loads a JSON snapshot (`{"components": [...]}`) from `path`
    ///
    /// # Errors
    /// Returns an error if the file is not a readable regular file or is
    /// not a valid snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_regular_file(path, FILE_DESCRIPTION)?;
        let invalid = |details: String| ComponentTreeError::InvalidDocument {
            description: FILE_DESCRIPTION,
            path: PathBuf::from(path),
            details,
        };
        let document: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
        // serde would also accept a struct written as an array
        if !document.is_object() {
            return Err(invalid("expected an object with a \"components\" array".to_string()).into());
        }
        let snapshot: Snapshot =
            serde_json::from_value(document).map_err(|e| invalid(e.to_string()))?;
        tracing::debug!(
            path = %path.display(),
            components = snapshot.components.len(),
            "component snapshot loaded"
        );
        Ok(Self::new(snapshot.components))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

fn belongs_to_project(key: &str, project_key: &str) -> bool {
    key == project_key
        || key
            .strip_prefix(project_key)
            .is_some_and(|rest| rest.starts_with(':'))
}

impl ExistingComponentLookup for InMemoryComponentRepository {
    fn uuid_for_key(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .by_db_key
            .get(key)
            .map(|&i| self.components[i].uuid.clone()))
    }

    fn uuids_for_legacy_path(&self, key: &str) -> Result<Vec<LegacyComponentUuid>> {
        Ok(self
            .components
            .iter()
            .filter(|c| c.legacy_path_key.as_deref() == Some(key))
            .map(|c| LegacyComponentUuid::new(c.uuid.clone(), c.enabled))
            .collect())
    }
}

impl BranchComponentRepository for InMemoryComponentRepository {
    fn components_of_branch(
        &self,
        project_key: &str,
        branch_name: &str,
    ) -> Result<Vec<BranchComponent>> {
        Ok(self
            .components
            .iter()
            .filter(|c| c.enabled && c.branch == branch_name)
            .filter(|c| belongs_to_project(&c.key, project_key))
            .map(|c| BranchComponent {
                key: c.key.clone(),
                uuid: c.uuid.clone(),
            })
            .collect())
    }
}
