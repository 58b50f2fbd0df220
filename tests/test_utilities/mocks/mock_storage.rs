use component_tree::ports::outbound::{BranchComponent, LegacyComponentUuid};
use component_tree::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock storage answering both the uuid lookups and the per-branch listing
#[derive(Default)]
pub struct MockStorage {
    uuids: HashMap<String, String>,
    legacy: HashMap<String, Vec<LegacyComponentUuid>>,
    branches: HashMap<String, Vec<BranchComponent>>,
    should_fail: bool,
    branch_queries: AtomicUsize,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_uuid(mut self, db_key: &str, uuid: &str) -> Self {
        self.uuids.insert(db_key.to_string(), uuid.to_string());
        self
    }

    pub fn with_legacy(mut self, key: &str, uuid: &str, enabled: bool) -> Self {
        self.legacy
            .entry(key.to_string())
            .or_default()
            .push(LegacyComponentUuid::new(uuid, enabled));
        self
    }

    /// Enabled component `key` of `branch`
    pub fn with_branch_component(mut self, branch: &str, key: &str, uuid: &str) -> Self {
        self.branches
            .entry(branch.to_string())
            .or_default()
            .push(BranchComponent {
                key: key.to_string(),
                uuid: uuid.to_string(),
            });
        self
    }

    pub fn branch_query_count(&self) -> usize {
        self.branch_queries.load(Ordering::SeqCst)
    }
}

impl ExistingComponentLookup for MockStorage {
    fn uuid_for_key(&self, key: &str) -> Result<Option<String>> {
        if self.should_fail {
            anyhow::bail!("Mock storage failure");
        }
        Ok(self.uuids.get(key).cloned())
    }

    fn uuids_for_legacy_path(&self, key: &str) -> Result<Vec<LegacyComponentUuid>> {
        Ok(self.legacy.get(key).cloned().unwrap_or_default())
    }
}

impl BranchComponentRepository for MockStorage {
    fn components_of_branch(
        &self,
        _project_key: &str,
        branch_name: &str,
    ) -> Result<Vec<BranchComponent>> {
        self.branch_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.branches.get(branch_name).cloned().unwrap_or_default())
    }
}
