use crate::shared::{ComponentTreeError, Result};
use std::collections::HashSet;
use std::sync::OnceLock;

const WHAT: &str = "Disabled components";

/// Uuids of the stored components that no longer exist in the analysed tree
#[derive(Debug, Default)]
pub struct DisabledComponentsHolder {
    uuids: OnceLock<HashSet<String>>,
}

impl DisabledComponentsHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// Fails when the uuids have already been set.
    pub fn set_uuids(&self, uuids: impl IntoIterator<Item = String>) -> Result<()> {
        self.uuids
            .set(uuids.into_iter().collect())
            .map_err(|_| ComponentTreeError::AlreadyInitialized { what: WHAT }.into())
    }

    /// # Errors
    /// Fails when the uuids have not been set yet.
    pub fn uuids(&self) -> Result<&HashSet<String>> {
        self.uuids
            .get()
            .ok_or_else(|| ComponentTreeError::NotInitialized { what: WHAT }.into())
    }
}
