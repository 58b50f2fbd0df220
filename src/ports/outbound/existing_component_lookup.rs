use crate::shared::Result;

/// A stored component found through its legacy module path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyComponentUuid {
    pub uuid: String,
    pub enabled: bool,
}

impl LegacyComponentUuid {
    pub fn new(uuid: impl Into<String>, enabled: bool) -> Self {
        Self {
            uuid: uuid.into(),
            enabled,
        }
    }
}

/// ExistingComponentLookup port for finding components already in storage
///
/// Components analysed before modules were dropped were stored under keys
/// built from their module. The legacy lookup rebuilds, for each of them,
/// the key they would have today (`<project_key>:<path from project root>`).
pub trait ExistingComponentLookup {
    /// Finds the uuid of the component stored with exactly this key
    ///
    /// # Arguments
    /// * `key` - Storage key of the component
    ///
    /// # Errors
    /// Returns an error if storage cannot be queried
    fn uuid_for_key(&self, key: &str) -> Result<Option<String>>;

    /// Finds the components whose legacy module path maps to `key`
    ///
    /// # Arguments
    /// * `key` - Storage key the legacy component would have today
    ///
    /// # Returns
    /// Every match, enabled or not, in storage order
    ///
    /// # Errors
    /// Returns an error if storage cannot be queried
    fn uuids_for_legacy_path(&self, key: &str) -> Result<Vec<LegacyComponentUuid>>;
}

impl<T: ExistingComponentLookup + ?Sized> ExistingComponentLookup for &T {
    fn uuid_for_key(&self, key: &str) -> Result<Option<String>> {
        (**self).uuid_for_key(key)
    }

    fn uuids_for_legacy_path(&self, key: &str) -> Result<Vec<LegacyComponentUuid>> {
        (**self).uuids_for_legacy_path(key)
    }
}
