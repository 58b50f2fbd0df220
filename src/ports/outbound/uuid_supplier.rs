use crate::shared::Result;

/// UuidSupplier port for resolving the uuid of a component from its key
pub trait UuidSupplier {
    /// Returns the uuid of the component with the given storage key
    ///
    /// # Arguments
    /// * `db_key` - Storage key of the component
    ///
    /// # Returns
    /// The stored uuid when the component is already known, a new one otherwise
    ///
    /// # Errors
    /// Returns an error if the underlying lookup fails
    fn uuid_for(&self, db_key: &str) -> Result<String>;
}

impl<F> UuidSupplier for F
where
    F: Fn(&str) -> Result<String>,
{
    fn uuid_for(&self, db_key: &str) -> Result<String> {
        self(db_key)
    }
}
