/// ComponentKeyGenerator port for deriving component keys
///
/// Two instances are used per build: one for the key used in storage and one
/// for the user-facing key.
pub trait ComponentKeyGenerator {
    /// Generates the key of a component
    ///
    /// # Arguments
    /// * `project_key` - Key of the project the component belongs to
    /// * `path` - Path of the component relative to the project, `None`
    ///   for the project itself
    ///
    /// # Returns
    /// The generated key
    fn generate_key(&self, project_key: &str, path: Option<&str>) -> String;
}

impl<F> ComponentKeyGenerator for F
where
    F: Fn(&str, Option<&str>) -> String,
{
    fn generate_key(&self, project_key: &str, path: Option<&str>) -> String {
        self(project_key, path)
    }
}
