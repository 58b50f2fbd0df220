use serde::Deserialize;

const KEY_SEPARATOR: char = ':';

/// Project as already known to storage
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectDescription {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectDescription {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description,
        }
    }
}

/// Key of a component inside `project_key`: the project key itself for an
/// absent or empty path, `<project_key>:<path>` otherwise.
pub fn create_effective_key(project_key: &str, path: Option<&str>) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{}{}{}", project_key, KEY_SEPARATOR, path),
        _ => project_key.to_string(),
    }
}
