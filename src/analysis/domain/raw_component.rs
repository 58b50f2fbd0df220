use super::Status;
use serde::Deserialize;
use std::fmt;

/// Type of a node in the flat report.
///
/// Only `PROJECT` and `FILE` are accepted by the tree builder; the other
/// variants exist because older reports still carry them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RawComponentType {
    Project,
    Module,
    Directory,
    File,
}

impl fmt::Display for RawComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RawComponentType::Project => "PROJECT",
            RawComponentType::Module => "MODULE",
            RawComponentType::Directory => "DIRECTORY",
            RawComponentType::File => "FILE",
        };
        f.write_str(name)
    }
}

/// Change status of a file as declared by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileStatus {
    #[default]
    Unavailable,
    Same,
    Changed,
    Added,
}

impl From<FileStatus> for Status {
    fn from(status: FileStatus) -> Self {
        match status {
            FileStatus::Unavailable => Status::Unavailable,
            FileStatus::Same => Status::Same,
            FileStatus::Changed => Status::Changed,
            FileStatus::Added => Status::Added,
        }
    }
}

/// One node of the flat report, addressed by its integer reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawComponent {
    #[serde(rename = "ref")]
    pub reference: i32,
    #[serde(rename = "type")]
    pub component_type: RawComponentType,
    #[serde(default)]
    pub child_refs: Vec<i32>,
    /// Only meaningful on the project node
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_relative_path: Option<String>,
    #[serde(default)]
    pub lines: Option<i32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub is_test: bool,
    #[serde(default)]
    pub status: FileStatus,
    #[serde(default)]
    pub marked_as_unchanged: bool,
    #[serde(default)]
    pub old_relative_file_path: Option<String>,
}

impl RawComponent {
    /// A bare node with no children and no optional field set
    pub fn new(reference: i32, component_type: RawComponentType) -> Self {
        Self {
            reference,
            component_type,
            child_refs: Vec::new(),
            key: String::new(),
            name: None,
            description: None,
            project_relative_path: None,
            lines: None,
            language: None,
            is_test: false,
            status: FileStatus::Unavailable,
            marked_as_unchanged: false,
            old_relative_file_path: None,
        }
    }

    /// Project node with the given key and children
    pub fn project(reference: i32, key: impl Into<String>, child_refs: Vec<i32>) -> Self {
        Self {
            key: key.into(),
            child_refs,
            ..Self::new(reference, RawComponentType::Project)
        }
    }

    /// File node at `path` declaring `lines` lines
    pub fn file(reference: i32, path: impl Into<String>, lines: Option<i32>) -> Self {
        Self {
            project_relative_path: Some(path.into()),
            lines,
            ..Self::new(reference, RawComponentType::File)
        }
    }
}

/// Report-level information that is not attached to any node
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ReportMetadata {
    pub root_component_ref: i32,
    #[serde(default)]
    pub project_version: Option<String>,
    #[serde(default)]
    pub build_string: Option<String>,
    #[serde(default)]
    pub scm_revision_id: Option<String>,
}

impl ReportMetadata {
    pub fn new(root_component_ref: i32) -> Self {
        Self {
            root_component_ref,
            project_version: None,
            build_string: None,
            scm_revision_id: None,
        }
    }
}
