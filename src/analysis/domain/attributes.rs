use super::ComponentType;
use crate::shared::{ComponentTreeError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Attributes shared by every report-type component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportAttributes {
    reference: Option<i32>,
    scm_path: Option<String>,
}

impl ReportAttributes {
    /// `reference` is absent for directories, which have no counterpart in the flat report.
    pub fn new(reference: Option<i32>, scm_path: Option<String>) -> Self {
        Self {
            reference,
            scm_path,
        }
    }

    pub fn reference(&self) -> Option<i32> {
        self.reference
    }

    /// Path of the component relative to the root of the SCM repository
    pub fn scm_path(&self) -> Option<&str> {
        self.scm_path.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectAttributes {
    project_version: String,
    build_string: Option<String>,
    scm_revision_id: Option<String>,
}

impl ProjectAttributes {
    pub fn new(
        project_version: impl Into<String>,
        build_string: Option<String>,
        scm_revision_id: Option<String>,
    ) -> Self {
        Self {
            project_version: project_version.into(),
            build_string,
            scm_revision_id,
        }
    }

    pub fn project_version(&self) -> &str {
        &self.project_version
    }

    pub fn build_string(&self) -> Option<&str> {
        self.build_string.as_deref()
    }

    pub fn scm_revision_id(&self) -> Option<&str> {
        self.scm_revision_id.as_deref()
    }
}

/// Attributes specific to FILE components
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAttributes {
    unit_test: bool,
    language_key: Option<String>,
    marked_as_unchanged: bool,
    old_relative_path: Option<String>,
    lines: i32,
}

impl FileAttributes {
    /// # Errors
    /// Fails when `lines` is not strictly positive: a file always has at least one line.
    pub fn new(
        unit_test: bool,
        language_key: Option<String>,
        lines: i32,
        marked_as_unchanged: bool,
        old_relative_path: Option<String>,
    ) -> Result<Self> {
        if lines <= 0 {
            return Err(ComponentTreeError::InvalidLineCount { lines }.into());
        }
        Ok(Self {
            unit_test,
            language_key,
            marked_as_unchanged,
            old_relative_path,
            lines,
        })
    }

    pub fn is_unit_test(&self) -> bool {
        self.unit_test
    }

    pub fn language_key(&self) -> Option<&str> {
        self.language_key.as_deref()
    }

    pub fn is_marked_as_unchanged(&self) -> bool {
        self.marked_as_unchanged
    }

    /// Relative path of the file in the previous analysis, when it was moved
    pub fn old_relative_path(&self) -> Option<&str> {
        self.old_relative_path.as_deref()
    }

    pub fn lines(&self) -> i32 {
        self.lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewKind {
    Portfolio,
    Application,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewAttributes {
    kind: ViewKind,
}

impl ViewAttributes {
    pub fn new(kind: ViewKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubViewAttributes {
    original_view_uuid: Option<String>,
}

impl SubViewAttributes {
    pub fn new(original_view_uuid: Option<String>) -> Self {
        Self { original_view_uuid }
    }

    /// Uuid of the portfolio this sub-view is a local copy of, if any
    pub fn original_view_uuid(&self) -> Option<&str> {
        self.original_view_uuid.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectViewAttributes {
    project_uuid: String,
    original_key: String,
    analysis_date: Option<DateTime<Utc>>,
    branch_name: Option<String>,
}

impl ProjectViewAttributes {
    pub fn new(
        project_uuid: impl Into<String>,
        original_key: impl Into<String>,
        analysis_date: Option<DateTime<Utc>>,
        branch_name: Option<String>,
    ) -> Self {
        Self {
            project_uuid: project_uuid.into(),
            original_key: original_key.into(),
            analysis_date,
            branch_name,
        }
    }

    /// Uuid of the referenced project
    pub fn project_uuid(&self) -> &str {
        &self.project_uuid
    }

    pub fn original_key(&self) -> &str {
        &self.original_key
    }

    pub fn analysis_date(&self) -> Option<DateTime<Utc>> {
        self.analysis_date
    }

    pub fn branch_name(&self) -> Option<&str> {
        self.branch_name.as_deref()
    }
}

/// The typed payload of a component.
///
/// The variant *is* the component type: a payload that does not match the
/// type cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentAttributes {
    Project {
        report: ReportAttributes,
        project: ProjectAttributes,
    },
    Directory {
        report: ReportAttributes,
    },
    File {
        report: ReportAttributes,
        file: FileAttributes,
    },
    View(ViewAttributes),
    #[serde(rename = "SUBVIEW")]
    SubView(SubViewAttributes),
    ProjectView(ProjectViewAttributes),
}

impl ComponentAttributes {
    pub fn component_type(&self) -> ComponentType {
        match self {
            ComponentAttributes::Project { .. } => ComponentType::Project,
            ComponentAttributes::Directory { .. } => ComponentType::Directory,
            ComponentAttributes::File { .. } => ComponentType::File,
            ComponentAttributes::View(_) => ComponentType::View,
            ComponentAttributes::SubView(_) => ComponentType::SubView,
            ComponentAttributes::ProjectView(_) => ComponentType::ProjectView,
        }
    }

    pub fn report(&self) -> Result<&ReportAttributes> {
        match self {
            ComponentAttributes::Project { report, .. }
            | ComponentAttributes::Directory { report }
            | ComponentAttributes::File { report, .. } => Ok(report),
            _ => Err(not_available("ReportAttributes", "PROJECT, DIRECTORY or FILE")),
        }
    }

    pub fn project(&self) -> Result<&ProjectAttributes> {
        match self {
            ComponentAttributes::Project { project, .. } => Ok(project),
            _ => Err(not_available("ProjectAttributes", "PROJECT")),
        }
    }

    pub fn file(&self) -> Result<&FileAttributes> {
        match self {
            ComponentAttributes::File { file, .. } => Ok(file),
            _ => Err(not_available("FileAttributes", "FILE")),
        }
    }

    pub fn view(&self) -> Result<&ViewAttributes> {
        match self {
            ComponentAttributes::View(view) => Ok(view),
            _ => Err(not_available("ViewAttributes", "VIEW")),
        }
    }

    pub fn sub_view(&self) -> Result<&SubViewAttributes> {
        match self {
            ComponentAttributes::SubView(sub_view) => Ok(sub_view),
            _ => Err(not_available("SubViewAttributes", "SUBVIEW")),
        }
    }

    pub fn project_view(&self) -> Result<&ProjectViewAttributes> {
        match self {
            ComponentAttributes::ProjectView(project_view) => Ok(project_view),
            _ => Err(not_available("ProjectViewAttributes", "PROJECT_VIEW")),
        }
    }
}

fn not_available(attributes: &'static str, expected: &'static str) -> anyhow::Error {
    ComponentTreeError::AttributesNotAvailable {
        attributes,
        expected,
    }
    .into()
}
