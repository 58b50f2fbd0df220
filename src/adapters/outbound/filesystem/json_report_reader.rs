use crate::analysis::domain::{ProjectDescription, RawComponent, ReportMetadata};
use crate::ports::outbound::ComponentReader;
use crate::shared::security::read_regular_file;
use crate::shared::{ComponentTreeError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const FILE_DESCRIPTION: &str = "flat report";

#[derive(Debug, Deserialize)]
struct FlatReport {
    metadata: ReportMetadata,
    project: ProjectDescription,
    #[serde(default)]
    components: Vec<RawComponent>,
}

/// JsonReportReader adapter for flat reports stored as JSON
///
/// The whole document is loaded up front. Components are then resolved by
/// reference from memory.
#[derive(Debug)]
pub struct JsonReportReader {
    metadata: ReportMetadata,
    project: ProjectDescription,
    components: HashMap<i32, RawComponent>,
}

impl JsonReportReader {
    /// Loads the report at `path`
    ///
    /// # Errors
    /// Returns an error if the file is not a readable regular file or is
    /// not a valid flat report.
    pub fn open(path: &Path) -> Result<Self> {
        let content = read_regular_file(path, FILE_DESCRIPTION)?;
        Self::parse(&content, path)
    }

    /// Parses report `content`; `path` only appears in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let invalid = |details: String| ComponentTreeError::InvalidDocument {
            description: FILE_DESCRIPTION,
            path: PathBuf::from(path),
            details,
        };
        let report: FlatReport =
            serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
        let mut components: HashMap<i32, RawComponent> =
            HashMap::with_capacity(report.components.len());
        for component in report.components {
            if let Some(existing) = components.get(&component.reference) {
                return Err(invalid(format!(
                    "Component {} already set for ref {}",
                    describe(existing),
                    component.reference
                ))
                .into());
            }
            components.insert(component.reference, component);
        }
        tracing::debug!(
            path = %path.display(),
            components = components.len(),
            "flat report loaded"
        );
        Ok(Self {
            metadata: report.metadata,
            project: report.project,
            components,
        })
    }

    /// Project as described by the report
    pub fn project(&self) -> &ProjectDescription {
        &self.project
    }
}

/// Path of a file, key of a project, type otherwise
fn describe(component: &RawComponent) -> String {
    match (&component.project_relative_path, component.key.as_str()) {
        (Some(path), _) => path.clone(),
        (None, "") => component.component_type.to_string(),
        (None, key) => key.to_string(),
    }
}

impl ComponentReader for JsonReportReader {
    fn read_metadata(&self) -> Result<ReportMetadata> {
        Ok(self.metadata.clone())
    }

    fn component_by_ref(&self, reference: i32) -> Result<RawComponent> {
        self.components
            .get(&reference)
            .cloned()
            .ok_or_else(|| ComponentTreeError::UnknownReference { reference }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::RawComponentType;
    use std::fs;
    use tempfile::TempDir;

    const REPORT: &str = r#"{
        "metadata": {"root_component_ref": 1, "project_version": "1.0"},
        "project": {"key": "K1", "name": "Project 1"},
        "components": [
            {"ref": 1, "type": "PROJECT", "key": "K1", "child_refs": [2]},
            {"ref": 2, "type": "FILE", "project_relative_path": "src/Foo.js", "lines": 4}
        ]
    }"#;

    #[test]
    fn test_open_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        fs::write(&path, REPORT).unwrap();

        let reader = JsonReportReader::open(&path).unwrap();

        assert_eq!(reader.read_metadata().unwrap().root_component_ref, 1);
        assert_eq!(reader.project().key, "K1");
        let file = reader.component_by_ref(2).unwrap();
        assert_eq!(file.component_type, RawComponentType::File);
        assert_eq!(file.lines, Some(4));
    }

    #[test]
    fn test_unknown_reference_fails_loudly() {
        let reader = JsonReportReader::parse(REPORT, Path::new("report.json")).unwrap();

        let err = reader.component_by_ref(42).unwrap_err();

        assert_eq!(err.to_string(), "No component for componentRef 42");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = JsonReportReader::parse("{not json", Path::new("report.json")).unwrap_err();

        assert!(err.to_string().contains("Failed to parse flat report report.json"));
    }

    #[test]
    fn test_duplicate_reference_is_rejected() {
        let report = r#"{
            "metadata": {"root_component_ref": 1},
            "project": {"key": "K1", "name": "Project 1"},
            "components": [
                {"ref": 1, "type": "PROJECT", "key": "K1", "child_refs": [2]},
                {"ref": 2, "type": "FILE", "project_relative_path": "src/A.js", "lines": 1},
                {"ref": 2, "type": "FILE", "project_relative_path": "src/B.js", "lines": 1}
            ]
        }"#;

        let err = JsonReportReader::parse(report, Path::new("report.json")).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ComponentTreeError>(),
            Some(ComponentTreeError::InvalidDocument { .. })
        ));
        assert!(err.to_string().contains("Component src/A.js already set for ref 2"));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let result = JsonReportReader::open(&temp_dir.path().join("missing.json"));

        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_report_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("report.json");
        fs::write(&target, REPORT).unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = JsonReportReader::open(&link).unwrap_err();

        assert!(err.to_string().contains("symbolic link"));
    }
}
