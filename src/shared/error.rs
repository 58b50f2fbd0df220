use crate::analysis::domain::ComponentType;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the tree was built and rendered
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid report, unreadable file, crawl failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while building or crawling a component tree.
///
/// Three families share this enum:
/// - invalid input (bad flat report, bad component construction),
/// - usage errors (framework misuse by calling code),
/// - state errors (once-only holders misused).
///
/// None of them is recoverable for the current pass.
#[derive(Debug, Error)]
pub enum ComponentTreeError {
    #[error("Expected root component of type 'PROJECT'")]
    RootNotProject,

    #[error("Unsupported component type '{component_type}'")]
    UnsupportedComponentType { component_type: String },

    #[error("No component for componentRef {reference}")]
    UnknownReference { reference: i32 },

    #[error("Files should have a project relative path (componentRef {reference})")]
    FileWithoutPath { reference: i32 },

    #[error("componentRef {reference} is referenced more than once")]
    DuplicateReference { reference: i32 },

    #[error("File '{path}' can't have children (componentRef {reference})")]
    FileWithChildren { path: String, reference: i32 },

    #[error("File '{path}' has no line")]
    FileWithoutLines { path: String },

    #[error("Path '{path}' is declared by more than one file or is used both as a file and a directory")]
    ConflictingFilePath { path: String },

    #[error("Number of lines must be greater than zero (got {lines})")]
    InvalidLineCount { lines: i32 },

    #[error("{field} can't be absent")]
    MissingField { field: &'static str },

    #[error("Only component of type {expected} have a {attributes} object")]
    AttributesNotAvailable {
        attributes: &'static str,
        expected: &'static str,
    },

    #[error("Component of type {child} can't be a child of a component of type {parent}")]
    InvalidChildType {
        parent: ComponentType,
        child: ComponentType,
    },

    #[error("A Report max depth must be a report type (got {component_type})")]
    NotAReportType { component_type: ComponentType },

    #[error("A Views max depth must be a views type (got {component_type})")]
    NotAViewsType { component_type: ComponentType },

    #[error("Path has no parent, current element is the root")]
    PathHasNoParent,

    #[error("{what} has already been set")]
    AlreadyInitialized { what: &'static str },

    #[error("{what} has not been set yet")]
    NotInitialized { what: &'static str },

    #[error("Failed to parse {description} {path}: {details}")]
    InvalidDocument {
        description: &'static str,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to write to file {path}: {details}")]
    FileWriteError { path: PathBuf, details: String },
}
