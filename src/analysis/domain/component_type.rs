use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a [`Component`](super::Component).
///
/// Types belong to one of two mutually exclusive families:
/// - report types: `PROJECT` > `DIRECTORY` > `FILE`
/// - views types: `VIEW` > `SUBVIEW` > `PROJECT_VIEW`
///
/// Depth comparisons only make sense inside a family; across families they
/// are always `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Project,
    Directory,
    File,
    View,
    #[serde(rename = "SUBVIEW")]
    SubView,
    ProjectView,
}

impl ComponentType {
    pub const REPORT_TYPES: [ComponentType; 3] = [
        ComponentType::Project,
        ComponentType::Directory,
        ComponentType::File,
    ];

    pub const VIEWS_TYPES: [ComponentType; 3] = [
        ComponentType::View,
        ComponentType::SubView,
        ComponentType::ProjectView,
    ];

    pub const ALL: [ComponentType; 6] = [
        ComponentType::Project,
        ComponentType::Directory,
        ComponentType::File,
        ComponentType::View,
        ComponentType::SubView,
        ComponentType::ProjectView,
    ];

    /// Rank inside the family, 0 being the root level.
    fn depth(self) -> u8 {
        match self {
            ComponentType::Project | ComponentType::View => 0,
            ComponentType::SubView => 1,
            ComponentType::Directory | ComponentType::ProjectView => 2,
            ComponentType::File => 3,
        }
    }

    pub fn is_report_type(self) -> bool {
        matches!(
            self,
            ComponentType::Project | ComponentType::Directory | ComponentType::File
        )
    }

    pub fn is_views_type(self) -> bool {
        !self.is_report_type()
    }

    pub fn is_same_family(self, other: ComponentType) -> bool {
        self.is_report_type() == other.is_report_type()
    }

    pub fn is_deeper_than(self, other: ComponentType) -> bool {
        self.is_same_family(other) && self.depth() > other.depth()
    }

    pub fn is_higher_than(self, other: ComponentType) -> bool {
        self.is_same_family(other) && self.depth() < other.depth()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Project => "PROJECT",
            ComponentType::Directory => "DIRECTORY",
            ComponentType::File => "FILE",
            ComponentType::View => "VIEW",
            ComponentType::SubView => "SUBVIEW",
            ComponentType::ProjectView => "PROJECT_VIEW",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a component compared to the previous analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Unavailable,
    Same,
    Changed,
    Added,
}
