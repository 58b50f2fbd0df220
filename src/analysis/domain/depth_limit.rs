use super::ComponentType;
use crate::shared::{ComponentTreeError, Result};
use std::fmt;

/// How deep a crawler should go.
///
/// A limit carries at most one max depth per type family, so one limit can
/// serve both a report tree and a views tree. Comparing against a type of a
/// family the limit says nothing about is always `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrawlerDepthLimit {
    report_max_depth: Option<ComponentType>,
    views_max_depth: Option<ComponentType>,
}

impl CrawlerDepthLimit {
    pub const PROJECT: CrawlerDepthLimit = CrawlerDepthLimit::report_only(ComponentType::Project);
    pub const DIRECTORY: CrawlerDepthLimit =
        CrawlerDepthLimit::report_only(ComponentType::Directory);
    pub const FILE: CrawlerDepthLimit = CrawlerDepthLimit::report_only(ComponentType::File);
    pub const VIEW: CrawlerDepthLimit = CrawlerDepthLimit::views_only(ComponentType::View);
    pub const SUBVIEW: CrawlerDepthLimit = CrawlerDepthLimit::views_only(ComponentType::SubView);
    pub const PROJECT_VIEW: CrawlerDepthLimit =
        CrawlerDepthLimit::views_only(ComponentType::ProjectView);
    /// The deepest level of whichever family is crawled
    pub const LEAVES: CrawlerDepthLimit = CrawlerDepthLimit {
        report_max_depth: Some(ComponentType::File),
        views_max_depth: Some(ComponentType::ProjectView),
    };

    const fn report_only(component_type: ComponentType) -> Self {
        Self {
            report_max_depth: Some(component_type),
            views_max_depth: None,
        }
    }

    const fn views_only(component_type: ComponentType) -> Self {
        Self {
            report_max_depth: None,
            views_max_depth: Some(component_type),
        }
    }

    /// The named level matching `component_type`
    pub fn of(component_type: ComponentType) -> Self {
        if component_type.is_report_type() {
            Self::report_only(component_type)
        } else {
            Self::views_only(component_type)
        }
    }

    /// Starts a composite limit from a report-type max depth.
    ///
    /// # Errors
    /// Fails when `component_type` is not a report type.
    pub fn report_max_depth(component_type: ComponentType) -> Result<CrawlerDepthLimitBuilder> {
        if !component_type.is_report_type() {
            return Err(ComponentTreeError::NotAReportType { component_type }.into());
        }
        Ok(CrawlerDepthLimitBuilder {
            report_max_depth: component_type,
        })
    }

    pub fn report_depth(&self) -> Option<ComponentType> {
        self.report_max_depth
    }

    pub fn views_depth(&self) -> Option<ComponentType> {
        self.views_max_depth
    }

    fn max_depth_for(&self, component_type: ComponentType) -> Option<ComponentType> {
        if component_type.is_report_type() {
            self.report_max_depth
        } else {
            self.views_max_depth
        }
    }

    pub fn is_same_as(&self, component_type: ComponentType) -> bool {
        self.max_depth_for(component_type) == Some(component_type)
    }

    pub fn is_deeper_than(&self, component_type: ComponentType) -> bool {
        self.max_depth_for(component_type)
            .is_some_and(|max| max.is_deeper_than(component_type))
    }

    pub fn is_higher_than(&self, component_type: ComponentType) -> bool {
        self.max_depth_for(component_type)
            .is_some_and(|max| max.is_higher_than(component_type))
    }

    /// Whether a component of `component_type` is within this limit
    pub fn accepts(&self, component_type: ComponentType) -> bool {
        self.is_same_as(component_type) || self.is_deeper_than(component_type)
    }
}

impl fmt::Display for CrawlerDepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::LEAVES {
            return f.write_str("LEAVES");
        }
        match (self.report_max_depth, self.views_max_depth) {
            (Some(report), Some(views)) => write!(f, "{}+{}", report, views),
            (Some(only), None) | (None, Some(only)) => write!(f, "{}", only),
            (None, None) => f.write_str("NONE"),
        }
    }
}

impl std::str::FromStr for CrawlerDepthLimit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PROJECT" => Ok(Self::PROJECT),
            "DIRECTORY" => Ok(Self::DIRECTORY),
            "FILE" => Ok(Self::FILE),
            "VIEW" => Ok(Self::VIEW),
            "SUBVIEW" => Ok(Self::SUBVIEW),
            "PROJECT_VIEW" => Ok(Self::PROJECT_VIEW),
            "LEAVES" => Ok(Self::LEAVES),
            _ => Err(format!(
                "Invalid max depth: {}. Please specify one of PROJECT, DIRECTORY, FILE, VIEW, SUBVIEW, PROJECT_VIEW, LEAVES",
                s
            )),
        }
    }
}

/// Second step of [`CrawlerDepthLimit::report_max_depth`]
#[derive(Debug, Clone, Copy)]
pub struct CrawlerDepthLimitBuilder {
    report_max_depth: ComponentType,
}

impl CrawlerDepthLimitBuilder {
    /// # Errors
    /// Fails when `component_type` is not a views type.
    pub fn with_views_max_depth(self, component_type: ComponentType) -> Result<CrawlerDepthLimit> {
        if !component_type.is_views_type() {
            return Err(ComponentTreeError::NotAViewsType { component_type }.into());
        }
        Ok(CrawlerDepthLimit {
            report_max_depth: Some(self.report_max_depth),
            views_max_depth: Some(component_type),
        })
    }
}
