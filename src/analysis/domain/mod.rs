pub mod attributes;
pub mod branch;
pub mod component;
pub mod component_type;
pub mod depth_limit;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod project;
pub mod raw_component;

pub use attributes::{
    ComponentAttributes, FileAttributes, ProjectAttributes, ProjectViewAttributes,
    ReportAttributes, SubViewAttributes, ViewAttributes, ViewKind,
};
pub use branch::{Branch, BranchType, NewCodePeriod, NewCodePeriodType};
pub use component::{Component, ComponentBuilder};
pub use component_type::{ComponentType, Status};
pub use depth_limit::{CrawlerDepthLimit, CrawlerDepthLimitBuilder};
pub use project::{create_effective_key, ProjectDescription};
pub use raw_component::{FileStatus, RawComponent, RawComponentType, ReportMetadata};
