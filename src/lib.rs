//! component-tree - Component tree construction and crawling for static analysis
//!
//! This library turns the flat, reference-linked component report produced
//! by a scanner into a normalized tree of project, directories and files,
//! gives every component a stable identity across analyses and branches,
//! and walks the tree with composable visitors.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Analysis core** (`analysis`): Component model, visitors, crawlers, tree builder and holders
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use component_tree::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let reader = JsonReportReader::open(Path::new("report.json"))?;
//! let storage = InMemoryComponentRepository::load(Path::new("snapshot.json"))?;
//! let request = BuildTreeRequest::new(reader.project().clone(), Branch::default());
//!
//! // Build and analyse
//! let use_case = BuildComponentTreeUseCase::new(reader, storage);
//! let response = use_case.execute(request)?;
//! println!("{} components", response.component_count);
//!
//! // Render the tree
//! let root = use_case.tree_root_holder().root()?;
//! let output = TextTreeFormatter::new(false).format(root, CrawlerDepthLimit::FILE)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod analysis;
pub mod application;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonReportReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonTreeFormatter, TextTreeFormatter};
    pub use crate::adapters::outbound::memory::{InMemoryComponentRepository, StoredComponent};
    pub use crate::analysis::crawlers::{
        ComponentCrawler, DepthTraversalTypeAwareCrawler, PathAwareCrawler, VisitorsCrawler,
    };
    pub use crate::analysis::domain::{
        Branch, Component, ComponentAttributes, ComponentType, CrawlerDepthLimit,
        NewCodePeriod, ProjectDescription, RawComponent, RawComponentType, ReportMetadata,
    };
    pub use crate::analysis::holders::{DisabledComponentsHolder, TreeRootHolder};
    pub use crate::analysis::services::{ComponentTreeBuilder, SizeMeasure, SizeMeasuresVisitor};
    pub use crate::analysis::visitors::{
        ComponentVisitor, Order, Path, PathAwareVisitor, PathElement, TypeAwareVisitor,
    };
    pub use crate::application::dto::{BuildTreeRequest, BuildTreeResponse, OutputFormat};
    pub use crate::application::use_cases::BuildComponentTreeUseCase;
    pub use crate::ports::inbound::BuildComponentTreePort;
    pub use crate::ports::outbound::{
        BranchComponentRepository, ComponentReader, ExistingComponentLookup, OutputPresenter,
        TreeFormatter,
    };
    pub use crate::shared::{ComponentTreeError, Result};
}
