//! Tree walkers driving visitors over a built component tree.

pub mod depth_traversal;
pub mod path_aware_crawler;
pub mod visitors_crawler;

pub use depth_traversal::DepthTraversalTypeAwareCrawler;
pub use path_aware_crawler::PathAwareCrawler;
pub use visitors_crawler::{VisitorDuration, VisitorsCrawler};

use crate::analysis::domain::{Component, ComponentType};
use crate::shared::Result;
use std::fmt;

/// Walks a (sub)tree rooted at a component
pub trait ComponentCrawler<'c> {
    /// # Errors
    /// Fails as soon as a visitor hook fails; the error carries a
    /// [`VisitFailure`] context naming the innermost failing component.
    fn visit(&mut self, component: &'c Component) -> Result<()>;
}

/// Context attached to the error of a failed visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitFailure {
    pub db_key: String,
    pub component_type: ComponentType,
}

impl fmt::Display for VisitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Visit of Component {{key={},type={}}} failed",
            self.db_key, self.component_type
        )
    }
}

/// Adds a [`VisitFailure`] context for `component` unless a deeper
/// component already did
pub(crate) fn wrap_visit_failure(error: anyhow::Error, component: &Component) -> anyhow::Error {
    if error.downcast_ref::<VisitFailure>().is_some() {
        return error;
    }
    error.context(VisitFailure {
        db_key: component.db_key().to_string(),
        component_type: component.component_type(),
    })
}
