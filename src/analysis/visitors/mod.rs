//! Visitor contracts driven by the crawlers.
//!
//! A visitor is either type-aware (one hook per component type) or
//! path-aware (the same hooks, plus a stack of values attached to the
//! ancestors of the visited component). [`ComponentVisitor`] is the closed
//! set a multi-visitor crawl accepts.

pub mod component_visitor;
pub mod path_aware;
pub mod type_aware;

pub use component_visitor::ComponentVisitor;
pub use path_aware::{Path, PathAwareVisitor, PathElement};
pub use type_aware::TypeAwareVisitor;

use serde::Deserialize;
use std::fmt;

/// When a visitor sees a component relative to its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Before its children
    PreOrder,
    /// After all of its children
    PostOrder,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::PreOrder => f.write_str("PRE_ORDER"),
            Order::PostOrder => f.write_str("POST_ORDER"),
        }
    }
}
