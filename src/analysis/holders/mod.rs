//! Per-run state set once and read by later steps of the analysis.

pub mod disabled_components_holder;
pub mod tree_root_holder;

pub use disabled_components_holder::DisabledComponentsHolder;
pub use tree_root_holder::TreeRootHolder;
