//! Services turning a flat report into an identified component tree and
//! deriving measures from it.

pub mod component_tree_builder;
pub mod component_uuid_factory;
pub mod key_generators;
pub mod reference_branch;
pub mod size_measures;

pub use component_tree_builder::ComponentTreeBuilder;
pub use component_uuid_factory::ComponentUuidFactory;
pub use key_generators::{BranchKeyGenerator, PublicKeyGenerator};
pub use reference_branch::{
    BranchComponentUuids, ReferenceBranchComponentUuids, ReferenceBranchResolver,
};
pub use size_measures::{ReferenceComponentsVisitor, SizeMeasure, SizeMeasuresVisitor};
