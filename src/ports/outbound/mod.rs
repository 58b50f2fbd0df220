/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the analysis core uses
/// to reach the flat report, storage and the output destination.
pub mod branch_component_repository;
pub mod component_reader;
pub mod existing_component_lookup;
pub mod key_generator;
pub mod output_presenter;
pub mod tree_formatter;
pub mod uuid_supplier;

pub use branch_component_repository::{BranchComponent, BranchComponentRepository};
pub use component_reader::ComponentReader;
pub use existing_component_lookup::{ExistingComponentLookup, LegacyComponentUuid};
pub use key_generator::ComponentKeyGenerator;
pub use output_presenter::OutputPresenter;
pub use tree_formatter::TreeFormatter;
pub use uuid_supplier::UuidSupplier;
