/// In-memory adapters over snapshots of stored components
mod in_memory_component_repository;

pub use in_memory_component_repository::{InMemoryComponentRepository, StoredComponent};
