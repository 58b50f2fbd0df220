/// Mock implementations for testing
mod mock_component_reader;
mod mock_storage;

pub use mock_component_reader::MockComponentReader;
pub use mock_storage::MockStorage;
