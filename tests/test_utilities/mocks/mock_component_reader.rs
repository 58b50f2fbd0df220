use component_tree::prelude::*;
use std::cell::Cell;
use std::collections::HashMap;

/// Mock ComponentReader serving raw components from memory
///
/// Counts reference lookups so tests can check each node is read once.
pub struct MockComponentReader {
    metadata: ReportMetadata,
    components: HashMap<i32, RawComponent>,
    lookups: Cell<usize>,
}

impl MockComponentReader {
    pub fn new(root_ref: i32) -> Self {
        Self {
            metadata: ReportMetadata::new(root_ref),
            components: HashMap::new(),
            lookups: Cell::new(0),
        }
    }

    pub fn with_component(mut self, component: RawComponent) -> Self {
        self.components.insert(component.reference, component);
        self
    }

    /// Project `project_key` at reference 1 with one file per `(path, lines)`
    /// at references 2, 3, ...
    pub fn project_with_files(project_key: &str, files: &[(&str, i32)]) -> Self {
        let refs: Vec<i32> = (2..).take(files.len()).collect();
        let mut reader = Self::new(1).with_component(RawComponent::project(1, project_key, refs.clone()));
        for (reference, (path, lines)) in refs.into_iter().zip(files) {
            reader = reader.with_component(RawComponent::file(reference, *path, Some(*lines)));
        }
        reader
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.get()
    }
}

impl ComponentReader for MockComponentReader {
    fn read_metadata(&self) -> Result<ReportMetadata> {
        Ok(self.metadata.clone())
    }

    fn component_by_ref(&self, reference: i32) -> Result<RawComponent> {
        self.lookups.set(self.lookups.get() + 1);
        self.components
            .get(&reference)
            .cloned()
            .ok_or_else(|| ComponentTreeError::UnknownReference { reference }.into())
    }
}
