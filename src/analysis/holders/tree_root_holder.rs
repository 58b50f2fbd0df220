use crate::analysis::domain::Component;
use crate::shared::{ComponentTreeError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

const WHAT: &str = "Root of the component tree";

/// Child indexes leading from the root to a component
type TreePath = Vec<usize>;

#[derive(Default)]
struct Indexes {
    size: usize,
    by_ref: HashMap<i32, TreePath>,
    by_uuid: HashMap<String, TreePath>,
    by_db_key: HashMap<String, TreePath>,
}

/// Holds the root of the tree built for the current analysis.
///
/// The root is set exactly once. Lookups by reference, uuid or db key are
/// indexed on first use.
#[derive(Default)]
pub struct TreeRootHolder {
    root: OnceLock<Component>,
    indexes: OnceLock<Indexes>,
}

impl TreeRootHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// Fails when a root has already been set.
    pub fn set_root(&self, root: Component) -> Result<()> {
        self.root
            .set(root)
            .map_err(|_| ComponentTreeError::AlreadyInitialized { what: WHAT }.into())
    }

    pub fn is_initialized(&self) -> bool {
        self.root.get().is_some()
    }

    /// # Errors
    /// Fails when no root has been set yet.
    pub fn root(&self) -> Result<&Component> {
        self.root
            .get()
            .ok_or_else(|| ComponentTreeError::NotInitialized { what: WHAT }.into())
    }

    /// Number of components in the tree
    pub fn size(&self) -> Result<usize> {
        Ok(self.indexes()?.size)
    }

    /// Report component (project, directory with a reference, or file) with
    /// this flat report reference
    pub fn component_by_ref(&self, reference: i32) -> Result<Option<&Component>> {
        let path = self.indexes()?.by_ref.get(&reference);
        self.resolve(path)
    }

    pub fn component_by_uuid(&self, uuid: &str) -> Result<Option<&Component>> {
        let path = self.indexes()?.by_uuid.get(uuid);
        self.resolve(path)
    }

    pub fn component_by_db_key(&self, db_key: &str) -> Result<Option<&Component>> {
        let path = self.indexes()?.by_db_key.get(db_key);
        self.resolve(path)
    }

    fn indexes(&self) -> Result<&Indexes> {
        let root = self.root()?;
        Ok(self.indexes.get_or_init(|| {
            let mut indexes = Indexes::default();
            index(root, &mut Vec::new(), &mut indexes);
            indexes
        }))
    }

    fn resolve(&self, path: Option<&TreePath>) -> Result<Option<&Component>> {
        let Some(path) = path else {
            return Ok(None);
        };
        let mut component = self.root()?;
        for &i in path {
            match component.children().get(i) {
                Some(child) => component = child,
                None => return Ok(None),
            }
        }
        Ok(Some(component))
    }
}

fn index(component: &Component, path: &mut TreePath, indexes: &mut Indexes) {
    indexes.size += 1;
    if let Some(reference) = component.report_attributes().ok().and_then(|r| r.reference()) {
        indexes.by_ref.insert(reference, path.clone());
    }
    indexes.by_uuid.insert(component.uuid().to_string(), path.clone());
    indexes
        .by_db_key
        .insert(component.db_key().to_string(), path.clone());
    for (i, child) in component.children().iter().enumerate() {
        path.push(i);
        index(child, path, indexes);
        path.pop();
    }
}

impl std::fmt::Debug for TreeRootHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeRootHolder")
            .field("root", &self.root.get().map(Component::db_key))
            .field("type", &self.root.get().map(Component::component_type))
            .finish()
    }
}
