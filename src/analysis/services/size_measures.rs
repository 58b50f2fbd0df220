use super::reference_branch::ReferenceBranchResolver;
use crate::analysis::domain::{Component, CrawlerDepthLimit};
use crate::analysis::visitors::{Order, Path, PathAwareVisitor, TypeAwareVisitor};
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of files and lines below a component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SizeMeasure {
    pub files: u64,
    pub lines: u64,
}

impl SizeMeasure {
    fn add(&mut self, other: &SizeMeasure) {
        self.files += other.files;
        self.lines += other.lines;
    }
}

/// Aggregates file and line counts bottom-up, one measure per component key
#[derive(Debug, Default)]
pub struct SizeMeasuresVisitor {
    measures: BTreeMap<String, SizeMeasure>,
}

impl SizeMeasuresVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn measure(&self, key: &str) -> Option<SizeMeasure> {
        self.measures.get(key).copied()
    }

    pub fn measures(&self) -> &BTreeMap<String, SizeMeasure> {
        &self.measures
    }

    pub fn into_measures(self) -> BTreeMap<String, SizeMeasure> {
        self.measures
    }
}

impl<'c> PathAwareVisitor<'c> for SizeMeasuresVisitor {
    type Element = SizeMeasure;

    fn max_depth(&self) -> CrawlerDepthLimit {
        CrawlerDepthLimit::FILE
    }

    fn order(&self) -> Order {
        Order::PostOrder
    }

    fn name(&self) -> &str {
        "SizeMeasuresVisitor"
    }

    fn create_for_any(&mut self, _component: &'c Component) -> SizeMeasure {
        SizeMeasure::default()
    }

    fn visit_file(&mut self, file: &'c Component, path: &mut Path<'_, 'c, SizeMeasure>) -> Result<()> {
        let lines = file.file_attributes()?.lines();
        *path.current_mut() = SizeMeasure {
            files: 1,
            lines: u64::try_from(lines).unwrap_or_default(),
        };
        add_to_parent(path)
    }

    fn visit_project(&mut self, project: &'c Component, path: &mut Path<'_, 'c, SizeMeasure>) -> Result<()> {
        self.record(project, path)
    }

    fn visit_directory(&mut self, directory: &'c Component, path: &mut Path<'_, 'c, SizeMeasure>) -> Result<()> {
        self.record(directory, path)
    }
}

impl SizeMeasuresVisitor {
    fn record(&mut self, component: &Component, path: &mut Path<'_, '_, SizeMeasure>) -> Result<()> {
        self.measures.insert(component.key().to_string(), *path.current());
        add_to_parent(path)
    }
}

fn add_to_parent(path: &mut Path<'_, '_, SizeMeasure>) -> Result<()> {
    if path.is_root() {
        return Ok(());
    }
    let measure = *path.current();
    path.parent_mut()?.add(&measure);
    Ok(())
}

/// Counts the files of the tree that also exist on the reference branch
pub struct ReferenceComponentsVisitor<'r> {
    resolver: &'r dyn ReferenceBranchResolver,
    on_reference_branch: usize,
    new_files: Vec<String>,
}

impl<'r> ReferenceComponentsVisitor<'r> {
    pub fn new(resolver: &'r dyn ReferenceBranchResolver) -> Self {
        Self {
            resolver,
            on_reference_branch: 0,
            new_files: Vec::new(),
        }
    }

    pub fn files_on_reference_branch(&self) -> usize {
        self.on_reference_branch
    }

    /// Keys of the files unknown to the reference branch, in visit order
    pub fn new_files(&self) -> &[String] {
        &self.new_files
    }
}

impl<'c> TypeAwareVisitor<'c> for ReferenceComponentsVisitor<'_> {
    fn max_depth(&self) -> CrawlerDepthLimit {
        CrawlerDepthLimit::FILE
    }

    fn order(&self) -> Order {
        Order::PreOrder
    }

    fn name(&self) -> &str {
        "ReferenceComponentsVisitor"
    }

    fn visit_file(&mut self, file: &'c Component) -> Result<()> {
        match self.resolver.component_uuid(file.key())? {
            Some(_) => self.on_reference_branch += 1,
            None => self.new_files.push(file.key().to_string()),
        }
        Ok(())
    }
}
