use crate::analysis::domain::component::trim_to_none;
use crate::analysis::domain::{
    Branch, Component, ComponentAttributes, FileAttributes, ProjectAttributes,
    ProjectDescription, RawComponent, RawComponentType, ReportAttributes, Status,
};
use crate::ports::outbound::{ComponentKeyGenerator, ComponentReader, UuidSupplier};
use crate::shared::{ComponentTreeError, Result};
use std::collections::{HashMap, HashSet};

const PATH_SEPARATOR: char = '/';

/// Turns the flat report into the component tree of the project.
///
/// Files are grouped under synthesized directories. A chain of directories
/// holding nothing but one sub-directory is collapsed into a single
/// directory named after the whole chain.
pub struct ComponentTreeBuilder<'a> {
    key_generator: &'a dyn ComponentKeyGenerator,
    public_key_generator: &'a dyn ComponentKeyGenerator,
    uuid_supplier: &'a dyn UuidSupplier,
    reader: &'a dyn ComponentReader,
    project: &'a ProjectDescription,
    branch: &'a Branch,
    project_attributes: ProjectAttributes,
    uuids: HashMap<String, String>,
    directories: usize,
    files: usize,
}

/// Intermediate tree of paths, children kept in first-seen order
enum Node {
    Directory(Vec<(String, Node)>),
    File(RawComponent),
}

impl Node {
    fn children(&self) -> &[(String, Node)] {
        match self {
            Node::Directory(children) => children,
            Node::File(_) => &[],
        }
    }

    /// The only child when it is itself a directory
    fn single_directory_child(&self) -> Option<&(String, Node)> {
        match self.children() {
            [only @ (_, Node::Directory(_))] => Some(only),
            _ => None,
        }
    }
}

impl<'a> ComponentTreeBuilder<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        key_generator: &'a dyn ComponentKeyGenerator,
        public_key_generator: &'a dyn ComponentKeyGenerator,
        uuid_supplier: &'a dyn UuidSupplier,
        reader: &'a dyn ComponentReader,
        project: &'a ProjectDescription,
        branch: &'a Branch,
        project_attributes: ProjectAttributes,
    ) -> Self {
        Self {
            key_generator,
            public_key_generator,
            uuid_supplier,
            reader,
            project,
            branch,
            project_attributes,
            uuids: HashMap::new(),
            directories: 0,
            files: 0,
        }
    }

    /// Builds the tree rooted at the raw `root` project node.
    ///
    /// # Arguments
    /// * `root` - Raw node of type `PROJECT`
    /// * `scm_base_path` - Path of the project inside its SCM repository
    ///
    /// # Errors
    /// Returns an error if:
    /// - `root` is not a project
    /// - a reachable node is neither a project nor a file
    /// - a reference is listed twice, or a file lists children
    /// - a file has no path, no line, or a path clashing with another file
    /// - a reference is unknown or a uuid cannot be resolved
    pub fn build_project(
        &mut self,
        root: &RawComponent,
        scm_base_path: Option<&str>,
    ) -> Result<Component> {
        if root.component_type != RawComponentType::Project {
            return Err(ComponentTreeError::RootNotProject.into());
        }
        let project_key = if root.key.is_empty() {
            self.project.key.clone()
        } else {
            root.key.clone()
        };
        let scm_base_path = trim_to_none(scm_base_path);

        let mut files = Node::Directory(Vec::new());
        self.collect_files(root, &mut files)?;

        let children = self.build_children(&project_key, scm_base_path, &files, "")?;
        let db_key = self.key_generator.generate_key(&project_key, None);
        let project = Component::builder(ComponentAttributes::Project {
            report: ReportAttributes::new(
                Some(root.reference),
                scm_path(scm_base_path, root.project_relative_path.as_deref().unwrap_or("")),
            ),
            project: self.project_attributes.clone(),
        })
        .uuid(self.uuid(&db_key)?)
        .key(self.public_key_generator.generate_key(&project_key, None))
        .db_key(db_key)
        .name(self.project_name(root))
        .description(self.project_description(root))
        .status(Status::Unavailable)
        .add_children(children)
        .build()?;

        tracing::debug!(
            project = project.key(),
            directories = self.directories,
            files = self.files,
            "component tree built"
        );
        Ok(project)
    }

    fn project_name(&self, root: &RawComponent) -> String {
        let from_report = self.branch.is_main().then(|| trim_to_none(root.name.as_deref())).flatten();
        from_report.unwrap_or(&self.project.name).to_string()
    }

    fn project_description(&self, root: &RawComponent) -> Option<String> {
        let from_report = self
            .branch
            .is_main()
            .then(|| trim_to_none(root.description.as_deref()))
            .flatten();
        from_report
            .or(self.project.description.as_deref())
            .map(str::to_string)
    }

    fn collect_files(&self, root: &RawComponent, files: &mut Node) -> Result<()> {
        let mut seen = HashSet::from([root.reference]);
        for &child_ref in &root.child_refs {
            if !seen.insert(child_ref) {
                return Err(ComponentTreeError::DuplicateReference {
                    reference: child_ref,
                }
                .into());
            }
            let child = self.reader.component_by_ref(child_ref)?;
            if child.component_type != RawComponentType::File {
                return Err(ComponentTreeError::UnsupportedComponentType {
                    component_type: child.component_type.to_string(),
                }
                .into());
            }
            if !child.child_refs.is_empty() {
                return Err(ComponentTreeError::FileWithChildren {
                    path: child.project_relative_path.clone().unwrap_or_default(),
                    reference: child.reference,
                }
                .into());
            }
            add_file(files, child)?;
        }
        Ok(())
    }

    fn build_children(
        &mut self,
        project_key: &str,
        scm_base_path: Option<&str>,
        node: &Node,
        parent_path: &str,
    ) -> Result<Vec<Component>> {
        let mut components = Vec::with_capacity(node.children().len());
        for (name, child) in node.children() {
            let component = match child {
                Node::File(raw) => self.build_file(project_key, scm_base_path, raw)?,
                Node::Directory(_) => {
                    let mut path = join(parent_path, name);
                    let mut directory = child;
                    while let Some((segment, only_child)) = directory.single_directory_child() {
                        path = join(&path, segment);
                        directory = only_child;
                    }
                    self.build_directory(project_key, scm_base_path, directory, parent_path, &path)?
                }
            };
            components.push(component);
        }
        Ok(components)
    }

    fn build_directory(
        &mut self,
        project_key: &str,
        scm_base_path: Option<&str>,
        node: &Node,
        parent_path: &str,
        path: &str,
    ) -> Result<Component> {
        let children = self.build_children(project_key, scm_base_path, node, path)?;
        let db_key = self.key_generator.generate_key(project_key, Some(path));
        self.directories += 1;
        Component::builder(ComponentAttributes::Directory {
            report: ReportAttributes::new(None, scm_path(scm_base_path, path)),
        })
        .uuid(self.uuid(&db_key)?)
        .key(self.public_key_generator.generate_key(project_key, Some(path)))
        .db_key(db_key)
        .name(path)
        .short_name(directory_short_name(parent_path, path))
        .status(Status::Unavailable)
        .add_children(children)
        .build()
    }

    fn build_file(
        &mut self,
        project_key: &str,
        scm_base_path: Option<&str>,
        raw: &RawComponent,
    ) -> Result<Component> {
        let path = raw.project_relative_path.as_deref().unwrap_or_default();
        let lines = match raw.lines {
            Some(lines) if lines > 0 => lines,
            _ => {
                return Err(ComponentTreeError::FileWithoutLines {
                    path: path.to_string(),
                }
                .into())
            }
        };
        let file_attributes = FileAttributes::new(
            raw.is_test,
            trim_to_none(raw.language.as_deref()).map(str::to_string),
            lines,
            raw.marked_as_unchanged,
            trim_to_none(raw.old_relative_file_path.as_deref()).map(str::to_string),
        )?;
        let db_key = self.key_generator.generate_key(project_key, Some(path));
        self.files += 1;
        Component::builder(ComponentAttributes::File {
            report: ReportAttributes::new(Some(raw.reference), scm_path(scm_base_path, path)),
            file: file_attributes,
        })
        .uuid(self.uuid(&db_key)?)
        .key(self.public_key_generator.generate_key(project_key, Some(path)))
        .db_key(db_key)
        .name(path)
        .short_name(file_name(path))
        .description(trim_to_none(raw.description.as_deref()).map(str::to_string))
        .status(raw.status.into())
        .build()
    }

    /// Memoized per build so that a key always maps to one uuid
    fn uuid(&mut self, db_key: &str) -> Result<String> {
        if let Some(uuid) = self.uuids.get(db_key) {
            return Ok(uuid.clone());
        }
        let uuid = self.uuid_supplier.uuid_for(db_key)?;
        self.uuids.insert(db_key.to_string(), uuid.clone());
        Ok(uuid)
    }
}

fn add_file(root: &mut Node, raw: RawComponent) -> Result<()> {
    let path = match trim_to_none(raw.project_relative_path.as_deref()) {
        Some(path) => path.to_string(),
        None => {
            return Err(ComponentTreeError::FileWithoutPath {
                reference: raw.reference,
            }
            .into())
        }
    };
    let conflict = || ComponentTreeError::ConflictingFilePath { path: path.clone() };

    let mut segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    let file_name = segments.pop().unwrap_or_default();
    let mut current = root;
    for segment in segments {
        let Node::Directory(children) = current else {
            return Err(conflict().into());
        };
        let index = match children.iter().position(|(name, _)| name == segment) {
            Some(index) => index,
            None => {
                children.push((segment.to_string(), Node::Directory(Vec::new())));
                children.len() - 1
            }
        };
        current = &mut children[index].1;
    }
    match current {
        Node::Directory(children) if !children.iter().any(|(name, _)| name == file_name) => {
            children.push((file_name.to_string(), Node::File(raw)));
            Ok(())
        }
        _ => Err(conflict().into()),
    }
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", parent, PATH_SEPARATOR, name)
    }
}

fn directory_short_name(parent_path: &str, path: &str) -> String {
    let relative = path.strip_prefix(parent_path).unwrap_or(path);
    relative
        .strip_prefix(PATH_SEPARATOR)
        .unwrap_or(relative)
        .to_string()
}

fn file_name(path: &str) -> &str {
    path.rsplit(PATH_SEPARATOR).next().unwrap_or(path)
}

/// Path inside the SCM repository: the base path alone for the root of the
/// project, `<base>/<path>` below it
fn scm_path(scm_base_path: Option<&str>, path: &str) -> Option<String> {
    match (scm_base_path, path.is_empty()) {
        (base, true) => base.map(str::to_string),
        (None, false) => Some(path.to_string()),
        (Some(base), false) => Some(join(base, path)),
    }
}
