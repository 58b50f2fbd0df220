use super::Order;
use crate::analysis::domain::{Component, ComponentType, CrawlerDepthLimit};
use crate::shared::{ComponentTreeError, Result};

/// A value attached to one component of the current path
#[derive(Debug)]
pub struct PathElement<'c, T> {
    component: &'c Component,
    element: T,
}

impl<'c, T> PathElement<'c, T> {
    pub(crate) fn new(component: &'c Component, element: T) -> Self {
        Self { component, element }
    }

    pub fn component(&self) -> &'c Component {
        self.component
    }

    pub fn element(&self) -> &T {
        &self.element
    }
}

/// View over the stack of values from the visited component up to the root.
///
/// Built by the crawler for each hook call; only the current element and its
/// ancestors are reachable.
pub struct Path<'s, 'c, T> {
    current: &'s mut PathElement<'c, T>,
    ancestors: &'s mut [PathElement<'c, T>],
}

impl<'s, 'c, T> Path<'s, 'c, T> {
    /// `None` when `stack` is empty
    pub(crate) fn from_stack(stack: &'s mut [PathElement<'c, T>]) -> Option<Self> {
        let (current, ancestors) = stack.split_last_mut()?;
        Some(Self { current, ancestors })
    }

    pub fn current(&self) -> &T {
        &self.current.element
    }

    pub fn current_mut(&mut self) -> &mut T {
        &mut self.current.element
    }

    pub fn current_component(&self) -> &'c Component {
        self.current.component
    }

    pub fn is_root(&self) -> bool {
        self.ancestors.is_empty()
    }

    /// # Errors
    /// Fails when the current element is the root.
    pub fn parent(&self) -> Result<&T> {
        self.ancestors
            .last()
            .map(|e| &e.element)
            .ok_or_else(|| ComponentTreeError::PathHasNoParent.into())
    }

    /// # Errors
    /// Fails when the current element is the root.
    pub fn parent_mut(&mut self) -> Result<&mut T> {
        self.ancestors
            .last_mut()
            .map(|e| &mut e.element)
            .ok_or_else(|| ComponentTreeError::PathHasNoParent.into())
    }

    pub fn root(&self) -> &T {
        match self.ancestors.first() {
            Some(root) => &root.element,
            None => &self.current.element,
        }
    }

    pub fn root_mut(&mut self) -> &mut T {
        match self.ancestors.first_mut() {
            Some(root) => &mut root.element,
            None => &mut self.current.element,
        }
    }

    /// Elements from the current one up to the root
    pub fn current_path(&self) -> impl Iterator<Item = &PathElement<'c, T>> + '_ {
        std::iter::once(&*self.current).chain(self.ancestors.iter().rev())
    }
}

/// Visitor receiving, with every hook, the values created for the visited
/// component and all of its ancestors.
///
/// [`create_for_any`](Self::create_for_any) builds the value of a component
/// when the crawler enters it. It is the fallback of the per-type factories.
pub trait PathAwareVisitor<'c> {
    type Element;

    fn max_depth(&self) -> CrawlerDepthLimit;

    fn order(&self) -> Order;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn create_for_any(&mut self, component: &'c Component) -> Self::Element;

    fn create_for_project(&mut self, project: &'c Component) -> Self::Element {
        self.create_for_any(project)
    }

    fn create_for_directory(&mut self, directory: &'c Component) -> Self::Element {
        self.create_for_any(directory)
    }

    fn create_for_file(&mut self, file: &'c Component) -> Self::Element {
        self.create_for_any(file)
    }

    fn create_for_view(&mut self, view: &'c Component) -> Self::Element {
        self.create_for_any(view)
    }

    fn create_for_sub_view(&mut self, sub_view: &'c Component) -> Self::Element {
        self.create_for_any(sub_view)
    }

    fn create_for_project_view(&mut self, project_view: &'c Component) -> Self::Element {
        self.create_for_any(project_view)
    }

    fn visit_project(
        &mut self,
        _project: &'c Component,
        _path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        Ok(())
    }

    fn visit_directory(
        &mut self,
        _directory: &'c Component,
        _path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        Ok(())
    }

    fn visit_file(
        &mut self,
        _file: &'c Component,
        _path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        Ok(())
    }

    fn visit_view(
        &mut self,
        _view: &'c Component,
        _path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        Ok(())
    }

    fn visit_sub_view(
        &mut self,
        _sub_view: &'c Component,
        _path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        Ok(())
    }

    fn visit_project_view(
        &mut self,
        _project_view: &'c Component,
        _path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        Ok(())
    }

    fn visit_any(
        &mut self,
        _component: &'c Component,
        _path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        Ok(())
    }
}

pub(crate) fn create_element<'c, V>(visitor: &mut V, component: &'c Component) -> V::Element
where
    V: PathAwareVisitor<'c> + ?Sized,
{
    match component.component_type() {
        ComponentType::Project => visitor.create_for_project(component),
        ComponentType::Directory => visitor.create_for_directory(component),
        ComponentType::File => visitor.create_for_file(component),
        ComponentType::View => visitor.create_for_view(component),
        ComponentType::SubView => visitor.create_for_sub_view(component),
        ComponentType::ProjectView => visitor.create_for_project_view(component),
    }
}

/// Calls `visit_any` then the type-specific hook with the path whose
/// current element is the top of `stack`
pub(crate) fn visit_node<'c, V>(
    visitor: &mut V,
    component: &'c Component,
    stack: &mut [PathElement<'c, V::Element>],
) -> Result<()>
where
    V: PathAwareVisitor<'c> + ?Sized,
{
    let Some(mut path) = Path::from_stack(stack) else {
        return Ok(());
    };
    visitor.visit_any(component, &mut path)?;
    match component.component_type() {
        ComponentType::Project => visitor.visit_project(component, &mut path),
        ComponentType::Directory => visitor.visit_directory(component, &mut path),
        ComponentType::File => visitor.visit_file(component, &mut path),
        ComponentType::View => visitor.visit_view(component, &mut path),
        ComponentType::SubView => visitor.visit_sub_view(component, &mut path),
        ComponentType::ProjectView => visitor.visit_project_view(component, &mut path),
    }
}

impl<'c, V> PathAwareVisitor<'c> for &mut V
where
    V: PathAwareVisitor<'c> + ?Sized,
{
    type Element = V::Element;

    fn max_depth(&self) -> CrawlerDepthLimit {
        (**self).max_depth()
    }

    fn order(&self) -> Order {
        (**self).order()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn create_for_any(&mut self, component: &'c Component) -> Self::Element {
        (**self).create_for_any(component)
    }

    fn create_for_project(&mut self, project: &'c Component) -> Self::Element {
        (**self).create_for_project(project)
    }

    fn create_for_directory(&mut self, directory: &'c Component) -> Self::Element {
        (**self).create_for_directory(directory)
    }

    fn create_for_file(&mut self, file: &'c Component) -> Self::Element {
        (**self).create_for_file(file)
    }

    fn create_for_view(&mut self, view: &'c Component) -> Self::Element {
        (**self).create_for_view(view)
    }

    fn create_for_sub_view(&mut self, sub_view: &'c Component) -> Self::Element {
        (**self).create_for_sub_view(sub_view)
    }

    fn create_for_project_view(&mut self, project_view: &'c Component) -> Self::Element {
        (**self).create_for_project_view(project_view)
    }

    fn visit_project(
        &mut self,
        project: &'c Component,
        path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        (**self).visit_project(project, path)
    }

    fn visit_directory(
        &mut self,
        directory: &'c Component,
        path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        (**self).visit_directory(directory, path)
    }

    fn visit_file(
        &mut self,
        file: &'c Component,
        path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        (**self).visit_file(file, path)
    }

    fn visit_view(
        &mut self,
        view: &'c Component,
        path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        (**self).visit_view(view, path)
    }

    fn visit_sub_view(
        &mut self,
        sub_view: &'c Component,
        path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        (**self).visit_sub_view(sub_view, path)
    }

    fn visit_project_view(
        &mut self,
        project_view: &'c Component,
        path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        (**self).visit_project_view(project_view, path)
    }

    fn visit_any(
        &mut self,
        component: &'c Component,
        path: &mut Path<'_, 'c, Self::Element>,
    ) -> Result<()> {
        (**self).visit_any(component, path)
    }
}
