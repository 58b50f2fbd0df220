use super::Order;
use crate::analysis::domain::{Component, ComponentType, CrawlerDepthLimit};
use crate::shared::Result;

/// Visitor with one hook per component type.
///
/// Every hook defaults to a no-op, so an implementation only overrides what
/// it is interested in. For each component within [`max_depth`](Self::max_depth),
/// the crawler calls [`visit_any`](Self::visit_any) first and then the hook
/// matching the component type.
///
/// The `'c` lifetime is the lifetime of the crawled tree, which lets a
/// visitor keep references to components it has seen.
pub trait TypeAwareVisitor<'c> {
    /// Deepest component type this visitor wants to see
    fn max_depth(&self) -> CrawlerDepthLimit;

    fn order(&self) -> Order;

    /// Name used when reporting per-visitor durations
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn visit_project(&mut self, _project: &'c Component) -> Result<()> {
        Ok(())
    }

    fn visit_directory(&mut self, _directory: &'c Component) -> Result<()> {
        Ok(())
    }

    fn visit_file(&mut self, _file: &'c Component) -> Result<()> {
        Ok(())
    }

    fn visit_view(&mut self, _view: &'c Component) -> Result<()> {
        Ok(())
    }

    fn visit_sub_view(&mut self, _sub_view: &'c Component) -> Result<()> {
        Ok(())
    }

    fn visit_project_view(&mut self, _project_view: &'c Component) -> Result<()> {
        Ok(())
    }

    fn visit_any(&mut self, _component: &'c Component) -> Result<()> {
        Ok(())
    }
}

/// Calls `visit_any` then the type-specific hook of `visitor`
pub(crate) fn visit_node<'c, V>(visitor: &mut V, component: &'c Component) -> Result<()>
where
    V: TypeAwareVisitor<'c> + ?Sized,
{
    visitor.visit_any(component)?;
    match component.component_type() {
        ComponentType::Project => visitor.visit_project(component),
        ComponentType::Directory => visitor.visit_directory(component),
        ComponentType::File => visitor.visit_file(component),
        ComponentType::View => visitor.visit_view(component),
        ComponentType::SubView => visitor.visit_sub_view(component),
        ComponentType::ProjectView => visitor.visit_project_view(component),
    }
}

impl<'c, V> TypeAwareVisitor<'c> for &mut V
where
    V: TypeAwareVisitor<'c> + ?Sized,
{
    fn max_depth(&self) -> CrawlerDepthLimit {
        (**self).max_depth()
    }

    fn order(&self) -> Order {
        (**self).order()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn visit_project(&mut self, project: &'c Component) -> Result<()> {
        (**self).visit_project(project)
    }

    fn visit_directory(&mut self, directory: &'c Component) -> Result<()> {
        (**self).visit_directory(directory)
    }

    fn visit_file(&mut self, file: &'c Component) -> Result<()> {
        (**self).visit_file(file)
    }

    fn visit_view(&mut self, view: &'c Component) -> Result<()> {
        (**self).visit_view(view)
    }

    fn visit_sub_view(&mut self, sub_view: &'c Component) -> Result<()> {
        (**self).visit_sub_view(sub_view)
    }

    fn visit_project_view(&mut self, project_view: &'c Component) -> Result<()> {
        (**self).visit_project_view(project_view)
    }

    fn visit_any(&mut self, component: &'c Component) -> Result<()> {
        (**self).visit_any(component)
    }
}
