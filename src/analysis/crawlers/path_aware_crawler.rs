use super::{wrap_visit_failure, ComponentCrawler};
use crate::analysis::domain::Component;
use crate::analysis::visitors::path_aware::{create_element, visit_node};
use crate::analysis::visitors::{Order, PathAwareVisitor, PathElement};
use crate::shared::Result;

/// Runs one [`PathAwareVisitor`] over a tree, depth first.
///
/// The element of a component is pushed before the component is visited
/// and popped once all of its children have been, even when a visit fails.
/// Each call to `visit` starts from an empty stack.
pub struct PathAwareCrawler<V> {
    visitor: V,
}

impl<V> PathAwareCrawler<V> {
    pub fn new(visitor: V) -> Self {
        Self { visitor }
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn into_inner(self) -> V {
        self.visitor
    }

    fn visit_in<'c>(
        &mut self,
        component: &'c Component,
        stack: &mut Vec<PathElement<'c, <V as PathAwareVisitor<'c>>::Element>>,
    ) -> Result<()>
    where
        V: PathAwareVisitor<'c>,
    {
        self.visit_impl(component, stack)
            .map_err(|e| wrap_visit_failure(e, component))
    }

    fn visit_impl<'c>(
        &mut self,
        component: &'c Component,
        stack: &mut Vec<PathElement<'c, <V as PathAwareVisitor<'c>>::Element>>,
    ) -> Result<()>
    where
        V: PathAwareVisitor<'c>,
    {
        if !self.visitor.max_depth().accepts(component.component_type()) {
            return Ok(());
        }
        let element = create_element(&mut self.visitor, component);
        stack.push(PathElement::new(component, element));
        let result = self.visit_pushed(component, stack);
        stack.pop();
        result
    }

    fn visit_pushed<'c>(
        &mut self,
        component: &'c Component,
        stack: &mut Vec<PathElement<'c, <V as PathAwareVisitor<'c>>::Element>>,
    ) -> Result<()>
    where
        V: PathAwareVisitor<'c>,
    {
        let order = self.visitor.order();
        tracing::trace!(key = component.db_key(), %order, depth = stack.len(), "visiting component");

        if order == Order::PreOrder {
            visit_node(&mut self.visitor, component, stack)?;
        }
        let max_depth = self.visitor.max_depth();
        for child in component.children() {
            if max_depth.accepts(child.component_type()) {
                self.visit_in(child, stack)?;
            }
        }
        if order == Order::PostOrder {
            visit_node(&mut self.visitor, component, stack)?;
        }
        Ok(())
    }
}

impl<'c, V: PathAwareVisitor<'c>> ComponentCrawler<'c> for PathAwareCrawler<V> {
    fn visit(&mut self, component: &'c Component) -> Result<()> {
        let mut stack = Vec::new();
        self.visit_in(component, &mut stack)
    }
}
