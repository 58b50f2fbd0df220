use super::{wrap_visit_failure, ComponentCrawler};
use crate::analysis::domain::Component;
use crate::analysis::visitors::type_aware::visit_node;
use crate::analysis::visitors::{Order, TypeAwareVisitor};
use crate::shared::Result;

/// Runs one [`TypeAwareVisitor`] over a tree, depth first.
///
/// Components deeper than the visitor's max depth are neither visited nor
/// descended into.
pub struct DepthTraversalTypeAwareCrawler<V> {
    visitor: V,
}

impl<V> DepthTraversalTypeAwareCrawler<V> {
    pub fn new(visitor: V) -> Self {
        Self { visitor }
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn into_inner(self) -> V {
        self.visitor
    }

    fn visit_impl<'c>(&mut self, component: &'c Component) -> Result<()>
    where
        V: TypeAwareVisitor<'c>,
    {
        let max_depth = self.visitor.max_depth();
        if !max_depth.accepts(component.component_type()) {
            return Ok(());
        }
        let order = self.visitor.order();
        tracing::trace!(key = component.db_key(), %order, "visiting component");

        if order == Order::PreOrder {
            visit_node(&mut self.visitor, component)?;
        }
        for child in component.children() {
            if max_depth.accepts(child.component_type()) {
                self.visit(child)?;
            }
        }
        if order == Order::PostOrder {
            visit_node(&mut self.visitor, component)?;
        }
        Ok(())
    }
}

impl<'c, V: TypeAwareVisitor<'c>> ComponentCrawler<'c> for DepthTraversalTypeAwareCrawler<V> {
    fn visit(&mut self, component: &'c Component) -> Result<()> {
        self.visit_impl(component)
            .map_err(|e| wrap_visit_failure(e, component))
    }
}
