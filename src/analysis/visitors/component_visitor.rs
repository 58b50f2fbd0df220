use super::path_aware::{self, PathElement};
use super::type_aware;
use super::{Order, PathAwareVisitor, TypeAwareVisitor};
use crate::analysis::domain::{Component, CrawlerDepthLimit};
use crate::shared::Result;

/// Any visitor a [`VisitorsCrawler`](crate::analysis::crawlers::VisitorsCrawler)
/// can drive.
///
/// A visitor is type-aware or path-aware, never both. The enum is closed,
/// so a visitor with neither capability cannot be handed to a crawler.
pub enum ComponentVisitor<'c, 'v> {
    TypeAware(Box<dyn TypeAwareVisitor<'c> + 'v>),
    PathAware(PathAwareHandle<'c, 'v>),
}

impl<'c, 'v> ComponentVisitor<'c, 'v> {
    pub fn type_aware<V>(visitor: V) -> Self
    where
        V: TypeAwareVisitor<'c> + 'v,
    {
        ComponentVisitor::TypeAware(Box::new(visitor))
    }

    pub fn path_aware<V>(visitor: V) -> Self
    where
        V: PathAwareVisitor<'c> + 'v,
        V::Element: 'v,
        'c: 'v,
    {
        ComponentVisitor::PathAware(PathAwareHandle(Box::new(StackedVisitor {
            visitor,
            stack: Vec::new(),
        })))
    }

    pub fn max_depth(&self) -> CrawlerDepthLimit {
        match self {
            ComponentVisitor::TypeAware(visitor) => visitor.max_depth(),
            ComponentVisitor::PathAware(handle) => handle.0.max_depth(),
        }
    }

    pub fn order(&self) -> Order {
        match self {
            ComponentVisitor::TypeAware(visitor) => visitor.order(),
            ComponentVisitor::PathAware(handle) => handle.0.order(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ComponentVisitor::TypeAware(visitor) => visitor.name(),
            ComponentVisitor::PathAware(handle) => handle.0.name(),
        }
    }

    /// Pushes the path element of `component`; no-op for type-aware visitors
    pub(crate) fn enter(&mut self, component: &'c Component) {
        if let ComponentVisitor::PathAware(handle) = self {
            handle.0.enter(component);
        }
    }

    pub(crate) fn visit(&mut self, component: &'c Component) -> Result<()> {
        match self {
            ComponentVisitor::TypeAware(visitor) => type_aware::visit_node(visitor.as_mut(), component),
            ComponentVisitor::PathAware(handle) => handle.0.visit(component),
        }
    }

    /// Pops what [`enter`](Self::enter) pushed
    pub(crate) fn leave(&mut self) {
        if let ComponentVisitor::PathAware(handle) = self {
            handle.0.leave();
        }
    }
}

/// A path-aware visitor bundled with the stack of its current crawl
pub struct PathAwareHandle<'c, 'v>(Box<dyn StackedPathAware<'c> + 'v>);

/// Path-aware visitor with its element type erased
trait StackedPathAware<'c> {
    fn max_depth(&self) -> CrawlerDepthLimit;
    fn order(&self) -> Order;
    fn name(&self) -> &str;
    fn enter(&mut self, component: &'c Component);
    fn visit(&mut self, component: &'c Component) -> Result<()>;
    fn leave(&mut self);
}

struct StackedVisitor<'c, V: PathAwareVisitor<'c>> {
    visitor: V,
    stack: Vec<PathElement<'c, V::Element>>,
}

impl<'c, V: PathAwareVisitor<'c>> StackedPathAware<'c> for StackedVisitor<'c, V> {
    fn max_depth(&self) -> CrawlerDepthLimit {
        self.visitor.max_depth()
    }

    fn order(&self) -> Order {
        self.visitor.order()
    }

    fn name(&self) -> &str {
        self.visitor.name()
    }

    fn enter(&mut self, component: &'c Component) {
        let element = path_aware::create_element(&mut self.visitor, component);
        self.stack.push(PathElement::new(component, element));
    }

    fn visit(&mut self, component: &'c Component) -> Result<()> {
        path_aware::visit_node(&mut self.visitor, component, &mut self.stack)
    }

    fn leave(&mut self) {
        self.stack.pop();
    }
}
