use super::{wrap_visit_failure, ComponentCrawler};
use crate::analysis::domain::Component;
use crate::analysis::visitors::{ComponentVisitor, Order};
use crate::shared::Result;
use std::time::{Duration, Instant};

/// Time spent inside the hooks of one visitor over a whole crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorDuration {
    pub name: String,
    pub duration: Duration,
}

/// Runs several visitors in a single traversal of the tree.
///
/// For each component, pre-order visitors are called in list order, then
/// the children are crawled, then post-order visitors are called in list
/// order. Only the visitors whose max depth accepts the component take part;
/// a component no visitor accepts is skipped together with its subtree.
pub struct VisitorsCrawler<'c, 'v> {
    visitors: Vec<ComponentVisitor<'c, 'v>>,
    durations: Option<Vec<Duration>>,
}

impl<'c, 'v> VisitorsCrawler<'c, 'v> {
    pub fn new(visitors: Vec<ComponentVisitor<'c, 'v>>) -> Self {
        Self::with_durations(visitors, false)
    }

    /// When `compute_durations` is set, time spent in each visitor is
    /// accumulated and available from [`cumulative_durations`](Self::cumulative_durations).
    pub fn with_durations(visitors: Vec<ComponentVisitor<'c, 'v>>, compute_durations: bool) -> Self {
        let durations = compute_durations.then(|| vec![Duration::ZERO; visitors.len()]);
        Self {
            visitors,
            durations,
        }
    }

    pub fn visitors(&self) -> &[ComponentVisitor<'c, 'v>] {
        &self.visitors
    }

    /// Per-visitor durations in list order, `None` unless durations are computed
    pub fn cumulative_durations(&self) -> Option<Vec<VisitorDuration>> {
        let durations = self.durations.as_ref()?;
        Some(
            self.visitors
                .iter()
                .zip(durations)
                .map(|(visitor, duration)| VisitorDuration {
                    name: visitor.name().to_string(),
                    duration: *duration,
                })
                .collect(),
        )
    }

    fn matching(&self, component: &Component, order: Order) -> Vec<usize> {
        let component_type = component.component_type();
        self.visitors
            .iter()
            .enumerate()
            .filter(|(_, v)| v.order() == order && v.max_depth().accepts(component_type))
            .map(|(i, _)| i)
            .collect()
    }

    fn visit_in(&mut self, component: &'c Component) -> Result<()> {
        self.visit_impl(component)
            .map_err(|e| wrap_visit_failure(e, component))
    }

    fn visit_impl(&mut self, component: &'c Component) -> Result<()> {
        let pre_order = self.matching(component, Order::PreOrder);
        let post_order = self.matching(component, Order::PostOrder);
        if pre_order.is_empty() && post_order.is_empty() {
            return Ok(());
        }
        tracing::trace!(
            key = component.db_key(),
            pre_order = pre_order.len(),
            post_order = post_order.len(),
            "visiting component"
        );

        for &index in pre_order.iter().chain(&post_order) {
            self.visitors[index].enter(component);
        }
        let result = self.visit_entered(component, &pre_order, &post_order);
        for &index in pre_order.iter().chain(&post_order) {
            self.visitors[index].leave();
        }
        result
    }

    fn visit_entered(
        &mut self,
        component: &'c Component,
        pre_order: &[usize],
        post_order: &[usize],
    ) -> Result<()> {
        for &index in pre_order {
            self.visit_node(index, component)?;
        }
        for child in component.children() {
            self.visit_in(child)?;
        }
        for &index in post_order {
            self.visit_node(index, component)?;
        }
        Ok(())
    }

    fn visit_node(&mut self, index: usize, component: &'c Component) -> Result<()> {
        let start = self.durations.is_some().then(Instant::now);
        let result = self.visitors[index].visit(component);
        if let (Some(start), Some(durations)) = (start, self.durations.as_mut()) {
            durations[index] += start.elapsed();
        }
        result
    }
}

impl<'c, 'v> ComponentCrawler<'c> for VisitorsCrawler<'c, 'v> {
    fn visit(&mut self, component: &'c Component) -> Result<()> {
        self.visit_in(component)?;
        if let Some(durations) = self.cumulative_durations() {
            for visitor in durations {
                tracing::debug!(
                    visitor = %visitor.name,
                    duration_ms = visitor.duration.as_millis() as u64,
                    "cumulative visitor duration"
                );
            }
        }
        Ok(())
    }
}
