use crate::adapters::outbound::console::TreePrinter;
use crate::analysis::crawlers::{ComponentCrawler, PathAwareCrawler};
use crate::analysis::domain::{Component, CrawlerDepthLimit};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;

/// TextTreeFormatter adapter rendering the tree as indented text
///
/// Colours are only emitted when requested, so the output can be written
/// to a file or piped unchanged.
pub struct TextTreeFormatter {
    colored: bool,
}

impl TextTreeFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }
}

impl TreeFormatter for TextTreeFormatter {
    fn format(&self, root: &Component, max_depth: CrawlerDepthLimit) -> Result<String> {
        let mut crawler = PathAwareCrawler::new(TreePrinter::new(max_depth, self.colored));
        crawler.visit(root)?;
        Ok(crawler.into_inner().into_output())
    }
}
