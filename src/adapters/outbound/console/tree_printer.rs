use crate::analysis::domain::{Component, ComponentType, CrawlerDepthLimit};
use crate::analysis::visitors::{Order, Path, PathAwareVisitor};
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Prefix drawn in front of the children of a component
#[derive(Debug, Default)]
pub struct Indent {
    child_prefix: String,
}

/// Renders a component tree as an indented text tree, one component per line
pub struct TreePrinter {
    max_depth: CrawlerDepthLimit,
    colored: bool,
    output: String,
}

impl TreePrinter {
    pub fn new(max_depth: CrawlerDepthLimit, colored: bool) -> Self {
        Self {
            max_depth,
            colored,
            output: String::new(),
        }
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn label(&self, component: &Component) -> String {
        match component.component_type() {
            ComponentType::Project | ComponentType::View => {
                let key = format!("({})", component.key());
                if self.colored {
                    format!("{} {}", component.name().bold(), key.dimmed())
                } else {
                    format!("{} {}", component.name(), key)
                }
            }
            ComponentType::Directory | ComponentType::SubView => {
                let name = format!("{}/", component.short_name());
                if self.colored {
                    name.blue().bold().to_string()
                } else {
                    name
                }
            }
            ComponentType::File => {
                let lines = component
                    .file_attributes()
                    .map(|f| format!("({} lines)", f.lines()))
                    .unwrap_or_default();
                if self.colored {
                    format!("{} {}", component.short_name(), lines.dimmed())
                } else {
                    format!("{} {}", component.short_name(), lines)
                }
            }
            ComponentType::ProjectView => component.short_name().to_string(),
        }
    }
}

impl<'c> PathAwareVisitor<'c> for TreePrinter {
    type Element = Indent;

    fn max_depth(&self) -> CrawlerDepthLimit {
        self.max_depth
    }

    fn order(&self) -> Order {
        Order::PreOrder
    }

    fn name(&self) -> &str {
        "TreePrinter"
    }

    fn create_for_any(&mut self, _component: &'c Component) -> Indent {
        Indent::default()
    }

    fn visit_any(&mut self, component: &'c Component, path: &mut Path<'_, 'c, Indent>) -> Result<()> {
        let label = self.label(component);
        if path.is_root() {
            writeln!(self.output, "{}", label)?;
            return Ok(());
        }

        let max_depth = self.max_depth;
        let is_last = path
            .current_path()
            .nth(1)
            .and_then(|parent| {
                parent
                    .component()
                    .children()
                    .iter()
                    .rev()
                    .find(|c| max_depth.accepts(c.component_type()))
            })
            .is_some_and(|last| std::ptr::eq(last, component));
        let parent_prefix = path.parent()?.child_prefix.clone();
        let (branch, continuation) = if is_last {
            (LAST_BRANCH, SPACE)
        } else {
            (BRANCH, PIPE)
        };
        writeln!(self.output, "{}{}{}", parent_prefix, branch, label)?;
        path.current_mut().child_prefix = parent_prefix + continuation;
        Ok(())
    }
}
