use crate::analysis::crawlers::{ComponentCrawler, PathAwareCrawler};
use crate::analysis::domain::{Component, ComponentAttributes, CrawlerDepthLimit, Status};
use crate::analysis::visitors::{Order, Path, PathAwareVisitor};
use crate::shared::Result;
use crate::ports::outbound::TreeFormatter;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct JsonComponent<'a> {
    uuid: &'a str,
    key: &'a str,
    db_key: &'a str,
    name: &'a str,
    short_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    status: Status,
    #[serde(flatten)]
    attributes: &'a ComponentAttributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Value>,
}

/// Builds JSON values bottom-up: each component collects the values of its
/// visited children, then hands its own value to its parent.
struct JsonTreeBuilder {
    max_depth: CrawlerDepthLimit,
    root: Option<Value>,
}

impl<'c> PathAwareVisitor<'c> for JsonTreeBuilder {
    type Element = Vec<Value>;

    fn max_depth(&self) -> CrawlerDepthLimit {
        self.max_depth
    }

    fn order(&self) -> Order {
        Order::PostOrder
    }

    fn create_for_any(&mut self, _component: &'c Component) -> Vec<Value> {
        Vec::new()
    }

    fn visit_any(&mut self, component: &'c Component, path: &mut Path<'_, 'c, Vec<Value>>) -> Result<()> {
        let value = serde_json::to_value(JsonComponent {
            uuid: component.uuid(),
            key: component.key(),
            db_key: component.db_key(),
            name: component.name(),
            short_name: component.short_name(),
            description: component.description(),
            status: component.status(),
            attributes: component.attributes(),
            children: std::mem::take(path.current_mut()),
        })?;
        if path.is_root() {
            self.root = Some(value);
        } else {
            path.parent_mut()?.push(value);
        }
        Ok(())
    }
}

/// JsonTreeFormatter adapter rendering the tree as pretty-printed JSON
#[derive(Debug, Default)]
pub struct JsonTreeFormatter;

impl JsonTreeFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl TreeFormatter for JsonTreeFormatter {
    fn format(&self, root: &Component, max_depth: CrawlerDepthLimit) -> Result<String> {
        let mut crawler = PathAwareCrawler::new(JsonTreeBuilder {
            max_depth,
            root: None,
        });
        crawler.visit(root)?;
        let value = crawler.into_inner().root.unwrap_or(Value::Null);
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::fixtures::sample_tree;

    fn format(max_depth: CrawlerDepthLimit) -> Value {
        let output = JsonTreeFormatter::new().format(&sample_tree(), max_depth).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_json_contains_whole_tree() {
        let json = format(CrawlerDepthLimit::LEAVES);

        assert_eq!(json["type"], "PROJECT");
        assert_eq!(json["key"], "K1");
        assert_eq!(json["children"][0]["short_name"], "src");
        assert_eq!(json["children"][0]["children"][1]["key"], "K1:src/b.js");
        assert_eq!(json["children"][1]["children"][0]["type"], "FILE");
    }

    #[test]
    fn test_json_is_pruned_at_max_depth() {
        let json = format(CrawlerDepthLimit::DIRECTORY);

        assert_eq!(json["children"].as_array().unwrap().len(), 2);
        assert!(json["children"][0].get("children").is_none());
    }

    #[test]
    fn test_views_depth_renders_nothing() {
        let json = format(CrawlerDepthLimit::VIEW);

        assert!(json.is_null());
    }
}
