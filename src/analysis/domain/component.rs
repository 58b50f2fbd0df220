use super::attributes::{
    ComponentAttributes, FileAttributes, ProjectAttributes, ProjectViewAttributes,
    ReportAttributes, SubViewAttributes, ViewAttributes,
};
use super::{ComponentType, Status};
use crate::shared::{ComponentTreeError, Result};
use serde::Serialize;
use std::fmt;

pub const MAX_NAME_LENGTH: usize = 500;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

const ABBREVIATION_SUFFIX: &str = "...";

/// A node of the canonical component tree.
///
/// Components are immutable once built. Children are owned by their parent
/// and keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    uuid: String,
    db_key: String,
    key: String,
    name: String,
    short_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: Status,
    #[serde(flatten)]
    attributes: ComponentAttributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Component>,
}

impl Component {
    pub fn builder(attributes: ComponentAttributes) -> ComponentBuilder {
        ComponentBuilder::new(attributes)
    }

    pub fn component_type(&self) -> ComponentType {
        self.attributes.component_type()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Key used to address the component in storage
    pub fn db_key(&self) -> &str {
        &self.db_key
    }

    /// User-facing key
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn children(&self) -> &[Component] {
        &self.children
    }

    pub fn attributes(&self) -> &ComponentAttributes {
        &self.attributes
    }

    pub fn report_attributes(&self) -> Result<&ReportAttributes> {
        self.attributes.report()
    }

    pub fn project_attributes(&self) -> Result<&ProjectAttributes> {
        self.attributes.project()
    }

    pub fn file_attributes(&self) -> Result<&FileAttributes> {
        self.attributes.file()
    }

    pub fn view_attributes(&self) -> Result<&ViewAttributes> {
        self.attributes.view()
    }

    pub fn sub_view_attributes(&self) -> Result<&SubViewAttributes> {
        self.attributes.sub_view()
    }

    pub fn project_view_attributes(&self) -> Result<&ProjectViewAttributes> {
        self.attributes.project_view()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Component{{type={}, key={}, uuid={}}}",
            self.component_type(),
            self.db_key,
            self.uuid
        )
    }
}

/// Builder for [`Component`].
///
/// Identifiers and the name are mandatory; `short_name` defaults to `name`.
#[derive(Debug)]
pub struct ComponentBuilder {
    attributes: ComponentAttributes,
    status: Status,
    uuid: Option<String>,
    db_key: Option<String>,
    key: Option<String>,
    name: Option<String>,
    short_name: Option<String>,
    description: Option<String>,
    children: Vec<Component>,
}

impl ComponentBuilder {
    fn new(attributes: ComponentAttributes) -> Self {
        Self {
            attributes,
            status: Status::Unavailable,
            uuid: None,
            db_key: None,
            key: None,
            name: None,
            short_name: None,
            description: None,
            children: Vec::new(),
        }
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn db_key(mut self, db_key: impl Into<String>) -> Self {
        self.db_key = Some(db_key.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn add_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_children(mut self, children: impl IntoIterator<Item = Component>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> Result<Component> {
        let component_type = self.attributes.component_type();
        for child in &self.children {
            if !can_contain(component_type, child.component_type()) {
                return Err(ComponentTreeError::InvalidChildType {
                    parent: component_type,
                    child: child.component_type(),
                }
                .into());
            }
        }

        let name = abbreviate(&required(self.name, "name")?, MAX_NAME_LENGTH);
        let short_name = match self.short_name {
            Some(short_name) => abbreviate(&short_name, MAX_NAME_LENGTH),
            None => name.clone(),
        };

        Ok(Component {
            uuid: required(self.uuid, "uuid")?,
            db_key: required(self.db_key, "dbKey")?,
            key: required(self.key, "key")?,
            name,
            short_name,
            description: trim_to_none(self.description.as_deref())
                .map(|d| abbreviate(d, MAX_DESCRIPTION_LENGTH)),
            status: self.status,
            attributes: self.attributes,
            children: self.children,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ComponentTreeError::MissingField { field }.into()),
    }
}

/// Children stay in the parent's family, never sit at a root level,
/// and leaves have none.
fn can_contain(parent: ComponentType, child: ComponentType) -> bool {
    use ComponentType::*;
    match parent {
        Project | Directory => matches!(child, Directory | File),
        View | SubView => matches!(child, SubView | ProjectView),
        File | ProjectView => false,
    }
}

/// Returns `None` for absent or empty strings
pub fn trim_to_none(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Caps `value` at `max_length` characters, replacing the tail with "..."
/// so that the result is exactly `max_length` characters long.
pub fn abbreviate(value: &str, max_length: usize) -> String {
    if value.chars().count() <= max_length {
        return value.to_string();
    }
    // no room for the suffix
    if max_length <= ABBREVIATION_SUFFIX.len() {
        return value.chars().take(max_length).collect();
    }
    let kept: String = value
        .chars()
        .take(max_length.saturating_sub(ABBREVIATION_SUFFIX.len()))
        .collect();
    kept + ABBREVIATION_SUFFIX
}
