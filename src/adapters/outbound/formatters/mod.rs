/// Formatter adapters for the supported output formats
mod json_tree_formatter;
mod text_tree_formatter;

pub use json_tree_formatter::JsonTreeFormatter;
pub use text_tree_formatter::TextTreeFormatter;
