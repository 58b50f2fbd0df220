/// Console adapters rendering a component tree for humans
mod tree_printer;

pub use tree_printer::{Indent, TreePrinter};
