//! Analysis core: the component tree, the visitors walking it and the
//! services building it.

pub mod crawlers;
pub mod domain;
pub mod holders;
pub mod services;
pub mod visitors;
