/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the analysis core isolated.
mod build_tree_request;
mod build_tree_response;
mod output_format;

pub use build_tree_request::BuildTreeRequest;
pub use build_tree_response::BuildTreeResponse;
pub use output_format::OutputFormat;
