/// Use cases module containing application business logic orchestration
mod build_component_tree;

pub use build_component_tree::BuildComponentTreeUseCase;
