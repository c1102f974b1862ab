/// Use cases module containing application business logic orchestration
mod show_hierarchy;

pub use show_hierarchy::ShowHierarchyUseCase;
