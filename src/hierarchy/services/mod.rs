mod assets_parser;
mod graph_builder;
mod hierarchy_renderer;

pub use assets_parser::{
    AssetsParser, DeclaredFramework, FrameworkTarget, ParsedAssets, ResolvedPackage,
};
pub use graph_builder::DependencyGraphBuilder;
pub use hierarchy_renderer::HierarchyRenderer;
