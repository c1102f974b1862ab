use crate::hierarchy::domain::{DependencyGraph, HierarchyTree};
use std::path::PathBuf;

/// HierarchyResponse - result of rendering one project's dependencies
///
/// The graph is kept alongside the rendered tree so callers can answer
/// questions the tree does not show, such as whether a package occurs at all.
#[derive(Debug, Clone)]
pub struct HierarchyResponse {
    pub project_path: PathBuf,
    pub graph: DependencyGraph,
    pub tree: HierarchyTree,
}

impl HierarchyResponse {
    pub fn new(project_path: PathBuf, graph: DependencyGraph, tree: HierarchyTree) -> Self {
        Self {
            project_path,
            graph,
            tree,
        }
    }

    /// Whether the project depends on the package, directly or transitively
    pub fn depends_on(&self, package_name: &str) -> bool {
        self.graph.find(package_name).is_some()
    }
}
