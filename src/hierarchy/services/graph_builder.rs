use super::assets_parser::ParsedAssets;
use crate::hierarchy::domain::DependencyGraph;

/// DependencyGraphBuilder service turning parsed restore output into a graph
///
/// This service contains pure business logic with no I/O. One identity map is
/// shared by every target framework, so a package restored for several
/// frameworks becomes a single node.
pub struct DependencyGraphBuilder;

impl DependencyGraphBuilder {
    /// Builds the deduplicated dependency graph
    ///
    /// A package is direct when the project declares it (in any framework).
    /// The same rule selects the roots when rendering.
    pub fn build(assets: &ParsedAssets) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        for target in &assets.targets {
            // Resolved entries first, so that edges wired below find the
            // package's real version instead of creating a provisional one
            let ids: Vec<_> = target
                .packages
                .iter()
                .map(|package| {
                    let id = graph.resolve_node(package.name.clone(), package.version.clone());
                    if assets.is_declared(&package.name) {
                        graph.mark_direct(id);
                    }
                    id
                })
                .collect();

            for (package, &id) in target.packages.iter().zip(&ids) {
                for (dep_name, desired) in &package.dependencies {
                    let dep = graph.reference_node(dep_name.clone(), desired.clone());
                    graph.add_dependency(id, dep, desired.clone());
                }
            }
        }

        graph
    }
}
