use crate::hierarchy::domain::{
    DependencyGraph, HierarchyLine, HierarchyTree, NodeId, PackageName, Version,
};

/// HierarchyRenderer service walking a finished graph from its direct packages
///
/// Rendering is a pure function of the graph and the optional filter. With a
/// filter, every branch that does not lead to the filtered package is pruned
/// as a whole, so only the chains of ancestry of that package remain.
pub struct HierarchyRenderer<'a> {
    graph: &'a DependencyGraph,
    filter: Option<&'a PackageName>,
    path: Vec<NodeId>,
    cycles: Vec<Vec<String>>,
}

impl<'a> HierarchyRenderer<'a> {
    /// Renders the hierarchy of every direct package, sorted by name
    pub fn render(graph: &'a DependencyGraph, filter: Option<&'a PackageName>) -> HierarchyTree {
        let mut renderer = Self {
            graph,
            filter,
            path: Vec::new(),
            cycles: Vec::new(),
        };

        let mut lines = Vec::new();
        for root in graph.roots() {
            lines.extend(renderer.render_node(root, None, 0));
        }

        HierarchyTree::new(lines, renderer.cycles)
    }

    fn render_node(
        &mut self,
        id: NodeId,
        desired: Option<&Version>,
        depth: usize,
    ) -> Vec<HierarchyLine> {
        let graph = self.graph;
        let node = graph.node(id);
        let is_filter_match = self.filter.is_some_and(|f| f == node.name());

        let is_leaf = match self.filter {
            None => graph.dependency_count(id) == 0,
            Some(_) => is_filter_match,
        };
        if is_leaf {
            return vec![self.line(id, desired, depth, false)];
        }

        if let Some(start) = self.path.iter().position(|on_path| *on_path == id) {
            self.record_cycle(start, id);
            return match self.filter {
                None => vec![self.line(id, desired, depth, true)],
                Some(_) => Vec::new(),
            };
        }

        let mut children: Vec<(NodeId, &Version)> = graph.dependencies(id).collect();
        children.sort_by(|(a, _), (b, _)| graph.node(*a).name().cmp(graph.node(*b).name()));

        self.path.push(id);
        let mut branch = Vec::new();
        for (child, child_desired) in children {
            let sub_branch = self.render_node(child, Some(child_desired), depth + 1);
            if !sub_branch.is_empty() {
                if branch.is_empty() {
                    branch.push(self.line(id, desired, depth, false));
                }
                branch.extend(sub_branch);
            }
        }
        self.path.pop();

        branch
    }

    fn line(
        &self,
        id: NodeId,
        desired: Option<&Version>,
        depth: usize,
        cycle: bool,
    ) -> HierarchyLine {
        let node = self.graph.node(id);
        let resolved = node.resolved_version();
        let version = desired.unwrap_or(resolved);

        HierarchyLine {
            depth,
            name: node.name().to_string(),
            version: version.to_string(),
            conflict: (version != resolved).then(|| resolved.to_string()),
            is_root: depth == 0,
            is_filter_match: self.filter.is_some_and(|f| f == node.name()),
            cycle,
        }
    }

    fn record_cycle(&mut self, start: usize, id: NodeId) {
        let chain: Vec<String> = self.path[start..]
            .iter()
            .chain(std::iter::once(&id))
            .map(|n| self.graph.node(*n).name().to_string())
            .collect();
        if !self.cycles.contains(&chain) {
            self.cycles.push(chain);
        }
    }
}
