use super::{PackageName, Version};
use std::collections::{BTreeMap, HashMap};

/// Opaque handle of a node inside one [`DependencyGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A package vertex of the dependency graph
///
/// Nodes never reference each other; edges live in the owning graph's
/// adjacency tables.
#[derive(Debug, Clone)]
pub struct DependencyNode {
    name: PackageName,
    resolved_version: Version,
    provisional: bool,
    is_direct: bool,
}

impl DependencyNode {
    pub fn name(&self) -> &PackageName {
        &self.name
    }

    /// The version the restore actually selected for this package
    pub fn resolved_version(&self) -> &Version {
        &self.resolved_version
    }

    /// True while the version only comes from some parent's request, because
    /// the package's own resolved entry has not been seen
    pub fn is_provisional(&self) -> bool {
        self.provisional
    }

    /// Whether the project itself declares this package
    pub fn is_direct(&self) -> bool {
        self.is_direct
    }
}

/// DependencyGraph aggregate owning every node and both edge directions
///
/// Edge `a -> b` with desired version `v` is stored in `a`'s dependencies and
/// mirrored in `b`'s dependents; the two tables are only written together.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<DependencyNode>,
    index: HashMap<PackageName, NodeId>,
    dependencies: Vec<BTreeMap<NodeId, Version>>,
    dependents: Vec<BTreeMap<NodeId, Version>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets or creates the node for a package's own resolved entry.
    ///
    /// A version that was only provisional is corrected; an already resolved
    /// version is kept (first observation wins).
    pub(crate) fn resolve_node(&mut self, name: PackageName, version: Version) -> NodeId {
        if let Some(&id) = self.index.get(&name) {
            let node = &mut self.nodes[id.0];
            if node.provisional {
                node.resolved_version = version;
                node.provisional = false;
            }
            return id;
        }
        self.insert(name, version, false)
    }

    /// Gets or creates the node for a package seen only as someone's dependency.
    ///
    /// A newly created node takes the desired version provisionally.
    pub(crate) fn reference_node(&mut self, name: PackageName, desired: Version) -> NodeId {
        if let Some(&id) = self.index.get(&name) {
            return id;
        }
        self.insert(name, desired, true)
    }

    fn insert(&mut self, name: PackageName, version: Version, provisional: bool) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.index.insert(name.clone(), id);
        self.nodes.push(DependencyNode {
            name,
            resolved_version: version,
            provisional,
            is_direct: false,
        });
        self.dependencies.push(BTreeMap::new());
        self.dependents.push(BTreeMap::new());
        id
    }

    pub(crate) fn mark_direct(&mut self, id: NodeId) {
        self.nodes[id.0].is_direct = true;
    }

    /// Records `from -> to` with the desired version, plus the reverse entry.
    ///
    /// Returns false and keeps the existing desired version if the edge was
    /// already recorded.
    pub(crate) fn add_dependency(&mut self, from: NodeId, to: NodeId, desired: Version) -> bool {
        if self.dependencies[from.0].contains_key(&to) {
            return false;
        }
        self.dependencies[from.0].insert(to, desired.clone());
        self.dependents[to.0].insert(from, desired);
        true
    }

    pub fn node(&self, id: NodeId) -> &DependencyNode {
        &self.nodes[id.0]
    }

    /// Case-insensitive lookup by package name
    pub fn find(&self, name: &str) -> Option<NodeId> {
        let name = PackageName::new(name.to_string()).ok()?;
        self.index.get(&name).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &DependencyNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }

    /// Outgoing edges: packages `id` depends on, with the version it asked for
    pub fn dependencies(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Version)> {
        self.dependencies[id.0].iter().map(|(to, v)| (*to, v))
    }

    /// Incoming edges: packages depending on `id`, with the version they asked for
    pub fn dependents(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Version)> {
        self.dependents[id.0].iter().map(|(from, v)| (*from, v))
    }

    pub fn desired_version(&self, from: NodeId, to: NodeId) -> Option<&Version> {
        self.dependencies[from.0].get(&to)
    }

    pub fn dependency_count(&self, id: NodeId) -> usize {
        self.dependencies[id.0].len()
    }

    /// Direct packages, sorted case-insensitively by name
    pub fn roots(&self) -> Vec<NodeId> {
        let mut roots: Vec<NodeId> = self
            .nodes()
            .filter(|(_, node)| node.is_direct)
            .map(|(id, _)| id)
            .collect();
        roots.sort_by(|a, b| self.node(*a).name.cmp(&self.node(*b).name));
        roots
    }

    pub fn total_package_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn direct_dependency_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_direct).count()
    }

    pub fn transitive_dependency_count(&self) -> usize {
        self.total_package_count() - self.direct_dependency_count()
    }

    pub fn edge_count(&self) -> usize {
        self.dependencies.iter().map(|d| d.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
