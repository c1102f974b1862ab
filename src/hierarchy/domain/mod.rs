pub mod dependency_graph;
pub mod hierarchy_tree;
pub mod package;

pub use dependency_graph::{DependencyGraph, DependencyNode, NodeId};
pub use hierarchy_tree::{HierarchyLine, HierarchyTree, INDENT_UNIT};
pub use package::{PackageName, Version};
