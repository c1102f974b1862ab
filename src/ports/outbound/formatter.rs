use crate::hierarchy::domain::HierarchyTree;
use crate::shared::Result;

/// HierarchyFormatter port for turning a rendered tree into output text
///
/// Formatters may decorate the name, version and annotation segments (for
/// example with terminal colors) but must not change the plain text itself.
pub trait HierarchyFormatter {
    /// Formats the tree, one line per package
    ///
    /// # Errors
    /// Returns an error if formatting fails
    fn format(&self, tree: &HierarchyTree) -> Result<String>;
}
