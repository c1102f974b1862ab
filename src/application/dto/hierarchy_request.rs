use std::path::PathBuf;

/// HierarchyRequest - request DTO for the show-hierarchy use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyRequest {
    /// Project directory containing `obj/project.assets.json`
    pub project_path: PathBuf,
    /// Only show the chains leading to this package
    pub filter: Option<String>,
}

impl HierarchyRequest {
    pub fn new(project_path: PathBuf, filter: Option<String>) -> Self {
        Self {
            project_path,
            filter,
        }
    }
}
