use async_trait::async_trait;
use dependency_hierarchy::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// Mock AssetsReader serving in-memory restore output per project directory
///
/// Projects without registered content behave like a project that was never
/// restored.
#[derive(Default)]
pub struct MockAssetsReader {
    contents: HashMap<PathBuf, AssetsContent>,
}

impl MockAssetsReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, project_dir: &str, assets_json: &str) -> Self {
        self.contents.insert(
            PathBuf::from(project_dir),
            AssetsContent::Bytes(assets_json.as_bytes().to_vec()),
        );
        self
    }

    pub fn with_unreadable(mut self, project_dir: &str, reason: &str) -> Self {
        self.contents.insert(
            PathBuf::from(project_dir),
            AssetsContent::Unreadable {
                reason: reason.to_string(),
            },
        );
        self
    }
}

#[async_trait]
impl AssetsReader for MockAssetsReader {
    async fn read_assets(
        &self,
        project_dir: &Path,
        cancel: &CancellationToken,
    ) -> Result<AssetsContent> {
        if cancel.is_cancelled() {
            return Err(HierarchyError::Cancelled {
                path: self.assets_path(project_dir),
            }
            .into());
        }

        match self.contents.get(project_dir) {
            Some(content) => Ok(content.clone()),
            None => Err(HierarchyError::assets_not_found(self.assets_path(project_dir)).into()),
        }
    }
}
