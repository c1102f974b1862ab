use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// Directory, relative to the project, where restore writes its output
pub const OBJ_DIR: &str = "obj";

/// File name of the restore output inside [`OBJ_DIR`]
pub const ASSETS_FILE_NAME: &str = "project.assets.json";

/// Outcome of reading the assets file of a project that has been restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetsContent {
    /// Raw file contents, not yet parsed
    Bytes(Vec<u8>),
    /// The file exists but cannot be read; the project renders as having no
    /// dependencies
    Unreadable { reason: String },
}

/// AssetsReader port for loading a project's `obj/project.assets.json`
///
/// # Async Support
/// Reading is the only suspension point of the pipeline. Implementations must
/// stop and fail when the token is cancelled, before any graph is built.
#[async_trait]
pub trait AssetsReader: Send + Sync {
    /// Reads the assets file of the project in `project_dir`
    ///
    /// # Errors
    /// Returns an error if:
    /// - `obj/` or the assets file does not exist (`HierarchyError::AssetsNotFound`)
    /// - The read was cancelled (`HierarchyError::Cancelled`)
    async fn read_assets(
        &self,
        project_dir: &Path,
        cancel: &CancellationToken,
    ) -> Result<AssetsContent>;

    /// Path of the assets file for a project directory
    fn assets_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(OBJ_DIR).join(ASSETS_FILE_NAME)
    }
}
