use crate::ports::outbound::{AssetsContent, AssetsReader, OBJ_DIR};
use crate::shared::error::HierarchyError;
use crate::shared::security::{validate_file_metadata, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// FileSystemAssetsReader adapter reading restore output from disk
///
/// Missing files are errors; files that exist but cannot be read are reported
/// as [`AssetsContent::Unreadable`] so the project shows no dependencies
/// instead of aborting the run.
pub struct FileSystemAssetsReader;

impl FileSystemAssetsReader {
    pub fn new() -> Self {
        Self
    }

    /// Maps an I/O failure on `path` to not-found or unreadable
    fn classify_io_error(err: io::Error, path: &Path) -> Result<AssetsContent> {
        match err.kind() {
            io::ErrorKind::NotFound => {
                Err(HierarchyError::assets_not_found(path.to_path_buf()).into())
            }
            _ => Ok(AssetsContent::Unreadable {
                reason: format!("Failed to read {}: {}", path.display(), err),
            }),
        }
    }

    async fn read_checked(&self, obj_dir: PathBuf, path: PathBuf) -> Result<AssetsContent> {
        if let Err(e) = tokio::fs::metadata(&obj_dir).await {
            return Self::classify_io_error(e, &obj_dir);
        }

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) => return Self::classify_io_error(e, &path),
        };

        if let Err(e) = validate_file_metadata(&metadata, &path, MAX_FILE_SIZE) {
            return Ok(AssetsContent::Unreadable {
                reason: e.to_string(),
            });
        }

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(AssetsContent::Bytes(bytes)),
            Err(e) => Self::classify_io_error(e, &path),
        }
    }
}

impl Default for FileSystemAssetsReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetsReader for FileSystemAssetsReader {
    async fn read_assets(
        &self,
        project_dir: &Path,
        cancel: &CancellationToken,
    ) -> Result<AssetsContent> {
        let path = self.assets_path(project_dir);
        let obj_dir = project_dir.join(OBJ_DIR);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(anyhow::Error::from(HierarchyError::Cancelled { path })),
            content = self.read_checked(obj_dir, path.clone()) => content,
        }
    }
}
