use crate::application::dto::{HierarchyRequest, HierarchyResponse};
use crate::hierarchy::domain::{DependencyGraph, PackageName};
use crate::hierarchy::services::{AssetsParser, DependencyGraphBuilder, HierarchyRenderer};
use crate::ports::outbound::{AssetsContent, AssetsReader, ProgressReporter};
use crate::shared::error::HierarchyError;
use crate::shared::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio_util::sync::CancellationToken;

/// ShowHierarchyUseCase - reads restore output and renders its dependency tree
///
/// Each execution owns its graph, so several projects can be processed
/// concurrently through one use case.
///
/// # Type Parameters
/// * `AR` - AssetsReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ShowHierarchyUseCase<AR, PR> {
    assets_reader: AR,
    progress_reporter: PR,
}

impl<AR, PR> ShowHierarchyUseCase<AR, PR>
where
    AR: AssetsReader,
    PR: ProgressReporter,
{
    /// Creates a new ShowHierarchyUseCase with injected dependencies
    pub fn new(assets_reader: AR, progress_reporter: PR) -> Self {
        Self {
            assets_reader,
            progress_reporter,
        }
    }

    /// Executes the read, parse, build and render pipeline for one project
    ///
    /// # Errors
    /// Returns an error if the filter is not a valid package name, the assets
    /// file is missing, or the read is cancelled.
    pub async fn execute(
        &self,
        request: &HierarchyRequest,
        cancel: &CancellationToken,
    ) -> Result<HierarchyResponse> {
        let filter = Self::parse_filter(request.filter.as_deref())?;

        // Step 1: Read the assets file
        let graph = self.load_graph(request, cancel).await?;

        // Step 2: Render, pruned to the filter if one was given
        let tree = HierarchyRenderer::render(&graph, filter.as_ref());

        for cycle in tree.cycles() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Dependency cycle detected in {}: {}",
                request.project_path.display(),
                cycle.join(" -> ")
            ));
        }
        if let Some(filter) = &filter {
            if tree.is_empty() {
                self.progress_reporter.report(&format!(
                    "🔍 No dependency path leads to {}",
                    filter
                ));
            }
        }

        Ok(HierarchyResponse::new(
            request.project_path.clone(),
            graph,
            tree,
        ))
    }

    /// Executes every request concurrently, returning results in request order
    pub async fn execute_all(
        &self,
        requests: &[HierarchyRequest],
        cancel: &CancellationToken,
    ) -> Vec<Result<HierarchyResponse>> {
        let total = requests.len();
        let completed = AtomicUsize::new(0);

        let pipelines = requests.iter().map(|request| {
            let completed = &completed;
            async move {
                let result = self.execute(request, cancel).await;
                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                if total > 1 {
                    let project = request.project_path.display().to_string();
                    self.progress_reporter
                        .report_progress(done, total, Some(&project));
                }
                result
            }
        });

        let results = futures::future::join_all(pipelines).await;

        if total > 1 {
            self.progress_reporter.report_completion(&format!(
                "✅ Loaded {} project(s)",
                results.iter().filter(|r| r.is_ok()).count()
            ));
        }
        results
    }

    /// Reads and parses the assets file, reporting progress
    async fn load_graph(
        &self,
        request: &HierarchyRequest,
        cancel: &CancellationToken,
    ) -> Result<DependencyGraph> {
        self.progress_reporter.report(&format!(
            "📖 Loading {}",
            self.assets_reader
                .assets_path(&request.project_path)
                .display()
        ));

        let content = self
            .assets_reader
            .read_assets(&request.project_path, cancel)
            .await?;

        let bytes = match content {
            AssetsContent::Bytes(bytes) => bytes,
            AssetsContent::Unreadable { reason } => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: {}. Showing no dependencies.",
                    reason
                ));
                Vec::new()
            }
        };

        let graph = DependencyGraphBuilder::build(&AssetsParser::parse(&bytes));

        self.progress_reporter.report(&format!(
            "✅ Detected {} package(s): {} direct, {} transitive",
            graph.total_package_count(),
            graph.direct_dependency_count(),
            graph.transitive_dependency_count()
        ));

        Ok(graph)
    }

    fn parse_filter(filter: Option<&str>) -> Result<Option<PackageName>> {
        filter
            .map(|f| {
                PackageName::new(f.to_string()).map_err(|e| {
                    anyhow::Error::from(HierarchyError::Validation {
                        message: format!("Invalid package filter '{}': {}", f, e),
                    })
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests;
