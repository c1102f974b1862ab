use super::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const CONFLICT_ASSETS: &str = r#"{
  "targets": {
    "net8.0": {
      "PackageA/1.0.0": { "dependencies": { "PackageB": "2.0.0" } },
      "PackageB/2.1.0": {}
    }
  },
  "project": {
    "frameworks": { "net8.0": { "dependencies": { "PackageA": {} } } }
  }
}"#;

const CYCLIC_ASSETS: &str = r#"{
  "targets": {
    "net8.0": {
      "A/1.0.0": { "dependencies": { "B": "1.0.0" } },
      "B/1.0.0": { "dependencies": { "A": "1.0.0" } }
    }
  },
  "project": { "frameworks": { "net8.0": { "dependencies": { "A": {} } } } }
}"#;

// Mock implementations for testing
#[derive(Default)]
struct MockAssetsReader {
    contents: HashMap<PathBuf, AssetsContent>,
}

impl MockAssetsReader {
    fn with_project(mut self, path: &str, content: &str) -> Self {
        self.contents.insert(
            PathBuf::from(path),
            AssetsContent::Bytes(content.as_bytes().to_vec()),
        );
        self
    }

    fn with_unreadable(mut self, path: &str) -> Self {
        self.contents.insert(
            PathBuf::from(path),
            AssetsContent::Unreadable {
                reason: "Permission denied".to_string(),
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
        self.contents
            .get(project_dir)
            .cloned()
            .ok_or_else(|| HierarchyError::assets_not_found(self.assets_path(project_dir)).into())
    }
}

#[derive(Default, Clone)]
struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Progress: {}/{}", current, total));
    }
    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }
    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}

fn request(path: &str, filter: Option<&str>) -> HierarchyRequest {
    HierarchyRequest::new(PathBuf::from(path), filter.map(String::from))
}

#[tokio::test]
async fn test_execute_renders_conflict() {
    let reader = MockAssetsReader::default().with_project("/app", CONFLICT_ASSETS);
    let use_case = ShowHierarchyUseCase::new(reader, MockProgressReporter::default());

    let response = use_case
        .execute(&request("/app", None), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        response.tree.to_plain_text(),
        "PackageA : 1.0.0\n  PackageB : 2.0.0 (omitted for conflict with 2.1.0)\n"
    );
    assert_eq!(response.graph.total_package_count(), 2);
    assert!(response.depends_on("packageb"));
    assert!(!response.depends_on("PackageC"));
}

#[tokio::test]
async fn test_execute_with_filter() {
    let reader = MockAssetsReader::default().with_project("/app", CONFLICT_ASSETS);
    let use_case = ShowHierarchyUseCase::new(reader, MockProgressReporter::default());

    let response = use_case
        .execute(&request("/app", Some("PACKAGEB")), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.tree.lines().len(), 2);
    assert!(response.tree.lines()[1].is_filter_match);
}

#[tokio::test]
async fn test_execute_filter_without_match_reports() {
    let reader = MockAssetsReader::default().with_project("/app", CONFLICT_ASSETS);
    let reporter = MockProgressReporter::default();
    let use_case = ShowHierarchyUseCase::new(reader, reporter.clone());

    let response = use_case
        .execute(&request("/app", Some("Missing")), &CancellationToken::new())
        .await
        .unwrap();

    assert!(response.tree.is_empty());
    assert!(reporter
        .messages()
        .iter()
        .any(|m| m.contains("No dependency path leads to Missing")));
}

#[tokio::test]
async fn test_execute_invalid_filter() {
    let reader = MockAssetsReader::default().with_project("/app", CONFLICT_ASSETS);
    let use_case = ShowHierarchyUseCase::new(reader, MockProgressReporter::default());

    let err = use_case
        .execute(&request("/app", Some("  ")), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<HierarchyError>(),
        Some(HierarchyError::Validation { .. })
    ));
}

#[tokio::test]
async fn test_execute_missing_assets() {
    let use_case =
        ShowHierarchyUseCase::new(MockAssetsReader::default(), MockProgressReporter::default());

    let err = use_case
        .execute(&request("/missing", None), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<HierarchyError>(),
        Some(HierarchyError::AssetsNotFound { .. })
    ));
}

#[tokio::test]
async fn test_execute_unreadable_assets_is_empty() {
    let reader = MockAssetsReader::default().with_unreadable("/locked");
    let reporter = MockProgressReporter::default();
    let use_case = ShowHierarchyUseCase::new(reader, reporter.clone());

    let response = use_case
        .execute(&request("/locked", None), &CancellationToken::new())
        .await
        .unwrap();

    assert!(response.graph.is_empty());
    assert!(response.tree.is_empty());
    assert!(reporter
        .messages()
        .iter()
        .any(|m| m.starts_with("Error: ") && m.contains("Permission denied")));
}

#[tokio::test]
async fn test_execute_corrupt_assets_is_empty() {
    let reader = MockAssetsReader::default().with_project("/corrupt", "{ definitely not json");
    let use_case = ShowHierarchyUseCase::new(reader, MockProgressReporter::default());

    let response = use_case
        .execute(&request("/corrupt", None), &CancellationToken::new())
        .await
        .unwrap();

    assert!(response.tree.is_empty());
}

#[tokio::test]
async fn test_execute_cancelled() {
    let reader = MockAssetsReader::default().with_project("/app", CONFLICT_ASSETS);
    let use_case = ShowHierarchyUseCase::new(reader, MockProgressReporter::default());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = use_case
        .execute(&request("/app", None), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<HierarchyError>(),
        Some(HierarchyError::Cancelled { .. })
    ));
}

#[tokio::test]
async fn test_execute_reports_cycles() {
    let reader = MockAssetsReader::default().with_project("/cyclic", CYCLIC_ASSETS);
    let reporter = MockProgressReporter::default();
    let use_case = ShowHierarchyUseCase::new(reader, reporter.clone());

    let response = use_case
        .execute(&request("/cyclic", None), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.tree.cycles().len(), 1);
    assert!(reporter
        .messages()
        .iter()
        .any(|m| m.contains("Dependency cycle detected") && m.contains("A -> B -> A")));
}

#[tokio::test]
async fn test_execute_all_keeps_request_order() {
    let reader = MockAssetsReader::default()
        .with_project("/first", CONFLICT_ASSETS)
        .with_project("/second", CYCLIC_ASSETS);
    let reporter = MockProgressReporter::default();
    let use_case = ShowHierarchyUseCase::new(reader, reporter.clone());

    let requests = vec![
        request("/first", None),
        request("/missing", None),
        request("/second", None),
    ];
    let results = use_case
        .execute_all(&requests, &CancellationToken::new())
        .await;

    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].as_ref().unwrap().project_path,
        PathBuf::from("/first")
    );
    assert!(results[1].is_err());
    assert_eq!(
        results[2].as_ref().unwrap().project_path,
        PathBuf::from("/second")
    );

    let messages = reporter.messages();
    assert!(messages.iter().any(|m| m == "Progress: 3/3"));
    assert!(messages
        .iter()
        .any(|m| m == "Completed: ✅ Loaded 2 project(s)"));
}

#[tokio::test]
async fn test_execute_all_single_project_has_no_progress() {
    let reader = MockAssetsReader::default().with_project("/app", CONFLICT_ASSETS);
    let reporter = MockProgressReporter::default();
    let use_case = ShowHierarchyUseCase::new(reader, reporter.clone());

    let results = use_case
        .execute_all(&[request("/app", None)], &CancellationToken::new())
        .await;

    assert!(results[0].is_ok());
    assert!(!reporter
        .messages()
        .iter()
        .any(|m| m.starts_with("Progress:") || m.starts_with("Completed:")));
}
