//! dependency-hierarchy - dependency tree viewer for restored .NET projects
//!
//! This library turns a NuGet restore output (`obj/project.assets.json`) into a
//! deduplicated dependency graph and renders it as an indented tree, optionally
//! pruned to the chains that lead to one package. Lines whose requested version
//! differs from the version the restore selected are annotated as conflicts.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`hierarchy`): Graph model, parser, builder and renderer
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dependency_hierarchy::prelude::*;
//! use std::path::PathBuf;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<()> {
//! let use_case = ShowHierarchyUseCase::new(
//!     FileSystemAssetsReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = HierarchyRequest::new(PathBuf::from("."), Some("Newtonsoft.Json".into()));
//! let response = use_case.execute(&request, &CancellationToken::new()).await?;
//!
//! let output = TextFormatter::plain().format(&response.tree)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod hierarchy;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemAssetsReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::TextFormatter;
    pub use crate::application::dto::{HierarchyRequest, HierarchyResponse};
    pub use crate::application::use_cases::ShowHierarchyUseCase;
    pub use crate::hierarchy::domain::{
        DependencyGraph, HierarchyLine, HierarchyTree, NodeId, PackageName, Version,
    };
    pub use crate::hierarchy::services::{
        AssetsParser, DependencyGraphBuilder, HierarchyRenderer, ParsedAssets,
    };
    pub use crate::ports::outbound::{
        AssetsContent, AssetsReader, HierarchyFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::HierarchyError;
    pub use crate::shared::Result;
}
