/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod assets_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use assets_reader::{AssetsContent, AssetsReader, ASSETS_FILE_NAME, OBJ_DIR};
pub use formatter::HierarchyFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
