/// Console adapters writing diagnostics to stderr
mod progress_reporter;

pub use progress_reporter::{SilentProgressReporter, StderrProgressReporter};
