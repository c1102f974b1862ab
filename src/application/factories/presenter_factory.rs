use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where the rendered hierarchy goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// `--output <FILE>` selects a file, otherwise stdout
    pub fn from_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, PresenterType::File(_))
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates the presenter for the given destination
    ///
    /// # Examples
    /// ```
    /// use dependency_hierarchy::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::from_output(None));
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_output() {
        assert_eq!(PresenterType::from_output(None), PresenterType::Stdout);

        let file = PresenterType::from_output(Some(PathBuf::from("tree.txt")));
        assert_eq!(file, PresenterType::File(PathBuf::from("tree.txt")));
        assert!(file.is_file());
        assert!(!PresenterType::Stdout.is_file());
    }

    #[test]
    fn test_create_file_presenter_writes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tree.txt");

        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("PackageA : 1.0.0\n").unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "PackageA : 1.0.0\n"
        );
    }
}
