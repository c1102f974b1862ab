use crate::adapters::outbound::formatters::TextFormatter;
use crate::ports::outbound::HierarchyFormatter;

/// Formatter type enumeration for factory pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    /// Plain text, as written to files or with `--no-color`
    Plain,
    /// Text with terminal colors
    Colored,
}

impl FormatterType {
    /// Colors are used only when not disabled and output goes to a terminal stream
    pub fn select(no_color: bool, to_file: bool) -> Self {
        if no_color || to_file {
            FormatterType::Plain
        } else {
            FormatterType::Colored
        }
    }
}

/// Factory for creating hierarchy formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use dependency_hierarchy::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let formatter = FormatterFactory::create(FormatterType::Plain);
    /// ```
    pub fn create(formatter_type: FormatterType) -> Box<dyn HierarchyFormatter> {
        match formatter_type {
            FormatterType::Plain => Box::new(TextFormatter::plain()),
            FormatterType::Colored => Box::new(TextFormatter::colored()),
        }
    }
}
