/// Formatter adapters for rendering hierarchies as text
mod text_formatter;

pub use text_formatter::TextFormatter;
