/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures are `HierarchyError` values wrapped in the anyhow error.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
