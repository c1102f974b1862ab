/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod hierarchy_request;
mod hierarchy_response;

pub use hierarchy_request::HierarchyRequest;
pub use hierarchy_response::HierarchyResponse;
