/// Dependency hierarchy domain - graph model and the pure services that
/// parse restore output, build the graph and render it.
pub mod domain;
pub mod services;
