use crate::di::DependenciesInject;
use shared::config::ConnectionPool;

/// Per-process state, built once in main and shared behind an Arc.
/// No ambient globals: everything the handlers need lives here.
#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            di_container: DependenciesInject::new(pool),
        }
    }
}
