use tokio::sync::RwLock;

use std::sync::Arc;

use warble_core::App;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Users and tweets. Writers hold the lock for a whole operation.
    pub app: Arc<RwLock<App>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            app: Arc::new(RwLock::new(App::new())),
        }
    }
}
