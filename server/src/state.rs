use std::path::PathBuf;
use std::sync::Arc;

use blackboard_shared::ClientConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ClientConfig>,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(config: ClientConfig, public_dir: PathBuf) -> Self {
        Self {
            config: Arc::new(config),
            public_dir,
        }
    }
}
