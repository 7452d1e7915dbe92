use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::generation::progress::{ProgressReporter, TracingProgress};
use crate::session::DraftSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The single drafting session. Each action holds the lock for its whole
    /// call chain, so actions run strictly one after another.
    pub session: Arc<Mutex<DraftSession>>,
    /// Progress side channel for multi-module generation.
    pub progress: Arc<dyn ProgressReporter>,
}

impl AppState {
    pub fn new(config: Config, session: DraftSession) -> Self {
        Self {
            config,
            session: Arc::new(Mutex::new(session)),
            progress: Arc::new(TracingProgress),
        }
    }
}
