use crate::clock::Clock;
use crate::source::DataSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<DataSource>,
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl AppState {
    pub fn new(source: DataSource, clock: impl Clock + Send + Sync + 'static) -> Self {
        Self {
            source: Arc::new(source),
            clock: Arc::new(clock),
        }
    }
}
