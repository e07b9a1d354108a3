use std::sync::Arc;

use crate::article::BatchProcessor;
use crate::core::TextGenerator;

pub type SharedGenerator = Arc<dyn TextGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub batch_processor: Arc<BatchProcessor<SharedGenerator>>,
}

impl AppState {
    pub fn new(batch_processor: BatchProcessor<SharedGenerator>) -> Self {
        Self {
            batch_processor: Arc::new(batch_processor),
        }
    }
}
