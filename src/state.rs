use crate::engine::HabitEngine;
use crate::storage::LocalStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<HabitEngine<LocalStore>>>,
}

impl AppState {
    pub fn new(engine: HabitEngine<LocalStore>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}
