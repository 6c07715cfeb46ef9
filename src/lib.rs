pub mod app;
pub mod engine;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod remote;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use engine::HabitEngine;
pub use errors::{HabitError, HabitResult};
pub use models::{Habit, HabitId};
pub use remote::RemoteStore;
pub use state::AppState;
pub use storage::{HabitStore, LocalStore, resolve_data_path};
