use crate::errors::HabitError;
use crate::models::{CreateHabitRequest, Habit, HabitId};
use crate::state::AppState;
use crate::ui;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn list_habits(State(state): State<AppState>) -> Result<Json<Vec<Habit>>, HabitError> {
    let mut engine = state.engine.lock().await;
    let habits = engine.refresh().await?.to_vec();
    Ok(Json(habits))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<Json<Habit>, HabitError> {
    let mut engine = state.engine.lock().await;
    let habit = engine.create(&payload.name).await?;
    Ok(Json(habit))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<HabitId>,
) -> Result<StatusCode, HabitError> {
    let mut engine = state.engine.lock().await;
    engine.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<HabitId>,
) -> Result<Json<Habit>, HabitError> {
    let mut engine = state.engine.lock().await;
    let habit = engine.toggle(id).await?;
    Ok(Json(habit))
}
