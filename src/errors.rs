use crate::models::HabitId;
use axum::http::StatusCode;

pub type HabitResult<T> = Result<T, HabitError>;

#[derive(Debug, thiserror::Error)]
pub enum HabitError {
    #[error("habit name must not be empty")]
    EmptyName,

    #[error("no habit with id {0}")]
    NotFound(HabitId),

    #[error("failed to load habits: {0}")]
    Load(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl HabitError {
    pub fn load(err: impl std::fmt::Display) -> Self {
        Self::Load(err.to_string())
    }

    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyName => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Load(_) | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::io::Error> for HabitError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err)
    }
}

impl axum::response::IntoResponse for HabitError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), self.to_string()).into_response()
    }
}
