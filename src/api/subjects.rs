//! Subject API endpoints.

use axum::extract::State;

use super::{documents, ApiResult};
use crate::models::Subject;
use crate::AppState;

/// GET /api/v1/get_subjects - List all subjects.
pub async fn list_subjects(State(state): State<AppState>) -> ApiResult<Vec<Subject>> {
    documents(state.repo.list_subjects().await)
}
