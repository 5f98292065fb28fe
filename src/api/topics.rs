//! Topic API endpoints.

use axum::extract::{Path, State};

use super::{documents, parse_topic_id, ApiResult};
use crate::models::Topic;
use crate::AppState;

/// GET /api/v1/get_topics - List all topics.
pub async fn list_topics(State(state): State<AppState>) -> ApiResult<Vec<Topic>> {
    documents(state.repo.list_topics().await)
}

/// GET /api/v1/get_topics_one/:id - Topics sharing a topic_id.
pub async fn get_topics_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Topic>> {
    let Some(topic_id) = parse_topic_id(&id)? else {
        return documents(Ok(Vec::new()));
    };
    documents(state.repo.find_topics_by_topic_id(topic_id).await)
}
