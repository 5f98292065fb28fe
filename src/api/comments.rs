//! Comment API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{created, documents, parse_topic_id, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateCommentRequest, TopicComment};
use crate::AppState;

/// GET /api/v1/get_topic_info/:id - Comments attached to a topic_id.
pub async fn get_topic_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<TopicComment>> {
    tracing::info!("Fetching comments for topic {}", id);
    let Some(topic_id) = parse_topic_id(&id)? else {
        return documents(Ok(Vec::new()));
    };
    documents(state.repo.find_comments_by_topic_id(topic_id).await)
}

/// POST /api/v1/send_comment/ - Store a new comment.
pub async fn send_comment(
    State(state): State<AppState>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> ApiResult<TopicComment> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected comment body: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    })?;

    request.validate().map_err(AppError::Validation)?;

    match state.repo.create_comment(&request).await {
        Ok(comment) => {
            tracing::info!(
                "Comment {} saved for topic {}",
                comment.id,
                request.topic_id
            );
            created(comment)
        }
        Err(e) => {
            tracing::error!("Failed to save comment for topic {}: {}", request.topic_id, e);
            Err(e)
        }
    }
}
