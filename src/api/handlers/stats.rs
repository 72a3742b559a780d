//! Handler for the blog statistics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregated statistics over every stored blog post.
///
/// # Endpoint
///
/// `GET /api/blogs/stats`
///
/// # Response
///
/// ```json
/// {
///   "blog_count": 3,
///   "total_likes": 18,
///   "favorite_blog": { "id": 3, "title": "advanced Python", ... },
///   "most_blogs": { "author": "gogo", "metric": 1 },
///   "most_likes": { "author": "gogo", "metric": 12 }
/// }
/// ```
///
/// When no blogs exist, `favorite_blog`, `most_blogs`, and `most_likes`
/// are `null` and the totals are zero.
pub async fn blog_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.blog_stats().await?;

    Ok(Json(stats.into()))
}
