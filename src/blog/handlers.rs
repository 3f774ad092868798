/**
 * Blog Handlers
 *
 * HTTP handlers for the protected blog endpoints. Every route here sits
 * behind the auth middleware, so handlers can rely on the authenticated
 * user id being present in request extensions.
 *
 * # Routes
 *
 * - `POST /api/v1/blog` - Create a post for the authenticated author
 * - `PUT /api/v1/blog` - Update a post's title and content by id
 * - `GET /api/v1/blog/{id}` - Fetch a single post
 * - `GET /api/v1/blog/bulk` - List all posts
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::blog::db::{self, Post};
use crate::blog::types::{
    CreatePostRequest, CreatePostResponse, UpdatePostRequest, UpdatePostResponse,
};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Validate create/update input
///
/// Empty title or content is the wire contract's validation failure.
fn validate_post_input(title: &str, content: &str) -> Result<(), ApiError> {
    if title.is_empty() || content.is_empty() {
        return Err(ApiError::validation("Title and content are required."));
    }
    Ok(())
}

/// Create-post handler
///
/// Inserts a post owned by the authenticated caller. Validation runs
/// before any store access, so an invalid body inserts nothing.
///
/// # Errors
///
/// * `400 Bad Request` - Empty or missing title/content
/// * `500 Internal Server Error` - Store failure
pub async fn create_post(
    AuthUser(user): AuthUser,
    State(pool): State<PgPool>,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<CreatePostResponse>, ApiError> {
    validate_post_input(&request.title, &request.content)?;

    let post = db::create_post(&pool, &request.title, &request.content, user.user_id).await?;

    tracing::info!("Post created: {} by {}", post.id, post.author_id);

    Ok(Json(CreatePostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author_id: post.author_id,
        message: "Blog created successfully.".to_string(),
    }))
}

/// Update-post handler
///
/// Updates title and content of the post named in the body. The caller's
/// id is not checked against the post's author. Fields omitted from the
/// body keep their stored values.
///
/// # Errors
///
/// * `404 Not Found` - `{"message": "Blog post not found."}`
/// * `500 Internal Server Error` - Store failure
pub async fn update_post(
    State(pool): State<PgPool>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<UpdatePostResponse>, ApiError> {
    let post = db::update_post(
        &pool,
        request.id,
        request.title.as_deref(),
        request.content.as_deref(),
    )
    .await?
        .ok_or_else(|| {
            tracing::warn!("Update for missing post: {}", request.id);
            ApiError::not_found("Blog post not found.")
        })?;

    tracing::info!("Post updated: {}", post.id);

    Ok(Json(UpdatePostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        message: "Blog updated successfully.".to_string(),
    }))
}

/// Get-post handler
///
/// Fetches a single post by id and returns the full row.
///
/// # Errors
///
/// * `404 Not Found` - `{"message": "Blog not found."}`
/// * `500 Internal Server Error` - `{"message": "Error while fetching
///   blog post."}` for a malformed id or any store failure
pub async fn get_post(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|e| {
        tracing::warn!("Malformed post id {:?}: {:?}", id, e);
        ApiError::fetch("Error while fetching blog post.")
    })?;

    let post = db::get_post_by_id(&pool, id)
        .await
        .map_err(|e| {
            tracing::error!("Store failure fetching post {}: {:?}", id, e);
            ApiError::fetch("Error while fetching blog post.")
        })?
        .ok_or_else(|| ApiError::not_found("Blog not found."))?;

    Ok(Json(post))
}

/// List-posts handler
///
/// Returns every post, unfiltered and unpaginated.
pub async fn list_posts(State(pool): State<PgPool>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = db::list_posts(&pool).await?;
    Ok(Json(posts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_title() {
        let result = validate_post_input("", "content");
        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_content() {
        let result = validate_post_input("title", "");
        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }

    #[test]
    fn test_validate_accepts_non_empty_input() {
        assert!(validate_post_input("Hi", "World").is_ok());
    }
}
