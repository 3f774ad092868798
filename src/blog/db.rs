/**
 * Post Model and Database Operations
 *
 * This module handles blog post rows and their database operations.
 * Posts are created and updated by the blog handlers; nothing deletes
 * them.
 *
 * Updates deliberately return `Option` instead of failing: a missing row
 * is an expected outcome the handler maps to 404, not an exception.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Post struct representing a blog post in the database
///
/// Serializes in camelCase, so a fetched post goes over the wire as
/// `{id, title, content, authorId, createdAt, updatedAt}`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID (UUID)
    pub id: Uuid,
    /// Post title (non-empty)
    pub title: String,
    /// Post content (non-empty)
    pub content: String,
    /// Author's user ID, set at creation and never re-validated on update
    pub author_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new post
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `title` - Post title
/// * `content` - Post content
/// * `author_id` - Authenticated author's user ID
///
/// # Returns
/// Created post or error
pub async fn create_post(
    pool: &PgPool,
    title: &str,
    content: &str,
    author_id: Uuid,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, content, author_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .bind(author_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Update a post's title and content by id
///
/// No ownership check: any authenticated caller may update any post.
/// A `None` field keeps the stored value; `Some("")` overwrites it.
///
/// # Returns
/// Updated post, or None if no row matched the id
pub async fn update_post(
    pool: &PgPool,
    id: Uuid,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<Option<Post>, sqlx::Error> {
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = COALESCE($1, title), content = COALESCE($2, content), updated_at = $3
        WHERE id = $4
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Get post by id
///
/// # Returns
/// Post or None if not found
pub async fn get_post_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List all posts, unfiltered and unpaginated
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_serializes_camel_case() {
        let post = Post {
            id: Uuid::new_v4(),
            title: "Hi".to_string(),
            content: "World".to_string(),
            author_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("authorId").is_some());
        assert!(json.get("author_id").is_none());
        assert_eq!(json["title"], "Hi");
    }
}
