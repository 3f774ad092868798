/**
 * Blog Handler Types
 *
 * Request and response types for the blog endpoints.
 *
 * On create, absent title or content fields default to empty strings so
 * that the handler reports them as validation failures (400) rather
 * than body-parse rejections. On update, absent fields deserialize to
 * `None` and leave the stored value unchanged; an explicit empty string
 * is a plain overwrite.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create-post request body
#[derive(Deserialize, Serialize, Debug)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Update-post request body
///
/// `title` and `content` are optional: an omitted field keeps the
/// stored value.
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdatePostRequest {
    /// Post to update
    pub id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Create-post response
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub message: String,
}

/// Update-post response
#[derive(Serialize, Debug)]
pub struct UpdatePostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_missing_fields() {
        let request: CreatePostRequest = serde_json::from_str(r#"{"title":"Hi"}"#).unwrap();
        assert_eq!(request.title, "Hi");
        assert_eq!(request.content, "");
    }

    #[test]
    fn test_update_request_omitted_fields_are_none() {
        let request: UpdatePostRequest = serde_json::from_str(&format!(
            r#"{{"id":"{}","title":"New title"}}"#,
            Uuid::new_v4()
        ))
        .unwrap();
        assert_eq!(request.title.as_deref(), Some("New title"));
        assert_eq!(request.content, None);
    }

    #[test]
    fn test_update_request_empty_string_is_explicit() {
        let request: UpdatePostRequest = serde_json::from_str(&format!(
            r#"{{"id":"{}","title":"","content":"World"}}"#,
            Uuid::new_v4()
        ))
        .unwrap();
        assert_eq!(request.title.as_deref(), Some(""));
    }

    #[test]
    fn test_create_response_wire_shape() {
        let response = CreatePostResponse {
            id: Uuid::new_v4(),
            title: "Hi".to_string(),
            content: "World".to_string(),
            author_id: Uuid::new_v4(),
            message: "Blog created successfully.".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("authorId").is_some());
        assert_eq!(json["message"], "Blog created successfully.");
    }
}
