//! Blog API
//!
//! Posts and nested comments. Reads are public; post writes are admin-only
//! and commenting requires a signed-in user, so mutating calls take the
//! caller's session for the bearer header.

use gloo_net::http::Request;

use crate::api::{error_message, get_api_base};
use crate::state::Session;

/// Blog post as returned by the API.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A comment node. The server returns an already-nested tree with `replies`
/// populated; sequence order is preserved verbatim on the client.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub user_name: String,
    pub created_at: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

/// Fetch all blog posts
pub async fn fetch_posts() -> Result<Vec<BlogPost>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/v1/blogs", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to load posts").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a single blog post by id
pub async fn fetch_post(id: i64) -> Result<BlogPost, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/v1/blogs/{}", api_base, id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Post not found").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[derive(serde::Serialize)]
struct PostPayload {
    title: String,
    content: String,
}

/// Create a new blog post (admin). Returns the created post.
pub async fn create_post(session: &Session, title: &str, content: &str) -> Result<BlogPost, String> {
    let api_base = get_api_base();
    let Some((header, value)) = session.auth_header() else {
        return Err("Not signed in".to_string());
    };

    let response = Request::post(&format!("{}/api/v1/blogs", api_base))
        .header(&header, &value)
        .json(&PostPayload {
            title: title.to_string(),
            content: content.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to create post").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update an existing blog post (admin). Returns the updated post.
pub async fn update_post(
    session: &Session,
    id: i64,
    title: &str,
    content: &str,
) -> Result<BlogPost, String> {
    let api_base = get_api_base();
    let Some((header, value)) = session.auth_header() else {
        return Err("Not signed in".to_string());
    };

    let response = Request::put(&format!("{}/api/v1/blogs/{}", api_base, id))
        .header(&header, &value)
        .json(&PostPayload {
            title: title.to_string(),
            content: content.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to update post").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a blog post (admin)
pub async fn delete_post(session: &Session, id: i64) -> Result<(), String> {
    let api_base = get_api_base();
    let Some((header, value)) = session.auth_header() else {
        return Err("Not signed in".to_string());
    };

    let response = Request::delete(&format!("{}/api/v1/blogs/{}", api_base, id))
        .header(&header, &value)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to delete post").await);
    }

    Ok(())
}

/// Fetch the nested comment tree for a post
pub async fn fetch_comments(post_id: i64) -> Result<Vec<Comment>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/v1/blogs/{}/comments/", api_base, post_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to load comments").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Post a comment (top-level when `parent_id` is `None`).
///
/// Returns the created comment so the caller can patch its local tree
/// instead of re-fetching the whole thread.
pub async fn post_comment(
    session: &Session,
    post_id: i64,
    parent_id: Option<i64>,
    content: &str,
) -> Result<Comment, String> {
    #[derive(serde::Serialize)]
    struct CommentPayload {
        content: String,
        post_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        parent_id: Option<i64>,
    }

    let api_base = get_api_base();
    let Some((header, value)) = session.auth_header() else {
        return Err("Not signed in".to_string());
    };

    let response = Request::post(&format!("{}/api/v1/blogs/comments/", api_base))
        .header(&header, &value)
        .json(&CommentPayload {
            content: content.to_string(),
            post_id,
            parent_id,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to post comment").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
