//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a new author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub phone_number: String,
}

/// Request to update an author. Absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAuthorRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// Response containing an author's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub category: String,
}

/// Request to update a post. Absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

/// Response containing a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}
