use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation;
use crate::error::DomainError;

/// Post entity - a blog post with clickbait-gated title and length-checked
/// body fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post, running every field through its validator.
    pub fn new(
        title: String,
        content: String,
        summary: String,
        category: String,
    ) -> Result<Self, DomainError> {
        validation::validate_title(&title)?;
        validation::validate_content(&content)?;
        validation::validate_summary(&summary)?;
        validation::validate_category(&category)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            summary,
            category,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn set_title(&mut self, title: String) -> Result<(), DomainError> {
        validation::validate_title(&title)?;
        self.title = title;
        self.touch();
        Ok(())
    }

    pub fn set_content(&mut self, content: String) -> Result<(), DomainError> {
        validation::validate_content(&content)?;
        self.content = content;
        self.touch();
        Ok(())
    }

    pub fn set_summary(&mut self, summary: String) -> Result<(), DomainError> {
        validation::validate_summary(&summary)?;
        self.summary = summary;
        self.touch();
        Ok(())
    }

    pub fn set_category(&mut self, category: String) -> Result<(), DomainError> {
        validation::validate_category(&category)?;
        self.category = category;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post(id={}, title={}, category={})",
            self.id, self.title, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_content() -> String {
        "lorem ipsum ".repeat(25) // 300 chars
    }

    fn sample() -> Post {
        Post::new(
            "Top 10 Rust Crates".to_string(),
            long_content(),
            "A short rundown.".to_string(),
            "Non-Fiction".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn new_validates_every_field() {
        assert!(
            Post::new(
                "An Unassuming Title".to_string(),
                long_content(),
                String::new(),
                "Fiction".to_string(),
            )
            .is_err()
        );
        assert!(
            Post::new(
                "Top Title".to_string(),
                "too short".to_string(),
                String::new(),
                "Fiction".to_string(),
            )
            .is_err()
        );
        assert!(
            Post::new(
                "Top Title".to_string(),
                long_content(),
                "s".repeat(251),
                "Fiction".to_string(),
            )
            .is_err()
        );
        assert!(
            Post::new(
                "Top Title".to_string(),
                long_content(),
                String::new(),
                "Biography".to_string(),
            )
            .is_err()
        );

        let post = sample();
        assert_eq!(post.category, "Non-Fiction");
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn setters_retrigger_validators() {
        let mut post = sample();

        assert!(post.set_title("No Hook Here".to_string()).is_err());
        assert_eq!(post.title, "Top 10 Rust Crates");

        assert!(post.set_content("short".to_string()).is_err());
        assert!(post.set_summary("s".repeat(251)).is_err());
        assert!(post.set_category("Memoir".to_string()).is_err());

        post.set_title("Guess What Shipped".to_string()).unwrap();
        post.set_category("Fiction".to_string()).unwrap();
        assert_eq!(post.title, "Guess What Shipped");
        assert_eq!(post.category, "Fiction");
    }

    #[test]
    fn rejected_assignment_leaves_updated_at_alone() {
        let mut post = sample();
        let before = post.updated_at;
        let _ = post.set_summary("s".repeat(300));
        assert_eq!(post.updated_at, before);
    }
}
