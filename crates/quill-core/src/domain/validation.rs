//! Field-level validation rules for authors and posts.
//!
//! Each rule is a pure function: it checks one proposed field value and
//! returns `Ok(())` or a [`DomainError::Validation`] carrying the message the
//! API surfaces to clients. The entity constructors and setters run these at
//! assignment time; handlers may also call them directly for pre-commit
//! checks (the name-uniqueness rule needs the current names, which only the
//! caller can supply).

use crate::error::DomainError;

/// A title must contain at least one of these substrings (case-sensitive).
pub const CLICKBAIT_PHRASES: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

/// The only accepted post categories (case-sensitive, exact).
pub const POST_CATEGORIES: [&str; 2] = ["Fiction", "Non-Fiction"];

/// Minimum post content length, in characters.
pub const CONTENT_MIN_CHARS: usize = 250;

/// Maximum post summary length, in characters.
pub const SUMMARY_MAX_CHARS: usize = 250;

/// Author phone numbers are exactly this many decimal digits.
pub const PHONE_NUMBER_DIGITS: usize = 10;

/// An author name must be non-empty and absent from `existing_names`.
///
/// `existing_names` is the set the proposal is checked against: all current
/// names when creating, all *other* authors' names when renaming. The check
/// is case-sensitive exact match. Note this read-then-compare is advisory
/// only; the storage layer's unique constraint is authoritative under
/// concurrency.
pub fn validate_name(proposed: &str, existing_names: &[String]) -> Result<(), DomainError> {
    if proposed.is_empty() {
        return Err(DomainError::validation("Author name is required"));
    }
    if existing_names.iter().any(|name| name == proposed) {
        return Err(DomainError::validation("Author name must be unique"));
    }
    Ok(())
}

/// A phone number is exactly ten ASCII digits.
pub fn validate_phone_number(proposed: &str) -> Result<(), DomainError> {
    if proposed.len() != PHONE_NUMBER_DIGITS || !proposed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::validation("Phone number must be 10 digits"));
    }
    Ok(())
}

/// Post content must be at least 250 characters.
pub fn validate_content(proposed: &str) -> Result<(), DomainError> {
    if proposed.chars().count() < CONTENT_MIN_CHARS {
        return Err(DomainError::validation(
            "Content must be at least 250 characters",
        ));
    }
    Ok(())
}

/// Post summaries are capped at 250 characters.
pub fn validate_summary(proposed: &str) -> Result<(), DomainError> {
    if proposed.chars().count() > SUMMARY_MAX_CHARS {
        return Err(DomainError::validation(
            "Summary must have a maximum of 250 characters",
        ));
    }
    Ok(())
}

/// A category is exactly "Fiction" or "Non-Fiction".
pub fn validate_category(proposed: &str) -> Result<(), DomainError> {
    if !POST_CATEGORIES.contains(&proposed) {
        return Err(DomainError::validation(
            "Category must be Fiction or Non-Fiction",
        ));
    }
    Ok(())
}

/// A title must be sufficiently clickbait-y: it has to contain one of the
/// phrases in [`CLICKBAIT_PHRASES`].
pub fn validate_title(proposed: &str) -> Result<(), DomainError> {
    if !CLICKBAIT_PHRASES
        .iter()
        .any(|phrase| proposed.contains(phrase))
    {
        return Err(DomainError::validation(
            "Title must contain one of the following: Won't Believe, Secret, Top, Guess",
        ));
    }
    Ok(())
}
