//! Sweep target descriptors.
//!
//! A sweep target names one collection and the timestamp field that defines
//! record age in that collection. The two collections covered by retention
//! use different age field names in the store, so the field name is carried
//! as data rather than assumed by the sweeper.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use maildeck_core::{AppError, AppResult};

/// A validated store collection identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionName(String);

impl CollectionName {
    /// Creates a validated collection name.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(validated_identifier(value.into(), "collection name")?))
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for CollectionName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A validated record field identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldName(String);

impl FieldName {
    /// Creates a validated field name.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(validated_identifier(value.into(), "field name")?))
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for FieldName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Descriptor of one collection to sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepTarget {
    collection: CollectionName,
    age_field: FieldName,
}

impl SweepTarget {
    /// Creates a target from a collection and its age-defining field.
    #[must_use]
    pub fn new(collection: CollectionName, age_field: FieldName) -> Self {
        Self {
            collection,
            age_field,
        }
    }

    /// The cloned email collection, aged by creation time.
    #[must_use]
    pub fn cloned_emails() -> Self {
        Self {
            collection: CollectionName("cloned_emails".to_owned()),
            age_field: FieldName("created_at".to_owned()),
        }
    }

    /// The created list collection, aged by creation date.
    #[must_use]
    pub fn created_lists() -> Self {
        Self {
            collection: CollectionName("created_lists".to_owned()),
            age_field: FieldName("created_date".to_owned()),
        }
    }

    /// Returns the collection identifier.
    #[must_use]
    pub fn collection(&self) -> &CollectionName {
        &self.collection
    }

    /// Returns the name of the timestamp field that defines record age.
    #[must_use]
    pub fn age_field(&self) -> &FieldName {
        &self.age_field
    }
}

/// Validates a lowercase snake_case ASCII identifier.
///
/// Store adapters splice these identifiers into query text, so anything
/// outside `[a-z0-9_]` starting with a letter is rejected at construction.
fn validated_identifier(value: String, label: &str) -> AppResult<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{label} must not be empty")));
    }

    let mut characters = trimmed.chars();
    let starts_with_letter = characters
        .next()
        .is_some_and(|first| first.is_ascii_lowercase());
    let rest_is_identifier = characters.all(|character| {
        character.is_ascii_lowercase() || character.is_ascii_digit() || character == '_'
    });

    if !starts_with_letter || !rest_is_identifier {
        return Err(AppError::Validation(format!(
            "{label} '{trimmed}' must be a lowercase snake_case identifier"
        )));
    }

    Ok(trimmed.to_owned())
}
