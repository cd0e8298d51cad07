//! The `Genre` aggregate root.
//!
//! A `Genre` can only be obtained through [`Genre::new_genre`], which runs
//! the field validator *before* building the value, or through
//! [`Genre::with`], which rehydrates state a store has already accepted.
//! Construction and validation are two separate steps composed by the
//! factory; there is no half-built instance to observe on failure.
//!
//! # Mutation
//!
//! [`Genre::update`] validates the candidate fields first and only then
//! writes them, so a rejected update leaves the aggregate untouched.
//! Category add/remove and activate/deactivate carry no rules and are not
//! re-validated; every one of them refreshes `updated_at`.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    validation::{GenreValidator, Notification},
    value_objects::{CategoryId, GenreId},
};

/// A catalog genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    id: GenreId,
    name: String,
    active: bool,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
    /// Entity kind used in not-found messages.
    pub const ENTITY: &'static str = "Genre";

    const INVALID_AGGREGATE: &'static str = "Failed to validate aggregate Genre";

    /// Create a brand-new genre.
    ///
    /// Fresh id, `created_at == updated_at == now`, no deletion time and no
    /// categories. Fails with [`DomainError::Validation`] carrying exactly the
    /// validator's report when the name is rejected.
    pub fn new_genre(name: Option<&str>, active: bool) -> Result<Self, DomainError> {
        let name = Self::validated_name(name, active)?;
        let now = Utc::now();

        Ok(Self {
            id: GenreId::unique(),
            name,
            active,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Rebuild a genre from persisted state.
    ///
    /// Stores call this with values they already accepted; no rules run.
    pub fn with(
        id: GenreId,
        name: impl Into<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
        categories: Vec<CategoryId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            active,
            categories,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    /// Append this genre's rule violations to `notification`.
    ///
    /// Useful after deserialization or [`Genre::with`].
    pub fn validate(&self, notification: &mut Notification) {
        GenreValidator::validate(Some(&self.name), self.active, notification);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> &GenreId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Category references in insertion order, duplicates included.
    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Replace name, active flag and the whole category list.
    ///
    /// `None` categories means an empty list. On failure nothing is
    /// written and the error carries the validator's report.
    pub fn update(
        &mut self,
        name: Option<&str>,
        active: bool,
        categories: Option<Vec<CategoryId>>,
    ) -> Result<&mut Self, DomainError> {
        let name = Self::validated_name(name, active)?;

        self.name = name;
        self.active = active;
        self.categories = categories.unwrap_or_default();
        self.touch();
        Ok(self)
    }

    /// Clear the deletion time and mark active. Idempotent.
    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.active = true;
        self.touch();
        self
    }

    /// Mark inactive. The first call records the deletion time; later calls
    /// keep it.
    pub fn deactivate(&mut self) -> &mut Self {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(Utc::now());
        }
        self.active = false;
        self.touch();
        self
    }

    /// Append one category reference. `None` is a no-op.
    pub fn add_category(&mut self, id: impl Into<Option<CategoryId>>) -> &mut Self {
        let Some(id) = id.into() else {
            return self;
        };
        self.categories.push(id);
        self.touch();
        self
    }

    /// Append several category references, keeping their order and
    /// duplicates. `None` is a no-op.
    pub fn add_categories(&mut self, ids: impl Into<Option<Vec<CategoryId>>>) -> &mut Self {
        let Some(ids) = ids.into() else {
            return self;
        };
        self.categories.extend(ids);
        self.touch();
        self
    }

    /// Remove the first occurrence of `id`. `None` or an absent id is a no-op.
    pub fn remove_category<'a>(&mut self, id: impl Into<Option<&'a CategoryId>>) -> &mut Self {
        let Some(id) = id.into() else {
            return self;
        };
        let Some(position) = self.categories.iter().position(|c| c == id) else {
            return self;
        };
        self.categories.remove(position);
        self.touch();
        self
    }

    // ── Internal Helpers ──────────────────────────────────────────────────

    /// Validate candidate fields and hand back the owned name on success.
    fn validated_name(name: Option<&str>, active: bool) -> Result<String, DomainError> {
        let notification = GenreValidator::check(name, active);
        match name {
            Some(name) if !notification.has_error() => Ok(name.to_owned()),
            _ => Err(DomainError::validation(
                Self::INVALID_AGGREGATE,
                notification,
            )),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn pause() {
        sleep(Duration::from_millis(2));
    }

    fn field_errors(err: &DomainError) -> Vec<String> {
        err.notification()
            .expect("validation failure")
            .errors()
            .iter()
            .map(|e| e.message().to_string())
            .collect()
    }

    fn ids(raw: &[&str]) -> Vec<CategoryId> {
        raw.iter().map(|s| CategoryId::from(*s)).collect()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    #[test]
    fn new_genre_with_valid_params() {
        let genre = Genre::new_genre(Some("Ação"), true).unwrap();

        assert_eq!(genre.name(), "Ação");
        assert!(genre.is_active());
        assert!(genre.categories().is_empty());
        assert!(genre.deleted_at().is_none());
        assert_eq!(genre.created_at(), genre.updated_at());
        assert!(!genre.id().as_str().is_empty());
    }

    #[test]
    fn new_inactive_genre_has_no_deletion_time() {
        let genre = Genre::new_genre(Some("Ação"), false).unwrap();
        assert!(!genre.is_active());
        assert!(genre.deleted_at().is_none());
    }

    #[test]
    fn new_genre_with_null_name_fails() {
        let err = Genre::new_genre(None, true).unwrap_err();
        assert_eq!(field_errors(&err), ["'name' should not be null"]);
    }

    #[test]
    fn new_genre_with_blank_name_fails() {
        let err = Genre::new_genre(Some("  "), true).unwrap_err();
        assert_eq!(field_errors(&err), ["'name' should not be empty"]);
    }

    #[test]
    fn new_genre_with_short_name_fails() {
        let err = Genre::new_genre(Some("Fi "), true).unwrap_err();
        assert_eq!(
            field_errors(&err),
            ["'name' must be between 3 and 255 characters"]
        );
    }

    #[test]
    fn new_genre_with_long_name_fails() {
        let name = "x".repeat(256);
        let err = Genre::new_genre(Some(&name), true).unwrap_err();
        assert_eq!(
            field_errors(&err),
            ["'name' must be between 3 and 255 characters"]
        );
    }

    #[test]
    fn every_valid_length_is_accepted() {
        for len in 3..=255 {
            let name = "g".repeat(len);
            assert!(Genre::new_genre(Some(&name), true).is_ok(), "len {len}");
        }
    }

    #[test]
    fn with_rebuilds_without_validation() {
        let now = Utc::now();
        let genre = Genre::with(
            GenreId::from("abc"),
            "x",
            false,
            now,
            now,
            Some(now),
            ids(&["1", "1"]),
        );

        assert_eq!(genre.id().as_str(), "abc");
        assert_eq!(genre.categories().len(), 2);

        let mut notification = Notification::create();
        genre.validate(&mut notification);
        assert_eq!(notification.len(), 1);
    }

    // ========================================================================
    // Activation
    // ========================================================================

    #[test]
    fn deactivate_records_deletion_time_once() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        let created_at = genre.created_at();

        genre.deactivate();
        let first = genre.deleted_at().unwrap();
        let first_update = genre.updated_at();
        pause();
        genre.deactivate();

        assert!(!genre.is_active());
        assert_eq!(genre.deleted_at(), Some(first));
        assert!(genre.updated_at() > first_update);
        assert_eq!(genre.created_at(), created_at);
    }

    #[test]
    fn activate_clears_deletion_time() {
        let mut genre = Genre::new_genre(Some("Ação"), false).unwrap();
        genre.deactivate();
        let before = genre.updated_at();
        pause();

        genre.activate();

        assert!(genre.is_active());
        assert!(genre.deleted_at().is_none());
        assert!(genre.updated_at() > before);
    }

    #[test]
    fn activate_is_idempotent() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        genre.activate().activate();
        assert!(genre.is_active());
        assert!(genre.deleted_at().is_none());
    }

    // ========================================================================
    // Update
    // ========================================================================

    #[test]
    fn update_replaces_fields() {
        let mut genre = Genre::new_genre(Some("Acao"), false).unwrap();
        genre.add_category(CategoryId::from("old"));
        let created_at = genre.created_at();
        let before = genre.updated_at();
        pause();

        genre
            .update(Some("Ação"), true, Some(ids(&["123", "456"])))
            .unwrap();

        assert_eq!(genre.name(), "Ação");
        assert!(genre.is_active());
        assert_eq!(genre.categories(), ids(&["123", "456"]).as_slice());
        assert_eq!(genre.created_at(), created_at);
        assert!(genre.updated_at() > before);
    }

    #[test]
    fn update_to_inactive_keeps_deletion_time_untouched() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        genre.update(Some("Ação"), false, None).unwrap();
        assert!(!genre.is_active());
        assert!(genre.deleted_at().is_none());
    }

    #[test]
    fn update_with_none_categories_clears_them() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        genre.add_categories(ids(&["1", "2"]));

        genre.update(Some("Ação"), true, None).unwrap();

        assert!(genre.categories().is_empty());
    }

    #[test]
    fn failed_update_leaves_genre_untouched() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        genre.add_category(CategoryId::from("1"));
        let snapshot = genre.clone();

        let err = genre
            .update(None, false, Some(ids(&["2"])))
            .unwrap_err();

        assert_eq!(field_errors(&err), ["'name' should not be null"]);
        assert_eq!(genre, snapshot);
    }

    #[test]
    fn failed_update_with_short_name() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        let err = genre.update(Some("ab"), true, None).unwrap_err();
        assert_eq!(
            field_errors(&err),
            ["'name' must be between 3 and 255 characters"]
        );
    }

    // ========================================================================
    // Categories
    // ========================================================================

    #[test]
    fn add_categories_preserves_order_and_duplicates() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        let input = ids(&["b", "a", "b"]);

        genre.add_categories(input.clone());

        assert_eq!(genre.categories(), input.as_slice());
    }

    #[test]
    fn add_category_refreshes_updated_at() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        let before = genre.updated_at();
        pause();

        genre.add_category(CategoryId::from("123"));

        assert_eq!(genre.categories(), ids(&["123"]).as_slice());
        assert!(genre.updated_at() > before);
    }

    #[test]
    fn add_none_is_noop() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        let before = genre.clone();

        genre.add_category(None);
        genre.add_categories(None);

        assert_eq!(genre, before);
    }

    #[test]
    fn remove_category_removes_first_match_only() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        genre.add_categories(ids(&["1", "2", "1"]));

        genre.remove_category(&CategoryId::from("1"));

        assert_eq!(genre.categories(), ids(&["2", "1"]).as_slice());
    }

    #[test]
    fn remove_absent_or_none_is_noop() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        genre.add_category(CategoryId::from("1"));
        let before = genre.clone();

        genre.remove_category(&CategoryId::from("404"));
        genre.remove_category(None);

        assert_eq!(genre, before);
    }

    #[test]
    fn serde_uses_camel_case_fields() {
        let genre = Genre::new_genre(Some("Ação"), true).unwrap();
        let json = serde_json::to_value(&genre).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("deletedAt").is_some());

        let back: Genre = serde_json::from_value(json).unwrap();
        assert_eq!(back, genre);
    }
}
