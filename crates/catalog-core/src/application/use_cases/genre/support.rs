//! Helpers shared by the create and update use cases.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{
    application::ports::CategoryGateway,
    domain::{CategoryId, DomainError, Notification, ValidationError},
    error::{CatalogError, CatalogResult},
};

pub(super) fn to_category_ids(raw: &[String]) -> Vec<CategoryId> {
    raw.iter().map(|id| CategoryId::from(id.as_str())).collect()
}

/// Check that every requested category exists.
///
/// Returns an empty report for an empty request without calling the
/// oracle. Otherwise the oracle is asked once, with duplicates dropped, and
/// the ids it did not return are reported in request order as a single
/// error. An oracle failure is returned as-is.
pub(super) fn validate_categories(
    gateway: &dyn CategoryGateway,
    requested: &[CategoryId],
) -> CatalogResult<Notification> {
    let mut notification = Notification::create();
    if requested.is_empty() {
        return Ok(notification);
    }

    let mut seen = HashSet::new();
    let unique: Vec<CategoryId> = requested
        .iter()
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect();

    let existing: HashSet<CategoryId> = gateway.exists_by_ids(&unique)?.into_iter().collect();

    let missing: Vec<&str> = unique
        .iter()
        .filter(|id| !existing.contains(*id))
        .map(CategoryId::as_str)
        .collect();

    if !missing.is_empty() {
        debug!(missing = missing.len(), "Requested categories not found");
        notification.append(ValidationError::new(format!(
            "Some categories could not be found: {}",
            missing.join(",")
        )));
    }

    Ok(notification)
}

/// Turn a store failure on the write path into a single-error validation
/// failure, so create/update callers only see validation or not-found.
pub(super) fn store_failure(context: &str, err: CatalogError) -> CatalogError {
    warn!(error = %err, "{}", context);
    let message = match &err {
        CatalogError::Application(inner) => inner.to_string(),
        other => other.to_string(),
    };
    DomainError::validation(context, Notification::from_error(ValidationError::new(message)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockCategoryGateway};

    fn ids(raw: &[&str]) -> Vec<CategoryId> {
        raw.iter().map(|s| CategoryId::from(*s)).collect()
    }

    #[test]
    fn empty_request_skips_oracle() {
        let mut gateway = MockCategoryGateway::new();
        gateway.expect_exists_by_ids().never();

        let notification = validate_categories(&gateway, &[]).unwrap();

        assert!(!notification.has_error());
    }

    #[test]
    fn all_present_yields_no_error() {
        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_exists_by_ids()
            .times(1)
            .returning(|ids| Ok(ids.to_vec()));

        let notification = validate_categories(&gateway, &ids(&["1", "2"])).unwrap();

        assert!(!notification.has_error());
    }

    #[test]
    fn missing_ids_listed_in_request_order() {
        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_exists_by_ids()
            .times(1)
            .returning(|_| Ok(vec![CategoryId::from("2")]));

        let notification = validate_categories(&gateway, &ids(&["3", "2", "1"])).unwrap();

        assert_eq!(notification.len(), 1);
        assert_eq!(
            notification.first_error().unwrap().message(),
            "Some categories could not be found: 3,1"
        );
    }

    #[test]
    fn duplicates_are_asked_and_reported_once() {
        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_exists_by_ids()
            .withf(|ids: &[CategoryId]| ids == ["123", "456"].map(CategoryId::from).as_slice())
            .times(1)
            .returning(|_| Ok(vec![]));

        let notification =
            validate_categories(&gateway, &ids(&["123", "123", "456"])).unwrap();

        assert_eq!(
            notification.to_string(),
            "Some categories could not be found: 123,456"
        );
    }

    #[test]
    fn duplicate_of_existing_id_is_not_an_error() {
        let mut gateway = MockCategoryGateway::new();
        gateway
            .expect_exists_by_ids()
            .returning(|_| Ok(vec![CategoryId::from("1")]));

        let notification = validate_categories(&gateway, &ids(&["1", "1"])).unwrap();

        assert!(!notification.has_error());
    }

    #[test]
    fn oracle_failure_propagates() {
        let mut gateway = MockCategoryGateway::new();
        gateway.expect_exists_by_ids().returning(|_| {
            Err(ApplicationError::StoreFailure {
                reason: "offline".into(),
            }
            .into())
        });

        let err = validate_categories(&gateway, &ids(&["1"])).unwrap_err();

        assert!(matches!(err, CatalogError::Application(_)));
    }

    #[test]
    fn store_failure_becomes_single_validation_error() {
        let err = store_failure(
            "Could not persist Genre",
            ApplicationError::StoreFailure {
                reason: "Gateway error".into(),
            }
            .into(),
        );

        let notification = err.notification().unwrap();
        assert_eq!(notification.len(), 1);
        assert_eq!(
            notification.first_error().unwrap().message(),
            "Store operation failed: Gateway error"
        );
    }
}
