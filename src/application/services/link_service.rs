//! Link creation service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::expiry::compute_expiry;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{COLLISION_RETRY_BUDGET, generate_code, validate_custom_code};
use crate::utils::target_url::validate_target_url;
use serde_json::json;

/// Service orchestrating the link creation flow.
///
/// Validates input, computes the expiry instant, and drives the atomic
/// create-if-absent against the store. All validation happens before any
/// store mutation, so invalid input leaves no partial side effects.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - the URL to shorten; must be absolute with scheme + host
    /// - `validity_minutes` - optional lifetime in minutes (default 30)
    /// - `requested_code` - optional caller-chosen shortcode
    ///
    /// # Code allocation
    ///
    /// A caller-chosen code gets exactly one insert attempt; a duplicate is
    /// terminal and surfaces as [`AppError::ShortcodeConflict`]. Without a
    /// requested code, candidates are generated and retried on the store's
    /// duplicate signal, one initial attempt plus four retries; exhausting
    /// the budget surfaces as [`AppError::AllocationExhausted`].
    ///
    /// # Errors
    ///
    /// [`AppError::InvalidUrl`], [`AppError::InvalidValidity`],
    /// [`AppError::InvalidShortcode`] on invalid input;
    /// [`AppError::Internal`] on store failures.
    pub async fn create_link(
        &self,
        target_url: String,
        validity_minutes: Option<&serde_json::Number>,
        requested_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target_url(&target_url).map_err(|e| {
            AppError::invalid_url(
                "Invalid 'url'. Provide a valid URL string.",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let expires_at = compute_expiry(validity_minutes)?;

        if let Some(code) = requested_code {
            validate_custom_code(&code)?;

            let new_link = NewLink {
                code: code.clone(),
                long_url: target_url,
                expires_at,
            };

            return match self.repository.create_if_absent(new_link).await? {
                Some(link) => Ok(link),
                None => Err(AppError::conflict(
                    "Shortcode already in use.",
                    json!({ "shortcode": code }),
                )),
            };
        }

        // One initial attempt plus the retry budget.
        for _ in 0..=COLLISION_RETRY_BUDGET {
            let code = generate_code();
            let new_link = NewLink {
                code,
                long_url: target_url.clone(),
                expires_at,
            };

            if let Some(link) = self.repository.create_if_absent(new_link).await? {
                return Ok(link);
            }
        }

        tracing::error!(
            attempts = COLLISION_RETRY_BUDGET + 1,
            "shortcode allocation exhausted"
        );
        Err(AppError::AllocationExhausted {
            details: json!({ "attempts": COLLISION_RETRY_BUDGET + 1 }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::{Duration, Utc};
    use serde_json::Number;

    fn created(code: &str, url: &str) -> Link {
        Link::new(
            1,
            code.to_string(),
            url.to_string(),
            Utc::now(),
            Utc::now() + Duration::minutes(30),
            0,
        )
    }

    #[tokio::test]
    async fn test_create_link_generates_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create_if_absent()
            .withf(|new_link| new_link.code.len() == 7)
            .times(1)
            .returning(|new_link| Ok(Some(created(&new_link.code, &new_link.long_url))));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_link("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(link.long_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_create_link_with_requested_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create_if_absent()
            .withf(|new_link| new_link.code == "abc123")
            .times(1)
            .returning(|new_link| Ok(Some(created(&new_link.code, &new_link.long_url))));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_link(
                "https://a.com".to_string(),
                None,
                Some("abc123".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(link.code, "abc123");
    }

    #[tokio::test]
    async fn test_requested_code_conflict_is_terminal() {
        let mut mock_repo = MockLinkRepository::new();

        // Exactly one attempt, no retry for caller-chosen codes.
        mock_repo
            .expect_create_if_absent()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link(
                "https://a.com".to_string(),
                None,
                Some("abc123".to_string()),
            )
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::ShortcodeConflict { .. }
        ));
    }

    #[tokio::test]
    async fn test_generated_code_retries_on_collision() {
        let mut mock_repo = MockLinkRepository::new();

        let mut attempts = 0;
        mock_repo
            .expect_create_if_absent()
            .times(3)
            .returning(move |new_link| {
                attempts += 1;
                if attempts < 3 {
                    Ok(None)
                } else {
                    Ok(Some(created(&new_link.code, &new_link.long_url)))
                }
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link("https://example.com".to_string(), None, None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_generated_code_budget_exhausted() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create_if_absent()
            .times(5)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link("https://example.com".to_string(), None, None)
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::AllocationExhausted { .. }
        ));
    }

    #[tokio::test]
    async fn test_invalid_url_rejected_before_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create_if_absent().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link("not-a-url".to_string(), None, None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_invalid_validity_rejected_before_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create_if_absent().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let n = Number::from(-1);
        let result = service
            .create_link("https://example.com".to_string(), Some(&n), None)
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::InvalidValidity { .. }
        ));
    }

    #[tokio::test]
    async fn test_invalid_shortcode_rejected_before_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create_if_absent().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link("https://example.com".to_string(), None, Some("a!".to_string()))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::InvalidShortcode { .. }
        ));
    }
}
