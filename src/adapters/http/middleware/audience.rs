//! Caller audience extraction from the `x-role` header.
//!
//! The role header is an unauthenticated assertion. Without an upstream
//! gateway that sets it, it can only ever downgrade a caller, so clinical
//! access is granted only when [`AccessPolicy::trust_role_header`] is on.

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::Audience;

/// Header carrying the caller role.
pub const ROLE_HEADER: &str = "x-role";

/// How far the role header is believed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    pub trust_role_header: bool,
}

impl AccessPolicy {
    /// Resolves the caller audience from the raw header value.
    ///
    /// - missing header: de-identified
    /// - unknown role: rejected as a bad request
    /// - clinician without header trust: forbidden
    pub fn audience_for(&self, role: Option<&str>) -> Result<Audience, ApiError> {
        let Some(role) = role else {
            return Ok(Audience::Deidentified);
        };

        match Audience::from_role(role)? {
            Audience::Identified if !self.trust_role_header => Err(ApiError::forbidden(
                "Identified data requires a trusted clinician role",
            )),
            audience => Ok(audience),
        }
    }
}

/// Extractor yielding the audience the caller may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerAudience(pub Audience);

#[async_trait]
impl<S> FromRequestParts<S> for CallerAudience
where
    S: Send + Sync,
    AccessPolicy: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let policy = AccessPolicy::from_ref(state);
        let role = parts
            .headers
            .get(ROLE_HEADER)
            .map(|value| {
                value.to_str().map_err(|_| ApiError::BadRequest {
                    message: format!("Header '{}' must be visible ASCII", ROLE_HEADER),
                    details: None,
                })
            })
            .transpose()?;

        policy.audience_for(role).map(CallerAudience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    const TRUSTING: AccessPolicy = AccessPolicy {
        trust_role_header: true,
    };
    const STRICT: AccessPolicy = AccessPolicy {
        trust_role_header: false,
    };

    #[test]
    fn missing_header_is_deidentified() {
        assert_eq!(STRICT.audience_for(None).unwrap(), Audience::Deidentified);
    }

    #[test]
    fn researcher_is_always_allowed() {
        assert_eq!(
            STRICT.audience_for(Some("researcher")).unwrap(),
            Audience::Deidentified
        );
    }

    #[test]
    fn clinician_needs_trust() {
        assert!(matches!(
            STRICT.audience_for(Some("clinician")),
            Err(ApiError::Forbidden(_))
        ));
        assert_eq!(
            TRUSTING.audience_for(Some("Clinician")).unwrap(),
            Audience::Identified
        );
    }

    #[test]
    fn unknown_role_is_bad_request() {
        assert!(matches!(
            TRUSTING.audience_for(Some("admin")),
            Err(ApiError::Service(_))
        ));
    }

    #[tokio::test]
    async fn extracts_from_request_parts() {
        let request = Request::builder()
            .uri("/api/entities")
            .header(ROLE_HEADER, "clinician")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let CallerAudience(audience) = CallerAudience::from_request_parts(&mut parts, &TRUSTING)
            .await
            .unwrap();
        assert_eq!(audience, Audience::Identified);
    }
}
