use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapError};
use crate::state::UserStore;

/// Subscription tier of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanTier {
    #[default]
    Free,
    Premium,
    Elite,
    PremiumTrial,
}

impl PlanTier {
    /// Parse a tier name case-insensitively. Unknown tiers are `Free`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "premium" | "premium_monthly" | "premium_yearly" => PlanTier::Premium,
            "elite" => PlanTier::Elite,
            "premium_trial" => PlanTier::PremiumTrial,
            _ => PlanTier::Free,
        }
    }

    /// Tiers that skip the daily AI quota.
    pub fn is_unlimited(self) -> bool {
        !matches!(self, PlanTier::Free)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Premium => "premium",
            PlanTier::Elite => "elite",
            PlanTier::PremiumTrial => "premium_trial",
        }
    }
}

impl From<String> for PlanTier {
    fn from(value: String) -> Self {
        PlanTier::parse(&value)
    }
}

impl From<PlanTier> for String {
    fn from(tier: PlanTier) -> Self {
        tier.as_str().to_string()
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller whose credential has been verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub uid: String,
    pub tier: PlanTier,
}

/// Verifies bearer credentials with the identity provider.
pub trait IdentityProvider {
    /// Return the user id for a valid token.
    fn verify(&self, token: &str) -> Result<String>;
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str> {
    header
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SnapError::Unauthorized("Missing Authorization header".to_string()))
}

/// Verify the caller and resolve their tier from the store.
///
/// First-time users get a free-tier profile.
pub fn authenticate(
    provider: &dyn IdentityProvider,
    store: &mut UserStore,
    authorization: Option<&str>,
    now: DateTime<Utc>,
) -> Result<AuthenticatedUser> {
    let token = bearer_token(authorization)?;
    let uid = provider.verify(token)?;
    let tier = store.ensure_user(&uid, now).profile.plan_tier;
    Ok(AuthenticatedUser { uid, tier })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticProvider;

    impl IdentityProvider for StaticProvider {
        fn verify(&self, token: &str) -> Result<String> {
            match token {
                "good-token" => Ok("user-42".to_string()),
                _ => Err(SnapError::Unauthorized("Invalid or expired auth token".into())),
            }
        }
    }

    #[test]
    fn test_tier_parse_case_insensitive() {
        assert_eq!(PlanTier::parse("PREMIUM"), PlanTier::Premium);
        assert_eq!(PlanTier::parse("Elite"), PlanTier::Elite);
        assert_eq!(PlanTier::parse("gold"), PlanTier::Free);
        assert!(PlanTier::PremiumTrial.is_unlimited());
        assert!(!PlanTier::Free.is_unlimited());
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(Some("Bearer abc")).unwrap(), "abc");
        assert!(bearer_token(Some("Basic abc")).is_err());
        assert!(bearer_token(Some("Bearer ")).is_err());
        assert!(bearer_token(None).is_err());
    }

    #[test]
    fn test_authenticate_creates_free_user() {
        let mut store = UserStore::default();
        let user = authenticate(&StaticProvider, &mut store, Some("Bearer good-token"), Utc::now())
            .unwrap();
        assert_eq!(user.uid, "user-42");
        assert_eq!(user.tier, PlanTier::Free);
        assert!(store.get("user-42").is_some());
    }

    #[test]
    fn test_authenticate_rejects_bad_token() {
        let mut store = UserStore::default();
        let err = authenticate(&StaticProvider, &mut store, Some("Bearer nope"), Utc::now())
            .unwrap_err();
        assert!(matches!(err, SnapError::Unauthorized(_)));
        assert!(store.is_empty());
    }
}
