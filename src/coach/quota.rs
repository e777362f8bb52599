use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::coach::identity::PlanTier;
use crate::error::{Result, SnapError};

/// Free-tier AI requests per UTC day.
pub const DEFAULT_FREE_DAILY_LIMIT: u32 = 5;

/// Per-user AI request counter for one UTC day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCounter {
    /// `YYYY-MM-DD` of the day `daily_count` belongs to.
    #[serde(default)]
    pub day_key: String,
    #[serde(default)]
    pub daily_count: u32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Result of a quota check that let the request through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaGrant {
    /// `None` for unlimited tiers.
    pub limit: Option<u32>,
    pub used_today: u32,
}

pub fn day_key(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

impl UsageCounter {
    /// Requests already made on the day of `now`.
    pub fn used_on(&self, now: DateTime<Utc>) -> u32 {
        if self.day_key == day_key(now) {
            self.daily_count
        } else {
            0
        }
    }
}

/// Count one AI request against the user's daily allowance.
///
/// Unlimited tiers are never counted. A counter from an earlier day starts
/// over at zero. A denied request leaves the counter unchanged.
pub fn enforce_ai_quota(
    counter: &mut UsageCounter,
    tier: PlanTier,
    now: DateTime<Utc>,
    free_limit: u32,
) -> Result<QuotaGrant> {
    if tier.is_unlimited() {
        return Ok(QuotaGrant {
            limit: None,
            used_today: counter.used_on(now),
        });
    }

    let count = counter.used_on(now);
    if count >= free_limit {
        warn!(tier = tier.as_str(), count, limit = free_limit, "daily AI quota exhausted");
        return Err(SnapError::QuotaExceeded { limit: free_limit });
    }

    counter.day_key = day_key(now);
    counter.daily_count = count + 1;
    counter.updated_at = Some(now);

    Ok(QuotaGrant {
        limit: Some(free_limit),
        used_today: counter.daily_count,
    })
}
