use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::coach::{PlanKind, PlanTier, UsageCounter};
use crate::error::{Result, SnapError};
use crate::models::{MacroPlan, Measurement};
use crate::units::UnitPreferences;
use crate::wizard::{GoalFormData, WizardOutcome};

/// Per-user profile settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDoc {
    pub plan_tier: PlanTier,
    pub units: UnitPreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The latest completed wizard run and its plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsDoc {
    pub form: GoalFormData,
    pub macro_plan: MacroPlan,
    pub updated_at: DateTime<Utc>,
}

/// The most recent AI-generated plan of one kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPlan {
    pub request: serde_json::Value,
    pub plan: serde_json::Value,
    pub generated_at: DateTime<Utc>,
}

/// Everything stored for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub profile: ProfileDoc,
    #[serde(default)]
    pub goals: Option<GoalsDoc>,
    #[serde(default)]
    pub usage: UsageCounter,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
    #[serde(default)]
    pub plans: BTreeMap<PlanKind, StoredPlan>,
}

impl UserDocument {
    fn new(units: UnitPreferences, now: DateTime<Utc>) -> Self {
        Self {
            profile: ProfileDoc {
                plan_tier: PlanTier::Free,
                units,
                created_at: now,
                updated_at: now,
            },
            goals: None,
            usage: UsageCounter::default(),
            measurements: Vec::new(),
            plans: BTreeMap::new(),
        }
    }
}

/// Holds user documents keyed by user id.
#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<String, UserDocument>,
    default_units: UnitPreferences,
}

impl UserStore {
    pub fn new(users: HashMap<String, UserDocument>, default_units: UnitPreferences) -> Self {
        Self {
            users,
            default_units,
        }
    }

    pub fn get(&self, uid: &str) -> Option<&UserDocument> {
        self.users.get(uid)
    }

    pub fn get_mut(&mut self, uid: &str) -> Result<&mut UserDocument> {
        self.users
            .get_mut(uid)
            .ok_or_else(|| SnapError::UserNotFound(uid.to_string()))
    }

    /// Fetch a user, creating a free-tier profile on first access.
    pub fn ensure_user(&mut self, uid: &str, now: DateTime<Utc>) -> &mut UserDocument {
        let units = self.default_units;
        self.users.entry(uid.to_string()).or_insert_with(|| {
            info!(uid, "creating user profile");
            UserDocument::new(units, now)
        })
    }

    pub fn set_tier(&mut self, uid: &str, tier: PlanTier, now: DateTime<Utc>) {
        let user = self.ensure_user(uid, now);
        user.profile.plan_tier = tier;
        user.profile.updated_at = now;
    }

    pub fn set_units(&mut self, uid: &str, units: UnitPreferences, now: DateTime<Utc>) {
        let user = self.ensure_user(uid, now);
        user.profile.units = units;
        user.profile.updated_at = now;
    }

    /// Replace the user's goals with a finished wizard run.
    pub fn save_goals(
        &mut self,
        uid: &str,
        form: &GoalFormData,
        outcome: &WizardOutcome,
        now: DateTime<Utc>,
    ) {
        let user = self.ensure_user(uid, now);
        user.goals = Some(GoalsDoc {
            form: form.clone(),
            macro_plan: outcome.macro_plan,
            updated_at: now,
        });
        info!(uid, calories = outcome.macro_plan.calories_kcal, "saved goals");
    }

    pub fn add_measurement(&mut self, uid: &str, measurement: Measurement) {
        let user = self.ensure_user(uid, measurement.created_at);
        user.measurements.push(measurement);
    }

    /// Up to `limit` measurements, newest first.
    pub fn recent_measurements(&self, uid: &str, limit: usize) -> Vec<&Measurement> {
        let Some(user) = self.users.get(uid) else {
            return Vec::new();
        };
        let mut entries: Vec<&Measurement> = user.measurements.iter().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit);
        entries
    }

    pub fn store_plan(&mut self, uid: &str, kind: PlanKind, plan: StoredPlan) {
        let user = self.ensure_user(uid, plan.generated_at);
        user.plans.insert(kind, plan);
        info!(uid, kind = kind.as_str(), "stored generated plan");
    }

    /// Clone out all documents for persistence.
    pub fn to_documents(&self) -> HashMap<String, UserDocument> {
        self.users.clone()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
