use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info;

use crate::coach::identity::AuthenticatedUser;
use crate::coach::quota::{DEFAULT_FREE_DAILY_LIMIT, enforce_ai_quota};
use crate::coach::requests::{CompletionRequest, DEFAULT_MODEL, PlanRequest};
use crate::coach::response::parse_plan;
use crate::error::Result;
use crate::state::{StoredPlan, UserStore};

/// An AI chat completion backend.
pub trait CompletionService {
    /// Send the request and return the assistant message content.
    fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Generates AI plans behind the daily quota gate.
pub struct Coach<S> {
    service: S,
    model: String,
    free_daily_limit: u32,
}

impl<S: CompletionService> Coach<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            model: DEFAULT_MODEL.to_string(),
            free_daily_limit: DEFAULT_FREE_DAILY_LIMIT,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_free_daily_limit(mut self, limit: u32) -> Self {
        self.free_daily_limit = limit;
        self
    }

    /// Validate, count against the quota, call the service, parse and store.
    ///
    /// Invalid requests fail before the quota is touched. A request that
    /// passes the gate stays counted even if the service or parsing fails.
    pub fn generate<R: PlanRequest>(
        &self,
        store: &mut UserStore,
        user: &AuthenticatedUser,
        request: &R,
        now: DateTime<Utc>,
    ) -> Result<Value> {
        let completion = request.to_completion(&self.model)?;

        let doc = store.ensure_user(&user.uid, now);
        let grant = enforce_ai_quota(&mut doc.usage, user.tier, now, self.free_daily_limit)?;
        info!(
            uid = %user.uid,
            kind = completion.kind.as_str(),
            used_today = grant.used_today,
            "requesting AI plan"
        );

        let content = self.service.complete(&completion)?;
        let plan = parse_plan(completion.kind, &content)?;

        store.store_plan(
            &user.uid,
            completion.kind,
            StoredPlan {
                request: serde_json::to_value(request)?,
                plan: plan.clone(),
                generated_at: now,
            },
        );

        Ok(plan)
    }
}
