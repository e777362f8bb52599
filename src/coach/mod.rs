//! Contracts with the external services around the macro engine: identity,
//! the daily AI quota, and the AI completion API.
//!
//! The `snapfit` binary does not call an AI backend. Embedders supply an
//! `IdentityProvider` and a `CompletionService` and drive `Coach::generate`;
//! the CLI only records tiers and reports the usage counter.

pub mod identity;
pub mod quota;
pub mod requests;
pub mod response;
pub mod service;

pub use identity::{AuthenticatedUser, IdentityProvider, PlanTier, authenticate, bearer_token};
pub use quota::{DEFAULT_FREE_DAILY_LIMIT, QuotaGrant, UsageCounter, day_key, enforce_ai_quota};
pub use requests::{
    CompletionRequest, DEFAULT_MODEL, GroceryRequest, MealPlanRequest, PlanKind, PlanRequest,
    WorkoutRequest,
};
pub use response::parse_plan;
pub use service::{Coach, CompletionService};
