use std::cell::RefCell;

use chrono::{DateTime, TimeZone, Utc};

use snapfit_rs::SnapError;
use snapfit_rs::coach::{
    Coach, CompletionRequest, CompletionService, IdentityProvider, MealPlanRequest, PlanKind,
    PlanTier, authenticate,
};
use snapfit_rs::error::Result;
use snapfit_rs::models::{ActivityLevel, Goal, GoalIntensity};
use snapfit_rs::planner::compute_plan;
use snapfit_rs::state::UserStore;

struct TokenTable;

impl IdentityProvider for TokenTable {
    fn verify(&self, token: &str) -> Result<String> {
        match token {
            "t-free" => Ok("free-user".to_string()),
            "t-premium" => Ok("premium-user".to_string()),
            _ => Err(SnapError::Unauthorized("Invalid or expired auth token".into())),
        }
    }
}

/// Replays scripted replies and records the prompts it was sent.
struct ScriptedService {
    replies: RefCell<Vec<&'static str>>,
    seen: RefCell<Vec<CompletionRequest>>,
}

impl ScriptedService {
    fn new(replies: &[&'static str]) -> Self {
        Self {
            replies: RefCell::new(replies.iter().rev().copied().collect()),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl CompletionService for ScriptedService {
    fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.seen.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop()
            .map(str::to_string)
            .ok_or_else(|| SnapError::Completion("no reply scripted".into()))
    }
}

const MEALS: &str = "```json\n{\"summary\":\"high protein\",\"totalCalories\":2324,\"meals\":[{\"name\":\"Oats\"}]}\n```";

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

fn meal_request() -> MealPlanRequest {
    let plan = compute_plan(
        Some(82.0),
        Some(18.0),
        Some(ActivityLevel::Moderate),
        Some(GoalIntensity::Balanced),
        Some(Goal::FatLoss),
    )
    .unwrap();
    MealPlanRequest::from_plan(&plan, "fatloss", 4)
}

#[test]
fn test_meal_plan_from_macros_is_generated_and_stored() {
    let mut store = UserStore::default();
    let user = authenticate(&TokenTable, &mut store, Some("Bearer t-free"), at(2, 9)).unwrap();

    let coach = Coach::new(ScriptedService::new(&[MEALS])).with_model("test-model");
    let plan = coach
        .generate(&mut store, &user, &meal_request(), at(2, 9))
        .unwrap();

    assert_eq!(plan["meals"][0]["name"], "Oats");
    let doc = store.get("free-user").unwrap();
    assert_eq!(doc.usage.daily_count, 1);
    assert_eq!(doc.plans[&PlanKind::MealPlan].request["calories"], 2324);
}

#[test]
fn test_free_quota_resets_on_the_next_utc_day() {
    let mut store = UserStore::default();
    let user = authenticate(&TokenTable, &mut store, Some("Bearer t-free"), at(2, 9)).unwrap();
    let coach = Coach::new(ScriptedService::new(&[MEALS; 3])).with_free_daily_limit(2);

    coach.generate(&mut store, &user, &meal_request(), at(2, 9)).unwrap();
    coach.generate(&mut store, &user, &meal_request(), at(2, 23)).unwrap();
    let err = coach
        .generate(&mut store, &user, &meal_request(), at(2, 23))
        .unwrap_err();
    assert!(matches!(err, SnapError::QuotaExceeded { limit: 2 }));

    coach.generate(&mut store, &user, &meal_request(), at(3, 0)).unwrap();
    assert_eq!(store.get("free-user").unwrap().usage.used_on(at(3, 1)), 1);
}

#[test]
fn test_premium_users_are_not_counted() {
    let mut store = UserStore::default();
    store.set_tier("premium-user", PlanTier::Premium, at(2, 8));
    let user = authenticate(&TokenTable, &mut store, Some("Bearer t-premium"), at(2, 9)).unwrap();
    assert_eq!(user.tier, PlanTier::Premium);

    let coach = Coach::new(ScriptedService::new(&[MEALS; 4])).with_free_daily_limit(1);
    for _ in 0..4 {
        coach.generate(&mut store, &user, &meal_request(), at(2, 9)).unwrap();
    }
    assert_eq!(store.get("premium-user").unwrap().usage.daily_count, 0);
}

#[test]
fn test_malformed_reply_still_counts_against_quota() {
    let mut store = UserStore::default();
    let user = authenticate(&TokenTable, &mut store, Some("Bearer t-free"), at(2, 9)).unwrap();
    let coach = Coach::new(ScriptedService::new(&["Sorry, I can't help with that."]));

    let err = coach
        .generate(&mut store, &user, &meal_request(), at(2, 9))
        .unwrap_err();
    assert!(matches!(err, SnapError::MalformedResponse(_)));
    assert!(err.is_retryable());

    let doc = store.get("free-user").unwrap();
    assert_eq!(doc.usage.daily_count, 1);
    assert!(doc.plans.is_empty());
}

#[test]
fn test_bad_token_is_rejected() {
    let mut store = UserStore::default();
    let err = authenticate(&TokenTable, &mut store, Some("Bearer nope"), at(2, 9)).unwrap_err();
    assert!(matches!(err, SnapError::Unauthorized(_)));
    assert!(store.is_empty());
}

#[test]
fn test_chosen_tier_survives_reload_and_lifts_quota() {
    use snapfit_rs::cli::TierArg;
    use snapfit_rs::state::{load_store, save_store};
    use snapfit_rs::units::UnitPreferences;

    let mut store = UserStore::default();
    store.set_tier("free-user", TierArg::PremiumMonthly.into(), at(2, 8));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    save_store(&path, &store.to_documents()).unwrap();
    let mut store = UserStore::new(load_store(&path).unwrap(), UnitPreferences::default());

    let user = authenticate(&TokenTable, &mut store, Some("Bearer t-free"), at(2, 9)).unwrap();
    assert_eq!(user.tier, PlanTier::Premium);

    let coach = Coach::new(ScriptedService::new(&[MEALS; 3])).with_free_daily_limit(1);
    for _ in 0..3 {
        coach.generate(&mut store, &user, &meal_request(), at(2, 9)).unwrap();
    }
    assert_eq!(store.get("free-user").unwrap().usage.daily_count, 0);
}
