pub mod food;
pub mod goal;
pub mod measurement;
pub mod plan;
pub mod profile;

pub use food::{FoodRecord, NutritionEstimate};
pub use goal::{ActivityAndGoal, ActivityLevel, CalorieDirection, Goal, GoalIntensity};
pub use measurement::Measurement;
pub use plan::{MacroPlan, PlanMeta};
pub use profile::{BodyProfile, Gender, RawUnitEntry};
