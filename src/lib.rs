pub mod chart;
pub mod cli;
pub mod coach;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod planner;
pub mod state;
pub mod units;
pub mod wizard;

pub use error::{Result, SnapError};
pub use models::MacroPlan;
pub use nutrition::match_food;
pub use planner::compute_plan;
