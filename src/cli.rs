use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::coach::PlanTier;
use crate::units::{LengthUnit, WeightUnit};

/// SnapFIT: macro targets, food lookup and goal tracking.
#[derive(Parser, Debug)]
#[command(name = "snapfit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the JSON config file.
    #[arg(short, long, env = "SNAPFIT_CONFIG", default_value = "snapfit.json")]
    pub config: PathBuf,

    /// Path to the user store JSON file (overrides the config).
    #[arg(short, long, env = "SNAPFIT_STORE")]
    pub store: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeightUnitArg {
    Lbs,
    Kg,
}

impl From<WeightUnitArg> for WeightUnit {
    fn from(arg: WeightUnitArg) -> Self {
        match arg {
            WeightUnitArg::Lbs => WeightUnit::Lbs,
            WeightUnitArg::Kg => WeightUnit::Kg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LengthUnitArg {
    Imperial,
    Metric,
}

impl From<LengthUnitArg> for LengthUnit {
    fn from(arg: LengthUnitArg) -> Self {
        match arg {
            LengthUnitArg::Imperial => LengthUnit::Imperial,
            LengthUnitArg::Metric => LengthUnit::Metric,
        }
    }
}

/// Plans a user can pick. Both premium billing periods are the same tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TierArg {
    #[value(name = "free")]
    Free,
    #[value(name = "premium_monthly")]
    PremiumMonthly,
    #[value(name = "premium_yearly")]
    PremiumYearly,
    #[value(name = "premium_trial")]
    PremiumTrial,
    #[value(name = "elite")]
    Elite,
}

impl TierArg {
    pub fn as_str(self) -> &'static str {
        match self {
            TierArg::Free => "free",
            TierArg::PremiumMonthly => "premium_monthly",
            TierArg::PremiumYearly => "premium_yearly",
            TierArg::PremiumTrial => "premium_trial",
            TierArg::Elite => "elite",
        }
    }
}

impl From<TierArg> for PlanTier {
    fn from(arg: TierArg) -> Self {
        PlanTier::parse(arg.as_str())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute daily calorie and macro targets.
    Plan {
        /// Body weight, in --weight-unit.
        #[arg(long)]
        weight: f64,

        /// Unit of --weight (defaults to the configured unit).
        #[arg(long, value_enum)]
        weight_unit: Option<WeightUnitArg>,

        /// Body fat percentage (defaults to the configured value).
        #[arg(long)]
        body_fat: Option<f64>,

        /// sedentary, light, moderate, active or athlete.
        #[arg(long)]
        activity: String,

        /// fatloss, lean, recomp, muscle, bulk or maintain.
        #[arg(long)]
        goal: Option<String>,

        /// aggressive, balanced or clean.
        #[arg(long)]
        intensity: Option<String>,

        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run the interactive goal wizard and save the plan.
    Wizard {
        #[arg(short, long, default_value = "local")]
        user: String,
    },

    /// Show the saved plan for a user.
    Show {
        #[arg(short, long, default_value = "local")]
        user: String,
    },

    /// Estimate nutrition for a food label.
    Lookup {
        /// Free-text food description.
        label: String,

        /// Portion size in grams.
        #[arg(long)]
        grams: Option<f64>,
    },

    /// List the reference food table.
    Foods,

    /// Log a body measurement.
    Measure {
        #[arg(short, long, default_value = "local")]
        user: String,

        #[arg(long)]
        weight: f64,

        #[arg(long)]
        waist: Option<f64>,

        #[arg(long)]
        chest: Option<f64>,

        #[arg(long)]
        hips: Option<f64>,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List recent measurements.
    History {
        #[arg(short, long, default_value = "local")]
        user: String,

        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Show today's calorie, protein and workout progress.
    Progress {
        #[arg(short, long, default_value = "local")]
        user: String,

        /// Food eaten as "label:grams"; repeatable.
        #[arg(long = "food")]
        foods: Vec<String>,

        /// Workouts done this week, as "done/target".
        #[arg(long, default_value = "0/5")]
        workouts: String,
    },

    /// Show a user's tier and today's AI usage.
    Quota {
        #[arg(short, long, default_value = "local")]
        user: String,
    },

    /// Choose a user's plan tier.
    Tier {
        #[arg(short, long, default_value = "local")]
        user: String,

        #[arg(long, value_enum)]
        plan: TierArg,
    },

    /// Update a user's preferred units.
    Units {
        #[arg(short, long, default_value = "local")]
        user: String,

        #[arg(long, value_enum)]
        weight: Option<WeightUnitArg>,

        #[arg(long, value_enum)]
        length: Option<LengthUnitArg>,
    },
}

/// Parse a "label:grams" food entry. The label may itself contain colons.
pub fn parse_food_entry(entry: &str) -> Option<(&str, f64)> {
    let (label, grams) = entry.rsplit_once(':')?;
    let grams: f64 = grams.trim().parse().ok()?;
    let label = label.trim();
    if label.is_empty() || !grams.is_finite() {
        return None;
    }
    Some((label, grams))
}

/// Parse a "done/target" workout count.
pub fn parse_workouts(value: &str) -> Option<(u32, u32)> {
    let (done, target) = value.split_once('/')?;
    Some((done.trim().parse().ok()?, target.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_food_entry() {
        assert_eq!(parse_food_entry("grilled salmon:180"), Some(("grilled salmon", 180.0)));
        assert_eq!(parse_food_entry("rice: 150.5"), Some(("rice", 150.5)));
        assert_eq!(parse_food_entry("rice"), None);
        assert_eq!(parse_food_entry(":100"), None);
        assert_eq!(parse_food_entry("pizza:lots"), None);
    }

    #[test]
    fn test_parse_workouts() {
        assert_eq!(parse_workouts("4/5"), Some((4, 5)));
        assert_eq!(parse_workouts("4"), None);
    }

    #[test]
    fn test_tier_names_map_to_plan_tiers() {
        let cli = Cli::try_parse_from(["snapfit", "tier", "--plan", "premium_yearly"]).unwrap();
        let Command::Tier { user, plan } = cli.command else {
            panic!("expected the tier command");
        };
        assert_eq!(user, "local");
        assert_eq!(PlanTier::from(plan), PlanTier::Premium);

        assert_eq!(PlanTier::from(TierArg::PremiumMonthly), PlanTier::Premium);
        assert_eq!(PlanTier::from(TierArg::PremiumTrial), PlanTier::PremiumTrial);
        assert_eq!(PlanTier::from(TierArg::Elite), PlanTier::Elite);
        assert_eq!(PlanTier::from(TierArg::Free), PlanTier::Free);
        assert!(Cli::try_parse_from(["snapfit", "tier", "--plan", "gold"]).is_err());
    }

    #[test]
    fn test_cli_parses_plan() {
        let cli = Cli::try_parse_from([
            "snapfit", "plan", "--weight", "180", "--weight-unit", "lbs", "--activity", "moderate",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Plan { weight, .. } if weight == 180.0));
    }
}
