mod conversion;
mod preferences;

pub use conversion::{
    CM_PER_INCH, KG_PER_LB, LengthUnit, WeightUnit, cm_to_feet_inches, height_to_cm, kg_to_lbs,
    weight_to_kg,
};
pub use preferences::UnitPreferences;
