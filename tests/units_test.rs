use assert_float_eq::assert_float_absolute_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use snapfit_rs::units::{
    KG_PER_LB, LengthUnit, WeightUnit, cm_to_feet_inches, height_to_cm, kg_to_lbs, weight_to_kg,
};

#[test]
fn test_pounds_round_trip_within_half_a_kilo() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let lbs = rng.gen_range(60.0..500.0);
        let kg = weight_to_kg(WeightUnit::Lbs, lbs).unwrap();
        assert_eq!(kg, kg.round());
        assert_float_absolute_eq!(kg_to_lbs(kg), lbs, 0.5 / KG_PER_LB + 1e-9);
    }
}

#[test]
fn test_kilograms_pass_through() {
    assert_float_absolute_eq!(weight_to_kg(WeightUnit::Kg, 71.3).unwrap(), 71.3, 1e-12);
}

#[test]
fn test_heights_round_trip_within_two_cm() {
    for cm in 120..=220 {
        let (feet, inches) = cm_to_feet_inches(f64::from(cm));
        let back = height_to_cm(
            LengthUnit::Imperial,
            Some(f64::from(feet)),
            Some(f64::from(inches)),
            None,
        )
        .unwrap();
        assert_float_absolute_eq!(back, f64::from(cm), 2.0);
    }
}

#[test]
fn test_imperial_height_examples() {
    let h = height_to_cm(LengthUnit::Imperial, Some(5.0), Some(10.0), None).unwrap();
    assert_eq!(h, 178.0);
    let blank_inches = height_to_cm(LengthUnit::Imperial, Some(6.0), None, None).unwrap();
    assert_eq!(blank_inches, 183.0);
}

#[test]
fn test_feet_and_inches_round_trip_within_one_inch() {
    for feet in 3..=8u32 {
        for inches in 0..=11u32 {
            let cm = height_to_cm(
                LengthUnit::Imperial,
                Some(f64::from(feet)),
                Some(f64::from(inches)),
                None,
            )
            .unwrap();
            let (back_feet, back_inches) = cm_to_feet_inches(cm);
            let entered = i64::from(feet * 12 + inches);
            let recovered = i64::from(back_feet * 12 + back_inches);
            assert!(
                (entered - recovered).abs() <= 1,
                "{}'{}\" came back as {}'{}\"",
                feet,
                inches,
                back_feet,
                back_inches
            );
        }
    }
}
