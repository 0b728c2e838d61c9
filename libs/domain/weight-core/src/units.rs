use serde::{Deserialize, Serialize};

use crate::errors::WeightCoreError;

/// Ceiling a single registered weight may not exceed, in kilograms.
pub const WEIGHT_CEILING_KG: i64 = 100_000;

const LBS_PER_KG: f64 = 0.453592;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    Lbs,
}

pub fn lbs_to_kg(lbs: i64) -> i64 {
    (lbs as f64 * LBS_PER_KG).round() as i64
}

pub fn kg_to_lbs(kg: i64) -> i64 {
    (kg as f64 / LBS_PER_KG).round() as i64
}

/// Normalizes a weight reading to kilograms; kg is the identity.
pub fn normalize_to_kg(weight: i64, unit: Unit) -> i64 {
    match unit {
        Unit::Kg => weight,
        Unit::Lbs => lbs_to_kg(weight),
    }
}

/// Validates an already-normalized kg weight: strictly positive, at most
/// [`WEIGHT_CEILING_KG`].
pub fn validate_weight_kg(weight_kg: i64) -> Result<(), WeightCoreError> {
    if weight_kg > 0 && weight_kg <= WEIGHT_CEILING_KG {
        Ok(())
    } else {
        Err(WeightCoreError::WeightOutOfRange {
            weight: weight_kg,
            ceiling: WEIGHT_CEILING_KG,
        })
    }
}

/// `neto = max(0, bruto_in - bruto_out)`.
pub fn calculate_net_weight(bruto_in: i64, bruto_out: i64) -> i64 {
    (bruto_in - bruto_out).max(0)
}

/// `truck_tara = max(0, bruto_out - container_tare_total)`.
pub fn calculate_truck_tara(bruto_out: i64, container_tare_total: i64) -> i64 {
    (bruto_out - container_tare_total).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_lbs_to_kg_by_rounding() {
        assert_eq!(lbs_to_kg(100), 45);
        assert_eq!(lbs_to_kg(220), 100);
    }

    #[test]
    fn converts_kg_to_lbs_by_rounding() {
        assert_eq!(kg_to_lbs(100), 220);
        assert_eq!(kg_to_lbs(45), 99);
    }

    #[test]
    fn kg_to_kg_normalization_is_identity() {
        assert_eq!(normalize_to_kg(100, Unit::Kg), normalize_to_kg(normalize_to_kg(100, Unit::Kg), Unit::Kg));
    }

    #[test]
    fn rejects_zero_and_negative_weight() {
        assert!(validate_weight_kg(0).is_err());
        assert!(validate_weight_kg(-5).is_err());
    }

    #[test]
    fn rejects_weight_above_ceiling() {
        assert!(validate_weight_kg(WEIGHT_CEILING_KG + 1).is_err());
        assert!(validate_weight_kg(WEIGHT_CEILING_KG).is_ok());
    }

    #[test]
    fn net_weight_clamps_at_zero() {
        assert_eq!(calculate_net_weight(10_000, 4_000), 6_000);
        assert_eq!(calculate_net_weight(3_000, 5_000), 0);
    }

    #[test]
    fn truck_tara_clamps_at_zero() {
        assert_eq!(calculate_truck_tara(10_000, 4_000), 6_000);
        assert_eq!(calculate_truck_tara(10_000, 12_000), 0);
    }

    proptest::proptest! {
        #[test]
        fn net_and_tara_are_never_negative(bruto_in in 0i64..1_000_000, bruto_out in 0i64..1_000_000) {
            proptest::prop_assert!(calculate_net_weight(bruto_in, bruto_out) >= 0);
            proptest::prop_assert!(calculate_truck_tara(bruto_in, bruto_out) >= 0);
        }

        #[test]
        fn kg_lbs_round_trip_stays_within_rounding_error(kg in 1i64..WEIGHT_CEILING_KG) {
            let round_tripped = lbs_to_kg(kg_to_lbs(kg));
            proptest::prop_assert!((round_tripped - kg).abs() <= 1);
        }
    }
}
