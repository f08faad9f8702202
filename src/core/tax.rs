//! Yearly income tax models.
//!
//! The progressive model reproduces the German income tax tariff for a single
//! filer in the 2024 tax year. The flat model is a simple proportional rate and
//! is mostly useful for hand-checkable scenarios.

pub const BASIC_ALLOWANCE: f64 = 11_605.0;
pub const PROGRESSION_ZONE_2_START: f64 = 17_006.0;
pub const PROPORTIONAL_ZONE_START: f64 = 66_761.0;
pub const TOP_RATE_ZONE_START: f64 = 277_826.0;

const ZONE_1_OFFSET: f64 = 11_605.0;
const ZONE_1_SLOPE: f64 = 922.98;
const ZONE_1_BASE_RATE: f64 = 1_400.0;

const ZONE_2_OFFSET: f64 = 17_005.0;
const ZONE_2_SLOPE: f64 = 181.19;
const ZONE_2_BASE_RATE: f64 = 2_397.0;
const ZONE_2_CONSTANT: f64 = 1_025.38;

const PROPORTIONAL_RATE: f64 = 0.42;
const PROPORTIONAL_DEDUCTION: f64 = 10_602.13;
const TOP_RATE: f64 = 0.45;
const TOP_RATE_DEDUCTION: f64 = 18_936.88;

const ZONE_SCALE: f64 = 10_000.0;

pub const DEFAULT_FLAT_TAX_RATE: f64 = 0.2;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum IncomeTaxModel {
    #[default]
    Progressive,
    FlatRate(f64),
}

impl IncomeTaxModel {
    pub fn income_tax(self, taxable_income: f64) -> f64 {
        match self {
            IncomeTaxModel::Progressive => progressive_income_tax(taxable_income),
            IncomeTaxModel::FlatRate(rate) => rate * taxable_income,
        }
    }

    /// Tax owed on `base_income + additional` minus tax owed on `base_income`.
    pub fn marginal_tax(self, base_income: f64, additional: f64) -> f64 {
        self.income_tax(base_income + additional) - self.income_tax(base_income)
    }
}

/// Panics if `taxable_income` is NaN, the only value outside every zone.
pub fn progressive_income_tax(taxable_income: f64) -> f64 {
    let income = taxable_income;
    if income < BASIC_ALLOWANCE {
        0.0
    } else if income < PROGRESSION_ZONE_2_START {
        let z = (income - ZONE_1_OFFSET) / ZONE_SCALE;
        (ZONE_1_SLOPE * z + ZONE_1_BASE_RATE) * z
    } else if income < PROPORTIONAL_ZONE_START {
        let z = (income - ZONE_2_OFFSET) / ZONE_SCALE;
        (ZONE_2_SLOPE * z + ZONE_2_BASE_RATE) * z + ZONE_2_CONSTANT
    } else if income < TOP_RATE_ZONE_START {
        PROPORTIONAL_RATE * income - PROPORTIONAL_DEDUCTION
    } else if income >= TOP_RATE_ZONE_START {
        TOP_RATE * income - TOP_RATE_DEDUCTION
    } else {
        unreachable!("taxable income {income} lies outside every tax zone")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    // Published tariff constants are rounded to the cent, so adjacent zones
    // meet within a few tens of cents rather than exactly.
    const BOUNDARY_TOL: f64 = 0.5;

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn zone_1(income: f64) -> f64 {
        let z = (income - ZONE_1_OFFSET) / ZONE_SCALE;
        (ZONE_1_SLOPE * z + ZONE_1_BASE_RATE) * z
    }

    fn zone_2(income: f64) -> f64 {
        let z = (income - ZONE_2_OFFSET) / ZONE_SCALE;
        (ZONE_2_SLOPE * z + ZONE_2_BASE_RATE) * z + ZONE_2_CONSTANT
    }

    fn proportional(income: f64) -> f64 {
        PROPORTIONAL_RATE * income - PROPORTIONAL_DEDUCTION
    }

    fn top(income: f64) -> f64 {
        TOP_RATE * income - TOP_RATE_DEDUCTION
    }

    #[test]
    fn income_below_basic_allowance_is_tax_free() {
        assert_eq!(progressive_income_tax(0.0), 0.0);
        assert_eq!(progressive_income_tax(-5_000.0), 0.0);
        assert_eq!(progressive_income_tax(11_604.99), 0.0);
        assert_eq!(progressive_income_tax(BASIC_ALLOWANCE), 0.0);
    }

    #[test]
    fn proportional_zone_matches_hand_calculation() {
        assert_approx_tol(progressive_income_tax(100_000.0), 31_397.87, 1e-6);
    }

    #[test]
    fn top_zone_matches_hand_calculation() {
        assert_approx_tol(progressive_income_tax(300_000.0), 116_063.12, 1e-6);
    }

    #[test]
    fn zone_values_are_used_at_each_breakpoint() {
        assert_approx_tol(
            progressive_income_tax(PROGRESSION_ZONE_2_START),
            zone_2(PROGRESSION_ZONE_2_START),
            1e-9,
        );
        assert_approx_tol(
            progressive_income_tax(PROPORTIONAL_ZONE_START),
            proportional(PROPORTIONAL_ZONE_START),
            1e-9,
        );
        assert_approx_tol(
            progressive_income_tax(TOP_RATE_ZONE_START),
            top(TOP_RATE_ZONE_START),
            1e-9,
        );
    }

    #[test]
    fn tariff_is_continuous_at_zone_boundaries() {
        assert_approx_tol(zone_1(BASIC_ALLOWANCE), 0.0, 1e-9);
        assert_approx_tol(
            zone_1(PROGRESSION_ZONE_2_START),
            zone_2(PROGRESSION_ZONE_2_START),
            BOUNDARY_TOL,
        );
        assert_approx_tol(
            zone_2(PROPORTIONAL_ZONE_START),
            proportional(PROPORTIONAL_ZONE_START),
            BOUNDARY_TOL,
        );
        assert_approx_tol(
            proportional(TOP_RATE_ZONE_START),
            top(TOP_RATE_ZONE_START),
            BOUNDARY_TOL,
        );
    }

    #[test]
    fn flat_rate_model_is_proportional() {
        let model = IncomeTaxModel::FlatRate(DEFAULT_FLAT_TAX_RATE);
        assert_approx_tol(model.income_tax(100_000.0), 20_000.0, 1e-9);
        assert_approx_tol(model.marginal_tax(100_000.0, -1_000.0), -200.0, 1e-9);
    }

    #[test]
    fn marginal_tax_in_proportional_zone_uses_42_percent() {
        let diff = IncomeTaxModel::Progressive.marginal_tax(100_000.0, -1_777.12);
        assert_approx_tol(diff, -0.42 * 1_777.12, 1e-6);
    }

    #[test]
    #[should_panic(expected = "outside every tax zone")]
    fn nan_income_is_a_fatal_error() {
        progressive_income_tax(f64::NAN);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_tax_is_non_negative_and_non_decreasing(
            income in 0u32..600_000,
            step in 1u32..5_000
        ) {
            let low = income as f64;
            let high = low + step as f64;
            let low_tax = progressive_income_tax(low);
            let high_tax = progressive_income_tax(high);
            prop_assert!(low_tax >= 0.0);
            // Zone joins may dip by rounding of the published constants.
            prop_assert!(high_tax + BOUNDARY_TOL >= low_tax);
            prop_assert!(high_tax <= TOP_RATE * high);
        }
    }
}
