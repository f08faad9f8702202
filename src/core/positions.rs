//! Yearly income and cost line items.
//!
//! Every position yields one signed amount per simulated year: positive values
//! are inflows or gains, negative values are costs. `evaluate` advances any
//! running state (debt balance, appreciated price, write-off counter) by exactly
//! one year, so callers must invoke it once per year in year order.

use super::tax_context::{TaxContext, UsageContext};

pub const N_MONTHS: u32 = 12;
const MONTHS_PER_YEAR: f64 = N_MONTHS as f64;

pub const APPROXIMATE_LAND_SHARE: f64 = 0.2;

pub const DEFAULT_AGENT_FEE: f64 = 0.0357;
pub const DEFAULT_NOTARY_FEE: f64 = 0.015;
pub const DEFAULT_TRANSFER_TAX: f64 = 0.06;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum LandValue {
    #[default]
    Approximate,
    Explicit(f64),
}

impl LandValue {
    pub fn resolve(self, purchase_price: f64) -> f64 {
        match self {
            LandValue::Approximate => APPROXIMATE_LAND_SHARE * purchase_price,
            LandValue::Explicit(value) => value,
        }
    }
}

/// One-off transaction costs at purchase, as fractions of the purchase price.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransactionCosts {
    pub agent_fee: f64,
    pub notary_fee: f64,
    pub transfer_tax: f64,
}

impl Default for TransactionCosts {
    fn default() -> Self {
        Self {
            agent_fee: DEFAULT_AGENT_FEE,
            notary_fee: DEFAULT_NOTARY_FEE,
            transfer_tax: DEFAULT_TRANSFER_TAX,
        }
    }
}

impl TransactionCosts {
    pub fn total_rate(self) -> f64 {
        self.agent_fee + self.notary_fee + self.transfer_tax
    }

    pub fn amount(self, purchase_price: f64) -> f64 {
        self.total_rate() * purchase_price
    }
}

#[derive(Debug, Clone)]
pub struct RentIncome {
    yearly_rent: f64,
    usage: UsageContext,
}

impl RentIncome {
    pub const IS_CASHFLOW: bool = true;

    pub fn new(monthly_rent: f64, usage: UsageContext) -> Self {
        Self {
            yearly_rent: monthly_rent * MONTHS_PER_YEAR,
            usage,
        }
    }

    pub fn evaluate(&self) -> f64 {
        self.yearly_rent
    }
}

/// Rent the owner saves by living in the property. Never realised as cash.
#[derive(Debug, Clone)]
pub struct HypotheticalRentIncome {
    yearly_rent: f64,
    usage: UsageContext,
}

impl HypotheticalRentIncome {
    pub const IS_CASHFLOW: bool = false;

    pub fn new(monthly_rent: f64, usage: UsageContext) -> Self {
        Self {
            yearly_rent: monthly_rent * MONTHS_PER_YEAR,
            usage,
        }
    }

    pub fn evaluate(&self) -> f64 {
        self.yearly_rent
    }
}

/// Monthly facility costs (Hausgeld), of which the owner bears `owner_share`.
#[derive(Debug, Clone)]
pub struct BuildingMaintenance {
    yearly_cost: f64,
    owner_share: f64,
    usage: UsageContext,
}

impl BuildingMaintenance {
    pub const IS_CASHFLOW: bool = true;

    pub fn new(monthly_cost: f64, owner_share: f64, usage: UsageContext) -> Self {
        Self {
            yearly_cost: monthly_cost * MONTHS_PER_YEAR,
            owner_share,
            usage,
        }
    }

    pub fn evaluate(&self) -> f64 {
        -self.yearly_cost * self.owner_share
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AmortizationState {
    pub remaining_debt: f64,
    pub total_interest_cost: f64,
    pub total_paid: f64,
    pub yearly_interest_cost: f64,
}

impl AmortizationState {
    fn opening(initial_debt: f64) -> Self {
        Self {
            remaining_debt: initial_debt,
            ..Self::default()
        }
    }
}

/// Annuity loan paid in fixed monthly instalments.
///
/// Each month the interest on the remaining debt is charged and the rest of
/// the instalment goes to principal. The debt is not clamped at zero, so an
/// instalment larger than the remaining balance drives it negative.
#[derive(Debug, Clone)]
pub struct InterestRate {
    yearly_rate: f64,
    repayment_amount: f64,
    initial_debt: f64,
    state: AmortizationState,
    usage: UsageContext,
}

impl InterestRate {
    pub const IS_CASHFLOW: bool = true;

    pub fn new(
        yearly_rate: f64,
        repayment_amount: f64,
        initial_debt: f64,
        usage: UsageContext,
    ) -> Self {
        let first_month_interest = yearly_rate / MONTHS_PER_YEAR * initial_debt;
        if initial_debt > 0.0 && repayment_amount <= first_month_interest {
            tracing::warn!(
                repayment_amount,
                first_month_interest,
                "Monthly repayment does not cover interest; debt will not amortize"
            );
        }
        Self {
            yearly_rate,
            repayment_amount,
            initial_debt,
            state: AmortizationState::opening(initial_debt),
            usage,
        }
    }

    pub fn initial_debt(&self) -> f64 {
        self.initial_debt
    }

    pub fn repayment_amount(&self) -> f64 {
        self.repayment_amount
    }

    pub fn state(&self) -> AmortizationState {
        self.state
    }

    pub fn remaining_debt(&self) -> f64 {
        self.state.remaining_debt
    }

    fn pay_month(&mut self) -> f64 {
        let interest = (self.yearly_rate / MONTHS_PER_YEAR) * self.state.remaining_debt;
        self.state.remaining_debt -= self.repayment_amount - interest;
        self.state.total_interest_cost += interest;
        self.state.total_paid += self.repayment_amount;
        interest
    }

    pub fn evaluate(&mut self) -> f64 {
        let mut yearly_interest = 0.0;
        for _ in 0..N_MONTHS {
            yearly_interest += self.pay_month();
        }
        self.state.yearly_interest_cost = yearly_interest;
        -yearly_interest
    }

    pub fn reset(&mut self) {
        self.state = AmortizationState::opening(self.initial_debt);
    }
}

/// Linear depreciation (AfA) of the building share of the purchase price.
#[derive(Debug, Clone)]
pub struct PurchaseCost {
    purchase_price: f64,
    land_value: f64,
    depreciation_rate: f64,
    usage: UsageContext,
}

impl PurchaseCost {
    pub const IS_CASHFLOW: bool = false;

    pub fn new(
        purchase_price: f64,
        land_value: LandValue,
        depreciation_rate: f64,
        usage: UsageContext,
    ) -> Self {
        Self {
            purchase_price,
            land_value: land_value.resolve(purchase_price),
            depreciation_rate,
            usage,
        }
    }

    pub fn land_value(&self) -> f64 {
        self.land_value
    }

    pub fn evaluate(&self) -> f64 {
        -self.depreciation_rate * (self.purchase_price - self.land_value)
    }
}

/// Transaction costs depreciated at the same yearly rate as the building.
///
/// The fee rates are applied to the building share (price minus land), not to
/// the full price the fees were actually charged on.
#[derive(Debug, Clone)]
pub struct PurchaseSideCost {
    purchase_price: f64,
    land_value: f64,
    transaction_costs: TransactionCosts,
    depreciation_rate: f64,
    usage: UsageContext,
}

impl PurchaseSideCost {
    pub const IS_CASHFLOW: bool = false;

    pub fn new(
        purchase_price: f64,
        land_value: LandValue,
        transaction_costs: TransactionCosts,
        depreciation_rate: f64,
        usage: UsageContext,
    ) -> Self {
        Self {
            purchase_price,
            land_value: land_value.resolve(purchase_price),
            transaction_costs,
            depreciation_rate,
            usage,
        }
    }

    pub fn evaluate(&self) -> f64 {
        -self.transaction_costs.total_rate()
            * (self.purchase_price - self.land_value)
            * self.depreciation_rate
    }
}

/// Expenses all transaction costs in the first simulated year.
#[derive(Debug, Clone)]
pub struct InstantSideCostWriteOff {
    purchase_price: f64,
    transaction_costs: TransactionCosts,
    year_counter: u32,
    usage: UsageContext,
}

impl InstantSideCostWriteOff {
    pub const IS_CASHFLOW: bool = false;

    pub fn new(purchase_price: f64, transaction_costs: TransactionCosts, usage: UsageContext) -> Self {
        Self {
            purchase_price,
            transaction_costs,
            year_counter: 0,
            usage,
        }
    }

    pub fn year_counter(&self) -> u32 {
        self.year_counter
    }

    pub fn evaluate(&mut self) -> f64 {
        self.year_counter += 1;
        if self.year_counter == 1 {
            -self.transaction_costs.amount(self.purchase_price)
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        self.year_counter = 0;
    }
}

/// Paper gain from the property's market value compounding every year.
#[derive(Debug, Clone)]
pub struct HypotheticalAppreciation {
    initial_price: f64,
    appreciation_rate: f64,
    current_price: f64,
    usage: UsageContext,
}

impl HypotheticalAppreciation {
    pub const IS_CASHFLOW: bool = false;

    pub fn new(initial_price: f64, appreciation_rate: f64, usage: UsageContext) -> Self {
        Self {
            initial_price,
            appreciation_rate,
            current_price: initial_price,
            usage,
        }
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    pub fn evaluate(&mut self) -> f64 {
        let appreciation = self.current_price * self.appreciation_rate;
        self.current_price += appreciation;
        appreciation
    }

    pub fn reset(&mut self) {
        self.current_price = self.initial_price;
    }
}

#[derive(Debug, Clone)]
pub enum Position {
    RentIncome(RentIncome),
    HypotheticalRentIncome(HypotheticalRentIncome),
    BuildingMaintenance(BuildingMaintenance),
    InterestRate(InterestRate),
    PurchaseCost(PurchaseCost),
    PurchaseSideCost(PurchaseSideCost),
    InstantSideCostWriteOff(InstantSideCostWriteOff),
    HypotheticalAppreciation(HypotheticalAppreciation),
}

impl Position {
    pub fn name(&self) -> &'static str {
        match self {
            Position::RentIncome(_) => "rent income",
            Position::HypotheticalRentIncome(_) => "hypothetical rent income",
            Position::BuildingMaintenance(_) => "building maintenance",
            Position::InterestRate(_) => "interest rate",
            Position::PurchaseCost(_) => "purchase cost",
            Position::PurchaseSideCost(_) => "purchase side cost",
            Position::InstantSideCostWriteOff(_) => "instant side cost write-off",
            Position::HypotheticalAppreciation(_) => "hypothetical appreciation",
        }
    }

    /// Whether the value is money actually moved, as opposed to a paper
    /// adjustment of profit. Fixed per position type.
    pub fn is_cashflow(&self) -> bool {
        match self {
            Position::RentIncome(_) => RentIncome::IS_CASHFLOW,
            Position::HypotheticalRentIncome(_) => HypotheticalRentIncome::IS_CASHFLOW,
            Position::BuildingMaintenance(_) => BuildingMaintenance::IS_CASHFLOW,
            Position::InterestRate(_) => InterestRate::IS_CASHFLOW,
            Position::PurchaseCost(_) => PurchaseCost::IS_CASHFLOW,
            Position::PurchaseSideCost(_) => PurchaseSideCost::IS_CASHFLOW,
            Position::InstantSideCostWriteOff(_) => InstantSideCostWriteOff::IS_CASHFLOW,
            Position::HypotheticalAppreciation(_) => HypotheticalAppreciation::IS_CASHFLOW,
        }
    }

    // TODO: maintenance and interest still move cash in own use while being
    // gated out of taxable profit; needs a product decision before changing.
    pub fn tax_context(&self) -> TaxContext {
        match self {
            Position::RentIncome(p) => TaxContext::AlwaysAccounted(p.usage),
            Position::HypotheticalRentIncome(p) => TaxContext::AlwaysAccounted(p.usage),
            Position::BuildingMaintenance(p) => TaxContext::UsageGated(p.usage),
            Position::InterestRate(p) => TaxContext::UsageGated(p.usage),
            Position::PurchaseCost(p) => TaxContext::UsageGated(p.usage),
            Position::PurchaseSideCost(p) => TaxContext::UsageGated(p.usage),
            Position::InstantSideCostWriteOff(p) => TaxContext::AlwaysAccounted(p.usage),
            Position::HypotheticalAppreciation(p) => TaxContext::AlwaysAccounted(p.usage),
        }
    }

    pub fn usage(&self) -> UsageContext {
        self.tax_context().usage()
    }

    /// Raw amount for the next simulated year, before any tax gating.
    pub fn evaluate(&mut self) -> f64 {
        match self {
            Position::RentIncome(p) => p.evaluate(),
            Position::HypotheticalRentIncome(p) => p.evaluate(),
            Position::BuildingMaintenance(p) => p.evaluate(),
            Position::InterestRate(p) => p.evaluate(),
            Position::PurchaseCost(p) => p.evaluate(),
            Position::PurchaseSideCost(p) => p.evaluate(),
            Position::InstantSideCostWriteOff(p) => p.evaluate(),
            Position::HypotheticalAppreciation(p) => p.evaluate(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Position::InterestRate(p) => p.reset(),
            Position::InstantSideCostWriteOff(p) => p.reset(),
            Position::HypotheticalAppreciation(p) => p.reset(),
            Position::RentIncome(_)
            | Position::HypotheticalRentIncome(_)
            | Position::BuildingMaintenance(_)
            | Position::PurchaseCost(_)
            | Position::PurchaseSideCost(_) => {}
        }
    }

    pub fn as_interest_rate(&self) -> Option<&InterestRate> {
        match self {
            Position::InterestRate(p) => Some(p),
            _ => None,
        }
    }
}

macro_rules! impl_from_position {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Position {
                fn from(value: $variant) -> Self {
                    Position::$variant(value)
                }
            }
        )*
    };
}

impl_from_position!(
    RentIncome,
    HypotheticalRentIncome,
    BuildingMaintenance,
    InterestRate,
    PurchaseCost,
    PurchaseSideCost,
    InstantSideCostWriteOff,
    HypotheticalAppreciation,
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn all_positions(usage: UsageContext, scale: f64) -> Vec<Position> {
        vec![
            RentIncome::new(500.0 * scale, usage).into(),
            HypotheticalRentIncome::new(500.0 * scale, usage).into(),
            BuildingMaintenance::new(200.0 * scale, 0.5, usage).into(),
            InterestRate::new(0.01, 600.0 * scale, 100_000.0 * scale, usage).into(),
            PurchaseCost::new(120_000.0 * scale, LandValue::Approximate, 0.02, usage).into(),
            PurchaseSideCost::new(
                120_000.0 * scale,
                LandValue::Approximate,
                TransactionCosts::default(),
                0.02,
                usage,
            )
            .into(),
            InstantSideCostWriteOff::new(120_000.0 * scale, TransactionCosts::default(), usage)
                .into(),
            HypotheticalAppreciation::new(120_000.0 * scale, 0.02, usage).into(),
        ]
    }

    #[test]
    fn interest_rate_nearly_amortizes_small_loan_in_one_year() {
        let mut ir = InterestRate::new(0.017, 84.10, 1_000.0, UsageContext::Renting);

        let total_cost = ir.evaluate();

        assert_approx_tol(total_cost, -9.23, 0.005);
        assert_approx_tol(ir.remaining_debt(), 0.0, 0.1);
        assert_approx_tol(ir.state().yearly_interest_cost, 9.23, 0.005);
        assert_approx(ir.state().total_paid, 12.0 * 84.10);
    }

    #[test]
    fn interest_rate_debt_decreases_while_repayment_exceeds_interest() {
        let mut ir = InterestRate::new(0.035, 1_500.0, 450_000.0, UsageContext::Renting);
        let mut previous = ir.remaining_debt();
        for _ in 0..10 {
            ir.evaluate();
            assert!(ir.remaining_debt() < previous);
            previous = ir.remaining_debt();
        }
        assert_approx(ir.state().total_paid, 10.0 * 12.0 * 1_500.0);
    }

    #[test]
    fn interest_rate_overpayment_drives_debt_negative() {
        let mut ir = InterestRate::new(0.01, 500.0, 1_000.0, UsageContext::Renting);

        ir.evaluate();

        assert!(ir.remaining_debt() < 0.0);
        assert_approx_tol(ir.remaining_debt(), -5_017.5, 5.0);
        assert_approx(ir.state().total_paid, 12.0 * 500.0);
        // Interest turns into a credit once the balance is negative.
        assert!(ir.state().yearly_interest_cost < 0.0);
    }

    #[test]
    fn interest_rate_accumulates_interest_across_years() {
        let mut ir = InterestRate::new(0.05, 500.0, 50_000.0, UsageContext::Renting);
        let first = -ir.evaluate();
        let second = -ir.evaluate();
        assert!(second < first);
        assert_approx(ir.state().total_interest_cost, first + second);
        assert_approx(ir.state().yearly_interest_cost, second);
    }

    #[test]
    fn interest_rate_reset_restores_opening_balance() {
        let mut ir = InterestRate::new(0.03, 700.0, 80_000.0, UsageContext::Renting);
        let first = ir.evaluate();
        ir.evaluate();
        ir.reset();

        assert_eq!(ir.state(), AmortizationState::opening(80_000.0));
        assert_eq!(ir.evaluate(), first);
    }

    #[test]
    fn purchase_side_cost_depreciates_fees_on_building_share() {
        let side_cost = PurchaseSideCost::new(
            100.0,
            LandValue::Explicit(0.0),
            TransactionCosts::default(),
            0.01,
            UsageContext::Renting,
        );
        assert_approx(side_cost.evaluate(), -11.07 * 0.01);
    }

    #[test]
    fn purchase_cost_depreciates_price_minus_approximate_land() {
        let cost = PurchaseCost::new(
            200_000.0,
            LandValue::Approximate,
            0.01,
            UsageContext::Renting,
        );
        assert_approx(cost.land_value(), 40_000.0);
        assert_approx(cost.evaluate(), -1_600.0);
    }

    #[test]
    fn building_maintenance_charges_owner_share_of_facility_costs() {
        let maintenance = BuildingMaintenance::new(200.0, 0.5, UsageContext::Renting);
        assert_approx(maintenance.evaluate(), -1_200.0);
    }

    #[test]
    fn rent_income_is_twelve_monthly_rents_every_year() {
        let mut rent: Position = RentIncome::new(500.0, UsageContext::Renting).into();
        assert_approx(rent.evaluate(), 6_000.0);
        assert_approx(rent.evaluate(), 6_000.0);
    }

    #[test]
    fn instant_write_off_only_charges_first_year() {
        let purchase_price = 300_000.0;
        let mut write_off = InstantSideCostWriteOff::new(
            purchase_price,
            TransactionCosts::default(),
            UsageContext::OwnUse,
        );
        let full = -purchase_price * (DEFAULT_AGENT_FEE + DEFAULT_NOTARY_FEE + DEFAULT_TRANSFER_TAX);

        assert_approx(write_off.evaluate(), full);
        assert_eq!(write_off.evaluate(), 0.0);
        assert_eq!(write_off.evaluate(), 0.0);

        write_off.reset();
        assert_eq!(write_off.year_counter(), 0);
        assert_approx(write_off.evaluate(), full);
    }

    #[test]
    fn appreciation_compounds_on_current_price() {
        let initial_price = 100_000.0;
        let rate = 0.05;
        let mut appreciation =
            HypotheticalAppreciation::new(initial_price, rate, UsageContext::OwnUse);

        let first = appreciation.evaluate();
        assert_approx(first, initial_price * rate);
        assert_approx(appreciation.current_price(), initial_price + first);

        let second = appreciation.evaluate();
        assert_approx(second, (initial_price + first) * rate);
        assert_approx(appreciation.current_price(), initial_price + first + second);
    }

    #[test]
    fn appreciation_reset_restores_initial_price_exactly() {
        let mut appreciation = HypotheticalAppreciation::new(100_000.0, 0.05, UsageContext::OwnUse);
        appreciation.evaluate();
        appreciation.reset();
        assert_eq!(appreciation.current_price(), 100_000.0);
    }

    #[test]
    fn cashflow_classification_per_position() {
        let flags: Vec<(&str, bool)> = all_positions(UsageContext::Renting, 1.0)
            .iter()
            .map(|p| (p.name(), p.is_cashflow()))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("rent income", true),
                ("hypothetical rent income", false),
                ("building maintenance", true),
                ("interest rate", true),
                ("purchase cost", false),
                ("purchase side cost", false),
                ("instant side cost write-off", false),
                ("hypothetical appreciation", false),
            ]
        );
    }

    #[test]
    fn own_use_gates_costs_but_not_rent_out_of_taxable_profit() {
        for position in all_positions(UsageContext::OwnUse, 1.0) {
            let expected = matches!(
                position,
                Position::RentIncome(_)
                    | Position::HypotheticalRentIncome(_)
                    | Position::InstantSideCostWriteOff(_)
                    | Position::HypotheticalAppreciation(_)
            );
            assert_eq!(position.tax_context().is_accounted(), expected, "{}", position.name());
            assert_eq!(position.usage(), UsageContext::OwnUse);
        }
        for position in all_positions(UsageContext::Renting, 1.0) {
            assert!(position.tax_context().is_accounted(), "{}", position.name());
        }
    }

    #[test]
    fn only_interest_position_is_found_as_interest_rate() {
        let positions = all_positions(UsageContext::Renting, 1.0);
        let found: Vec<&str> = positions
            .iter()
            .filter(|p| p.as_interest_rate().is_some())
            .map(|p| p.name())
            .collect();
        assert_eq!(found, vec!["interest rate"]);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(32))]

        #[test]
        fn prop_cashflow_flag_does_not_depend_on_inputs(scale_pct in 1u32..1_000) {
            let scale = scale_pct as f64 / 100.0;
            for usage in [UsageContext::OwnUse, UsageContext::Renting] {
                let baseline = all_positions(UsageContext::Renting, 1.0);
                let scaled = all_positions(usage, scale);
                for (a, b) in baseline.iter().zip(scaled.iter()) {
                    prop_assert_eq!(a.is_cashflow(), b.is_cashflow());
                }
            }
        }

        #[test]
        fn prop_reset_replays_identical_years(
            years in 1usize..15,
            rate_bp in 0u32..800,
            repayment in 300u32..3_000,
            appreciation_bp in 0u32..600
        ) {
            let usage = UsageContext::OwnUse;
            let mut positions: Vec<Position> = vec![
                InterestRate::new(rate_bp as f64 / 10_000.0, repayment as f64, 200_000.0, usage).into(),
                InstantSideCostWriteOff::new(250_000.0, TransactionCosts::default(), usage).into(),
                HypotheticalAppreciation::new(250_000.0, appreciation_bp as f64 / 10_000.0, usage).into(),
            ];

            let first_run: Vec<Vec<f64>> = (0..years)
                .map(|_| positions.iter_mut().map(Position::evaluate).collect())
                .collect();
            for position in &mut positions {
                position.reset();
            }
            let second_run: Vec<Vec<f64>> = (0..years)
                .map(|_| positions.iter_mut().map(Position::evaluate).collect())
                .collect();

            prop_assert_eq!(first_run, second_run);
        }

        #[test]
        fn prop_interest_is_non_negative_while_debt_is_positive(
            rate_bp in 0u32..1_000,
            debt in 1_000u32..900_000
        ) {
            let debt = debt as f64;
            let monthly_interest = rate_bp as f64 / 10_000.0 / 12.0 * debt;
            let mut ir = InterestRate::new(
                rate_bp as f64 / 10_000.0,
                monthly_interest + 1.0,
                debt,
                UsageContext::Renting,
            );
            let cost = ir.evaluate();
            prop_assert!(cost <= 0.0);
            prop_assert!(ir.remaining_debt() < debt);
        }
    }
}
