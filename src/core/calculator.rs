use super::params::{InputParameters, check_amount, validate_horizon};
use super::positions::{
    BuildingMaintenance, HypotheticalAppreciation, HypotheticalRentIncome,
    InstantSideCostWriteOff, InterestRate, Position, PurchaseCost, PurchaseSideCost, RentIncome,
};
use super::tax::IncomeTaxModel;
use super::tax_context::UsageContext;
use super::types::{RepaymentScenario, SweepResult, YearlySummary};
use crate::error::{Error, Result};

pub const MAX_SWEEP_POINTS: usize = 50;

/// The calculator owns its positions and mutates their running state, so a
/// fresh calculator must be built for every scenario.
#[derive(Debug, Clone)]
pub struct ProfitCalculator {
    positions: Vec<Position>,
    interest_index: usize,
    yearly_income: f64,
    own_capital: f64,
    usage: UsageContext,
    tax_model: IncomeTaxModel,
    years_simulated: u32,
}

impl ProfitCalculator {
    /// Fails if the positions disagree on usage or none of them is an
    /// interest rate. With several interest positions only the first one is
    /// reported in the yearly summaries.
    pub fn new(positions: Vec<Position>, yearly_income: f64) -> Result<Self> {
        let usage = consistent_usage(&positions)?;
        let interest_index = positions
            .iter()
            .position(|p| p.as_interest_rate().is_some())
            .ok_or(Error::MissingInterestPosition)?;

        Ok(Self {
            positions,
            interest_index,
            yearly_income,
            own_capital: 0.0,
            usage,
            tax_model: IncomeTaxModel::default(),
            years_simulated: 0,
        })
    }

    pub fn from_input_params(params: &InputParameters) -> Result<Self> {
        let usage = params.usage;
        let interest = InterestRate::new(
            params.yearly_interest_rate,
            params.repayment_amount,
            params.initial_debt,
            usage,
        );
        let purchase_cost = PurchaseCost::new(
            params.purchase_price,
            params.land_value,
            params.depreciation_rate,
            usage,
        );

        let positions: Vec<Position> = match usage {
            UsageContext::Renting => vec![
                RentIncome::new(params.monthly_rent, usage).into(),
                BuildingMaintenance::new(params.facility_monthly_cost, params.owner_share, usage)
                    .into(),
                interest.into(),
                purchase_cost.into(),
                PurchaseSideCost::new(
                    params.purchase_price,
                    params.land_value,
                    params.transaction_costs,
                    params.depreciation_rate,
                    usage,
                )
                .into(),
            ],
            // The owner carries all facility costs when living in the property.
            UsageContext::OwnUse => vec![
                HypotheticalRentIncome::new(params.monthly_rent, usage).into(),
                BuildingMaintenance::new(params.facility_monthly_cost, 1.0, usage).into(),
                interest.into(),
                purchase_cost.into(),
                InstantSideCostWriteOff::new(
                    params.purchase_price,
                    params.transaction_costs,
                    usage,
                )
                .into(),
                HypotheticalAppreciation::new(
                    params.purchase_price,
                    params.appreciation_rate,
                    usage,
                )
                .into(),
            ],
        };

        Ok(Self::new(positions, params.yearly_income)?.with_own_capital(params.own_capital))
    }

    pub fn with_own_capital(mut self, own_capital: f64) -> Self {
        self.own_capital = own_capital;
        self
    }

    pub fn with_tax_model(mut self, tax_model: IncomeTaxModel) -> Self {
        self.tax_model = tax_model;
        self
    }

    pub fn usage(&self) -> UsageContext {
        self.usage
    }

    pub fn own_capital(&self) -> f64 {
        self.own_capital
    }

    pub fn initial_debt(&self) -> f64 {
        self.interest().initial_debt()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    fn interest(&self) -> &InterestRate {
        match &self.positions[self.interest_index] {
            Position::InterestRate(interest) => interest,
            other => unreachable!("position {} is not an interest rate", other.name()),
        }
    }

    /// Income tax change caused by the property's profit. Zero in own use.
    fn income_tax_diff(&self, profit_before_taxes: f64) -> f64 {
        match self.usage {
            UsageContext::Renting => self
                .tax_model
                .marginal_tax(self.yearly_income, profit_before_taxes),
            UsageContext::OwnUse => 0.0,
        }
    }

    pub fn yearly_simulation(&mut self) -> YearlySummary {
        let mut profit_before_taxes = 0.0;
        let mut cashflow = 0.0;
        for position in &mut self.positions {
            let value = position.evaluate();
            profit_before_taxes += position.tax_context().apply(value);
            if position.is_cashflow() {
                cashflow += value;
            }
        }

        let income_tax = self.income_tax_diff(profit_before_taxes);
        cashflow -= income_tax;
        self.years_simulated += 1;

        let debt = self.interest().state();
        tracing::debug!(
            year = self.years_simulated,
            cashflow,
            profit_before_taxes,
            income_tax,
            remaining_debt = debt.remaining_debt,
            "Simulated year"
        );

        YearlySummary {
            year: self.years_simulated,
            cashflow,
            profit_before_taxes,
            income_tax,
            tax_benefit: -income_tax,
            remaining_debt: debt.remaining_debt,
            cumulative_interest_cost: debt.total_interest_cost,
            yearly_interest_cost: debt.yearly_interest_cost,
            total_paid: debt.total_paid,
            return_rate: None,
            cumulative_profit_before_tax: None,
        }
    }

    pub fn reset(&mut self) {
        for position in &mut self.positions {
            position.reset();
        }
        self.years_simulated = 0;
    }

    pub fn simulate(&mut self, n_years: u32) -> Vec<YearlySummary> {
        self.reset();
        let mut years: Vec<YearlySummary> = (0..n_years).map(|_| self.yearly_simulation()).collect();
        if self.usage == UsageContext::OwnUse {
            apply_return_rates(&mut years, self.own_capital);
        }

        tracing::info!(
            usage = %self.usage,
            n_years,
            initial_debt = self.initial_debt(),
            repayment_amount = self.interest().repayment_amount(),
            "Simulation finished"
        );
        years
    }
}

fn consistent_usage(positions: &[Position]) -> Result<UsageContext> {
    let Some(first) = positions.first() else {
        return Err(Error::MissingInterestPosition);
    };
    let expected = first.usage();
    let offending: Vec<String> = positions
        .iter()
        .filter(|p| p.usage() != expected)
        .map(|p| format!("{} ({})", p.name(), p.usage()))
        .collect();
    if !offending.is_empty() {
        return Err(Error::MixedUsage {
            expected,
            offending,
        });
    }
    Ok(expected)
}

/// Average yearly return on everything put in so far: own capital plus all
/// loan instalments. Left empty when nothing has been invested.
fn apply_return_rates(years: &mut [YearlySummary], own_capital: f64) {
    let mut cumulative_profit = 0.0;
    for summary in years {
        cumulative_profit += summary.profit_before_taxes;
        let invested = summary.total_paid + own_capital;
        summary.cumulative_profit_before_tax = Some(cumulative_profit);
        summary.return_rate = if invested > 0.0 {
            Some(cumulative_profit / invested / f64::from(summary.year))
        } else {
            None
        };
    }
}

/// Repayment amounts `min, min + step, ...` below `max`. Equal bounds yield
/// the single amount `min`.
pub fn repayment_range(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    if !min.is_finite() || min < 0.0 {
        return Err(Error::invalid("repayment_min", "must be >= 0"));
    }
    if !max.is_finite() || max < min {
        return Err(Error::invalid("repayment_max", "must be >= repayment_min"));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::invalid("repayment_step", "must be > 0"));
    }

    let count = ((max - min) / step).ceil() as usize;
    if count > MAX_SWEEP_POINTS {
        return Err(Error::invalid(
            "repayment_step",
            format!("range would produce more than {MAX_SWEEP_POINTS} scenarios"),
        ));
    }
    if count == 0 {
        return Ok(vec![min]);
    }
    Ok((0..count).map(|i| min + i as f64 * step).collect())
}

/// One independent scenario per repayment amount, each with fresh positions.
pub fn simulate_repayment_sweep(
    params: &InputParameters,
    repayment_amounts: &[f64],
    n_years: u32,
    tax_model: IncomeTaxModel,
) -> Result<SweepResult> {
    let n_years = validate_horizon(n_years)?;
    if repayment_amounts.is_empty() {
        return Err(Error::invalid("repayment_amounts", "must not be empty"));
    }
    if repayment_amounts.len() > MAX_SWEEP_POINTS {
        return Err(Error::invalid(
            "repayment_amounts",
            format!("at most {MAX_SWEEP_POINTS} amounts are supported"),
        ));
    }

    let mut scenarios = Vec::with_capacity(repayment_amounts.len());
    for &repayment_amount in repayment_amounts {
        if !repayment_amount.is_finite() || repayment_amount < 0.0 {
            return Err(Error::invalid("repayment_amount", "must be >= 0"));
        }
        check_amount("repayment_amount", repayment_amount)?;
        let scenario_params = params.with_repayment_amount(repayment_amount);
        let mut calculator =
            ProfitCalculator::from_input_params(&scenario_params)?.with_tax_model(tax_model);
        scenarios.push(RepaymentScenario {
            repayment_amount,
            years: calculator.simulate(n_years),
        });
    }

    Ok(SweepResult {
        usage: params.usage,
        initial_debt: params.initial_debt,
        own_capital: params.own_capital,
        n_years,
        scenarios,
    })
}
