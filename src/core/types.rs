use serde::Serialize;

use super::tax_context::UsageContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySummary {
    pub year: u32,
    pub cashflow: f64,
    pub profit_before_taxes: f64,
    /// Change in income tax caused by the property; negative is a refund.
    pub income_tax: f64,
    pub tax_benefit: f64,
    pub remaining_debt: f64,
    pub cumulative_interest_cost: f64,
    pub yearly_interest_cost: f64,
    pub total_paid: f64,
    pub return_rate: Option<f64>,
    pub cumulative_profit_before_tax: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentScenario {
    pub repayment_amount: f64,
    pub years: Vec<YearlySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepResult {
    pub usage: UsageContext,
    pub initial_debt: f64,
    pub own_capital: f64,
    pub n_years: u32,
    pub scenarios: Vec<RepaymentScenario>,
}
