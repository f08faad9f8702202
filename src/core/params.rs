use serde::Deserialize;

use super::positions::{LandValue, TransactionCosts};
use super::tax_context::UsageContext;
use crate::error::{Error, Result};

pub const MAX_YEARS: u32 = 100;
pub const MAX_AMOUNT: f64 = 1e12;
pub const MAX_APPRECIATION_RATE: f64 = 1.0;

/// Flat scenario record as collected by a front end, before validation.
///
/// Exactly one of `initial_debt` and `own_capital` must be set; the other is
/// derived from the purchase price and transaction costs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInputParameters {
    pub usage: UsageContext,
    pub yearly_income: f64,
    pub monthly_rent: f64,
    pub facility_monthly_cost: f64,
    pub owner_share: f64,
    pub yearly_interest_rate: f64,
    pub repayment_amount: f64,
    pub initial_debt: Option<f64>,
    pub own_capital: Option<f64>,
    pub purchase_price: f64,
    pub land_value: Option<f64>,
    pub approximate_land_value: bool,
    pub depreciation_rate: f64,
    pub agent_fee: f64,
    pub notary_fee: f64,
    pub transfer_tax: f64,
    pub appreciation_rate: f64,
}

/// Validated parameters of one scenario. `initial_debt` and `own_capital`
/// always satisfy `own_capital = purchase_price - initial_debt + side_costs`.
#[derive(Debug, Clone, PartialEq)]
pub struct InputParameters {
    pub usage: UsageContext,
    pub yearly_income: f64,
    pub monthly_rent: f64,
    pub facility_monthly_cost: f64,
    pub owner_share: f64,
    pub yearly_interest_rate: f64,
    pub repayment_amount: f64,
    pub initial_debt: f64,
    pub own_capital: f64,
    pub purchase_price: f64,
    pub land_value: LandValue,
    pub depreciation_rate: f64,
    pub transaction_costs: TransactionCosts,
    pub appreciation_rate: f64,
}

impl InputParameters {
    pub fn new(raw: RawInputParameters) -> Result<Self> {
        for (name, value) in [
            ("yearly_income", raw.yearly_income),
            ("monthly_rent", raw.monthly_rent),
            ("facility_monthly_cost", raw.facility_monthly_cost),
            ("owner_share", raw.owner_share),
            ("yearly_interest_rate", raw.yearly_interest_rate),
            ("repayment_amount", raw.repayment_amount),
            ("purchase_price", raw.purchase_price),
            ("depreciation_rate", raw.depreciation_rate),
            ("agent_fee", raw.agent_fee),
            ("notary_fee", raw.notary_fee),
            ("transfer_tax", raw.transfer_tax),
            ("appreciation_rate", raw.appreciation_rate),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid(name, "must be a finite number"));
            }
        }

        for (name, value) in [
            ("monthly_rent", raw.monthly_rent),
            ("facility_monthly_cost", raw.facility_monthly_cost),
            ("repayment_amount", raw.repayment_amount),
        ] {
            if value < 0.0 {
                return Err(Error::invalid(name, "must be >= 0"));
            }
        }

        for (name, value) in [
            ("yearly_income", raw.yearly_income),
            ("monthly_rent", raw.monthly_rent),
            ("facility_monthly_cost", raw.facility_monthly_cost),
            ("repayment_amount", raw.repayment_amount),
            ("purchase_price", raw.purchase_price),
        ] {
            check_amount(name, value)?;
        }

        if raw.purchase_price <= 0.0 {
            return Err(Error::invalid("purchase_price", "must be > 0"));
        }

        for (name, value) in [
            ("owner_share", raw.owner_share),
            ("yearly_interest_rate", raw.yearly_interest_rate),
            ("depreciation_rate", raw.depreciation_rate),
            ("agent_fee", raw.agent_fee),
            ("notary_fee", raw.notary_fee),
            ("transfer_tax", raw.transfer_tax),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::invalid(name, "must be a fraction between 0 and 1"));
            }
        }

        if raw.appreciation_rate <= -1.0 || raw.appreciation_rate > MAX_APPRECIATION_RATE {
            return Err(Error::invalid(
                "appreciation_rate",
                format!("must be > -1 and <= {MAX_APPRECIATION_RATE}"),
            ));
        }

        let land_value = match (raw.approximate_land_value, raw.land_value) {
            (true, _) => LandValue::Approximate,
            (false, Some(value)) => {
                if !value.is_finite() || !(0.0..=raw.purchase_price).contains(&value) {
                    return Err(Error::invalid(
                        "land_value",
                        "must be between 0 and the purchase price",
                    ));
                }
                LandValue::Explicit(value)
            }
            (false, None) => return Err(Error::MissingLandValue),
        };

        let transaction_costs = TransactionCosts {
            agent_fee: raw.agent_fee,
            notary_fee: raw.notary_fee,
            transfer_tax: raw.transfer_tax,
        };
        let side_costs = transaction_costs.amount(raw.purchase_price);

        let (initial_debt, own_capital) = match (raw.initial_debt, raw.own_capital) {
            (Some(_), Some(_)) => return Err(Error::ConflictingFinancing),
            (None, None) => return Err(Error::MissingFinancing),
            (Some(debt), None) => {
                if !debt.is_finite() || debt < 0.0 {
                    return Err(Error::invalid("initial_debt", "must be >= 0"));
                }
                check_amount("initial_debt", debt)?;
                (debt, raw.purchase_price - debt + side_costs)
            }
            (None, Some(capital)) => {
                if !capital.is_finite() || capital < 0.0 {
                    return Err(Error::invalid("own_capital", "must be >= 0"));
                }
                check_amount("own_capital", capital)?;
                (raw.purchase_price + side_costs - capital, capital)
            }
        };

        if initial_debt < 0.0 {
            return Err(Error::invalid(
                "own_capital",
                "exceeds purchase price plus transaction costs",
            ));
        }
        if own_capital < 0.0 {
            return Err(Error::invalid(
                "initial_debt",
                "exceeds purchase price plus transaction costs",
            ));
        }

        Ok(Self {
            usage: raw.usage,
            yearly_income: raw.yearly_income,
            monthly_rent: raw.monthly_rent,
            facility_monthly_cost: raw.facility_monthly_cost,
            owner_share: raw.owner_share,
            yearly_interest_rate: raw.yearly_interest_rate,
            repayment_amount: raw.repayment_amount,
            initial_debt,
            own_capital,
            purchase_price: raw.purchase_price,
            land_value,
            depreciation_rate: raw.depreciation_rate,
            transaction_costs,
            appreciation_rate: raw.appreciation_rate,
        })
    }

    pub fn side_costs(&self) -> f64 {
        self.transaction_costs.amount(self.purchase_price)
    }

    pub fn with_repayment_amount(&self, repayment_amount: f64) -> Self {
        Self {
            repayment_amount,
            ..self.clone()
        }
    }
}

pub(crate) fn check_amount(name: &'static str, value: f64) -> Result<()> {
    if value.abs() > MAX_AMOUNT {
        return Err(Error::invalid(
            name,
            format!("must not exceed {MAX_AMOUNT:e} in magnitude"),
        ));
    }
    Ok(())
}

pub fn validate_horizon(n_years: u32) -> Result<u32> {
    if n_years == 0 || n_years > MAX_YEARS {
        return Err(Error::invalid(
            "n_years",
            format!("must be between 1 and {MAX_YEARS}"),
        ));
    }
    Ok(n_years)
}
