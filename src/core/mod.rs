mod calculator;
mod params;
mod positions;
mod tax;
mod tax_context;
mod types;

pub use calculator::{
    MAX_SWEEP_POINTS, ProfitCalculator, repayment_range, simulate_repayment_sweep,
};
pub use params::{
    InputParameters, MAX_AMOUNT, MAX_APPRECIATION_RATE, MAX_YEARS, RawInputParameters,
    validate_horizon,
};
pub use positions::{
    APPROXIMATE_LAND_SHARE, AmortizationState, BuildingMaintenance, DEFAULT_AGENT_FEE,
    DEFAULT_NOTARY_FEE, DEFAULT_TRANSFER_TAX, HypotheticalAppreciation, HypotheticalRentIncome,
    InstantSideCostWriteOff, InterestRate, LandValue, N_MONTHS, Position, PurchaseCost,
    PurchaseSideCost, RentIncome, TransactionCosts,
};
pub use tax::{DEFAULT_FLAT_TAX_RATE, IncomeTaxModel, progressive_income_tax};
pub use tax_context::{TaxContext, UsageContext};
pub use types::{RepaymentScenario, SweepResult, YearlySummary};
