use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    DEFAULT_FLAT_TAX_RATE, IncomeTaxModel, InputParameters, RawInputParameters, SweepResult,
    UsageContext, repayment_range, simulate_repayment_sweep, validate_horizon,
};
use crate::error::Error;

pub const DEFAULT_REPAYMENT_STEP: f64 = 500.0;
pub const DEFAULT_INITIAL_DEBT: f64 = 450_000.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliUsage {
    Renting,
    OwnUse,
}

impl From<CliUsage> for UsageContext {
    fn from(value: CliUsage) -> Self {
        match value {
            CliUsage::Renting => UsageContext::Renting,
            CliUsage::OwnUse => UsageContext::OwnUse,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliTaxModel {
    Progressive,
    FlatRate,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiUsage {
    Renting,
    #[serde(alias = "ownUse", alias = "own_use", alias = "Own usage")]
    OwnUse,
}

impl From<ApiUsage> for CliUsage {
    fn from(value: ApiUsage) -> Self {
        match value {
            ApiUsage::Renting => CliUsage::Renting,
            ApiUsage::OwnUse => CliUsage::OwnUse,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiTaxModel {
    Progressive,
    #[serde(alias = "flat", alias = "flatRate", alias = "flat_rate")]
    FlatRate,
}

impl From<ApiTaxModel> for CliTaxModel {
    fn from(value: ApiTaxModel) -> Self {
        match value {
            ApiTaxModel::Progressive => CliTaxModel::Progressive,
            ApiTaxModel::FlatRate => CliTaxModel::FlatRate,
        }
    }
}

/// Dashboard payload. Every field is optional and falls back to the CLI
/// defaults; percentages are given in percent.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    usage: Option<ApiUsage>,
    yearly_income: Option<f64>,
    monthly_rent: Option<f64>,
    #[serde(alias = "facilityCosts")]
    facility_monthly_cost: Option<f64>,
    owner_share: Option<f64>,
    interest_rate: Option<f64>,
    repayment_amount: Option<f64>,
    repayment_min: Option<f64>,
    repayment_max: Option<f64>,
    repayment_step: Option<f64>,
    initial_debt: Option<f64>,
    own_capital: Option<f64>,
    purchase_price: Option<f64>,
    land_value: Option<f64>,
    depreciation_rate: Option<f64>,
    agent_fee: Option<f64>,
    notary_fee: Option<f64>,
    transfer_tax: Option<f64>,
    appreciation_rate: Option<f64>,
    #[serde(alias = "numYears")]
    n_years: Option<u32>,
    tax_model: Option<ApiTaxModel>,
    flat_tax_rate: Option<f64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "immo_rechner",
    about = "Year-by-year cash flow, tax impact and amortization of a real-estate investment"
)]
struct Cli {
    #[arg(long, value_enum, default_value_t = CliUsage::Renting)]
    usage: CliUsage,
    #[arg(
        long,
        default_value_t = 100_000.0,
        help = "Taxable yearly income without the property"
    )]
    yearly_income: f64,
    #[arg(
        long,
        default_value_t = 1_500.0,
        help = "Monthly rent, or the rent saved when living in the property"
    )]
    monthly_rent: f64,
    #[arg(
        long,
        default_value_t = 350.0,
        help = "Monthly facility costs (Hausgeld)"
    )]
    facility_monthly_cost: f64,
    #[arg(
        long,
        default_value_t = 50.0,
        help = "Share of facility costs not passed on to the tenant, in percent"
    )]
    owner_share: f64,
    #[arg(long, default_value_t = 3.5, help = "Yearly loan interest rate in percent")]
    interest_rate: f64,
    #[arg(long, default_value_t = 1_500.0, help = "Monthly loan repayment")]
    repayment_amount: f64,
    #[arg(
        long,
        requires = "repayment_max",
        help = "Lower bound of a repayment sweep; overrides --repayment-amount"
    )]
    repayment_min: Option<f64>,
    #[arg(
        long,
        requires = "repayment_min",
        help = "Upper bound (exclusive) of a repayment sweep"
    )]
    repayment_max: Option<f64>,
    #[arg(long, help = "Step of a repayment sweep, defaults to 500")]
    repayment_step: Option<f64>,
    #[arg(
        long,
        conflicts_with = "own_capital",
        help = "Initial loan amount, 450000 unless --own-capital is given; own capital is derived from it"
    )]
    initial_debt: Option<f64>,
    #[arg(long, help = "Own capital; the initial loan amount is derived from it")]
    own_capital: Option<f64>,
    #[arg(long, default_value_t = 500_000.0)]
    purchase_price: f64,
    #[arg(
        long,
        help = "Land value; approximated as 20 % of the purchase price when omitted"
    )]
    land_value: Option<f64>,
    #[arg(long, default_value_t = 2.0, help = "Yearly depreciation rate in percent")]
    depreciation_rate: f64,
    #[arg(long, default_value_t = 3.57, help = "Estate agent fee in percent")]
    agent_fee: f64,
    #[arg(long, default_value_t = 1.5, help = "Notary fee in percent")]
    notary_fee: f64,
    #[arg(long, default_value_t = 6.0, help = "Real estate transfer tax in percent")]
    transfer_tax: f64,
    #[arg(
        long,
        default_value_t = 2.0,
        help = "Yearly market value appreciation in percent (own use)"
    )]
    appreciation_rate: f64,
    #[arg(long, default_value_t = 10, help = "Number of simulated years")]
    n_years: u32,
    #[arg(long, value_enum, default_value_t = CliTaxModel::Progressive)]
    tax_model: CliTaxModel,
    #[arg(
        long,
        default_value_t = 20.0,
        help = "Flat income tax rate in percent, used when --tax-model=flat-rate"
    )]
    flat_tax_rate: f64,
}

#[derive(Debug)]
struct ScenarioRequest {
    params: InputParameters,
    repayment_amounts: Vec<f64>,
    n_years: u32,
    tax_model: IncomeTaxModel,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] clap::Error),
    #[error(transparent)]
    Simulation(#[from] Error),
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

fn build_request(cli: Cli) -> Result<ScenarioRequest, Error> {
    if !(0.0..=100.0).contains(&cli.flat_tax_rate) {
        return Err(Error::invalid("flat_tax_rate", "must be between 0 and 100"));
    }

    let tax_model = match cli.tax_model {
        CliTaxModel::Progressive => IncomeTaxModel::Progressive,
        CliTaxModel::FlatRate => IncomeTaxModel::FlatRate(cli.flat_tax_rate / 100.0),
    };

    let n_years = validate_horizon(cli.n_years)?;

    let repayment_amounts = match (cli.repayment_min, cli.repayment_max) {
        (Some(min), Some(max)) => repayment_range(
            min,
            max,
            cli.repayment_step.unwrap_or(DEFAULT_REPAYMENT_STEP),
        )?,
        (None, None) => vec![cli.repayment_amount],
        (Some(_), None) => {
            return Err(Error::invalid("repayment_max", "required with repayment_min"));
        }
        (None, Some(_)) => {
            return Err(Error::invalid("repayment_min", "required with repayment_max"));
        }
    };

    let initial_debt = match (cli.initial_debt, cli.own_capital) {
        (None, None) => Some(DEFAULT_INITIAL_DEBT),
        (debt, _) => debt,
    };

    let params = InputParameters::new(RawInputParameters {
        usage: cli.usage.into(),
        yearly_income: cli.yearly_income,
        monthly_rent: cli.monthly_rent,
        facility_monthly_cost: cli.facility_monthly_cost,
        owner_share: cli.owner_share / 100.0,
        yearly_interest_rate: cli.interest_rate / 100.0,
        repayment_amount: repayment_amounts[0],
        initial_debt,
        own_capital: cli.own_capital,
        purchase_price: cli.purchase_price,
        land_value: cli.land_value,
        approximate_land_value: cli.land_value.is_none(),
        depreciation_rate: cli.depreciation_rate / 100.0,
        agent_fee: cli.agent_fee / 100.0,
        notary_fee: cli.notary_fee / 100.0,
        transfer_tax: cli.transfer_tax / 100.0,
        appreciation_rate: cli.appreciation_rate / 100.0,
    })?;

    Ok(ScenarioRequest {
        params,
        repayment_amounts,
        n_years,
        tax_model,
    })
}

fn run_request(request: &ScenarioRequest) -> Result<SweepResult, Error> {
    simulate_repayment_sweep(
        &request.params,
        &request.repayment_amounts,
        request.n_years,
        request.tax_model,
    )
}

pub fn simulate_from_args<I, T>(args: I) -> Result<String, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let request = build_request(cli)?;
    let result = run_request(&request)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Immo Rechner HTTP API listening");

    axum::serve(listener, router()).await
}

fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .fallback(not_found_handler)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn simulate_get_handler(Query(payload): Query<SimulatePayload>) -> Response {
    simulate_handler_impl(payload)
}

async fn simulate_post_handler(Json(payload): Json<SimulatePayload>) -> Response {
    simulate_handler_impl(payload)
}

fn simulate_handler_impl(payload: SimulatePayload) -> Response {
    let result = api_request_from_payload(payload).and_then(|request| run_request(&request));
    match result {
        Ok(sweep) => json_response(StatusCode::OK, sweep),
        Err(err) => {
            tracing::warn!(error = %err, "Rejected simulation request");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ScenarioRequest, String> {
    let payload = serde_json::from_str::<SimulatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    api_request_from_payload(payload).map_err(|e| e.to_string())
}

fn api_request_from_payload(payload: SimulatePayload) -> Result<ScenarioRequest, Error> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.usage {
        cli.usage = v.into();
    }
    if let Some(v) = payload.yearly_income {
        cli.yearly_income = v;
    }
    if let Some(v) = payload.monthly_rent {
        cli.monthly_rent = v;
    }
    if let Some(v) = payload.facility_monthly_cost {
        cli.facility_monthly_cost = v;
    }
    if let Some(v) = payload.owner_share {
        cli.owner_share = v;
    }
    if let Some(v) = payload.interest_rate {
        cli.interest_rate = v;
    }
    if let Some(v) = payload.repayment_amount {
        cli.repayment_amount = v;
    }
    cli.repayment_min = payload.repayment_min;
    cli.repayment_max = payload.repayment_max;
    cli.repayment_step = payload.repayment_step;

    // An explicit financing figure replaces the default loan amount.
    if payload.initial_debt.is_some() || payload.own_capital.is_some() {
        cli.initial_debt = payload.initial_debt;
        cli.own_capital = payload.own_capital;
    }

    if let Some(v) = payload.purchase_price {
        cli.purchase_price = v;
    }
    cli.land_value = payload.land_value;
    if let Some(v) = payload.depreciation_rate {
        cli.depreciation_rate = v;
    }
    if let Some(v) = payload.agent_fee {
        cli.agent_fee = v;
    }
    if let Some(v) = payload.notary_fee {
        cli.notary_fee = v;
    }
    if let Some(v) = payload.transfer_tax {
        cli.transfer_tax = v;
    }
    if let Some(v) = payload.appreciation_rate {
        cli.appreciation_rate = v;
    }
    if let Some(v) = payload.n_years {
        cli.n_years = v;
    }
    if let Some(v) = payload.tax_model {
        cli.tax_model = v.into();
    }
    if let Some(v) = payload.flat_tax_rate {
        cli.flat_tax_rate = v;
    }

    build_request(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        usage: CliUsage::Renting,
        yearly_income: 100_000.0,
        monthly_rent: 1_500.0,
        facility_monthly_cost: 350.0,
        owner_share: 50.0,
        interest_rate: 3.5,
        repayment_amount: 1_500.0,
        repayment_min: None,
        repayment_max: None,
        repayment_step: None,
        initial_debt: Some(DEFAULT_INITIAL_DEBT),
        own_capital: None,
        purchase_price: 500_000.0,
        land_value: None,
        depreciation_rate: 2.0,
        agent_fee: 3.57,
        notary_fee: 1.5,
        transfer_tax: 6.0,
        appreciation_rate: 2.0,
        n_years: 10,
        tax_model: CliTaxModel::Progressive,
        flat_tax_rate: DEFAULT_FLAT_TAX_RATE * 100.0,
    }
}
