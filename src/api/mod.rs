pub mod config;

use axum::{
    Router,
    extract::{Json, Path},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::core::reference::{
    self, COUNTRIES, Country, INVESTMENT_TYPES, InflationLookup, InvestmentCategory,
    InvestmentType, Rng,
};
use crate::core::{
    Assessment, CalcError, DEFAULT_DETAILED_YEARS, DEFAULT_INVESTMENT_AMOUNT,
    DEFAULT_SCENARIO_YEARS, DetailedProjections, SipProjections, assess, calculation_steps,
    format_currency, format_percentage, parse_currency_amount, parse_percentage,
    project_scenarios, project_sip, real_return, round_to, validate_inputs,
};
use config::ServerConfig;

const DEFAULT_SIP_AMOUNT: f64 = 10_000.0;
const MANUAL_INFLATION_SOURCE: &str = "manual";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Calculation error: {0}")]
    Calculation(#[from] CalcError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request rejected");
        // Failures travel in the body; the status stays 200.
        json_response(
            StatusCode::OK,
            FailureResponse {
                success: false,
                error: self.to_string(),
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FlexibleValue {
    Number(f64),
    Text(String),
}

impl FlexibleValue {
    fn to_text(&self) -> String {
        match self {
            FlexibleValue::Number(v) => v.to_string(),
            FlexibleValue::Text(s) => s.clone(),
        }
    }

    fn as_rate(&self) -> Result<f64, CalcError> {
        parse_percentage(&self.to_text())
    }

    fn as_amount(&self) -> Result<f64, CalcError> {
        match self {
            FlexibleValue::Number(v) => Ok(*v),
            FlexibleValue::Text(s) => parse_currency_amount(s),
        }
    }
}

fn rate_or_zero(value: Option<&FlexibleValue>) -> Result<f64, CalcError> {
    value.map_or(Ok(0.0), FlexibleValue::as_rate)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CalculatePayload {
    pub nominal_return: Option<FlexibleValue>,
    pub inflation_rate: Option<FlexibleValue>,
    pub investment_amount: Option<FlexibleValue>,
    pub country: Option<String>,
    pub use_country_inflation: bool,
    pub investment_type: Option<String>,
    pub use_investment_type: bool,
    pub monthly_sip_amount: Option<FlexibleValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DetailedProjectionsPayload {
    pub amount: Option<FlexibleValue>,
    pub nominal_return: Option<FlexibleValue>,
    pub inflation_rate: Option<FlexibleValue>,
    pub years: Option<Vec<u32>>,
    pub include_monthly: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SipProjectionsPayload {
    pub monthly_amount: Option<FlexibleValue>,
    pub nominal_return: Option<FlexibleValue>,
    pub inflation_rate: Option<FlexibleValue>,
    pub years: Option<Vec<u32>>,
}

#[derive(Debug, Serialize)]
struct FailureResponse {
    success: bool,
    error: String,
}

#[derive(Debug, Serialize)]
pub struct CalculationSteps {
    pub step1: String,
    pub step2: String,
    pub step3: String,
    pub step4: String,
}

#[derive(Debug, Serialize)]
pub struct PurchasingPowerRow {
    pub years: u32,
    pub nominal_value: f64,
    pub real_value: f64,
    pub inflation_impact: f64,
    pub nominal_formatted: String,
    pub real_formatted: String,
    pub inflation_formatted: String,
}

#[derive(Debug, Serialize)]
pub struct CalculationResults {
    pub nominal_return: String,
    pub inflation_rate: String,
    pub real_return: String,
    pub real_return_decimal: f64,
    pub calculation_steps: CalculationSteps,
    pub purchasing_power_data: Vec<PurchasingPowerRow>,
    pub detailed_projections: DetailedProjections,
    pub sip_projections: SipProjections,
    pub assessment: Assessment,
    pub investment_amount: f64,
    pub investment_amount_formatted: String,
    pub inflation_source: &'static str,
    pub investment_info: Option<&'static InvestmentType>,
    pub country_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub results: CalculationResults,
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProjectionsResponse {
    success: bool,
    projections: DetailedProjections,
}

#[derive(Debug, Serialize)]
struct SipResponse {
    success: bool,
    sip_projections: SipProjections,
}

#[derive(Debug, Serialize)]
struct CountriesResponse {
    success: bool,
    countries: &'static [Country],
}

#[derive(Debug, Serialize)]
struct InflationResponse {
    success: bool,
    country_code: String,
    inflation: InflationLookup,
}

#[derive(Debug, Serialize)]
struct InvestmentTypesResponse {
    success: bool,
    investment_types: &'static [InvestmentType],
    categories: Vec<InvestmentCategory>,
}

#[derive(Debug, Serialize)]
pub struct ExampleCalculation {
    pub name: &'static str,
    pub description: &'static str,
    pub nominal: f64,
    pub inflation: f64,
    pub scenario: &'static str,
    pub real_return: String,
    pub real_return_decimal: f64,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn router() -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/api/detailed-projections", post(detailed_projections_handler))
        .route("/api/sip-projections", post(sip_projections_handler))
        .route("/api/countries", get(countries_handler))
        .route("/api/inflation/:code", get(inflation_handler))
        .route("/api/investment-types", get(investment_types_handler))
        .route("/examples", get(examples_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
}

pub async fn run_http_server(config: &ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "real return API listening");
    tracing::info!("Local access: http://127.0.0.1:{}/", addr.port());

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
        Err(err) => {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}

async fn not_found_handler() -> Response {
    json_response(
        StatusCode::NOT_FOUND,
        serde_json::json!({ "error": "Not found" }),
    )
}

async fn calculate_handler(Json(payload): Json<CalculatePayload>) -> Response {
    let mut rng = Rng::from_clock();
    match build_calculation(payload, &mut rng) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => err.into_response(),
    }
}

async fn detailed_projections_handler(
    Json(payload): Json<DetailedProjectionsPayload>,
) -> Response {
    match build_detailed_projections(payload) {
        Ok(projections) => json_response(
            StatusCode::OK,
            ProjectionsResponse {
                success: true,
                projections,
            },
        ),
        Err(err) => err.into_response(),
    }
}

async fn sip_projections_handler(Json(payload): Json<SipProjectionsPayload>) -> Response {
    match build_sip_projections(payload) {
        Ok(sip_projections) => json_response(
            StatusCode::OK,
            SipResponse {
                success: true,
                sip_projections,
            },
        ),
        Err(err) => err.into_response(),
    }
}

async fn countries_handler() -> Response {
    json_response(
        StatusCode::OK,
        CountriesResponse {
            success: true,
            countries: COUNTRIES,
        },
    )
}

async fn inflation_handler(Path(code): Path<String>) -> Response {
    let code = code.to_uppercase();
    let inflation = reference::country_inflation(&code);
    json_response(
        StatusCode::OK,
        InflationResponse {
            success: true,
            country_code: code,
            inflation,
        },
    )
}

async fn investment_types_handler() -> Response {
    json_response(
        StatusCode::OK,
        InvestmentTypesResponse {
            success: true,
            investment_types: INVESTMENT_TYPES,
            categories: reference::investment_categories(),
        },
    )
}

async fn examples_handler() -> Response {
    match example_calculations() {
        Ok(examples) => json_response(StatusCode::OK, examples),
        Err(err) => ApiError::from(err).into_response(),
    }
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

pub fn build_calculation(
    payload: CalculatePayload,
    rng: &mut Rng,
) -> Result<CalculateResponse, ApiError> {
    let investment_key = payload
        .investment_type
        .as_deref()
        .filter(|_| payload.use_investment_type);
    let investment_info = investment_key.and_then(reference::find_investment_type);
    let nominal_return = match investment_key {
        Some(key) => reference::investment_type_return(key),
        None => rate_or_zero(payload.nominal_return.as_ref())?,
    };

    let (inflation_rate, inflation_source) = match payload.country.as_deref() {
        Some(code) if payload.use_country_inflation => {
            let lookup = reference::country_inflation_with(&code.to_uppercase(), rng);
            (lookup.rate / 100.0, lookup.source.as_str())
        }
        _ => (
            rate_or_zero(payload.inflation_rate.as_ref())?,
            MANUAL_INFLATION_SOURCE,
        ),
    };

    let investment_amount = payload
        .investment_amount
        .as_ref()
        .map_or(Ok(DEFAULT_INVESTMENT_AMOUNT), FlexibleValue::as_amount)
        .unwrap_or_else(|err| {
            tracing::debug!(error = %err, "falling back to default investment amount");
            DEFAULT_INVESTMENT_AMOUNT
        });
    let sip_amount = payload
        .monthly_sip_amount
        .as_ref()
        .map_or(Ok(DEFAULT_SIP_AMOUNT), FlexibleValue::as_amount)
        .unwrap_or(DEFAULT_SIP_AMOUNT);

    let validation = validate_inputs(nominal_return, inflation_rate);
    if !validation.is_valid {
        return Err(ApiError::Validation(validation.warning.unwrap_or_default()));
    }

    let real = real_return(nominal_return, inflation_rate)?;
    let scenarios = project_scenarios(
        investment_amount,
        nominal_return,
        inflation_rate,
        &DEFAULT_SCENARIO_YEARS,
        false,
    )?;
    let purchasing_power_data = scenarios
        .yearly_projections
        .iter()
        .map(|p| PurchasingPowerRow {
            years: p.years,
            nominal_value: round_to(p.nominal_value, 2),
            real_value: round_to(p.real_value, 2),
            inflation_impact: round_to(p.inflation_impact, 2),
            nominal_formatted: p.formatted.nominal_value.clone(),
            real_formatted: p.formatted.real_value.clone(),
            inflation_formatted: p.formatted.inflation_impact.clone(),
        })
        .collect();

    let detailed_projections = project_scenarios(
        investment_amount,
        nominal_return,
        inflation_rate,
        &DEFAULT_DETAILED_YEARS,
        true,
    )?;
    let sip_projections = project_sip(
        sip_amount,
        nominal_return,
        inflation_rate,
        &DEFAULT_DETAILED_YEARS,
    )?;

    let [step1, step2, step3, step4] = calculation_steps(nominal_return, inflation_rate, real);

    tracing::info!(
        nominal_return,
        inflation_rate,
        real_return = real,
        inflation_source,
        "calculated real return"
    );

    Ok(CalculateResponse {
        success: true,
        results: CalculationResults {
            nominal_return: format_percentage(nominal_return, 2),
            inflation_rate: format_percentage(inflation_rate, 2),
            real_return: format_percentage(real, 2),
            real_return_decimal: real,
            calculation_steps: CalculationSteps {
                step1,
                step2,
                step3,
                step4,
            },
            purchasing_power_data,
            detailed_projections,
            sip_projections,
            assessment: assess(real),
            investment_amount,
            investment_amount_formatted: format_currency(investment_amount),
            inflation_source,
            investment_info,
            country_code: payload.country,
        },
        warning: validation.warning,
    })
}

pub fn build_detailed_projections(
    payload: DetailedProjectionsPayload,
) -> Result<DetailedProjections, ApiError> {
    let amount = payload
        .amount
        .as_ref()
        .map_or(Ok(DEFAULT_INVESTMENT_AMOUNT), FlexibleValue::as_amount)?;
    let nominal_return = rate_or_zero(payload.nominal_return.as_ref())?;
    let inflation_rate = rate_or_zero(payload.inflation_rate.as_ref())?;
    let years = requested_years(payload.years)?;

    Ok(project_scenarios(
        amount,
        nominal_return,
        inflation_rate,
        &years,
        payload.include_monthly,
    )?)
}

pub fn build_sip_projections(payload: SipProjectionsPayload) -> Result<SipProjections, ApiError> {
    let monthly_amount = payload
        .monthly_amount
        .as_ref()
        .map_or(Ok(DEFAULT_SIP_AMOUNT), FlexibleValue::as_amount)?;
    let nominal_return = rate_or_zero(payload.nominal_return.as_ref())?;
    let inflation_rate = rate_or_zero(payload.inflation_rate.as_ref())?;
    let years = requested_years(payload.years)?;

    Ok(project_sip(
        monthly_amount,
        nominal_return,
        inflation_rate,
        &years,
    )?)
}

fn requested_years(years: Option<Vec<u32>>) -> Result<Vec<u32>, CalcError> {
    match years {
        None => Ok(DEFAULT_DETAILED_YEARS.to_vec()),
        Some(years) if years.is_empty() => Err(CalcError::InvalidYears(
            "at least one year offset is required".to_string(),
        )),
        Some(years) => Ok(years),
    }
}

// (name, description, nominal %, inflation %, scenario)
const EXAMPLES: [(&str, &str, f64, f64, &str); 5] = [
    (
        "Stock Market Investment",
        "Typical stock market return vs. normal inflation",
        8.0,
        3.0,
        "bull_market",
    ),
    (
        "Government Bonds",
        "Conservative bond investment",
        5.0,
        2.0,
        "conservative",
    ),
    (
        "High Growth Stock",
        "Growth stock in high inflation period",
        12.0,
        6.0,
        "high_growth",
    ),
    (
        "Savings Account",
        "Low-yield savings during inflation",
        1.0,
        4.0,
        "savings_loss",
    ),
    (
        "Real Estate",
        "Real estate investment return",
        7.0,
        3.5,
        "real_estate",
    ),
];

pub fn example_calculations() -> Result<Vec<ExampleCalculation>, CalcError> {
    EXAMPLES
        .iter()
        .map(|&(name, description, nominal, inflation, scenario)| {
            let real = real_return(nominal / 100.0, inflation / 100.0)?;
            Ok(ExampleCalculation {
                name,
                description,
                nominal,
                inflation,
                scenario,
                real_return: format_percentage(real, 2),
                real_return_decimal: real,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn payload_from_json(json: &str) -> CalculatePayload {
        serde_json::from_str(json).expect("valid payload")
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = router().oneshot(request).await.expect("router response");
        let status = response.status();
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    #[test]
    fn calculate_accepts_strings_and_numbers() {
        let payload = payload_from_json(
            r#"{"nominal_return": "12%", "inflation_rate": 6, "investment_amount": "5L"}"#,
        );
        let response = build_calculation(payload, &mut Rng::new(1)).expect("calculation");
        let results = &response.results;
        assert!(response.success);
        assert_eq!(response.warning, None);
        assert_eq!(results.nominal_return, "12.00%");
        assert_eq!(results.inflation_rate, "6.00%");
        assert_eq!(results.real_return, "5.66%");
        assert_approx(results.investment_amount, 500_000.0);
        assert_eq!(results.investment_amount_formatted, "₹5.00 L");
        assert_eq!(results.inflation_source, "manual");
        assert_eq!(results.purchasing_power_data.len(), DEFAULT_SCENARIO_YEARS.len());
        assert_eq!(
            results.detailed_projections.yearly_projections.len(),
            DEFAULT_DETAILED_YEARS.len()
        );
        assert_eq!(results.detailed_projections.monthly_projections.len(), 4);
        assert_approx(results.sip_projections.monthly_amount, 10_000.0);
        assert_eq!(results.calculation_steps.step1, "(1 + 0.1200) = 1.1200");
    }

    #[test]
    fn calculate_falls_back_to_default_amount_silently() {
        let payload = payload_from_json(
            r#"{"nominal_return": "8", "inflation_rate": "3", "investment_amount": "plenty"}"#,
        );
        let response = build_calculation(payload, &mut Rng::new(1)).expect("calculation");
        assert_approx(response.results.investment_amount, DEFAULT_INVESTMENT_AMOUNT);
    }

    #[test]
    fn calculate_uses_country_and_investment_type_overrides() {
        let payload = payload_from_json(
            r#"{
                "nominal_return": "1",
                "inflation_rate": "1",
                "country": "in",
                "use_country_inflation": true,
                "investment_type": "stocks",
                "use_investment_type": true
            }"#,
        );
        let response = build_calculation(payload, &mut Rng::new(9)).expect("calculation");
        let results = &response.results;
        assert_eq!(results.nominal_return, "12.00%");
        assert_eq!(results.inflation_source, "api_simulation");
        assert_eq!(results.investment_info.map(|t| t.key), Some("stocks"));
        assert_eq!(results.country_code.as_deref(), Some("in"));
        let inflation = results.detailed_projections.inflation_rate;
        assert!((0.035 - 1e-9..=0.055 + 1e-9).contains(&inflation));
    }

    #[test]
    fn unknown_investment_type_uses_default_return() {
        let payload = payload_from_json(
            r#"{"nominal_return": "15", "inflation_rate": "3", "investment_type": "lottery", "use_investment_type": true}"#,
        );
        let response = build_calculation(payload, &mut Rng::new(1)).expect("calculation");
        assert_eq!(response.results.nominal_return, "8.00%");
        assert_eq!(response.results.investment_info, None);

        let payload = payload_from_json(
            r#"{"nominal_return": "15", "inflation_rate": "3", "investment_type": "lottery"}"#,
        );
        let response = build_calculation(payload, &mut Rng::new(1)).expect("calculation");
        assert_eq!(response.results.nominal_return, "15.00%");
    }

    #[test]
    fn calculate_rejects_degenerate_inflation() {
        let payload = payload_from_json(r#"{"nominal_return": "8", "inflation_rate": "-100%"}"#);
        let err = build_calculation(payload, &mut Rng::new(1)).expect_err("must reject");
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(err.to_string().contains("division by zero"));
    }

    #[test]
    fn calculate_reports_unparseable_rates() {
        let payload = payload_from_json(r#"{"nominal_return": "eight", "inflation_rate": "3"}"#);
        let err = build_calculation(payload, &mut Rng::new(1)).expect_err("must reject");
        assert!(err.to_string().starts_with("Calculation error:"));
    }

    #[test]
    fn calculate_surfaces_soft_warnings_alongside_results() {
        let payload = payload_from_json(r#"{"nominal_return": "1200%", "inflation_rate": "3"}"#);
        let response = build_calculation(payload, &mut Rng::new(1)).expect("calculation");
        assert!(response.warning.unwrap().contains("Nominal return seems very high"));
    }

    #[test]
    fn detailed_projection_payload_defaults_and_validation() {
        let projections = build_detailed_projections(
            serde_json::from_str(r#"{"amount": 200000, "nominal_return": 0.1, "inflation_rate": "4%"}"#)
                .unwrap(),
        )
        .expect("projections");
        assert_eq!(projections.yearly_projections.len(), DEFAULT_DETAILED_YEARS.len());
        assert!(projections.monthly_projections.is_empty());

        let err = build_detailed_projections(
            serde_json::from_str(r#"{"amount": 1000, "years": []}"#).unwrap(),
        )
        .expect_err("empty years");
        assert!(err.to_string().contains("at least one year offset"));
    }

    #[test]
    fn examples_cover_positive_and_negative_real_returns() {
        let examples = example_calculations().expect("examples");
        assert_eq!(examples.len(), 5);
        assert_eq!(examples[0].real_return, "4.85%");
        assert!(examples[3].real_return_decimal < 0.0);
    }

    #[tokio::test]
    async fn calculate_endpoint_returns_full_result_shape() {
        let (status, body) = send(post_json(
            "/calculate",
            r#"{"nominal_return": "12", "inflation_rate": "6", "investment_amount": "500000"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["warning"].is_null());
        let results = &body["results"];
        assert_eq!(results["assessment"]["level"], "excellent");
        assert_eq!(results["calculation_steps"]["step4"], "1.056604 - 1 = 0.056604");
        assert_eq!(results["purchasing_power_data"][2]["years"], 10);
        assert_eq!(
            results["detailed_projections"]["summary"]["breakeven_years"],
            1
        );
        assert_eq!(results["sip_projections"]["sip_projections"][0]["months"], 12);
    }

    #[tokio::test]
    async fn calculate_endpoint_reports_failures_in_body() {
        let (status, body) = send(post_json(
            "/calculate",
            r#"{"nominal_return": "8", "inflation_rate": "-100%"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("-100%"));
    }

    #[tokio::test]
    async fn projection_endpoints_round_trip() {
        let (_, body) = send(post_json(
            "/api/detailed-projections",
            r#"{"amount": "1L", "nominal_return": "3", "inflation_rate": "4", "years": [5, 1], "include_monthly": true}"#,
        ))
        .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["projections"]["yearly_projections"][0]["years"], 5);
        assert!(body["projections"]["summary"]["breakeven_years"].is_null());
        assert_eq!(body["projections"]["monthly_projections"][3]["total_months"], 60);

        let (_, body) = send(post_json(
            "/api/sip-projections",
            r#"{"monthly_amount": 5000, "nominal_return": "0%", "inflation_rate": "0%", "years": [2]}"#,
        ))
        .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["sip_projections"]["sip_projections"][0]["real_value"], 120000.0);
    }

    #[tokio::test]
    async fn oversized_year_offsets_are_reported_in_body() {
        let (status, body) = send(post_json(
            "/api/sip-projections",
            r#"{"monthly_amount": 10000, "nominal_return": "8", "inflation_rate": "3", "years": [400000000]}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("too large"));
    }

    #[tokio::test]
    async fn reference_endpoints_serve_static_tables() {
        let (_, body) = send(get("/api/countries")).await;
        assert_eq!(body["countries"].as_array().unwrap().len(), COUNTRIES.len());

        let (_, body) = send(get("/api/investment-types")).await;
        assert_eq!(body["investment_types"][0]["key"], "stocks");
        assert_eq!(body["categories"][0]["category"], "equity");

        let (_, body) = send(get("/api/inflation/us")).await;
        assert_eq!(body["country_code"], "US");
        assert_eq!(body["inflation"]["source"], "api_simulation");

        let (_, body) = send(get("/api/inflation/zz")).await;
        assert_eq!(body["inflation"]["source"], "default");

        let (_, body) = send(get("/examples")).await;
        assert_eq!(body.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn unknown_routes_are_not_found() {
        let (status, body) = send(get("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }
}
