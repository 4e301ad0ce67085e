mod engine;
mod error;
mod format;
mod formula;
mod input;
pub mod reference;
mod types;

pub use engine::{
    DEFAULT_DETAILED_YEARS, DEFAULT_SCENARIO_YEARS, MONTHLY_HORIZON_YEARS, annuity_future_value,
    monthly_rate, project_scenarios, project_sip, project_year, summarize,
};
pub use error::CalcError;
pub use format::{
    CURRENCY_SYMBOL, format_currency, format_currency_with, format_percentage, round_to,
};
pub use formula::{
    Assessment, AssessmentLevel, InflationRisk, ValidationOutcome, assess, calculation_steps,
    purchasing_power, real_return, validate_inputs, validate_rates,
};
pub use input::{
    AmountMultiplier, DEFAULT_INVESTMENT_AMOUNT, parse_currency_amount, parse_percentage,
};
pub use types::{
    DetailedProjections, MonthlyFormatted, MonthlyPoint, MonthlySeries, ProjectionFormatted,
    ProjectionPoint, ProjectionSummary, SipFormatted, SipPoint, SipProjections,
};
