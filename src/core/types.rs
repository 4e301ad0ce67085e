use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionFormatted {
    pub nominal_value: String,
    pub real_value: String,
    pub inflation_impact: String,
    pub nominal_gain: String,
    pub real_gain: String,
}

/// Value of a lump sum after a whole number of years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub years: u32,
    pub nominal_value: f64,
    pub real_value: f64,
    pub inflation_impact: f64,
    pub nominal_gain: f64,
    pub real_gain: f64,
    pub nominal_gain_percentage: f64,
    pub real_gain_percentage: f64,
    pub effective_nominal_rate: f64,
    pub effective_real_rate: f64,
    pub purchasing_power_ratio: f64,
    pub formatted: ProjectionFormatted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyFormatted {
    pub nominal_value: String,
    pub real_value: String,
    pub real_gain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: u32,
    pub nominal_value: f64,
    pub real_value: f64,
    pub nominal_gain: f64,
    pub real_gain: f64,
    pub nominal_gain_percentage: f64,
    pub real_gain_percentage: f64,
    pub formatted: MonthlyFormatted,
}

/// Month-by-month breakdown up to a fixed year horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    pub years: u32,
    pub total_months: u32,
    pub monthly_breakdown: Vec<MonthlyPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectionSummary {
    pub best_year: Option<u32>,
    pub worst_year: Option<u32>,
    pub breakeven_years: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedProjections {
    pub initial_amount: f64,
    pub nominal_return: f64,
    pub inflation_rate: f64,
    pub real_return: f64,
    pub monthly_nominal_rate: f64,
    pub monthly_real_rate: f64,
    pub yearly_projections: Vec<ProjectionPoint>,
    pub monthly_projections: Vec<MonthlySeries>,
    pub summary: ProjectionSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SipFormatted {
    pub total_invested: String,
    pub nominal_value: String,
    pub real_value: String,
    pub nominal_gain: String,
    pub real_gain: String,
}

/// Accumulated value of a monthly contribution plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SipPoint {
    pub years: u32,
    pub months: u32,
    pub total_invested: f64,
    pub nominal_value: f64,
    pub real_value: f64,
    pub nominal_gain: f64,
    pub real_gain: f64,
    pub nominal_gain_percentage: f64,
    pub real_gain_percentage: f64,
    pub formatted: SipFormatted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SipProjections {
    pub monthly_amount: f64,
    pub nominal_return: f64,
    pub inflation_rate: f64,
    pub real_return: f64,
    pub monthly_nominal_rate: f64,
    pub monthly_real_rate: f64,
    pub sip_projections: Vec<SipPoint>,
}
