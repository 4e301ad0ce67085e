use super::error::CalcError;
use super::format::format_currency;
use super::formula::{purchasing_power, real_return};
use super::types::{
    DetailedProjections, MonthlyFormatted, MonthlyPoint, MonthlySeries, ProjectionFormatted,
    ProjectionPoint, ProjectionSummary, SipFormatted, SipPoint, SipProjections,
};

pub const DEFAULT_SCENARIO_YEARS: [u32; 7] = [1, 5, 10, 15, 20, 25, 30];
pub const DEFAULT_DETAILED_YEARS: [u32; 10] = [1, 2, 3, 5, 7, 10, 15, 20, 25, 30];
pub const MONTHLY_HORIZON_YEARS: [u32; 4] = [1, 2, 3, 5];

const MONTHS_PER_YEAR: u32 = 12;
const ZERO_RATE_EPS: f64 = 1e-12;

pub fn monthly_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / MONTHS_PER_YEAR as f64) - 1.0
}

pub fn project_scenarios(
    initial_amount: f64,
    nominal_return: f64,
    inflation_rate: f64,
    years: &[u32],
    include_monthly: bool,
) -> Result<DetailedProjections, CalcError> {
    validate_years(years)?;
    let real = real_return(nominal_return, inflation_rate)?;

    let yearly_projections: Vec<ProjectionPoint> = years
        .iter()
        .map(|&y| project_year(initial_amount, nominal_return, real, y))
        .collect();

    let monthly_nominal_rate = monthly_rate(nominal_return);
    let monthly_real_rate = monthly_rate(real);

    let monthly_projections = if include_monthly {
        let max_year = years.iter().copied().max().unwrap_or(0);
        MONTHLY_HORIZON_YEARS
            .iter()
            .copied()
            .filter(|&horizon| horizon <= max_year)
            .map(|horizon| {
                monthly_series(
                    initial_amount,
                    monthly_nominal_rate,
                    monthly_real_rate,
                    horizon,
                )
            })
            .collect()
    } else {
        Vec::new()
    };

    let summary = summarize(&yearly_projections);

    Ok(DetailedProjections {
        initial_amount,
        nominal_return,
        inflation_rate,
        real_return: real,
        monthly_nominal_rate,
        monthly_real_rate,
        yearly_projections,
        monthly_projections,
        summary,
    })
}

pub fn project_year(
    initial_amount: f64,
    nominal_return: f64,
    real_return: f64,
    years: u32,
) -> ProjectionPoint {
    let exponent = years as f64;
    let nominal_value = initial_amount * (1.0 + nominal_return).powf(exponent);
    let real_value = purchasing_power(initial_amount, real_return, exponent);
    let inflation_impact = nominal_value - real_value;
    let nominal_gain = nominal_value - initial_amount;
    let real_gain = real_value - initial_amount;

    ProjectionPoint {
        years,
        nominal_value,
        real_value,
        inflation_impact,
        nominal_gain,
        real_gain,
        nominal_gain_percentage: gain_percentage(nominal_gain, initial_amount),
        real_gain_percentage: gain_percentage(real_gain, initial_amount),
        effective_nominal_rate: annualized_rate(nominal_value, initial_amount, exponent),
        effective_real_rate: annualized_rate(real_value, initial_amount, exponent),
        purchasing_power_ratio: if nominal_value == 0.0 {
            0.0
        } else {
            real_value / nominal_value
        },
        formatted: ProjectionFormatted {
            nominal_value: format_currency(nominal_value),
            real_value: format_currency(real_value),
            inflation_impact: format_currency(inflation_impact),
            nominal_gain: format_currency(nominal_gain),
            real_gain: format_currency(real_gain),
        },
    }
}

fn monthly_series(
    initial_amount: f64,
    monthly_nominal_rate: f64,
    monthly_real_rate: f64,
    horizon_years: u32,
) -> MonthlySeries {
    let total_months = horizon_years * MONTHS_PER_YEAR;
    let monthly_breakdown = (1..=total_months)
        .map(|month| {
            let nominal_value = initial_amount * (1.0 + monthly_nominal_rate).powf(month as f64);
            let real_value = initial_amount * (1.0 + monthly_real_rate).powf(month as f64);
            let nominal_gain = nominal_value - initial_amount;
            let real_gain = real_value - initial_amount;
            MonthlyPoint {
                month,
                nominal_value,
                real_value,
                nominal_gain,
                real_gain,
                nominal_gain_percentage: gain_percentage(nominal_gain, initial_amount),
                real_gain_percentage: gain_percentage(real_gain, initial_amount),
                formatted: MonthlyFormatted {
                    nominal_value: format_currency(nominal_value),
                    real_value: format_currency(real_value),
                    real_gain: format_currency(real_gain),
                },
            }
        })
        .collect();

    MonthlySeries {
        years: horizon_years,
        total_months,
        monthly_breakdown,
    }
}

pub fn summarize(points: &[ProjectionPoint]) -> ProjectionSummary {
    let mut best: Option<&ProjectionPoint> = None;
    let mut worst: Option<&ProjectionPoint> = None;
    for point in points {
        if best.is_none_or(|b| point.real_gain_percentage > b.real_gain_percentage) {
            best = Some(point);
        }
        if worst.is_none_or(|w| point.real_gain_percentage < w.real_gain_percentage) {
            worst = Some(point);
        }
    }

    ProjectionSummary {
        best_year: best.map(|p| p.years),
        worst_year: worst.filter(|p| p.real_gain < 0.0).map(|p| p.years),
        breakeven_years: points.iter().find(|p| p.real_gain > 0.0).map(|p| p.years),
    }
}

pub fn annuity_future_value(contribution: f64, rate: f64, periods: u32) -> f64 {
    if rate.abs() <= ZERO_RATE_EPS {
        return contribution * periods as f64;
    }
    contribution * ((1.0 + rate).powf(periods as f64) - 1.0) / rate
}

pub fn project_sip(
    monthly_amount: f64,
    nominal_return: f64,
    inflation_rate: f64,
    years: &[u32],
) -> Result<SipProjections, CalcError> {
    validate_years(years)?;
    let real = real_return(nominal_return, inflation_rate)?;
    let monthly_nominal_rate = monthly_rate(nominal_return);
    let monthly_real_rate = monthly_rate(real);

    let sip_projections = years
        .iter()
        .map(|&y| {
            let months = y * MONTHS_PER_YEAR;
            let total_invested = monthly_amount * months as f64;
            let nominal_value = annuity_future_value(monthly_amount, monthly_nominal_rate, months);
            let real_value = annuity_future_value(monthly_amount, monthly_real_rate, months);
            let nominal_gain = nominal_value - total_invested;
            let real_gain = real_value - total_invested;

            SipPoint {
                years: y,
                months,
                total_invested,
                nominal_value,
                real_value,
                nominal_gain,
                real_gain,
                nominal_gain_percentage: gain_percentage(nominal_gain, total_invested),
                real_gain_percentage: gain_percentage(real_gain, total_invested),
                formatted: SipFormatted {
                    total_invested: format_currency(total_invested),
                    nominal_value: format_currency(nominal_value),
                    real_value: format_currency(real_value),
                    nominal_gain: format_currency(nominal_gain),
                    real_gain: format_currency(real_gain),
                },
            }
        })
        .collect();

    Ok(SipProjections {
        monthly_amount,
        nominal_return,
        inflation_rate,
        real_return: real,
        monthly_nominal_rate,
        monthly_real_rate,
        sip_projections,
    })
}

fn validate_years(years: &[u32]) -> Result<(), CalcError> {
    if years.contains(&0) {
        return Err(CalcError::InvalidYears(
            "year offsets must be positive".to_string(),
        ));
    }
    // Month counts are u32.
    if let Some(y) = years.iter().find(|y| y.checked_mul(MONTHS_PER_YEAR).is_none()) {
        return Err(CalcError::InvalidYears(format!(
            "year offset {y} is too large"
        )));
    }
    Ok(())
}

fn gain_percentage(gain: f64, base: f64) -> f64 {
    if base == 0.0 { 0.0 } else { gain / base * 100.0 }
}

fn annualized_rate(value: f64, initial_amount: f64, years: f64) -> f64 {
    if initial_amount == 0.0 || years == 0.0 {
        return 0.0;
    }
    let growth = value / initial_amount;
    if growth <= 0.0 {
        return -1.0;
    }
    growth.powf(1.0 / years) - 1.0
}
