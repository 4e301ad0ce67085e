use serde::Serialize;

use super::error::CalcError;
use super::format::format_percentage;

const EXTREME_NOMINAL_RETURN: f64 = 10.0;
const EXTREME_INFLATION: f64 = 1.0;
const EXCELLENT_REAL_RETURN: f64 = 0.03;

/// `(1 + nominal) / (1 + inflation) - 1`.
pub fn real_return(nominal_return: f64, inflation_rate: f64) -> Result<f64, CalcError> {
    let divisor = 1.0 + inflation_rate;
    if divisor == 0.0 {
        return Err(CalcError::DegenerateInflation);
    }
    Ok((1.0 + nominal_return) / divisor - 1.0)
}

pub fn purchasing_power(initial_amount: f64, real_return: f64, years: f64) -> f64 {
    initial_amount * (1.0 + real_return).powf(years)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub warning: Option<String>,
}

/// Flags implausible rates without rejecting them; only inflation at or below
/// -100% is invalid.
pub fn validate_inputs(nominal_return: f64, inflation_rate: f64) -> ValidationOutcome {
    let mut warnings = Vec::new();

    if nominal_return.abs() > EXTREME_NOMINAL_RETURN {
        warnings.push(format!(
            "Nominal return seems very high: {}",
            format_percentage(nominal_return, 4)
        ));
    }
    if inflation_rate.abs() > EXTREME_INFLATION {
        warnings.push(format!(
            "Inflation rate seems very high: {}",
            format_percentage(inflation_rate, 4)
        ));
    }

    if inflation_rate <= -1.0 {
        warnings.push("Inflation rate of -100% or lower would cause division by zero".to_string());
        return ValidationOutcome {
            is_valid: false,
            warning: Some(warnings.join("; ")),
        };
    }

    ValidationOutcome {
        is_valid: true,
        warning: (!warnings.is_empty()).then(|| warnings.join("; ")),
    }
}

/// Branching form of [`validate_inputs`]: hard failures become
/// `DegenerateInflation`, soft ones `ValidationWarning` (see [`CalcError::is_warning`]).
pub fn validate_rates(nominal_return: f64, inflation_rate: f64) -> Result<(), CalcError> {
    let outcome = validate_inputs(nominal_return, inflation_rate);
    match (outcome.is_valid, outcome.warning) {
        (false, _) => Err(CalcError::DegenerateInflation),
        (true, Some(warning)) => Err(CalcError::ValidationWarning(warning)),
        (true, None) => Ok(()),
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentLevel {
    Excellent,
    Good,
    Neutral,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub level: AssessmentLevel,
    pub message: &'static str,
    pub icon: &'static str,
}

pub fn assess(real_return: f64) -> Assessment {
    if real_return > EXCELLENT_REAL_RETURN {
        Assessment {
            level: AssessmentLevel::Excellent,
            message: "Excellent! Your investment significantly beats inflation.",
            icon: "🎉",
        }
    } else if real_return > 0.0 {
        Assessment {
            level: AssessmentLevel::Good,
            message: "Good! Your investment beats inflation.",
            icon: "✅",
        }
    } else if real_return == 0.0 {
        Assessment {
            level: AssessmentLevel::Neutral,
            message: "Your investment exactly matches inflation.",
            icon: "⚠️",
        }
    } else {
        Assessment {
            level: AssessmentLevel::Poor,
            message: "Warning! Your investment loses to inflation.",
            icon: "❌",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InflationRisk {
    Low,
    Medium,
    High,
}

impl InflationRisk {
    pub fn from_real_return(real_return: f64) -> Self {
        let buffer = real_return * 100.0;
        if buffer > 3.0 {
            InflationRisk::Low
        } else if buffer > 0.0 {
            InflationRisk::Medium
        } else {
            InflationRisk::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InflationRisk::Low => "Low",
            InflationRisk::Medium => "Medium",
            InflationRisk::High => "High",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            InflationRisk::Low => "Good buffer against inflation variations",
            InflationRisk::Medium => "Small buffer against inflation increases",
            InflationRisk::High => "Vulnerable to inflation increases",
        }
    }
}

pub fn calculation_steps(nominal_return: f64, inflation_rate: f64, real_return: f64) -> [String; 4] {
    let growth = 1.0 + nominal_return;
    let erosion = 1.0 + inflation_rate;
    let ratio = growth / erosion;
    [
        format!("(1 + {nominal_return:.4}) = {growth:.4}"),
        format!("(1 + {inflation_rate:.4}) = {erosion:.4}"),
        format!("{growth:.4} ÷ {erosion:.4} = {ratio:.6}"),
        format!("{ratio:.6} - 1 = {real_return:.6}"),
    ]
}
