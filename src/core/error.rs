use thiserror::Error;

/// Failures raised while normalizing input or evaluating the return formulas.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("could not convert '{0}' to a number")]
    InvalidNumberFormat(String),

    #[error("Cannot parse amount: {0}. Use formats like '50000', '1L', '2.5 lakh', etc.")]
    UnparseableAmount(String),

    #[error("Inflation rate cannot be -100% (which would make 1 + inflation = 0)")]
    DegenerateInflation,

    #[error("{0}")]
    ValidationWarning(String),

    #[error("invalid year list: {0}")]
    InvalidYears(String),
}

impl CalcError {
    pub fn invalid_number(text: impl Into<String>) -> Self {
        CalcError::InvalidNumberFormat(text.into())
    }

    pub fn unparseable_amount(text: impl Into<String>) -> Self {
        CalcError::UnparseableAmount(text.into())
    }

    /// Soft failures that the caller may choose to proceed past.
    pub fn is_warning(&self) -> bool {
        matches!(self, CalcError::ValidationWarning(_))
    }
}
