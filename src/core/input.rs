use super::error::CalcError;

/// Amount used whenever the caller leaves the investment amount blank (1 lakh).
pub const DEFAULT_INVESTMENT_AMOUNT: f64 = 100_000.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AmountMultiplier {
    Unit,
    Thousand,
    Lakh,
    Crore,
}

impl AmountMultiplier {
    pub fn value(self) -> f64 {
        match self {
            AmountMultiplier::Unit => 1.0,
            AmountMultiplier::Thousand => 1_000.0,
            AmountMultiplier::Lakh => 100_000.0,
            AmountMultiplier::Crore => 10_000_000.0,
        }
    }
}

/// Parses "8", "8%" or "0.08" into the decimal rate 0.08.
///
/// Without a percent sign, values whose magnitude is above 1 are read as
/// percentages and everything else as an already-decimal rate, so "1" means
/// 100% while "1.5" means 1.5% and "-5" means -5%.
pub fn parse_percentage(text: &str) -> Result<f64, CalcError> {
    let trimmed = text.trim();

    if let Some(number) = trimmed.strip_suffix('%') {
        return parse_float(number.trim()).map(|value| value / 100.0);
    }

    let value = parse_float(trimmed)?;
    if value.abs() > 1.0 {
        Ok(value / 100.0)
    } else {
        Ok(value)
    }
}

/// Parses free-form rupee amounts such as "50,000", "₹1000", "2.5 lakh", "1CR" or "10k".
pub fn parse_currency_amount(text: &str) -> Result<f64, CalcError> {
    if text.trim().is_empty() {
        return Ok(DEFAULT_INVESTMENT_AMOUNT);
    }

    let cleaned: String = text
        .trim()
        .to_uppercase()
        .replace('₹', "")
        .replace("RS", "")
        .replace("INR", "")
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    let (number_part, multiplier) = split_multiplier(&cleaned);
    if number_part.is_empty() {
        return match multiplier {
            AmountMultiplier::Unit => Err(CalcError::unparseable_amount(cleaned)),
            _ => Ok(multiplier.value()),
        };
    }

    number_part
        .parse::<f64>()
        .map(|number| number * multiplier.value())
        .map_err(|_| CalcError::unparseable_amount(cleaned.clone()))
}

fn split_multiplier(cleaned: &str) -> (String, AmountMultiplier) {
    if cleaned.contains("CRORE") || cleaned.contains("CR") {
        let number = cleaned.replace("CRORE", "").replace("CR", "");
        return (number, AmountMultiplier::Crore);
    }
    if cleaned.contains("LAKH") {
        return (cleaned.replace("LAKH", ""), AmountMultiplier::Lakh);
    }
    if let Some(number) = cleaned.strip_suffix('L') {
        return (number.to_string(), AmountMultiplier::Lakh);
    }
    if cleaned.contains('K') {
        return (cleaned.replace('K', ""), AmountMultiplier::Thousand);
    }
    (cleaned.to_string(), AmountMultiplier::Unit)
}

fn parse_float(text: &str) -> Result<f64, CalcError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::invalid_number(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn percentage_forms_agree() {
        assert_approx(parse_percentage("8").unwrap(), 0.08);
        assert_approx(parse_percentage("8%").unwrap(), 0.08);
        assert_approx(parse_percentage("0.08").unwrap(), 0.08);
        assert_approx(parse_percentage(" 12.5 % ").unwrap(), 0.125);
    }

    #[test]
    fn percentage_heuristic_boundary_at_one() {
        // Exactly 1 is taken as an already-decimal 100% rate.
        assert_approx(parse_percentage("1").unwrap(), 1.0);
        assert_approx(parse_percentage("1.0").unwrap(), 1.0);
        assert_approx(parse_percentage("1.0001").unwrap(), 0.010001);
        assert_approx(parse_percentage("1.5").unwrap(), 0.015);
        assert_approx(parse_percentage("150%").unwrap(), 1.5);
    }

    #[test]
    fn negative_percentages_rescale_by_magnitude() {
        assert_approx(parse_percentage("-5").unwrap(), -0.05);
        assert_approx(parse_percentage("-5%").unwrap(), -0.05);
        assert_approx(parse_percentage("-1.5").unwrap(), -0.015);
        // Magnitude exactly 1 stays an already-decimal rate.
        assert_approx(parse_percentage("-1").unwrap(), -1.0);
        assert_approx(parse_percentage("-0.02").unwrap(), -0.02);
    }

    #[test]
    fn percentage_rejects_garbage() {
        assert_eq!(
            parse_percentage("abc"),
            Err(CalcError::InvalidNumberFormat("abc".to_string()))
        );
        assert!(parse_percentage("").is_err());
        assert!(parse_percentage("%").is_err());
        assert!(parse_percentage("inf").is_err());
    }

    #[test]
    fn currency_lakh_variants() {
        assert_approx(parse_currency_amount("1L").unwrap(), 100_000.0);
        assert_approx(parse_currency_amount("1 lakh").unwrap(), 100_000.0);
        assert_approx(parse_currency_amount("2.5L").unwrap(), 250_000.0);
        assert_approx(parse_currency_amount("1.5 Lakh").unwrap(), 150_000.0);
    }

    #[test]
    fn currency_crore_and_thousand_variants() {
        assert_approx(parse_currency_amount("1CR").unwrap(), 10_000_000.0);
        assert_approx(parse_currency_amount("2 crore").unwrap(), 20_000_000.0);
        assert_approx(parse_currency_amount("50k").unwrap(), 50_000.0);
    }

    #[test]
    fn currency_strips_symbols_and_separators() {
        assert_approx(parse_currency_amount("₹1,00,000").unwrap(), 100_000.0);
        assert_approx(parse_currency_amount("Rs 5000").unwrap(), 5_000.0);
        assert_approx(parse_currency_amount("INR 2,500.50").unwrap(), 2_500.5);
    }

    #[test]
    fn currency_blank_uses_default() {
        assert_approx(parse_currency_amount("").unwrap(), DEFAULT_INVESTMENT_AMOUNT);
        assert_approx(parse_currency_amount("   ").unwrap(), DEFAULT_INVESTMENT_AMOUNT);
    }

    #[test]
    fn currency_bare_keyword_defaults_coefficient_to_one() {
        assert_approx(parse_currency_amount("CR").unwrap(), 10_000_000.0);
        assert_approx(parse_currency_amount("L").unwrap(), 100_000.0);
        assert_approx(parse_currency_amount("lakh").unwrap(), 100_000.0);
    }

    #[test]
    fn currency_rejects_unparseable_text() {
        let err = parse_currency_amount("lots of money").unwrap_err();
        assert!(matches!(err, CalcError::UnparseableAmount(_)));
        assert!(err.to_string().contains("Cannot parse amount"));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_percent_sign_always_divides_by_hundred(bp in -100_000i32..100_000) {
            let value = bp as f64 / 100.0;
            let parsed = parse_percentage(&format!("{value}%")).unwrap();
            prop_assert!((parsed - value / 100.0).abs() <= 1e-12);
        }

        #[test]
        fn prop_plain_integers_round_trip_through_lakh_suffix(lakhs in 1u32..10_000) {
            let parsed = parse_currency_amount(&format!("{lakhs}L")).unwrap();
            prop_assert!((parsed - lakhs as f64 * 100_000.0).abs() <= 1e-6);
        }
    }
}
