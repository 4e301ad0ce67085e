//! Static country inflation baselines and investment-type return tables.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

const DEFAULT_INFLATION_PERCENT: f64 = 3.0;
const DEFAULT_INVESTMENT_RETURN: f64 = 0.08;
const SIMULATED_UPDATE_DATE: &str = "2024-01-01";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub currency: &'static str,
    pub typical_inflation: f64,
    pub flag: &'static str,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentType {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub typical_return: f64,
    pub risk_level: RiskLevel,
    pub category: &'static str,
}

pub static COUNTRIES: &[Country] = &[
    Country {
        code: "IN",
        name: "India",
        currency: "₹",
        typical_inflation: 4.5,
        flag: "🇮🇳",
    },
    Country {
        code: "US",
        name: "United States",
        currency: "$",
        typical_inflation: 2.5,
        flag: "🇺🇸",
    },
    Country {
        code: "GB",
        name: "United Kingdom",
        currency: "£",
        typical_inflation: 2.0,
        flag: "🇬🇧",
    },
    Country {
        code: "JP",
        name: "Japan",
        currency: "¥",
        typical_inflation: 0.5,
        flag: "🇯🇵",
    },
    Country {
        code: "DE",
        name: "Germany",
        currency: "€",
        typical_inflation: 1.8,
        flag: "🇩🇪",
    },
    Country {
        code: "FR",
        name: "France",
        currency: "€",
        typical_inflation: 1.9,
        flag: "🇫🇷",
    },
    Country {
        code: "CA",
        name: "Canada",
        currency: "C$",
        typical_inflation: 2.2,
        flag: "🇨🇦",
    },
    Country {
        code: "AU",
        name: "Australia",
        currency: "A$",
        typical_inflation: 2.4,
        flag: "🇦🇺",
    },
    Country {
        code: "CN",
        name: "China",
        currency: "¥",
        typical_inflation: 2.8,
        flag: "🇨🇳",
    },
    Country {
        code: "BR",
        name: "Brazil",
        currency: "R$",
        typical_inflation: 4.0,
        flag: "🇧🇷",
    },
];

pub static INVESTMENT_TYPES: &[InvestmentType] = &[
    InvestmentType {
        key: "stocks",
        name: "Stocks/Equity",
        description: "Stock market investments",
        typical_return: 12.0,
        risk_level: RiskLevel::High,
        category: "equity",
    },
    InvestmentType {
        key: "mutual_funds_equity",
        name: "Equity Mutual Funds",
        description: "Diversified equity mutual funds",
        typical_return: 11.0,
        risk_level: RiskLevel::High,
        category: "mutual_funds",
    },
    InvestmentType {
        key: "mutual_funds_hybrid",
        name: "Hybrid Mutual Funds",
        description: "Balanced equity and debt funds",
        typical_return: 9.0,
        risk_level: RiskLevel::Medium,
        category: "mutual_funds",
    },
    InvestmentType {
        key: "mutual_funds_debt",
        name: "Debt Mutual Funds",
        description: "Corporate bond and government securities",
        typical_return: 7.0,
        risk_level: RiskLevel::Low,
        category: "mutual_funds",
    },
    InvestmentType {
        key: "fixed_deposits",
        name: "Fixed Deposits (FD)",
        description: "Bank fixed deposits",
        typical_return: 6.5,
        risk_level: RiskLevel::VeryLow,
        category: "fixed_income",
    },
    InvestmentType {
        key: "ppf",
        name: "Public Provident Fund (PPF)",
        description: "15-year tax-saving investment",
        typical_return: 7.1,
        risk_level: RiskLevel::VeryLow,
        category: "fixed_income",
    },
    InvestmentType {
        key: "nsc",
        name: "National Savings Certificate (NSC)",
        description: "5-year tax-saving investment",
        typical_return: 6.8,
        risk_level: RiskLevel::VeryLow,
        category: "fixed_income",
    },
    InvestmentType {
        key: "elss",
        name: "ELSS (Tax Saving Funds)",
        description: "Equity Linked Savings Scheme",
        typical_return: 10.5,
        risk_level: RiskLevel::High,
        category: "tax_saving",
    },
    InvestmentType {
        key: "gold",
        name: "Gold",
        description: "Physical gold or gold ETFs",
        typical_return: 8.0,
        risk_level: RiskLevel::Medium,
        category: "commodities",
    },
    InvestmentType {
        key: "real_estate",
        name: "Real Estate",
        description: "Property investments",
        typical_return: 9.0,
        risk_level: RiskLevel::Medium,
        category: "real_estate",
    },
    InvestmentType {
        key: "bonds",
        name: "Government Bonds",
        description: "Government securities",
        typical_return: 6.0,
        risk_level: RiskLevel::VeryLow,
        category: "fixed_income",
    },
    InvestmentType {
        key: "corporate_bonds",
        name: "Corporate Bonds",
        description: "Corporate debt securities",
        typical_return: 7.5,
        risk_level: RiskLevel::Low,
        category: "fixed_income",
    },
];

pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code == code)
}

pub fn find_investment_type(key: &str) -> Option<&'static InvestmentType> {
    INVESTMENT_TYPES.iter().find(|t| t.key == key)
}

/// Typical annual return as a decimal; unknown keys get 8%.
pub fn investment_type_return(key: &str) -> f64 {
    find_investment_type(key)
        .map(|t| t.typical_return / 100.0)
        .unwrap_or(DEFAULT_INVESTMENT_RETURN)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentCategory {
    pub category: &'static str,
    pub investments: Vec<&'static InvestmentType>,
}

/// Groups the investment table by category, keeping first-seen order.
pub fn investment_categories() -> Vec<InvestmentCategory> {
    let mut categories: Vec<InvestmentCategory> = Vec::new();
    for investment in INVESTMENT_TYPES {
        match categories
            .iter_mut()
            .find(|c| c.category == investment.category)
        {
            Some(existing) => existing.investments.push(investment),
            None => categories.push(InvestmentCategory {
                category: investment.category,
                investments: vec![investment],
            }),
        }
    }
    categories
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InflationSource {
    ApiSimulation,
    Fallback,
    Default,
}

impl InflationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            InflationSource::ApiSimulation => "api_simulation",
            InflationSource::Fallback => "fallback",
            InflationSource::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InflationLookup {
    /// Annual inflation in percent.
    pub rate: f64,
    pub source: InflationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn country_inflation(code: &str) -> InflationLookup {
    let mut rng = Rng::from_clock();
    country_inflation_with(code, &mut rng)
}

/// Perturbs the country's baseline by up to one percentage point either way.
/// No network call is made; a non-finite perturbation falls back to the baseline.
pub fn country_inflation_with<J: Jitter + ?Sized>(code: &str, rng: &mut J) -> InflationLookup {
    let Some(country) = find_country(code) else {
        tracing::debug!(country = code, "unsupported country code, using default inflation");
        return InflationLookup {
            rate: DEFAULT_INFLATION_PERCENT,
            source: InflationSource::Default,
            country: None,
            currency: None,
            flag: None,
            last_updated: None,
            note: None,
            error: Some(format!("Country code {code} not supported")),
        };
    };

    let simulated = country.typical_inflation + rng.uniform(-1.0, 1.0);
    if !simulated.is_finite() {
        tracing::warn!(
            country = code,
            "failed to simulate inflation, using typical baseline"
        );
        return InflationLookup {
            rate: country.typical_inflation,
            source: InflationSource::Fallback,
            country: Some(country.name),
            currency: Some(country.currency),
            flag: Some(country.flag),
            last_updated: Some("fallback"),
            note: Some("Using typical inflation rate (API unavailable)"),
            error: None,
        };
    }

    InflationLookup {
        rate: (simulated.max(0.0) * 100.0).round() / 100.0,
        source: InflationSource::ApiSimulation,
        country: Some(country.name),
        currency: Some(country.currency),
        flag: Some(country.flag),
        last_updated: Some(SIMULATED_UPDATE_DATE),
        note: None,
        error: None,
    }
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Source of the inflation perturbation.
pub trait Jitter {
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Small xorshift generator; only used to jitter the inflation baselines.
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        let state = match splitmix64(seed) {
            0 => 0xA5A5_A5A5_A5A5_A5A5,
            mixed => mixed,
        };
        Self { state }
    }

    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        const DENOM: f64 = (1_u64 << 53) as f64;
        (self.next_u64() >> 11) as f64 / DENOM
    }
}

impl Jitter for Rng {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{any, prop_assert, proptest};

    #[test]
    fn every_table_key_is_unique() {
        for (i, c) in COUNTRIES.iter().enumerate() {
            assert!(COUNTRIES[i + 1..].iter().all(|o| o.code != c.code));
        }
        for (i, t) in INVESTMENT_TYPES.iter().enumerate() {
            assert!(INVESTMENT_TYPES[i + 1..].iter().all(|o| o.key != t.key));
        }
    }

    #[test]
    fn investment_return_lookup_uses_decimal_and_default() {
        assert!((investment_type_return("stocks") - 0.12).abs() < 1e-12);
        assert!((investment_type_return("ppf") - 0.071).abs() < 1e-12);
        assert!((investment_type_return("lottery") - 0.08).abs() < 1e-12);
    }

    #[test]
    fn categories_regroup_without_losing_entries() {
        let categories = investment_categories();
        let names: Vec<&str> = categories.iter().map(|c| c.category).collect();
        assert_eq!(
            names,
            vec![
                "equity",
                "mutual_funds",
                "fixed_income",
                "tax_saving",
                "commodities",
                "real_estate"
            ]
        );
        let total: usize = categories.iter().map(|c| c.investments.len()).sum();
        assert_eq!(total, INVESTMENT_TYPES.len());
        let fixed_income = &categories[2];
        assert_eq!(fixed_income.investments.len(), 5);
        assert!(fixed_income.investments.iter().all(|t| t.category == "fixed_income"));
    }

    #[test]
    fn unknown_country_reports_default_source() {
        let lookup = country_inflation_with("XX", &mut Rng::new(1));
        assert_eq!(lookup.source, InflationSource::Default);
        assert_eq!(lookup.rate, 3.0);
        assert_eq!(lookup.error.as_deref(), Some("Country code XX not supported"));
    }

    #[test]
    fn simulated_lookup_stays_within_one_point_of_baseline() {
        let mut rng = Rng::new(42);
        for country in COUNTRIES {
            let lookup = country_inflation_with(country.code, &mut rng);
            assert_eq!(lookup.source, InflationSource::ApiSimulation);
            assert_eq!(lookup.country, Some(country.name));
            assert!(lookup.rate >= 0.0);
            assert!(lookup.rate <= country.typical_inflation + 1.0 + 1e-9);
            assert!(lookup.rate >= (country.typical_inflation - 1.0).max(0.0) - 0.005);
        }
    }

    struct Broken;

    impl Jitter for Broken {
        fn uniform(&mut self, _low: f64, _high: f64) -> f64 {
            f64::NAN
        }
    }

    #[test]
    fn non_finite_jitter_falls_back_to_baseline() {
        let lookup = country_inflation_with("JP", &mut Broken);
        assert_eq!(lookup.source, InflationSource::Fallback);
        assert_eq!(lookup.rate, 0.5);
        assert_eq!(lookup.country, Some("Japan"));
        assert_eq!(lookup.last_updated, Some("fallback"));
        assert!(lookup.note.is_some());
        assert_eq!(lookup.error, None);

        let json = serde_json::to_value(&lookup).unwrap();
        assert_eq!(json["source"], "fallback");
    }

    #[test]
    fn seeded_lookups_are_reproducible() {
        let a = country_inflation_with("IN", &mut Rng::new(7));
        let b = country_inflation_with("IN", &mut Rng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_source_in_snake_case() {
        let json = serde_json::to_value(country_inflation_with("US", &mut Rng::new(3))).unwrap();
        assert_eq!(json["source"], "api_simulation");
        assert_eq!(json["country"], "United States");
        assert!(json.get("error").is_none());
        assert_eq!(serde_json::to_value(RiskLevel::VeryLow).unwrap(), "Very Low");
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_uniform_stays_in_range(seed in any::<u64>()) {
            let mut rng = Rng::new(seed);
            for _ in 0..32 {
                let v = rng.uniform(-1.0, 1.0);
                prop_assert!((-1.0..1.0).contains(&v));
            }
        }
    }
}
