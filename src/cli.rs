//! Interactive read loop for the terminal calculator.

use std::io::{self, BufRead, Write};

use crate::core::{
    DEFAULT_INVESTMENT_AMOUNT, DEFAULT_SCENARIO_YEARS, InflationRisk, format_currency,
    format_percentage, parse_currency_amount, parse_percentage, project_scenarios,
    purchasing_power, real_return, validate_rates,
};
use crate::error::AppError;

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";
const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

const EXAMPLES: [(f64, f64, &str); 4] = [
    (0.08, 0.03, "Stock market return vs. typical inflation"),
    (0.05, 0.02, "Bond return vs. low inflation"),
    (0.12, 0.06, "High growth investment vs. high inflation"),
    (0.03, 0.04, "Low return vs. higher inflation (negative real return)"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Value(T),
    Quit,
}

/// Runs the session on stdin/stdout. Ctrl+C ends it like `quit`.
pub fn run_interactive() -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run_until_interrupted(
        || Session::new(io::stdin().lock(), io::stdout()).run(),
        tokio::signal::ctrl_c(),
        &mut io::stdout(),
    ));
    // The session thread may still be parked on a stdin read.
    runtime.shutdown_background();
    result
}

pub async fn run_until_interrupted<S, I, W>(
    session: S,
    interrupt: I,
    out: &mut W,
) -> Result<(), AppError>
where
    S: FnOnce() -> Result<(), AppError> + Send + 'static,
    I: Future<Output = io::Result<()>>,
    W: Write,
{
    let mut session = tokio::task::spawn_blocking(session);

    tokio::select! {
        joined = &mut session => return joined.map_err(io::Error::other)?,
        signal = interrupt => match signal {
            Ok(()) => {
                tracing::debug!("interactive session interrupted");
                writeln!(out, "\n\nGoodbye!")?;
                write_farewell(out)?;
                out.flush()?;
                return Ok(());
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for Ctrl+C");
            }
        },
    }

    session.await.map_err(io::Error::other)?
}

fn write_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(
        out,
        "Thank you for using the Real vs. Nominal Return Calculator!"
    )?;
    writeln!(
        out,
        "Understanding inflation impact is crucial for investment planning."
    )?;
    writeln!(out, "{RULE}")
}

/// One terminal conversation. End of input is treated like `quit`.
pub struct Session<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        self.print_header()?;
        self.print_help()?;

        loop {
            writeln!(self.out, "\n{THIN_RULE}\nNEW CALCULATION\n{THIN_RULE}")?;

            let Reply::Value(nominal) =
                self.prompt_rate("Enter nominal return rate (e.g., '8' for 8%): ")?
            else {
                break;
            };
            let Reply::Value(inflation) =
                self.prompt_rate("Enter inflation rate (e.g., '3' for 3%): ")?
            else {
                break;
            };
            let Reply::Value(amount) = self.prompt_amount()? else {
                break;
            };

            match validate_rates(nominal, inflation) {
                Ok(()) => {}
                Err(warning) if warning.is_warning() => {
                    writeln!(self.out, "⚠️  Warning: {warning}")?;
                    if !self.confirm("Continue anyway? (y/n): ")? {
                        continue;
                    }
                }
                Err(err) => {
                    writeln!(self.out, "❌ Error: {err}")?;
                    continue;
                }
            }

            match self.report(nominal, inflation, amount) {
                Ok(()) => {}
                Err(AppError::Calculation(err)) => {
                    writeln!(self.out, "❌ Calculation error: {err}")?;
                }
                Err(err) => return Err(err),
            }

            writeln!(self.out, "\n{THIN_RULE}")?;
            if !self.confirm("Calculate another? (y/n): ")? {
                break;
            }
        }

        write_farewell(&mut self.out)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out, "\n\nGoodbye!")?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_rate(&mut self, prompt: &str) -> Result<Reply<f64>, AppError> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(Reply::Quit);
            };
            let answer = line.to_lowercase();
            match answer.as_str() {
                word if QUIT_WORDS.contains(&word) => return Ok(Reply::Quit),
                "help" => self.print_help()?,
                "example" => self.print_examples()?,
                "" => writeln!(self.out, "Please enter a value.")?,
                text => match parse_percentage(text) {
                    Ok(rate) => return Ok(Reply::Value(rate)),
                    Err(err) => writeln!(self.out, "Invalid input: {err}. Please try again.")?,
                },
            }
        }
    }

    fn prompt_amount(&mut self) -> io::Result<Reply<f64>> {
        writeln!(self.out, "\n💰 INVESTMENT AMOUNT:")?;
        writeln!(self.out, "Default: ₹1,00,000 (1 Lakh) or enter your own amount")?;
        let Some(line) = self.read_line(
            "Enter investment amount (e.g., '50000', '2L', '1.5 lakh') or press Enter for default: ",
        )?
        else {
            return Ok(Reply::Quit);
        };

        if QUIT_WORDS.contains(&line.to_lowercase().as_str()) {
            return Ok(Reply::Quit);
        }
        if line.is_empty() {
            writeln!(
                self.out,
                "✅ Using default amount: {}",
                format_currency(DEFAULT_INVESTMENT_AMOUNT)
            )?;
            return Ok(Reply::Value(DEFAULT_INVESTMENT_AMOUNT));
        }

        match parse_currency_amount(&line) {
            Ok(amount) => {
                writeln!(
                    self.out,
                    "✅ Using investment amount: {}",
                    format_currency(amount)
                )?;
                Ok(Reply::Value(amount))
            }
            Err(err) => {
                writeln!(
                    self.out,
                    "❌ Invalid amount format: {err}. Using default ₹1,00,000"
                )?;
                Ok(Reply::Value(DEFAULT_INVESTMENT_AMOUNT))
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.read_line(prompt)?.unwrap_or_default().to_lowercase();
        Ok(!QUIT_WORDS.contains(&answer.as_str()) && answer.starts_with('y'))
    }

    fn report(&mut self, nominal: f64, inflation: f64, amount: f64) -> Result<(), AppError> {
        let real = real_return(nominal, inflation)?;
        let ratio = (1.0 + nominal) / (1.0 + inflation);

        writeln!(self.out, "\n{RULE}\nCALCULATION RESULTS\n{RULE}")?;
        writeln!(self.out, "Nominal Return:    {}", format_percentage(nominal, 4))?;
        writeln!(self.out, "Inflation Rate:    {}", format_percentage(inflation, 4))?;
        writeln!(self.out, "Real Return:       {}", format_percentage(real, 4))?;

        writeln!(self.out, "\nCalculation:")?;
        writeln!(
            self.out,
            "Real Return = ((1 + {nominal:.4}) / (1 + {inflation:.4})) - 1"
        )?;
        writeln!(
            self.out,
            "            = ({:.4} / {:.4}) - 1",
            1.0 + nominal,
            1.0 + inflation
        )?;
        writeln!(self.out, "            = {ratio:.6} - 1")?;
        writeln!(self.out, "            = {real:.6}")?;
        writeln!(self.out, "            = {}", format_percentage(real, 4))?;

        let one_year_nominal = amount * (1.0 + nominal);
        let one_year_real = purchasing_power(amount, real, 1.0);
        writeln!(self.out, "\n💡 INVESTMENT IMPACT:")?;
        writeln!(self.out, "Your {} investment:", format_currency(amount))?;
        writeln!(
            self.out,
            "• After 1 year (nominal): {}",
            format_currency(one_year_nominal)
        )?;
        writeln!(
            self.out,
            "• After 1 year (real):    {}",
            format_currency(one_year_real)
        )?;
        writeln!(
            self.out,
            "• Inflation cost:         {}",
            format_currency(one_year_nominal - one_year_real)
        )?;

        if self.confirm("\nShow detailed analysis with multiple time periods? (y/n): ")? {
            self.detailed_analysis(nominal, inflation, real, amount)?;
        }
        Ok(())
    }

    fn detailed_analysis(
        &mut self,
        nominal: f64,
        inflation: f64,
        real: f64,
        amount: f64,
    ) -> Result<(), AppError> {
        let projections =
            project_scenarios(amount, nominal, inflation, &DEFAULT_SCENARIO_YEARS, false)?;

        writeln!(self.out, "\n{}", "=".repeat(50))?;
        writeln!(self.out, "DETAILED ANALYSIS")?;
        writeln!(self.out, "{}", "=".repeat(50))?;
        writeln!(
            self.out,
            "PURCHASING POWER IMPACT (on {} investment):",
            format_currency(amount)
        )?;
        writeln!(self.out, "{THIN_RULE}")?;

        for point in &projections.yearly_projections {
            writeln!(self.out, "After {:2} years:", point.years)?;
            writeln!(self.out, "  Nominal value:   {}", point.formatted.nominal_value)?;
            writeln!(self.out, "  Real value:      {}", point.formatted.real_value)?;
            writeln!(
                self.out,
                "  Inflation cost:  {}",
                point.formatted.inflation_impact
            )?;
            writeln!(
                self.out,
                "  Nominal growth:  {:.1}%",
                point.nominal_gain_percentage
            )?;
            writeln!(self.out, "  Real growth:     {:.1}%", point.real_gain_percentage)?;
            writeln!(self.out)?;
        }

        writeln!(self.out, "INVESTMENT INSIGHTS:")?;
        writeln!(self.out, "{}", "-".repeat(30))?;
        if real > 0.0 {
            writeln!(
                self.out,
                "✓ Your investment beats inflation by {}",
                format_percentage(real, 2)
            )?;
            writeln!(self.out, "✓ Your purchasing power increases over time")?;
        } else if real == 0.0 {
            writeln!(self.out, "⚠ Your investment exactly matches inflation")?;
            writeln!(self.out, "⚠ Your purchasing power remains constant")?;
        } else {
            writeln!(
                self.out,
                "✗ Your investment loses to inflation by {}",
                format_percentage(real.abs(), 2)
            )?;
            writeln!(self.out, "✗ Your purchasing power decreases over time")?;
        }

        let risk = InflationRisk::from_real_return(real);
        writeln!(self.out, "\nInflation Risk Level: {}", risk.label())?;
        writeln!(self.out, "Assessment: {}", risk.message())?;
        Ok(())
    }

    fn print_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "    REAL vs. NOMINAL RETURN CALCULATOR")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(
            self.out,
            "Financial Concept: Inflation-adjusted return calculation"
        )?;
        writeln!(
            self.out,
            "Formula: Real Return = ((1 + nominal) / (1 + inflation)) - 1"
        )?;
        writeln!(self.out, "{RULE}")
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nHOW TO USE:")?;
        writeln!(
            self.out,
            "• Enter returns as percentages (e.g., '8' for 8% or '8%')"
        )?;
        writeln!(self.out, "• Or as decimals (e.g., '0.08' for 8%)")?;
        writeln!(self.out, "• Type 'quit' or 'exit' to stop")?;
        writeln!(self.out, "• Type 'help' for this message")?;
        writeln!(self.out, "• Type 'example' for sample calculations")
    }

    fn print_examples(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "\nEXAMPLE CALCULATIONS:")?;
        writeln!(self.out, "{}", "-".repeat(40))?;
        for (nominal, inflation, description) in EXAMPLES {
            let real = real_return(nominal, inflation)?;
            writeln!(self.out, "• {description}")?;
            writeln!(
                self.out,
                "  Nominal: {}, Inflation: {} → Real: {}",
                format_percentage(nominal, 2),
                format_percentage(inflation, 2),
                format_percentage(real, 2)
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
