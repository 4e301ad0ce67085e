use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use realreturn::api::{self, config::ServerConfig};
use realreturn::cli;
use realreturn::demo::{self, DemoReport};
use realreturn::error::AppError;

#[derive(Parser, Debug)]
#[command(name = "realreturn", version, about = "Real vs. nominal return calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON API
    Serve(ServerConfig),
    /// Prompt for rates and amounts on the terminal
    Interactive,
    /// Print canned example reports
    Demo {
        #[arg(value_enum, default_value_t = DemoReport::All)]
        report: DemoReport,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("REALRETURN_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so they never interleave with report output.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn serve(config: &ServerConfig) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(api::run_http_server(config))?;
    Ok(())
}

fn run(args: Cli) -> Result<(), AppError> {
    match args.command.unwrap_or(Command::Interactive) {
        Command::Serve(config) => serve(&config),
        Command::Interactive => cli::run_interactive(),
        Command::Demo { report } => demo::run_demo(report),
    }
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
