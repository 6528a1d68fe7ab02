//! holidays CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use holidays_api::HolidaysClient;
use holidays_cli::cli::{Cli, Command, ConfigAction};
use holidays_cli::commands;
use holidays_cli::config::CliConfig;
use holidays_cli::error::{CliError, CliResult};
use holidays_cli::output::OutputFormat;
use holidays_core::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = if cli.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("error: {}", CliError::from(e));
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = match cli.config {
        Some(ref path) => CliConfig::load_from(path).map_err(CliError::Config)?,
        None => CliConfig::load().map_err(CliError::Config)?,
    };
    let format = OutputFormat::from_json_flag(cli.json);
    let application_name = cli.application_name.as_deref();

    let rendered = match cli.command {
        Command::Config { action } => {
            return match action {
                ConfigAction::Dump => commands::config::dump(&config),
                ConfigAction::Validate => commands::config::validate(&config),
                ConfigAction::Path => commands::config::path(&config),
            };
        }
        Command::IsHoliday { date } => {
            let client = connect(&config, application_name)?;
            commands::query::is_holiday(&client, &date, format).await?
        }
        Command::Between { start, end } => {
            let client = connect(&config, application_name)?;
            commands::query::between(&client, &start, &end, format).await?
        }
        Command::Until { date } => {
            let client = connect(&config, application_name)?;
            commands::query::until(&client, &date, format).await?
        }
        Command::Upcoming => {
            let client = connect(&config, application_name)?;
            commands::query::upcoming(&client, format).await?
        }
        Command::Next => {
            let client = connect(&config, application_name)?;
            commands::query::next(&client, format).await?
        }
    };

    println!("{}", rendered);
    Ok(())
}

fn connect(config: &CliConfig, application_name: Option<&str>) -> CliResult<HolidaysClient> {
    let client_config = config
        .to_client_config(application_name)
        .map_err(CliError::Config)?;
    Ok(HolidaysClient::new(client_config)?)
}
