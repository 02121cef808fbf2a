use anyhow::Context;
use bus_boarding::app::{file_mode::run_file_mode, interactive::run_interactive, sample};
use bus_boarding::config::cli::LogFormat;
use bus_boarding::core::ConfigProvider;
use bus_boarding::utils::{logger, validation::Validate};
use bus_boarding::{BoardingError, CliConfig, LocalStorage, Settings};
use clap::{CommandFactory, Parser};
use std::io;

fn fail(e: &BoardingError) -> ! {
    tracing::error!(
        "❌ Boarding sequence failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("✗ Error: {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code())
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let settings = Settings::from_cli(&cli);

    let level = settings.as_ref().ok().and_then(|s| s.log_level.clone());
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, level.as_deref()),
        LogFormat::Json => logger::init_json_logger(cli.verbose, level.as_deref()),
    }

    tracing::debug!("CLI config: {:?}", cli);

    let settings = settings.unwrap_or_else(|e| fail(&e));
    if let Err(e) = settings.validate() {
        fail(&e);
    }

    let storage = LocalStorage::default();
    let mut out = io::stdout().lock();

    if cli.sample {
        sample::create_sample_file(&storage, &mut out).unwrap_or_else(|e| fail(&e));
        return Ok(());
    }

    if cli.interactive {
        run_interactive(io::stdin().lock(), &mut out, &storage).unwrap_or_else(|e| fail(&e));
        return Ok(());
    }

    if settings.input_path().is_none() {
        CliConfig::command()
            .print_help()
            .context("failed to print usage")?;
        eprintln!("\n✗ Error: Please provide an input file or use --interactive mode");
        std::process::exit(1);
    }

    match run_file_mode(&storage, &settings, &mut out) {
        Ok(count) => {
            tracing::info!("✅ Boarding sequence generated for {} bookings", count);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
