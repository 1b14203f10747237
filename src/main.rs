use anyhow::Context;
use clap::Parser;
use string_accumulator::utils::logger;
use string_accumulator::{
    Accumulator, AccumulatorError, CliConfig, InputSource, OutputFormat, Settings, Summary,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // Settings decide how logging is set up, so they load before the logger exists.
    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => fail(&e.into()),
    };

    if settings.json_logs {
        logger::init_json_logger(settings.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    }
    tracing::debug!("Effective settings: {:?}", settings);

    match run(&cli, &settings).await {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            tracing::error!("❌ Accumulation failed: {:#}", e);
            fail(&e);
        }
    }
}

async fn run(cli: &CliConfig, settings: &Settings) -> anyhow::Result<String> {
    let source = cli.input_source()?;
    let raw = source
        .read_input()
        .await
        .context("failed to read input")?;

    let accumulator = Accumulator::from_config(settings);
    let summary = accumulator.summarize(&raw)?;
    tracing::debug!(
        "Summed {} values ({} above {} ignored)",
        summary.values.len(),
        summary.ignored.len(),
        accumulator.max_value()
    );

    Ok(render(&summary, settings.output_format)?)
}

fn render(summary: &Summary, format: OutputFormat) -> Result<String, AccumulatorError> {
    match format {
        OutputFormat::Text => Ok(summary.sum.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

fn fail(err: &anyhow::Error) -> ! {
    match err.downcast_ref::<AccumulatorError>() {
        Some(e) => {
            tracing::error!(
                "Category: {:?}, Severity: {:?}",
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
        None => {
            eprintln!("❌ {:#}", err);
            std::process::exit(1);
        }
    }
}
