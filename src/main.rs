use clap::Parser;
use time_app::config::OutputFormat;
use time_app::utils::{logger, validation::Validate};
use time_app::{CliConfig, Evaluator, TimeError};

fn fail(e: &TimeError) -> ! {
    tracing::debug!("Exiting after error: {:?}", e);
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let script = match config.to_script().and_then(|s| s.validate().map(|_| s)) {
        Ok(script) => script,
        Err(e) => fail(&e),
    };

    let report = match Evaluator::for_script(&script).run(&script) {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    match config.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }

    if report.failures() > 0 {
        std::process::exit(2);
    }

    Ok(())
}
