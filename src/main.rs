use clap::Parser;
use service_integrator::config::Command;
use service_integrator::utils::logger;
use service_integrator::{
    resolve, CliConfig, IntegratorError, ServiceIntegration, ServiceIntegrator, Validate,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config.command) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("❌ {} (code {})", e, e.code());
            eprintln!("{}", serde_json::to_string(&e.report())?);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(command: &Command) -> Result<(), IntegratorError> {
    match command {
        Command::Validate { file } => {
            let integrator = ServiceIntegrator::from_file(file)?;
            integrator.validate()?;

            tracing::info!("✅ {} is valid", file.display());
            println!(
                "✅ {} service(s) valid: {}",
                integrator.services.len(),
                integrator
                    .services
                    .iter()
                    .map(|s| s.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Command::Resolve {
            integrator,
            integration,
        } => {
            let integrator = ServiceIntegrator::from_file(integrator)?;
            let integration = ServiceIntegration::from_file(integration)?;
            let plan = resolve(&integrator, &integration)?;

            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }
    Ok(())
}
