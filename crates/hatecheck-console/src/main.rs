use clap::Parser;
use hatecheck_client::{
    AnalysisController, ClassifierApi, ClientConfig, Connectivity, ConnectivityProber,
    HttpClassifierApi, SubmitOutcome, Surface,
};
use hatecheck_console::cli::{Cli, Commands};
use hatecheck_console::{session, TerminalSurface};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    tracing::info!("Classification service: {}", config.base_url);

    let api: Arc<dyn ClassifierApi> = Arc::new(HttpClassifierApi::new(&config)?);
    let surface: Arc<dyn Surface> = Arc::new(TerminalSurface::new(std::io::stdout()));

    let prober = ConnectivityProber::new(api.clone(), surface.clone(), config.server_hint.clone());

    match cli.command {
        Commands::Probe => {
            let code = match prober.probe().await {
                Connectivity::Healthy => ExitCode::SUCCESS,
                Connectivity::Unrecognized(_) => ExitCode::from(2),
                Connectivity::Unreachable(_) => ExitCode::FAILURE,
            };
            Ok(code)
        }

        Commands::Analyze { text } => {
            let controller = AnalysisController::new(api, surface, &config);
            controller.input_changed(text);

            let code = match controller.submit().await {
                SubmitOutcome::Rendered { .. } => ExitCode::SUCCESS,
                SubmitOutcome::Rejected(_) => ExitCode::from(2),
                SubmitOutcome::Failed(_) | SubmitOutcome::Busy => ExitCode::FAILURE,
            };
            Ok(code)
        }

        Commands::Interactive => {
            let controller = Arc::new(AnalysisController::new(api, surface, &config));
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            session::run(prober, controller, stdin).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// File (or defaults), then CLI overrides
fn load_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = ClientConfig::load(&cli.config)?;

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }

    if let Some(secs) = cli.timeout_secs {
        config.request_timeout_secs = if secs == 0 { None } else { Some(secs) };
    }

    if cli.no_fallback {
        config.fallback.enabled = false;
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "hatecheck=debug,hatecheck_console=debug,hatecheck_client=debug"
    } else {
        "hatecheck=info,hatecheck_console=info,hatecheck_client=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
