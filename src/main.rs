use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use staff_directory::application::services::ImageFetcher;
use staff_directory::application::use_cases::{LoadDirectoryUseCase, RenderDirectoryUseCase};
use staff_directory::domain::ports::RecordSourcePort;
use staff_directory::infrastructure::{
    AppConfig, CliArgs, Command, ConfigStore, HttpImageTransport, HttpTransportConfig,
    LogDiagnostics, MemoryImageCache, UnconfiguredSource,
};
use staff_directory::presentation::cli;
use staff_directory::presentation::web::{self, AppState, PageRenderer};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let mut config = ConfigStore::new().load(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn record_source(config: &AppConfig) -> Arc<dyn RecordSourcePort> {
    config.record_source().unwrap_or_else(|e| {
        warn!(error = %e, "Data source is not configured");
        Arc::new(UnconfiguredSource::new(e))
    })
}

struct Components {
    loader: Arc<LoadDirectoryUseCase>,
    transport: Arc<HttpImageTransport>,
    cache: Arc<MemoryImageCache>,
    fetcher: ImageFetcher,
}

fn build_components(config: &AppConfig) -> Result<Components> {
    let loader = Arc::new(LoadDirectoryUseCase::new(
        record_source(config),
        config.columns.clone(),
        config.directory.refresh_interval(),
    ));
    let transport = Arc::new(HttpImageTransport::new(&HttpTransportConfig {
        timeout_secs: config.images.timeout_secs,
    })?);
    let cache = Arc::new(MemoryImageCache::new(config.images.cache_capacity));
    let fetcher = ImageFetcher::new(transport.clone(), cache.clone());

    Ok(Components {
        loader,
        transport,
        cache,
        fetcher,
    })
}

async fn run_server(config: &AppConfig, components: Components) -> Result<()> {
    let page = PageRenderer::new(&config.server.title, config.server.columns_per_row)?;
    let directory = RenderDirectoryUseCase::new(
        components.loader,
        components.fetcher,
        config.server.columns_per_row,
    );
    let state = Arc::new(AppState::new(directory, page, components.cache));

    web::serve(&config.server.bind, state).await?;
    Ok(())
}

async fn run_check_images(components: Components) -> Result<()> {
    let summary = cli::check_images(&components.loader, components.transport.as_ref()).await?;

    let mut stdout = std::io::stdout().lock();
    cli::write_probe_summary(&summary, &mut stdout)?;
    stdout.flush()?;

    if summary.failures() > 0 {
        return Err(eyre!("{} photo(s) cannot be displayed", summary.failures()));
    }
    Ok(())
}

async fn run_fetch(components: Components, reference: &str) -> Result<()> {
    let report = cli::fetch_reference(&components.fetcher, reference, &LogDiagnostics)
        .await
        .ok_or_else(|| eyre!("no photo could be fetched for {reference:?}"))?;

    let mut stdout = std::io::stdout().lock();
    cli::write_fetch_report(&report, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = staff_directory::VERSION, "Starting {}", staff_directory::NAME);

    let components = build_components(&config)?;

    match args.command() {
        Command::Serve => run_server(&config, components).await,
        Command::CheckImages => run_check_images(components).await,
        Command::Fetch { reference } => run_fetch(components, &reference).await,
    }
}
