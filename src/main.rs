use anyhow::Context;
use folio::api::{HttpBackend, PortfolioApi};
use folio::auth::{AuthContext, FileTokenStore, TokenStore};
use folio::cli::commands::Session;
use folio::cli::output::Output;
use folio::cli::Cli;
use folio::upload::CloudinaryUploader;
use folio::FolioConfig;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn output_for(cli: &Cli) -> Output {
    if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    }
}

fn init_tracing(log_level: &str, verbose: bool) {
    let default = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("folio={}", default)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config =
        FolioConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.log_level, cli.verbose);
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(config.token_path()));
    let api: Arc<dyn PortfolioApi> =
        Arc::new(HttpBackend::new(config.api.base_url.clone(), tokens.clone()));

    let mut session = Session {
        api,
        auth: AuthContext::new(tokens),
        uploader: Arc::new(CloudinaryUploader::new(config.upload.clone())),
        output: output_for(&cli),
    };
    session.run(cli.command).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    let output = output_for(&cli);

    if let Err(e) = run(cli).await {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
