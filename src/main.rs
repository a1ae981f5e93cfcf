use clap::Parser;
use freshcart::backend::{HttpBackendClient, SessionSnapshot};
use freshcart::cli::Cli;
use freshcart::config::Config;
use freshcart::ui::theme::ColorScheme;
use freshcart::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_filter)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let scheme = cli
        .theme
        .map(ColorScheme::from)
        .or_else(|| {
            config
                .appearance
                .theme
                .as_deref()
                .and_then(ColorScheme::from_name)
        })
        .unwrap_or(ColorScheme::Dark);

    let client = HttpBackendClient::new(&config.backend)?;
    tracing::info!(base_url = %config.backend.base_url, ?scheme, "starting freshcart");

    ui::runtime::run(
        client,
        config.backend.probe_collection.clone(),
        scheme,
        SessionSnapshot::default(),
    )
}
