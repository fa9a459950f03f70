use std::path::PathBuf;

use clap::Parser;
use kpidash::{App, DashboardConfig, HttpTransport, StartPage, ThreadWorker, init_logging};
use kpidash_core::AnalyticsClient;

#[derive(Parser, Debug)]
#[command(name = "kpidash")]
#[command(about = "Terminal dashboard for creator KPI analytics")]
struct Args {
    /// Path to the data directory (default: ~/.kpidash/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Analytics service URL, overriding config.yaml
    #[arg(short, long)]
    base_url: Option<String>,

    /// Page to open on
    #[arg(short, long, value_enum)]
    page: Option<StartPage>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kpidash")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = DashboardConfig::load_or_default(&data_dir).with_overrides(args.base_url, args.page);
    tracing::info!(base_url = %config.base_url, "Starting dashboard");

    let client = AnalyticsClient::new(config.base_url.clone(), HttpTransport::new()?);
    let mut app = App::new(&config, ThreadWorker::new(client));

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
