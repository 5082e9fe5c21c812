use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use newsdesk::core::config;
use newsdesk::tui;

#[derive(Parser)]
#[command(name = "newsdesk", about = "Terminal client for the editorial desk agent")]
struct Args {
    /// Agent endpoint URL (overrides the config file and NEWSDESK_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the TUI owns the terminal, so logs go to
    // newsdesk.log in the current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("newsdesk.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("newsdesk: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&config, args.endpoint.as_deref());

    log::info!("Newsdesk starting up, endpoint: {}", resolved.endpoint);

    tui::run(resolved)
}
