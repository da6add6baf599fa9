use std::sync::Arc;

use clap::Parser;
use tracing::info;

use jeopardy::api::HttpApi;
use jeopardy::cli::Cli;
use jeopardy::config;
use jeopardy::controller::{self, GameController};
use jeopardy::logging;
use jeopardy::state::AppState;
use jeopardy::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let mut config = config::load_config(cli.config.as_deref())?;
    config.apply_cli(&cli);
    config.validate()?;

    let log_path = logging::init_logging(config.log_file.as_deref(), cli.verbose)?;
    info!(log = %log_path.display(), api = %config.api_url, "jeopardy starting");

    let api = HttpApi::new(&config.api_url, config.request_timeout())
        .map_err(|e| format!("Cannot create HTTP client: {}", e))?;
    let settings = config.fetch_settings();

    // Handle --check
    if cli.check {
        let session = controller::check_once(&api, &settings, cli.seed)
            .map_err(|e| format!("Startup failed: {}", e))?;
        println!(
            "Board #{} ({} categories x {} clues)",
            session.number,
            session.board.columns(),
            session.board.row_count()
        );
        for (i, title) in session.board.headers.iter().enumerate() {
            println!("  {}. {}", i + 1, title);
        }
        return Ok(());
    }

    let controller = GameController::new(Arc::new(api), settings, cli.seed);
    let state = AppState::new(config.categories, config.clues_per_category);

    tui::run_tui(state, &controller)?;

    info!("jeopardy exiting");
    Ok(())
}
