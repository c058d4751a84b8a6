// Tradutor: debounced machine translation in the terminal

use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use tradutor::client::MyMemoryClient;
use tradutor::config::{self, DEFAULT_CONFIG_PATH};
use tradutor::error::AppError;
use tradutor::languages::LANGUAGES;
use tradutor::logging;
use tradutor::state::ViewState;
use tradutor::ui::App;
use tradutor::view::TranslatorView;

#[derive(Parser)]
#[command(name = "tradutor", version, about = "Translate text as you type")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Source language code (overrides config)
    #[arg(short, long)]
    from: Option<String>,

    /// Target language code (overrides config)
    #[arg(short, long)]
    to: Option<String>,

    /// Translation endpoint (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Print the supported languages and exit
    #[arg(long)]
    list_languages: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_languages {
        for lang in LANGUAGES {
            println!("{:<6} {}", lang.code, lang.display_name);
        }
        return Ok(());
    }

    let mut cfg = config::load(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config))?;
    if let Some(from) = cli.from {
        cfg.source_lang = from;
    }
    if let Some(to) = cli.to {
        cfg.target_lang = to;
    }
    if let Some(endpoint) = cli.endpoint {
        cfg.endpoint = endpoint;
    }
    cfg.validate()?;

    let _log_guard = logging::init(&cfg.log)?;
    info!(
        endpoint = %cfg.endpoint,
        source = %cfg.source_lang,
        target = %cfg.target_lang,
        "starting tradutor"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(AppError::Io)?;

    let client = MyMemoryClient::new(cfg.endpoint.clone(), cfg.timeout())?
        .with_contact_email(cfg.contact_email.clone());

    let state = ViewState::new(cfg.source_lang.clone(), cfg.target_lang.clone())
        .with_discard_stale(cfg.discard_stale);
    let view = TranslatorView::new(state, cfg.debounce(), Arc::new(client), runtime.handle().clone());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(view);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    drop(app);
    runtime.shutdown_background();

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    info!("exiting");
    Ok(())
}
