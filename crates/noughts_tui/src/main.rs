//! Noughts - play tic-tac-toe against the computer in a terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts::{HeuristicAi, Position};
use noughts_tui::{
    App, AppAction, Cli, ComputerPlayer, GameConfig, GameEvent, HumanPlayer, Orchestrator, draw,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(GameConfig::load(&cli.config)?);

    init_tracing(config.log_file())?;
    info!(?config, "Starting noughts");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Tracing goes to a file so log lines do not tear the UI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

/// Wires players, orchestrator and UI together, then runs until quit.
#[instrument(skip_all)]
async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &GameConfig) -> Result<()> {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (restart_tx, restart_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let ai = match config.seed() {
        Some(seed) => HeuristicAi::with_seed(*seed),
        None => HeuristicAi::new(),
    };
    let human = Box::new(HumanPlayer::new("You", input_rx));
    let computer = Box::new(ComputerPlayer::new("Computer", ai, config.computer_delay()));

    let mut orchestrator = Orchestrator::new(
        human,
        computer,
        config.first_player().mark(),
        event_tx,
        restart_rx,
    );

    let orchestrator_handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "Orchestrator error");
        }
    });

    let res = run_app(terminal, App::new(), input_tx, restart_tx, &mut event_rx).await;

    orchestrator_handle.abort();
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    input_tx: mpsc::UnboundedSender<Position>,
    restart_tx: mpsc::UnboundedSender<()>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|f| draw(f, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            // Let the orchestrator task make progress between polls.
            tokio::task::yield_now().await;
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key.code) {
            AppAction::Quit => {
                info!("User quit");
                return Ok(());
            }
            AppAction::Place(position) => input_tx.send(position)?,
            AppAction::Restart => restart_tx.send(())?,
            AppAction::None => {}
        }
    }
}
