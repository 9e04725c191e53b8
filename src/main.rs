mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use castle_defender::config::Config;
use castle_defender::driver::Game;
use castle_defender::input::action_for_event;

use display::TerminalSurface;

#[derive(Parser, Debug)]
#[command(name = "castle_defender", about = "Defend the castle gate from endless enemy waves")]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for enemy placement (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Log file (overrides the config file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(path) = &cli.log_file {
        config.log_file = path.clone();
    }
    Ok(config)
}

/// Stdout belongs to the renderer, so logs go to a file.
fn init_logging(config: &Config) -> Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn is_quit(event: &KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }
    match event.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Tick until the player quits.  Every key that maps to an action is queued;
/// the game takes one queued action per tick.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
) -> std::io::Result<()> {
    let frame = config.frame_interval();
    let (cols, rows) = terminal::size()?;
    let mut surface = TerminalSurface::new(cols, rows);

    loop {
        let frame_start = Instant::now();

        // ── Drain pending input events (non-blocking) ─────────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) if is_quit(&key) => {
                    info!(frame = game.frame, "quit requested");
                    return Ok(());
                }
                Event::Key(key) => {
                    if let Some(action) = action_for_event(&key) {
                        game.push_action(action);
                    }
                }
                Event::Resize(cols, rows) => surface.resize(cols, rows),
                _ => {}
            }
        }

        game.tick(&mut surface);
        surface.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config)?;
    info!(?config, "starting castle defender");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                warn!(%err, "keyboard reader stopped");
                break;
            }
        }
    });

    let mut game = Game::new(config.seed);
    let result = game_loop(&mut out, &mut game, &rx, &config);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!(
        rubies = game.ctx.score.current_score(),
        "castle defender exiting"
    );
    result.context("terminal rendering failed")
}
