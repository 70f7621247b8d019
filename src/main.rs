//! Gridquest - Entry Point
//!
//! Initializes logging and the terminal, sets up the game, and runs the
//! render / read / execute loop until the run ends.

use std::fs::OpenOptions;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use gridquest::config::load_config;
use gridquest::input::{ByteKeys, KeySource, TerminalKeys};
use gridquest::ui::{self, TerminalGuard};
use gridquest::{Action, Game, GameState};

const DEFAULT_NAME: &str = "Adventurer";

fn main() -> Result<ExitCode> {
    init_logging();
    log::info!("Starting Gridquest v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config();
    let name = read_player_name()?;
    let mut game = Game::new(name, config);

    // Piped stdin means scripted play: decode raw bytes instead of terminal events
    let interactive = io::stdin().is_terminal();

    // Setup terminal; the guard restores it on every way out
    let guard = TerminalGuard::enter(io::stdout(), interactive)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = if interactive {
        run_game_loop(&mut terminal, &mut game, &mut TerminalKeys)
    } else {
        run_game_loop(&mut terminal, &mut game, &mut ByteKeys::new(io::stdin()))
    };

    // Restore terminal
    drop(guard);

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }
    result?;

    for line in game.summary() {
        println!("{}", line);
    }

    let code = match game.state() {
        GameState::Terminated(ending) => ending.exit_code(),
        GameState::Running => 0,
    };
    log::info!("Gridquest shut down with status {}", code);
    Ok(ExitCode::from(code))
}

/// Log to a file so output never interferes with the TUI
fn init_logging() {
    let target: Box<dyn Write + Send> = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("gridquest.log")
    {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .init();
}

/// Ask for a name on the plain terminal, before raw mode
fn read_player_name() -> Result<String> {
    print!("Enter your adventurer's name: ");
    io::stdout().flush()?;

    let mut name = String::new();
    io::stdin().lock().read_line(&mut name)?;
    let name = name.trim();
    Ok(if name.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        name.to_string()
    })
}

/// Main game loop
fn run_game_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &mut Game,
    keys: &mut impl KeySource,
) -> Result<()> {
    let frame_delay = Duration::from_millis(game.config().frame_delay_ms);

    while game.is_running() {
        terminal.draw(|frame| ui::render(frame, game))?;
        // A reaction prompt is timed from the frame that shows it
        game.arm_prompt(Instant::now());

        // Blocks until a key arrives
        let Some(key) = keys.next_key()? else {
            log::info!("Input closed, quitting");
            game.execute(Action::Quit);
            break;
        };
        game.handle_key(key, Instant::now());

        thread::sleep(frame_delay);
    }

    Ok(())
}
