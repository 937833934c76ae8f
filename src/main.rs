use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use eight_queens::config::AppConfig;
use eight_queens::game::{PlacementSession, Verdict, QUEENS};
use eight_queens::ui::{text, App};

/// Place eight queens on a chessboard and check that none attacks another.
#[derive(Parser)]
#[command(name = "eight_queens", about = "Eight Queens placement checker")]
struct Cli {
    /// Eight positions such as A1 B7 C5 D8 E2 F4 G6 H3; prompts when omitted
    positions: Vec<String>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "eight_queens.toml")]
    config: PathBuf,

    /// Enter positions in a full-screen terminal view
    #[arg(long)]
    tui: bool,

    /// Print a configuration file with every default value and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the placement solved the puzzle.
fn run(cli: Cli) -> Result<bool> {
    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(true);
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let session = if !cli.positions.is_empty() {
        PlacementSession::from_positions(cli.positions.as_slice())
            .context("placing queens from command-line arguments")?
    } else if cli.tui {
        match run_tui(&config)? {
            Some(session) => session,
            None => bail!("entry closed before all {QUEENS} queens were placed"),
        }
    } else {
        prompt_positions(&config, io::stdin().lock(), io::stdout())?
    };

    report(&session, &config)
}

/// Ask for each queen on stdin until it is accepted.
fn prompt_positions<R: BufRead, W: Write>(
    config: &AppConfig,
    mut input: R,
    mut out: W,
) -> Result<PlacementSession> {
    let mut session = PlacementSession::new();
    let limit = config.session.max_attempts_per_queen;

    while !session.is_complete() {
        let queen = session.next_queen_number();
        let mut attempts = 0;

        loop {
            write!(out, "Enter position of the {queen} Queen: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("input ended before all {QUEENS} queens were placed");
            }
            let typed = line.trim();
            let token = if typed.is_empty() { None } else { Some(typed) };

            match session.submit(token) {
                Ok(_) => break,
                Err(err) => {
                    let reason = err
                        .position_error()
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| err.to_string());
                    writeln!(out, "ERROR: {reason}")?;
                    attempts += 1;
                    if limit > 0 && attempts >= limit {
                        bail!("queen {queen} rejected {attempts} times, giving up");
                    }
                    writeln!(out, "Try again.")?;
                }
            }
        }
    }

    writeln!(out)?;
    Ok(session)
}

/// Run the terminal entry screen. `None` if the user quit before finishing.
fn run_tui(config: &AppConfig) -> Result<Option<PlacementSession>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone());
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal entry screen")?;
    let session = app.session();
    Ok(session.is_complete().then(|| session.clone()))
}

fn report(session: &PlacementSession, config: &AppConfig) -> Result<bool> {
    print!("{}", text::render_board(&session.board().snapshot(), &config.display));
    println!();

    match session.verdict()? {
        Verdict::Solved => {
            println!("The placement is a valid solution.");
            Ok(true)
        }
        Verdict::Attacked { first, second } => {
            println!("The placement is not a solution: {first} attacks {second}.");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_retries_rejected_positions() {
        let typed = "A1\nA1\nZ9\nb7\nc5\n\nd8\ne2\nf4\ng6\nh3\n";
        let mut out = Vec::new();

        let session = prompt_positions(&AppConfig::default(), typed.as_bytes(), &mut out).unwrap();
        let transcript = String::from_utf8(out).unwrap();

        assert!(session.is_complete());
        assert_eq!(session.verdict().unwrap(), Verdict::Solved);
        assert!(transcript.contains("ERROR: position already occupied\nTry again."));
        assert!(transcript.contains("ERROR: position out of the board"));
        assert!(transcript.contains("ERROR: no position entered"));
        assert!(transcript.contains("Enter position of the 8 Queen: "));
    }

    #[test]
    fn test_prompt_fails_on_early_eof() {
        let mut out = Vec::new();
        let err = prompt_positions(&AppConfig::default(), "A1\nB3\n".as_bytes(), &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("input ended"));
    }

    #[test]
    fn test_prompt_honours_attempt_limit() {
        let mut config = AppConfig::default();
        config.session.max_attempts_per_queen = 2;
        let mut out = Vec::new();

        let err = prompt_positions(&config, "A9\nA11\nA1\n".as_bytes(), &mut out).unwrap_err();
        assert!(err.to_string().contains("queen 1 rejected 2 times"));
    }

    #[test]
    fn test_cli_parses_positions() {
        let cli = Cli::parse_from(["eight_queens", "A1", "B7", "--config", "q.toml"]);
        assert_eq!(cli.positions, vec!["A1", "B7"]);
        assert_eq!(cli.config, PathBuf::from("q.toml"));
        assert!(!cli.tui);
    }
}
