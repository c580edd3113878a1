use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use rustyline::Editor;
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

use intake_application::{ExpirySweeper, IntakeUseCase};
use intake_core::config::IntakeConfig;
use intake_core::flow::{Action, Event, Menu, Token};
use intake_core::session::{MemorySessionStore, SessionStore, UserId};

/// The single local user this console session stands in for.
const LOCAL_USER: UserId = 1;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/start".to_string(),
                "/restart".to_string(),
                "/back".to_string(),
                "/ping".to_string(),
                "/sessions".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Decodes one console line into an inbound event, playing the dispatcher
/// role: slash commands map to the entry/side-channel events, a number maps
/// through the last rendered menu's buttons, and anything else is wallet
/// text.
fn decode_input(line: &str, last_menu: Option<&Menu>, display_name: Option<&str>) -> Event {
    match line {
        "/start" => Event::Start {
            display_name: display_name.map(str::to_string),
        },
        "/restart" => Event::Restart {
            display_name: display_name.map(str::to_string),
        },
        "/back" => Event::Back,
        "/ping" => Event::StatusQuery,
        _ => {
            if let Ok(pick) = line.parse::<usize>() {
                if let Some(button) = pick
                    .checked_sub(1)
                    .and_then(|i| last_menu.and_then(|menu| menu.buttons().nth(i)))
                {
                    return match &button.token {
                        Token::Language { code } => Event::LanguageChosen { code: code.clone() },
                        Token::Issue { index } => Event::IssueChosen { index: *index },
                        Token::Back => Event::Back,
                        Token::Restart => Event::Restart {
                            display_name: display_name.map(str::to_string),
                        },
                    };
                }
            }
            Event::WalletSubmitted {
                text: line.to_string(),
            }
        }
    }
}

/// Executes the action list against the terminal.
///
/// `Send` bodies are printed with their menu as a numbered option list;
/// `EditPrior` is simulated by reprinting the corrected line. Suggested
/// delays are honored with real sleeps so the processing animation reads the
/// way a chat transport would show it. Returns the last rendered menu, which
/// becomes the context for decoding the next numeric pick.
async fn execute_actions(actions: &[Action]) -> Option<Menu> {
    let mut rendered_menu = None;

    for action in actions {
        match action {
            Action::Send {
                body,
                menu,
                delay_ms,
            } => {
                if let Some(ms) = delay_ms {
                    sleep(Duration::from_millis(*ms)).await;
                }
                for line in body.lines() {
                    println!("{}", line.bright_blue());
                }
                if let Some(menu) = menu {
                    let mut option = 1;
                    for row in &menu.rows {
                        for button in row {
                            println!("{}", format!("  [{}] {}", option, button.label).yellow());
                            option += 1;
                        }
                    }
                    rendered_menu = Some(menu.clone());
                }
                println!();
            }
            Action::EditPrior { body, delay_ms } => {
                if let Some(ms) = delay_ms {
                    sleep(Duration::from_millis(*ms)).await;
                }
                println!("{}", format!("✏️  {}", body).bright_blue());
            }
        }
    }

    rendered_menu
}

async fn print_sessions(store: &Arc<dyn SessionStore>) -> Result<()> {
    let snapshot = store.snapshot().await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?.bright_black());
    Ok(())
}

/// The main entry point for the intake console driver.
///
/// This async function sets up a rustyline-based REPL that plays the
/// dispatcher role against the intake engine:
/// 1. Initializes the session store, use case, and expiry sweeper
/// 2. Provides command completion for the slash commands
/// 3. Decodes console input into inbound events
/// 4. Executes returned actions (only after the event has been applied)
#[tokio::main]
async fn main() -> Result<()> {
    // ===== Backend Initialization =====
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::var("INTAKE_CONFIG") {
        Ok(path) => match IntakeConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}, using defaults", path, e);
                IntakeConfig::default()
            }
        },
        Err(_) => IntakeConfig::default(),
    };

    let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let usecase = Arc::new(IntakeUseCase::new(Arc::clone(&store)));

    let sweeper = Arc::new(ExpirySweeper::new(
        Arc::clone(&store),
        config.sweep_interval(),
    ));
    sweeper.start();

    let display_name = std::env::var("USER").ok();

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));
    let _ = rl.load_history(&config.console.history_file);

    println!("{}", "=== Intake console ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/start' to begin, '/ping' for status, '/sessions' for diagnostics, or 'quit' to exit."
            .bright_black()
    );
    println!();

    // The menu rendered last, used to decode numeric picks
    let mut last_menu: Option<Menu> = None;

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                if trimmed == "/sessions" {
                    if let Err(e) = print_sessions(&store).await {
                        eprintln!("{}", format!("Error: {:?}", e).red());
                    }
                    continue;
                }

                let event = decode_input(trimmed, last_menu.as_ref(), display_name.as_deref());

                // Apply the event first; actions are executed only after the
                // session value is committed, so a slow render never holds
                // any session lock.
                match usecase.handle_event(LOCAL_USER, event).await {
                    Ok(actions) => {
                        if actions.is_empty() {
                            println!("{}", "Unknown command".bright_black());
                        } else if let Some(menu) = execute_actions(&actions).await {
                            last_menu = Some(menu);
                        }
                    }
                    Err(e) if e.is_invalid_selection() => {
                        println!(
                            "{}",
                            "⚠️ That option isn't on the menu – please pick again.".yellow()
                        );
                    }
                    Err(e) => {
                        eprintln!("{}", format!("Error: {:?}", e).red());
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    let _ = rl.save_history(&config.console.history_file);

    Ok(())
}
