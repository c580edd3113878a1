//! The transition function of the intake flow.

use crate::catalog::{Catalog, CatalogEntry, Lang};
use crate::error::{IntakeError, Result};
use crate::session::{Session, Stage};

use super::action::{Action, Button, Menu, Token};
use super::event::Event;

/// Maximum accepted wallet identifier length, in Unicode scalar values.
pub const MAX_WALLET_CHARS: usize = 100;

/// Suggested minimum spacing between processing-animation frames.
pub const FRAME_GAP_MS: u64 = 1_000;

/// Suggested minimum gap between the last frame and the operator hand-off.
pub const HANDOFF_GAP_MS: u64 = 500;

/// Name used in greetings when the platform supplied none.
const FALLBACK_NAME: &str = "User";

/// Result of applying one event to one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The session value to persist. Equal to the input for ignored events
    /// and status probes.
    pub session: Session,
    /// Actions for the dispatcher to execute, in order.
    pub actions: Vec<Action>,
}

/// Applies one inbound event to a session.
///
/// Pure function of its inputs: no I/O, no hidden state, never suspends.
/// The caller persists `Outcome::session` *before* executing the actions, so
/// the conversation advances regardless of delivery outcome.
///
/// Selection events carrying values the catalog cannot resolve return an
/// error (see [`IntakeError::is_invalid_selection`]) and the session must
/// not be written. Events that have no meaning at the current stage (a stale
/// menu press, free text outside the wallet step) are ignored: unchanged
/// session, empty action list.
pub fn transition(session: &Session, event: &Event, catalog: &Catalog) -> Result<Outcome> {
    match event {
        Event::Start { display_name } | Event::Restart { display_name } => {
            Ok(begin(session, display_name.as_deref(), catalog))
        }
        Event::StatusQuery => Ok(status(session, catalog)),
        Event::LanguageChosen { code } => match session.stage {
            Stage::AwaitingLanguage => choose_language(session, code, catalog),
            _ => Ok(ignore(session)),
        },
        Event::IssueChosen { index } => match session.stage {
            Stage::AwaitingIssue => choose_issue(session, *index, catalog),
            _ => Ok(ignore(session)),
        },
        Event::Back => match session.stage {
            Stage::AwaitingIssue => Ok(back_to_language(session, catalog)),
            Stage::AwaitingWallet => Ok(back_to_issue(session, catalog)),
            _ => Ok(ignore(session)),
        },
        Event::WalletSubmitted { text } => match session.stage {
            Stage::AwaitingWallet => Ok(submit_wallet(session, text, catalog)),
            _ => Ok(ignore(session)),
        },
    }
}

/// Start/restart: reset the picks and greet in the baseline language.
fn begin(session: &Session, display_name: Option<&str>, catalog: &Catalog) -> Outcome {
    let mut next = session.clone();
    next.stage = Stage::AwaitingLanguage;
    next.language = None;
    next.issue = None;
    if let Some(name) = display_name {
        next.display_name = Some(name.to_string());
    }
    next.touch();

    let greeting = catalog.default_entry().greeting_for(name_of(&next));
    Outcome {
        actions: vec![Action::send_with_menu(greeting, language_menu(catalog))],
        session: next,
    }
}

fn choose_language(session: &Session, code: &str, catalog: &Catalog) -> Result<Outcome> {
    let (lang, entry) = catalog
        .entry_for_code(code)
        .ok_or_else(|| IntakeError::unsupported_language(code))?;

    let mut next = session.clone();
    next.stage = Stage::AwaitingIssue;
    next.language = Some(lang);
    next.touch();

    Ok(Outcome {
        session: next,
        actions: vec![Action::send_with_menu(
            entry.welcome_message(),
            issue_menu(entry),
        )],
    })
}

fn choose_issue(session: &Session, index: usize, catalog: &Catalog) -> Result<Outcome> {
    let entry = entry_for(session, catalog);
    let label = entry
        .issues
        .get(index)
        .ok_or_else(|| IntakeError::issue_out_of_range(index, entry.issues.len()))?;

    let mut next = session.clone();
    next.stage = Stage::AwaitingWallet;
    // Copy of the label string, not an index into the catalog
    next.issue = Some((*label).to_string());
    next.touch();

    Ok(Outcome {
        session: next,
        actions: vec![Action::send_with_menu(entry.wallet_prompt, back_menu(entry))],
    })
}

/// Back from the issue menu: language choice again, picks untouched.
fn back_to_language(session: &Session, catalog: &Catalog) -> Outcome {
    let mut next = session.clone();
    next.stage = Stage::AwaitingLanguage;
    next.touch();

    let greeting = entry_for(session, catalog).greeting_for(name_of(session));
    Outcome {
        session: next,
        actions: vec![Action::send_with_menu(greeting, language_menu(catalog))],
    }
}

/// Back from the wallet prompt: issue menu again.
fn back_to_issue(session: &Session, catalog: &Catalog) -> Outcome {
    let mut next = session.clone();
    next.stage = Stage::AwaitingIssue;
    next.touch();

    let entry = entry_for(session, catalog);
    Outcome {
        session: next,
        actions: vec![Action::send_with_menu(
            entry.welcome_message(),
            issue_menu(entry),
        )],
    }
}

fn submit_wallet(session: &Session, text: &str, catalog: &Catalog) -> Outcome {
    let entry = entry_for(session, catalog);

    // Validation failure self-loops without advancing
    if text.chars().count() > MAX_WALLET_CHARS {
        return Outcome {
            session: session.clone(),
            actions: vec![Action::send_with_menu(
                entry.wallet_too_long,
                back_menu(entry),
            )],
        };
    }

    // The second and third frames edit the message sent by the first; the
    // conversation then parks here until the user presses restart.
    let [first, second, third] = entry.processing_frames;
    Outcome {
        session: session.clone(),
        actions: vec![
            Action::send(first),
            Action::EditPrior {
                body: second.to_string(),
                delay_ms: Some(FRAME_GAP_MS),
            },
            Action::EditPrior {
                body: third.to_string(),
                delay_ms: Some(FRAME_GAP_MS),
            },
            Action::Send {
                body: entry.operator.to_string(),
                menu: Some(restart_menu(entry)),
                delay_ms: Some(HANDOFF_GAP_MS),
            },
        ],
    }
}

/// Side-channel status probe: render-only, no state change.
fn status(session: &Session, catalog: &Catalog) -> Outcome {
    Outcome {
        session: session.clone(),
        actions: vec![Action::send(entry_for(session, catalog).online)],
    }
}

/// An event with no handler at the current stage: unchanged session,
/// nothing to send.
fn ignore(session: &Session) -> Outcome {
    Outcome {
        session: session.clone(),
        actions: Vec::new(),
    }
}

/// Entry for the session's language, baseline language if none is set yet.
fn entry_for<'a>(session: &Session, catalog: &'a Catalog) -> &'a CatalogEntry {
    catalog.entry(session.language.unwrap_or_default())
}

fn name_of(session: &Session) -> &str {
    session.display_name.as_deref().unwrap_or(FALLBACK_NAME)
}

fn language_menu(catalog: &Catalog) -> Menu {
    let rows = Lang::ALL
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|lang| {
                    Button::new(
                        catalog.entry(*lang).menu_label,
                        Token::Language {
                            code: lang.code().to_string(),
                        },
                    )
                })
                .collect()
        })
        .collect();
    Menu::new(rows)
}

fn issue_menu(entry: &CatalogEntry) -> Menu {
    let mut rows: Vec<Vec<Button>> = entry
        .issues
        .iter()
        .enumerate()
        .map(|(index, label)| vec![Button::new(*label, Token::Issue { index })])
        .collect();
    rows.push(vec![Button::new(entry.back_label, Token::Back)]);
    Menu::new(rows)
}

fn back_menu(entry: &CatalogEntry) -> Menu {
    Menu::new(vec![vec![Button::new(entry.back_label, Token::Back)]])
}

fn restart_menu(entry: &CatalogEntry) -> Menu {
    Menu::new(vec![vec![Button::new(entry.restart_label, Token::Restart)]])
}
