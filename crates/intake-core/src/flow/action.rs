//! Outbound action vocabulary.
//!
//! Actions are instructions for the dispatcher, in execution order. The flow
//! machine never sends anything itself; it only describes what to send.

use serde::{Deserialize, Serialize};

/// Payload of a menu button, decoded back into an event by the dispatcher.
///
/// Opaque to the transport: the dispatcher serializes tokens however its
/// platform requires and must only ever feed the machine values it sourced
/// from a menu the machine itself rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// Pick this language.
    Language { code: String },
    /// Pick the issue at this index (zero-based).
    Issue { index: usize },
    /// Go back one step.
    Back,
    /// Start the conversation over.
    Restart,
}

/// One pressable menu button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub token: Token,
}

impl Button {
    pub fn new(label: impl Into<String>, token: Token) -> Self {
        Self {
            label: label.into(),
            token,
        }
    }
}

/// An inline menu attached to an outbound message.
///
/// Buttons are grouped into rows; both rows and buttons keep their order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub rows: Vec<Vec<Button>>,
}

impl Menu {
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        Self { rows }
    }

    /// Iterates buttons in reading order (row by row).
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// One outbound action for the dispatcher to execute.
///
/// `delay_ms` is a suggested minimum spacing before executing the action;
/// actual timing is owned by the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Send a new message, optionally with a menu.
    Send {
        body: String,
        #[serde(default)]
        menu: Option<Menu>,
        #[serde(default)]
        delay_ms: Option<u64>,
    },
    /// Edit the message produced by the nearest preceding `Send` in the same
    /// action list. The dispatcher correlates the two via the message
    /// identifier returned when it executed that `Send`.
    EditPrior {
        body: String,
        #[serde(default)]
        delay_ms: Option<u64>,
    },
}

impl Action {
    /// A plain text send.
    pub fn send(body: impl Into<String>) -> Self {
        Self::Send {
            body: body.into(),
            menu: None,
            delay_ms: None,
        }
    }

    /// A send carrying a menu.
    pub fn send_with_menu(body: impl Into<String>, menu: Menu) -> Self {
        Self::Send {
            body: body.into(),
            menu: Some(menu),
            delay_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_buttons_iterate_in_reading_order() {
        let menu = Menu::new(vec![
            vec![
                Button::new("a", Token::Language { code: "en".into() }),
                Button::new("b", Token::Language { code: "ru".into() }),
            ],
            vec![Button::new("c", Token::Back)],
        ]);
        let labels: Vec<&str> = menu.buttons().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[test]
    fn test_action_serializes_with_type_tag() {
        let json = serde_json::to_value(Action::send("hi")).unwrap();
        assert_eq!(json["type"], "send");
        assert_eq!(json["body"], "hi");
    }
}
