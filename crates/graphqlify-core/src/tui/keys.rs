//! Fixed key bindings for the wizard

use crate::wizard::{Step, WizardEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a key press into a wizard event; unbound keys yield `None`
pub fn map_key(key: KeyEvent) -> Option<WizardEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(WizardEvent::Quit),
            _ => None,
        };
    }

    let event = match key.code {
        KeyCode::Up | KeyCode::Char('k') => WizardEvent::Up,
        KeyCode::Down | KeyCode::Char('j') => WizardEvent::Down,
        KeyCode::Enter => WizardEvent::Select,
        KeyCode::Char(' ') => WizardEvent::Toggle,
        KeyCode::Tab | KeyCode::Right => WizardEvent::NextStep,
        KeyCode::BackTab | KeyCode::Left => WizardEvent::PrevStep,
        KeyCode::Esc => WizardEvent::Back,
        KeyCode::Char('q') => WizardEvent::Quit,
        KeyCode::Char('?') => WizardEvent::ToggleHelp,
        _ => return None,
    };
    Some(event)
}

/// One-line hint shown under every step
pub fn short_help(step: Step) -> String {
    let mut parts = Vec::new();

    if step > Step::Database {
        parts.push("← Back");
    }
    if step < Step::Confirm {
        parts.push("→ Next");
    }
    parts.push(match step {
        Step::Features => "Space Toggle • Enter Continue",
        Step::Confirm => "Enter Create Project",
        _ => "Enter Select",
    });
    parts.push("Esc Back");
    parts.push("q Quit");
    parts.push("? Help");

    parts.join(" • ")
}

/// Expanded help: (keys, action) rows
pub const FULL_HELP: &[(&str, &str)] = &[
    ("↑/k", "up"),
    ("↓/j", "down"),
    ("enter", "select"),
    ("space", "toggle feature"),
    ("tab/→", "next step"),
    ("shift+tab/←", "previous step"),
    ("esc", "back (cancel on first step)"),
    ("q/ctrl+c", "quit"),
    ("?", "toggle help"),
];
