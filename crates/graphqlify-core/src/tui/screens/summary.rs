//! Confirmation screen

use crate::wizard::Wizard;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, wizard: &Wizard<'_>) {
    let config = wizard.config();
    let label = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (name, value) in config.summary() {
        if name == "Features" && !config.features.is_empty() {
            lines.push(Line::from(Span::styled("Features:", label)));
            for feature in config.features.iter() {
                lines.push(Line::from(format!("  - {}", feature)));
            }
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", name), label),
            Span::raw(value),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to create the project, Esc to go back.",
        Style::default().fg(Color::Green),
    )));

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("📋 Project Summary"),
    );
    frame.render_widget(summary, area);
}
