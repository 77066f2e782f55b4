//! Drawing for each wizard step

mod option_list;
mod summary;

use super::keys::{short_help, FULL_HELP};
use crate::wizard::{Step, Wizard};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Draw the whole wizard for its current step
pub fn render(frame: &mut Frame, wizard: &Wizard<'_>) {
    let help_rows = if wizard.help_expanded() {
        FULL_HELP.len() as u16 + 2
    } else {
        1
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Length(1),         // Progress
            Constraint::Min(6),            // Step body
            Constraint::Length(help_rows), // Help
        ])
        .split(frame.area());

    let header = Paragraph::new(format!(
        "Creating project: {}",
        wizard.config().project_name
    ))
    .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(header, chunks[0]);

    frame.render_widget(progress(wizard.step()), chunks[1]);

    match wizard.step() {
        Step::Confirm => summary::render(frame, chunks[2], wizard),
        step => option_list::render(frame, chunks[2], wizard, step),
    }

    render_help(frame, chunks[3], wizard);
}

/// Breadcrumb of steps with the current one highlighted
fn progress(current: Step) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, step) in Step::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *step == current {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if *step < current {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(step.label(), style));
    }
    Paragraph::new(Line::from(spans))
}

fn render_help(frame: &mut Frame, area: Rect, wizard: &Wizard<'_>) {
    let dim = Style::default().fg(Color::DarkGray);

    if !wizard.help_expanded() {
        let help = Paragraph::new(short_help(wizard.step())).style(dim);
        frame.render_widget(help, area);
        return;
    }

    let lines: Vec<Line> = FULL_HELP
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{:<14}", keys), Style::default().fg(Color::Cyan)),
                Span::styled(*action, dim),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Keys"));
    frame.render_widget(help, area);
}
