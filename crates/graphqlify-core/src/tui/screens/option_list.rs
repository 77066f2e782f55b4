//! Single-choice and toggle lists

use crate::wizard::{Step, Wizard};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the list for `step`, scrolled so the highlighted option is visible
pub fn render(frame: &mut Frame, area: Rect, wizard: &Wizard<'_>, step: Step) {
    let options = wizard.options(step);
    let cursor = wizard.cursor(step);
    let config = wizard.config();
    let is_toggle = step == Step::Features;
    let visible = cursor.visible_range(options.len());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if is_toggle {
            vec![Constraint::Min(4), Constraint::Length(3)]
        } else {
            vec![Constraint::Min(4)]
        })
        .split(area);

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .skip(visible.start)
        .take(visible.len())
        .map(|(i, option)| {
            let highlighted = i == cursor.index();
            let style = if highlighted {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let prefix = if highlighted { "▶ " } else { "  " };

            let mut title = vec![Span::raw(prefix)];
            if is_toggle {
                let checkbox = if config.has_feature(option.name) {
                    "[✓] "
                } else {
                    "[ ] "
                };
                title.push(Span::styled(checkbox, style));
            } else if config.get(step) == Some(option.name) {
                title.push(Span::styled("● ", Style::default().fg(Color::Cyan)));
            }
            title.push(Span::styled(option.name, style));

            let description_style = if highlighted {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            ListItem::new(vec![
                Line::from(title),
                Line::from(Span::styled(
                    format!("    {}", option.description),
                    description_style,
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(step.title()),
    );
    frame.render_widget(list, chunks[0]);

    if is_toggle {
        let selected = if config.features.is_empty() {
            Span::styled("None", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                config.features.iter().collect::<Vec<_>>().join(", "),
                Style::default().fg(Color::Green),
            )
        };

        let summary = Paragraph::new(Line::from(vec![
            Span::styled("Selected features: ", Style::default().fg(Color::Gray)),
            selected,
        ]))
        .block(Block::default().borders(Borders::ALL).title("Summary"));
        frame.render_widget(summary, chunks[1]);
    }
}
