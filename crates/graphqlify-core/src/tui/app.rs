//! Full-screen wizard loop

use super::keys::map_key;
use super::screens;
use crate::catalog::OptionCatalog;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::wizard::{Wizard, WizardEvent, WizardOutcome};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::debug;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the wizard on the alternate screen until the user confirms or cancels
pub fn run_wizard(catalog: &OptionCatalog, project_name: &str) -> ScaffoldResult<WizardOutcome> {
    let mut terminal = setup().map_err(ScaffoldError::Terminal)?;

    let mut wizard = Wizard::new(catalog, project_name);
    let result = event_loop(&mut terminal, &mut wizard);

    // Restore even when the loop failed
    let restored = restore(&mut terminal);
    result.map_err(ScaffoldError::Terminal)?;
    restored.map_err(ScaffoldError::Terminal)?;

    let outcome = wizard.finish();
    debug!(cancelled = outcome.cancelled, "Wizard finished");
    Ok(outcome)
}

fn setup() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn event_loop(terminal: &mut Term, wizard: &mut Wizard<'_>) -> io::Result<()> {
    let size = terminal.size()?;
    wizard.handle(WizardEvent::Resize {
        width: size.width,
        height: size.height,
    });

    while !wizard.is_finished() {
        terminal.draw(|frame| screens::render(frame, wizard))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(event) = map_key(key) {
                    wizard.handle(event);
                }
            }
            Event::Resize(width, height) => wizard.handle(WizardEvent::Resize { width, height }),
            _ => {}
        }
    }

    Ok(())
}

fn restore(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    let _ = console::Term::stderr().show_cursor();
    Ok(())
}
