//! Step-by-step selection wizard
//!
//! The wizard is a plain state machine: the terminal front end translates key
//! presses and resizes into [`WizardEvent`]s, feeds them to [`Wizard::handle`]
//! one at a time and redraws from the wizard's accessors. Nothing here touches
//! the terminal, so every transition can be exercised directly in tests.

mod cursor;

pub use cursor::SelectionCursor;

use crate::catalog::{Choice, OptionCatalog};
use crate::config::ProjectConfig;

/// Wizard steps in forward order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Database,
    Orm,
    Auth,
    Docker,
    Features,
    Confirm,
}

impl Step {
    pub const COUNT: usize = 6;

    pub const ALL: [Step; Step::COUNT] = [
        Step::Database,
        Step::Orm,
        Step::Auth,
        Step::Docker,
        Step::Features,
        Step::Confirm,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Step> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Database => "Database",
            Step::Orm => "ORM",
            Step::Auth => "Authentication",
            Step::Docker => "Docker",
            Step::Features => "Features",
            Step::Confirm => "Confirm",
        }
    }

    /// Heading shown above the step's list
    pub fn title(self) -> &'static str {
        match self {
            Step::Database => "Choose a Database",
            Step::Orm => "Select an ORM/Database Access Layer",
            Step::Auth => "Choose Authentication Method",
            Step::Docker => "Docker Configuration",
            Step::Features => "Enable Additional Features",
            Step::Confirm => "Project Summary",
        }
    }
}

/// Input understood by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Up,
    Down,
    Select,
    Toggle,
    NextStep,
    PrevStep,
    Back,
    Quit,
    ToggleHelp,
    Resize { width: u16, height: u16 },
}

/// Whether the wizard is still collecting input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Completed,
    Cancelled,
}

/// Final result of a wizard session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardOutcome {
    pub config: ProjectConfig,
    /// When set, no project should be generated
    pub cancelled: bool,
}

/// Rows taken by the header and footer around a list
const CHROME_ROWS: u16 = 8;
/// Rows per option: name, description and a spacer
const ROWS_PER_OPTION: u16 = 3;

/// State machine driving the option catalog
#[derive(Debug, Clone)]
pub struct Wizard<'c> {
    catalog: &'c OptionCatalog,
    step: Step,
    phase: Phase,
    cursors: [SelectionCursor; Step::COUNT],
    orm_options: &'static [Choice],
    config: ProjectConfig,
    help_expanded: bool,
}

impl<'c> Wizard<'c> {
    pub fn new(catalog: &'c OptionCatalog, project_name: &str) -> Self {
        Self::with_config(catalog, ProjectConfig::with_defaults(project_name))
    }

    /// Start from an existing config; highlights follow its values
    pub fn with_config(catalog: &'c OptionCatalog, config: ProjectConfig) -> Self {
        let orm_options = catalog.orm_options(&config.database);

        let mut wizard = Self {
            catalog,
            step: Step::Database,
            phase: Phase::Active,
            cursors: [SelectionCursor::default(); Step::COUNT],
            orm_options,
            config,
            help_expanded: false,
        };

        for step in [Step::Database, Step::Orm, Step::Auth, Step::Docker] {
            let current = wizard.config.get(step).unwrap_or_default();
            let index = wizard
                .options(step)
                .iter()
                .position(|c| c.name == current)
                .unwrap_or(0);
            wizard.cursors[step.index()] = SelectionCursor::at(index);
        }

        wizard
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase != Phase::Active
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn help_expanded(&self) -> bool {
        self.help_expanded
    }

    pub fn cursor(&self, step: Step) -> SelectionCursor {
        self.cursors[step.index()]
    }

    /// Options listed at `step`; the ORM list tracks the chosen database
    pub fn options(&self, step: Step) -> &'static [Choice] {
        match step {
            Step::Orm => self.orm_options,
            other => self.catalog.static_options(other),
        }
    }

    /// Option under the cursor on the current step
    pub fn highlighted(&self) -> Option<&'static Choice> {
        self.options(self.step).get(self.cursor(self.step).index())
    }

    /// Apply one event. Events after completion or cancellation are ignored.
    pub fn handle(&mut self, event: WizardEvent) {
        if self.is_finished() {
            return;
        }

        match event {
            WizardEvent::Up => {
                let len = self.options(self.step).len();
                self.cursors[self.step.index()].previous(len);
            }
            WizardEvent::Down => {
                let len = self.options(self.step).len();
                self.cursors[self.step.index()].next(len);
            }
            WizardEvent::Select => self.select(),
            WizardEvent::Toggle => self.toggle(),
            WizardEvent::NextStep => {
                if let Some(next) = self.step.next() {
                    self.step = next;
                }
            }
            WizardEvent::PrevStep => {
                if let Some(prev) = self.step.previous() {
                    self.step = prev;
                }
            }
            WizardEvent::Back => match self.step.previous() {
                Some(prev) => self.step = prev,
                None => self.phase = Phase::Cancelled,
            },
            WizardEvent::Quit => self.phase = Phase::Cancelled,
            WizardEvent::ToggleHelp => self.help_expanded = !self.help_expanded,
            WizardEvent::Resize { height, .. } => self.resize(height),
        }
    }

    fn select(&mut self) {
        match self.step {
            Step::Features => self.step = Step::Confirm,
            Step::Confirm => self.phase = Phase::Completed,
            step => {
                let Some(choice) = self.highlighted() else {
                    return;
                };
                self.config.set(step, choice.name);

                if step == Step::Database {
                    self.orm_options = self.catalog.orm_options(choice.name);
                    if let Some(default) = self.orm_options.first() {
                        self.config.orm = default.name.to_string();
                    }
                    self.cursors[Step::Orm.index()].reset();
                }

                if let Some(next) = step.next() {
                    self.step = next;
                }
            }
        }
    }

    fn toggle(&mut self) {
        if self.step != Step::Features {
            return;
        }
        if let Some(choice) = self.highlighted() {
            self.config.features.toggle(choice.name);
        }
    }

    fn resize(&mut self, height: u16) {
        let rows = (height.saturating_sub(CHROME_ROWS) / ROWS_PER_OPTION).max(1);
        for cursor in &mut self.cursors {
            cursor.set_window(rows as usize);
        }
    }

    pub fn finish(self) -> WizardOutcome {
        WizardOutcome {
            cancelled: self.phase != Phase::Completed,
            config: self.config,
        }
    }

    /// Feed a scripted event sequence; running out of events counts as cancelled
    pub fn drive<I>(mut self, events: I) -> WizardOutcome
    where
        I: IntoIterator<Item = WizardEvent>,
    {
        for event in events {
            self.handle(event);
            if self.is_finished() {
                break;
            }
        }
        self.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DATABASES;
    use WizardEvent::*;

    fn wizard(catalog: &OptionCatalog) -> Wizard<'_> {
        Wizard::new(catalog, "demo")
    }

    #[test]
    fn test_step_order() {
        assert_eq!(Step::Database.next(), Some(Step::Orm));
        assert_eq!(Step::Confirm.next(), None);
        assert_eq!(Step::Database.previous(), None);
        assert_eq!(Step::Features.previous(), Some(Step::Docker));
    }

    #[test]
    fn test_default_orm_matches_catalog_for_every_database() {
        let catalog = OptionCatalog::new();
        for (i, db) in DATABASES.iter().enumerate() {
            let mut w = wizard(&catalog);
            for _ in 0..i {
                w.handle(Down);
            }
            w.handle(Select);
            assert_eq!(w.step(), Step::Orm);
            assert_eq!(w.config().database, db.name);
            let orms = catalog.orm_options(db.name);
            assert!(!orms.is_empty());
            assert_eq!(w.config().orm, orms[0].name);
            assert_eq!(w.options(Step::Orm), orms);
            assert_eq!(w.cursor(Step::Orm).index(), 0);
        }
    }

    #[test]
    fn test_changing_database_rebuilds_orm_list() {
        let catalog = OptionCatalog::new();
        let mut w = wizard(&catalog);
        w.handle(Select);
        w.handle(Down);
        w.handle(Down);
        assert_eq!(w.highlighted().map(|c| c.name), Some("SQLC"));

        w.handle(Back);
        w.handle(Down); // MongoDB
        w.handle(Select);
        assert_eq!(w.config().orm, "Official Go Driver");
        assert_eq!(w.highlighted().map(|c| c.name), Some("Official Go Driver"));
    }

    #[test]
    fn test_back_keeps_config() {
        let catalog = OptionCatalog::new();
        let mut w = wizard(&catalog);
        w.handle(Select);
        w.handle(Down);
        w.handle(Select);
        w.handle(Down);
        w.handle(Select);
        assert_eq!(w.step(), Step::Docker);

        let snapshot = w.config().clone();
        for expected in [Step::Auth, Step::Orm, Step::Database] {
            w.handle(Back);
            assert_eq!(w.step(), expected);
            assert_eq!(w.config(), &snapshot);
        }

        w.handle(Back);
        assert_eq!(w.phase(), Phase::Cancelled);
        assert_eq!(w.config(), &snapshot);
    }

    #[test]
    fn test_back_from_every_step() {
        let catalog = OptionCatalog::new();
        for step in &Step::ALL[1..] {
            let mut w = wizard(&catalog);
            while w.step() != *step {
                w.handle(NextStep);
            }
            let before = w.config().clone();
            w.handle(Back);
            assert_eq!(Some(w.step()), step.previous());
            assert_eq!(w.config(), &before);
            assert_eq!(w.phase(), Phase::Active);
        }
    }

    #[test]
    fn test_toggle_twice_restores_features() {
        let catalog = OptionCatalog::new();
        let mut w = wizard(&catalog);
        for _ in 0..4 {
            w.handle(NextStep);
        }
        assert_eq!(w.step(), Step::Features);
        w.handle(Toggle);
        w.handle(Down);
        let before = w.config().features.clone();
        w.handle(Toggle);
        w.handle(Toggle);
        assert_eq!(w.config().features, before);
    }

    #[test]
    fn test_toggle_order() {
        let catalog = OptionCatalog::new();
        let mut w = wizard(&catalog);
        for _ in 0..4 {
            w.handle(NextStep);
        }
        w.handle(Toggle); // WebSocket Subscriptions
        w.handle(Down);
        w.handle(Toggle); // Redis Caching
        assert_eq!(
            w.config().features.iter().collect::<Vec<_>>(),
            ["WebSocket Subscriptions", "Redis Caching"]
        );

        w.handle(Up);
        w.handle(Toggle);
        assert_eq!(
            w.config().features.iter().collect::<Vec<_>>(),
            ["Redis Caching"]
        );
    }

    #[test]
    fn test_toggle_ignored_outside_features() {
        let catalog = OptionCatalog::new();
        let mut w = wizard(&catalog);
        w.handle(Toggle);
        assert!(w.config().features.is_empty());
        assert_eq!(w.step(), Step::Database);
    }

    #[test]
    fn test_shortcuts_are_bounded_and_do_not_commit() {
        let catalog = OptionCatalog::new();
        let mut w = wizard(&catalog);
        w.handle(Down);
        w.handle(PrevStep);
        assert_eq!(w.step(), Step::Database);

        for _ in 0..10 {
            w.handle(NextStep);
        }
        assert_eq!(w.step(), Step::Confirm);
        assert_eq!(w.config(), &ProjectConfig::with_defaults("demo"));
        assert_eq!(w.phase(), Phase::Active);
    }

    #[test]
    fn test_quit_keeps_confirmed_fields() {
        let catalog = OptionCatalog::new();
        let outcome = wizard(&catalog).drive([Down, Down, Select, Select, Down, Quit]);
        assert!(outcome.cancelled);
        assert_eq!(outcome.config.database, "MySQL");
        assert_eq!(outcome.config.orm, "GORM");
        assert_eq!(outcome.config.auth, "JWT");
    }

    #[test]
    fn test_full_run_completes() {
        let catalog = OptionCatalog::new();
        let outcome = wizard(&catalog).drive([
            Select, // PostgreSQL
            Down,
            Select, // Ent
            Down,
            Select, // OAuth
            Select, // Docker: cursor starts on the configured default
            Down,
            Toggle, // Redis Caching
            Select,
            Select, // confirm
        ]);
        assert!(!outcome.cancelled);
        assert_eq!(outcome.config.orm, "Ent");
        assert_eq!(outcome.config.auth, "OAuth");
        assert_eq!(outcome.config.docker, "Full (development + production)");
        assert!(outcome.config.has_feature("Redis Caching"));
    }

    #[test]
    fn test_events_after_finish_are_ignored() {
        let catalog = OptionCatalog::new();
        let mut w = wizard(&catalog);
        w.handle(Quit);
        w.handle(Select);
        w.handle(NextStep);
        assert_eq!(w.phase(), Phase::Cancelled);
        assert_eq!(w.step(), Step::Database);
    }

    #[test]
    fn test_resize_only_touches_layout() {
        let catalog = OptionCatalog::new();
        let mut w = wizard(&catalog);
        w.handle(Down);
        w.handle(Down);
        let config = w.config().clone();

        w.handle(Resize {
            width: 80,
            height: 14,
        });
        w.handle(Resize {
            width: 120,
            height: 40,
        });

        assert_eq!(w.step(), Step::Database);
        assert_eq!(w.cursor(Step::Database).index(), 2);
        assert_eq!(w.cursor(Step::Database).window(), 10);
        assert_eq!(w.config(), &config);
    }

    #[test]
    fn test_exhausted_script_counts_as_cancelled() {
        let catalog = OptionCatalog::new();
        let outcome = wizard(&catalog).drive([Select, Select]);
        assert!(outcome.cancelled);
    }

    #[test]
    fn test_help_toggle() {
        let catalog = OptionCatalog::new();
        let mut w = wizard(&catalog);
        w.handle(ToggleHelp);
        assert!(w.help_expanded());
        w.handle(ToggleHelp);
        assert!(!w.help_expanded());
    }
}
