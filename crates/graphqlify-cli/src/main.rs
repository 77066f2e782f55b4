//! go-graphqlify - Interactive scaffolding for Go GraphQL APIs

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use graphqlify_core::tui::CreateArgs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "go-graphqlify")]
#[command(about = "Scaffold a production-ready Go GraphQL API")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Go GraphQL project
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project name; also the directory to create
    pub name: String,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// YAML file with pre-selected answers (non-interactive mode)
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Write directly into the project directory instead of staging first
    #[arg(long = "in-place")]
    pub in_place: bool,

    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            project_name: args.name,
            template_dir: args.template_dir,
            answers: args.answers,
            in_place: args.in_place,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn print_banner() {
    println!();
    println!("  {}  {}", "◆".magenta().bold(), "GoGraphQLify".bold());
    println!(
        "  {}",
        "Scaffold a Go GraphQL API with your choice of database, ORM and auth".dimmed()
    );
    println!();
    println!(
        "  Use '{}' to start a new project.",
        "go-graphqlify create <name>".cyan()
    );
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully outside the raw-mode wizard
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Some(Command::Create(create_args)) => {
            init_tracing(create_args.verbose);
            tracing::debug!(version = CLI_VERSION, "Starting create");

            let result = graphqlify_core::run(create_args.into(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            print_banner();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_parse() {
        let args = Args::try_parse_from([
            "go-graphqlify",
            "create",
            "shop",
            "--answers",
            "answers.yaml",
            "--in-place",
        ])
        .unwrap();

        let Some(Command::Create(create)) = args.command else {
            panic!("expected create subcommand");
        };
        let create: CreateArgs = create.into();
        assert_eq!(create.project_name, "shop");
        assert_eq!(create.answers, Some(PathBuf::from("answers.yaml")));
        assert!(create.in_place);
        assert!(create.template_dir.is_none());
    }

    #[test]
    fn test_create_requires_name() {
        assert!(Args::try_parse_from(["go-graphqlify", "create"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["go-graphqlify"]).unwrap();
        assert!(args.command.is_none());
    }
}
