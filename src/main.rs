//! # Creational Recipe CLI
//!
//! Runs one demonstration per invocation:
//!
//! - `creational` / `creational factory-method [--kind KEY]` - prompt for a hamburger
//!   (unless `--kind` is given) and prepare it
//! - `creational builder` - build and print the basic and the advanced phone
//! - `creational abstract-factory [--family KEY]` - serve one family's menu, or all of them
//!
//! Exits with status 2 when the selection key is unknown.

use clap::{Parser, Subcommand};
use creational_recipe::boundary::{ConsoleReporter, FixedChoice, PromptChoice, UserChoiceProvider};
use creational_recipe::error::SelectionError;
use creational_recipe::lifecycle::{setup_tracing, Showcase};
use std::process::ExitCode;
use tracing::{info, warn};

/// Object-construction strategies: staged builder, factory method, abstract factory.
#[derive(Parser)]
#[command(name = "creational", version, about, long_about = None)]
struct Cli {
    /// Print without terminal colors.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the basic and the advanced phone.
    Builder,

    /// Order a hamburger from the restaurant bound to one kind.
    FactoryMethod {
        /// Hamburger kind (chicken, beef, bean). Prompted for when omitted.
        #[arg(long)]
        kind: Option<String>,
    },

    /// Serve a menu whose items all come from one family.
    AbstractFactory {
        /// Family (fast-food, healthy). Every family is served when omitted.
        #[arg(long)]
        family: Option<String>,
    },
}

fn run(cli: Cli) -> Result<(), SelectionError> {
    let reporter = if cli.no_color {
        ConsoleReporter::plain()
    } else {
        ConsoleReporter::new()
    };
    let mut showcase = Showcase::new(reporter);

    match cli.command.unwrap_or(Command::FactoryMethod { kind: None }) {
        Command::Builder => {
            showcase.build_phones();
        }
        Command::FactoryMethod { kind } => {
            let mut choices: Box<dyn UserChoiceProvider> = match kind {
                Some(kind) => Box::new(FixedChoice::new(kind)),
                None => Box::new(PromptChoice),
            };
            showcase.order_hamburger(choices.as_mut())?;
        }
        Command::AbstractFactory { family } => {
            showcase.serve_menus(family.as_deref())?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(!cli.no_color);
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match run(cli) {
        Ok(()) => {
            info!("Showcase completed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(error = %e, "Selection failed");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
