//! signup CLI
//!
//! Command-line tool for driving the registration form.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use signup_cli::{fill_and_submit, script};
use signup_forms::{
    render_page, render_view, Field, FormValues, Locale, Messages, RegistrationForm,
    SubmitOutcome,
};

/// Registration form with inline validation.
#[derive(Parser)]
#[command(name = "signup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Message language (en, th).
    #[arg(short, long, env = "SIGNUP_LOCALE", default_value = "en")]
    locale: Locale,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single field value.
    Validate {
        /// Field name (username, email, password).
        field: Field,

        /// Value to validate.
        value: String,
    },

    /// Fill in every field and submit.
    Check {
        /// Username.
        #[arg(short, long, default_value = "")]
        username: String,

        /// Email address.
        #[arg(short, long, default_value = "")]
        email: String,

        /// Password.
        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Replay an event script and print the resulting view.
    Render {
        /// JSON-lines event script (empty form if not specified).
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Print a complete HTML document instead of the view fragment.
        #[arg(long)]
        page: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut form = RegistrationForm::with_messages(Messages::for_locale(cli.locale))?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Validate { field, value } => match form.validate(field, &value) {
            Some(message) => writeln!(stdout, "{field}: {message}")?,
            None => writeln!(stdout, "ok")?,
        },

        Commands::Check {
            username,
            email,
            password,
        } => {
            let values = FormValues::new(username, email, password);
            match fill_and_submit(&mut form, values) {
                SubmitOutcome::Accepted(values) => {
                    writeln!(stdout, "{}", serde_json::to_string_pretty(&values)?)?;
                }
                SubmitOutcome::Rejected(errors) => {
                    for (field, message) in errors.entries() {
                        writeln!(stdout, "{field}: {message}")?;
                    }
                    anyhow::bail!("registration rejected");
                }
            }
        }

        Commands::Render {
            script: script_path,
            page,
        } => {
            if let Some(path) = script_path {
                let events = script::load_events(&path)?;
                let outcomes = script::replay(&mut form, events);
                info!(
                    submits = outcomes.len(),
                    accepted = outcomes.iter().filter(|o| o.is_accepted()).count(),
                    status = ?form.status(),
                    "script replayed"
                );
            }

            let html = if page {
                render_page(&form)?
            } else {
                render_view(&form)?
            };
            writeln!(stdout, "{html}")?;
        }
    }

    Ok(())
}
