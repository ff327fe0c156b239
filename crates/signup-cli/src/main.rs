mod render;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use signup_validation::{Field, FormController, FormView, TracingSink, ValidationConfig, ValidationEngine};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version, about = "Check registration form input against the signup rules", long_about = None)]
struct Cli {
    /// Validation config file (defaults to ./signup.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate all four fields and report whether the form can be submitted
    Check(FormArgs),

    /// Validate the fields, then submit (logs the masked payload)
    Submit(FormArgs),

    /// Show the password rule breakdown and strength
    Strength {
        /// Password to rate
        password: String,

        /// Full name the password must not contain
        #[arg(long, default_value = "")]
        full_name: String,

        /// Email the password must not contain
        #[arg(long, default_value = "")]
        email: String,
    },
}

#[derive(Args)]
struct FormArgs {
    #[arg(long, default_value = "")]
    username: String,

    #[arg(long, default_value = "")]
    full_name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    password: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Replay the fields in page order, one change event each
fn fill_form(
    config: ValidationConfig,
    args: &FormArgs,
) -> FormController<FormView, TracingSink> {
    let mut form = FormController::with_config(config, FormView::default(), TracingSink);
    for (field, value) in [
        (Field::Username, &args.username),
        (Field::FullName, &args.full_name),
        (Field::Email, &args.email),
        (Field::Password, &args.password),
    ] {
        form.on_field_change(field, value);
    }
    form
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ValidationConfig::load(path)?,
        None => ValidationConfig::load_default()?,
    };
    tracing::debug!(config = ?config, "loaded validation config");

    match cli.command {
        Commands::Check(args) => {
            let form = fill_form(config, &args);
            print!("{}", render::render_view(form.presenter(), &form.engine().config().password));

            if !form.state().submittable {
                bail!("form is not ready to submit");
            }
            println!("{}", "Form is ready to submit".green().bold());
        }

        Commands::Submit(args) => {
            let mut form = fill_form(config, &args);
            let password_config = form.engine().config().password.clone();

            if !form.on_submit() {
                print!("{}", render::render_view(form.presenter(), &password_config));
                bail!("submission rejected: fix the invalid fields first");
            }
            print!("{}", render::render_view(form.presenter(), &password_config));
        }

        Commands::Strength {
            password,
            full_name,
            email,
        } => {
            let engine = ValidationEngine::new(config);
            let check = engine.check_password(&password, &full_name, &email);
            print!("{}", render::render_password(&check, &engine.config().password));

            if check.rules().is_none() {
                println!("{}", "Enter a password to rate it".dimmed());
            }
        }
    }

    Ok(())
}
