//! create-ada - Project scaffolding for TanStack Start frontends

use ada_core::features::FeatureRegistry;
use ada_core::tui::CreateArgs;
use ada_core::{format_validation_result, validate_feature_templates, ProductConfig, ScaffoldError, TemplateRoot};
use clap::{ArgAction, Parser};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
const LOG_ENV: &str = "CREATE_ADA_LOG";

/// create-ada product configuration
#[derive(Clone)]
pub struct AdaConfig;

impl ProductConfig for AdaConfig {
    fn name(&self) -> &'static str {
        "create-ada"
    }

    fn display_name(&self) -> &'static str {
        "Create Ada"
    }

    fn templates_dir_env(&self) -> &'static str {
        "CREATE_ADA_TEMPLATES"
    }

    fn default_templates_dir(&self) -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates"))
    }

    fn docs_url(&self) -> &'static str {
        "https://tanstack.com/start/latest/docs"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-ada")]
#[command(about = "Create professional frontend projects")]
#[command(version, disable_version_flag = true)]
pub struct Args {
    /// Project name (lowercase with dashes)
    pub name: Option<String>,

    /// Preset to use: minimal, standard, enterprise, custom
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Theme color: blue, indigo, purple, pink, teal, green, cyan, peach, black
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Validate the feature templates and exit
    #[arg(long)]
    pub validate: bool,

    /// Local directory to use for templates (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Do not initialize a git repository
    #[arg(long = "skip-git")]
    pub skip_git: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            preset: args.preset,
            theme: args.theme,
            yes: args.yes,
            template_dir: args.template_dir,
            skip_git: args.skip_git,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Already initialized is fine
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn validate(config: &AdaConfig, template_dir: Option<&std::path::Path>) -> ExitCode {
    let templates = TemplateRoot::resolve(config, template_dir);
    let result = validate_feature_templates(&FeatureRegistry::builtin(), &templates);
    println!("{}", format_validation_result(&result));

    if result.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_logging();

    let args = Args::parse();
    let config = AdaConfig;

    if args.validate {
        return validate(&config, args.template_dir.as_deref());
    }

    let result = ada_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Scaffold errors were already reported by the prompt flow
            if e.downcast_ref::<ScaffoldError>().is_none() {
                eprintln!("{} {:#}", "error:".red().bold(), e);
            }
            tracing::debug!(error = ?e, "create-ada failed");
            ExitCode::FAILURE
        }
    }
}
