//! Charm-style CLI prompts using cliclack

use crate::config::{validate_project_name, ProjectConfig};
use crate::error::ScaffoldError;
use crate::features::{
    FeatureSelection, FormLibrary, PresetName, StateOption, TestingOption, UiBundle,
};
use crate::generate::{generate_project, GenerateOptions};
use crate::product::ProductConfig;
use crate::runtime::check;
use crate::templates::TemplateRoot;
use crate::theme::ThemeColor;
use anyhow::Result;
use console::style;
use std::io;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompted for when absent
    pub name: Option<String>,

    /// Preset name; invalid values fall back to the prompt
    pub preset: Option<String>,

    /// Theme color; invalid values fall back to the prompt
    pub theme: Option<String>,

    /// Skip the confirmation prompt
    pub yes: bool,

    /// Local template tree instead of the built-in one (for development use)
    pub template_dir: Option<PathBuf>,

    /// Do not initialize a git repository
    pub skip_git: bool,
}

/// Turns a cliclack interrupt into [`ScaffoldError::Cancelled`]
trait PromptResultExt<T> {
    fn or_cancel(self) -> Result<T>;
}

impl<T> PromptResultExt<T> for io::Result<T> {
    fn or_cancel(self) -> Result<T> {
        self.map_err(|e| {
            if e.kind() == io::ErrorKind::Interrupted {
                ScaffoldError::Cancelled.into()
            } else {
                anyhow::Error::new(e).context("Prompt failed")
            }
        })
    }
}

fn is_cancelled(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ScaffoldError>(),
        Some(ScaffoldError::Cancelled)
    )
}

/// Run the CLI with interactive prompts.
///
/// Failures that were already shown to the user are returned as [`ScaffoldError`]s.
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(style(format!(" {} ", config.name())).on_cyan().black())?;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Steps 1-5: collect the configuration
    let project = match collect_config(&args, &cwd) {
        Ok(project) => project,
        Err(e) if is_cancelled(&e) => {
            cliclack::outro_cancel("Operation cancelled.")?;
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    // Step 6: advisory runtime check
    let bun = check::check_bun();
    if !bun.available {
        cliclack::log::warning(format!(
            "{} was not found. The generated project's scripts need it.",
            bun
        ))?;
    }

    // Step 7: generate
    let templates = TemplateRoot::resolve(config, args.template_dir.as_deref());
    if let Some(dir) = &args.template_dir {
        cliclack::log::info(format!("Using local templates from {}", dir.display()))?;
    }

    let options = GenerateOptions {
        init_git: !args.skip_git,
        default_branch: config.default_branch().to_string(),
    };
    let target_dir = cwd.join(&project.name);

    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let result = generate_project(&project, &templates, &target_dir, &options, |message| {
        spinner.set_message(message)
    })
    .await;

    match result {
        Ok(generated) => {
            spinner.stop("Project created successfully!");
            if options.init_git && !generated.git_initialized {
                cliclack::log::warning("git not found, skipped repository initialization")?;
            }
        }
        Err(e) => {
            spinner.error("Failed to create project.");
            cliclack::log::error(e.to_string())?;
            return Err(e.into());
        }
    }

    // Step 8: show next steps
    print_next_steps(config, &project.name)?;

    Ok(())
}

fn collect_config(args: &CreateArgs, cwd: &Path) -> Result<ProjectConfig> {
    let name = select_name(args, cwd)?;
    let preset = select_preset(args)?;

    let features = if preset == PresetName::Custom {
        prompt_custom_features()?
    } else {
        preset.features()
    };

    let theme = select_theme(args)?;

    if !args.yes && !confirm_config(&name, preset, &features, theme)? {
        return Err(ScaffoldError::Cancelled.into());
    }

    Ok(ProjectConfig::new(name, preset, features, theme)?)
}

fn select_name(args: &CreateArgs, cwd: &Path) -> Result<String> {
    if let Some(name) = &args.name {
        if let Err(reason) = validate_project_name(name) {
            cliclack::log::error(reason)?;
            return Err(ScaffoldError::InvalidProjectName {
                name: name.clone(),
                reason: reason.to_string(),
            }
            .into());
        }
        if cwd.join(name).exists() {
            cliclack::log::error(format!("Directory \"{}\" already exists", name))?;
            return Err(ScaffoldError::DirectoryExists(cwd.join(name)).into());
        }
        return Ok(name.clone());
    }

    let cwd = cwd.to_path_buf();
    cliclack::input("Project name:")
        .placeholder("my-project")
        .validate(move |input: &String| -> Result<(), String> {
            validate_project_name(input).map_err(str::to_string)?;
            if cwd.join(input).exists() {
                return Err(format!("Directory \"{}\" already exists", input));
            }
            Ok(())
        })
        .interact()
        .or_cancel()
}

fn select_preset(args: &CreateArgs) -> Result<PresetName> {
    if let Some(value) = &args.preset {
        match value.parse::<PresetName>() {
            Ok(preset) => {
                cliclack::log::info(format!("Using preset: {}", style(preset).cyan()))?;
                return Ok(preset);
            }
            Err(e) => cliclack::log::warning(e.to_string())?,
        }
    }

    let mut select = cliclack::select("Select a preset:");
    for preset in PresetName::ALL {
        select = select.item(preset, preset.label(), preset.description());
    }
    select
        .initial_value(PresetName::Standard)
        .interact()
        .or_cancel()
}

fn select_theme(args: &CreateArgs) -> Result<ThemeColor> {
    if let Some(value) = &args.theme {
        match value.parse::<ThemeColor>() {
            Ok(theme) => {
                cliclack::log::info(format!("Using theme: {}", style(theme).cyan()))?;
                return Ok(theme);
            }
            Err(e) => cliclack::log::warning(e.to_string())?,
        }
    }

    let mut select = cliclack::select("Theme color:");
    for theme in ThemeColor::ALL {
        select = select.item(theme, theme.label(), theme.hint());
    }
    select
        .initial_value(ThemeColor::default())
        .interact()
        .or_cancel()
}

fn prompt_custom_features() -> Result<FeatureSelection> {
    let mut forms = cliclack::select("Forms library:");
    for option in [
        FormLibrary::TanstackForm,
        FormLibrary::ReactHookForm,
        FormLibrary::None,
    ] {
        forms = forms.item(option, option.display_name(), option.hint());
    }
    let forms = forms
        .initial_value(FormLibrary::TanstackForm)
        .interact()
        .or_cancel()?;

    let mut testing = cliclack::select("Testing:");
    for option in TestingOption::ALL {
        testing = testing.item(option, option.display_name(), option.hint());
    }
    let testing = testing
        .initial_value(TestingOption::Unit)
        .interact()
        .or_cancel()?;

    let mut state = cliclack::select("Global state management:");
    for option in StateOption::ALL {
        state = state.item(option, option.display_name(), option.hint());
    }
    let state = state
        .initial_value(StateOption::None)
        .interact()
        .or_cancel()?;

    let mut bundles = cliclack::multiselect("UI component bundles:");
    for bundle in UiBundle::ALL {
        bundles = bundles.item(bundle, bundle.display_name(), bundle.hint());
    }
    let ui_bundles = bundles
        .initial_values(vec![UiBundle::Core])
        .required(true)
        .interact()
        .or_cancel()?;

    let auth = cliclack::confirm("Include auth skeleton (Better Auth)?")
        .initial_value(false)
        .interact()
        .or_cancel()?;

    let error_boundaries = cliclack::confirm("Include error boundaries?")
        .initial_value(false)
        .interact()
        .or_cancel()?;

    let github_actions = cliclack::confirm("Include GitHub Actions CI?")
        .initial_value(false)
        .interact()
        .or_cancel()?;

    Ok(FeatureSelection {
        forms,
        testing,
        state,
        ui_bundles,
        auth,
        error_boundaries,
        github_actions,
        ..PresetName::Custom.features()
    })
}

fn mark(enabled: bool) -> String {
    if enabled {
        style("✓").green().to_string()
    } else {
        style("✗").dim().to_string()
    }
}

fn confirm_config(
    name: &str,
    preset: PresetName,
    features: &FeatureSelection,
    theme: ThemeColor,
) -> Result<bool> {
    let bundles: Vec<&str> = features.ui_bundles.iter().map(|b| b.as_str()).collect();

    let lines = [
        format!("{} {}", style("Name:").cyan(), name),
        format!("{} {}", style("Preset:").cyan(), preset),
        format!("{} {}", style("Theme:").cyan(), theme),
        String::new(),
        style("Features:").bold().to_string(),
        format!("{} TanStack Query", mark(features.tanstack_query)),
        format!("{} Forms ({})", mark(features.has_forms()), features.forms),
        format!("{} API Client", mark(features.api_client)),
        format!("{} Env Validation", mark(features.env_validation)),
        format!("{} Testing ({})", mark(features.has_tests()), features.testing),
        format!("{} Auth", mark(features.auth)),
        format!(
            "{} State ({})",
            mark(features.state != StateOption::None),
            features.state
        ),
        format!("{} Error Boundaries", mark(features.error_boundaries)),
        format!("{} GitHub Actions CI", mark(features.github_actions)),
        format!("{} {}", style("UI Bundles:").cyan(), bundles.join(", ")),
    ];
    cliclack::note("Project configuration", lines.join("\n"))?;

    cliclack::confirm("Proceed with this configuration?")
        .initial_value(true)
        .interact()
        .or_cancel()
}

fn print_next_steps<C: ProductConfig>(config: &C, project_name: &str) -> Result<()> {
    let steps = config.next_steps(project_name);
    cliclack::note("Next steps", steps.join("\n"))?;
    cliclack::log::remark(format!("Docs: {}", config.docs_url()))?;
    cliclack::outro(style("Happy coding!").green())?;

    Ok(())
}
