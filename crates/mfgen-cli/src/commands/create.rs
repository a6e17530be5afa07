//! Implementation of the `mfgen create` command.
//!
//! Responsibility: translate CLI arguments into a validated configuration,
//! call the core generate service, and display results. No business logic
//! lives here.

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, instrument};

use mfgen_adapters::{LocalFilesystem, NpmInstaller, SimpleRenderer, catalog};
use mfgen_core::{
    application::{GenerateService, ports::PostGenerationHook},
    domain::{ConfigModel, RawConfig, RawMicrofrontend},
    error::GenError,
};

use crate::{
    cli::{CreateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `mfgen create` command.
///
/// Dispatch sequence:
/// 1. Verify the built-in template catalog
/// 2. Convert CLI args into a validated [`ConfigModel`] (prompting for
///    remotes only when this is not a dry run)
/// 3. Early-exit if `--dry-run`
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Generate the workspace via [`GenerateService`]
/// 6. Install dependencies unless `--skip-install`
/// 7. Print next-steps guidance
#[instrument(skip_all, fields(workspace = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Catalog consistency check. A failure here is a packaging defect,
    //    not a user error.
    catalog::verify_catalog().map_err(|message| CliError::Core(GenError::Internal { message }))?;

    // 2. Build and validate the configuration model. With no --remote flags
    //    on an interactive terminal, offer to collect remotes via prompts.
    //    A dry run never touches stdin, so it skips the prompt too.
    let mut args = args;
    if args.remotes.is_empty() && !args.yes && !args.dry_run && !global.quiet {
        args.remotes = prompt_remotes(args.port.unwrap_or(config.defaults.host_port))?;
    }
    let model = build_model(&args, &config)?;

    debug!(
        host_port = model.host_port(),
        microfrontends = model.microfrontends().len(),
        "Configuration validated"
    );

    let output_root = args.out.clone().unwrap_or_else(|| PathBuf::from("."));
    let workspace_dir = output_root.join(model.app_name());

    // 3. Dry run: describe but do not write. No confirmation needed since
    //    nothing is touched.
    if args.dry_run {
        let plan = GenerateService::plan(&model);
        output.info(&format!(
            "Dry run: would create '{}' at {} ({} files)",
            model.app_name(),
            workspace_dir.display(),
            plan.file_count(),
        ))?;
        for target in &plan.targets {
            output.print(&format!("  {}", target.path.display()))?;
        }
        return Ok(());
    }

    // 4. Show configuration and confirm.
    if !global.quiet && !args.yes {
        show_configuration(&model, &output_root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Generate.
    let service = GenerateService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    output.header(&format!("Creating '{}'...", model.app_name()))?;
    info!(workspace = %model.app_name(), path = %workspace_dir.display(), "Generation started");

    let written = service.generate(&model, &output_root)?;

    info!(files = written.len(), "Generation completed");
    output.success(&format!(
        "Workspace '{}' created ({} files)",
        model.app_name(),
        written.len()
    ))?;

    // 6. Install dependencies.
    let skip_install = args.skip_install || config.defaults.skip_install;
    if skip_install {
        output.info("Skipping npm install (--skip-install)")?;
    } else {
        install_dependencies(&model, &workspace_dir, &output)?;
    }

    // 7. Success + next steps.
    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", model.app_name()))?;
        if skip_install {
            output.print("  npm install   # in the workspace and each microfrontend")?;
        }
        output.print("  npm run start:all")?;
    }

    Ok(())
}

// ── Model construction ────────────────────────────────────────────────────────

/// Convert CLI arguments into a validated configuration model.
///
/// All validation lives in [`ConfigModel::from_raw`]; this function only
/// shapes the data and applies the configured default port.
fn build_model(args: &CreateArgs, config: &AppConfig) -> CliResult<ConfigModel> {
    let raw = RawConfig {
        app_name: args.name.clone(),
        host_port: args.port.unwrap_or(config.defaults.host_port),
        microfrontends: args
            .remotes
            .iter()
            .map(|r| RawMicrofrontend {
                name: r.name.clone(),
                port: r.port,
            })
            .collect(),
    };

    ConfigModel::from_raw(raw).map_err(|e| CliError::Core(e.into()))
}

// ── Dependency installation ───────────────────────────────────────────────────

/// Run `npm install` in the workspace root and every microfrontend.
///
/// Each unit has its own manifest, so each gets its own install run. A
/// spinner is shown per directory unless quiet mode is active.
fn install_dependencies(
    model: &ConfigModel,
    workspace_dir: &std::path::Path,
    output: &OutputManager,
) -> CliResult<()> {
    let installer = NpmInstaller::new();

    let mut dirs = vec![workspace_dir.to_path_buf()];
    for mf in model.microfrontends() {
        dirs.push(workspace_dir.join(mf.name()));
    }

    for dir in dirs {
        let spinner = if output.is_quiet() {
            None
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                pb.set_style(style);
            }
            pb.set_message(format!("Installing dependencies in {}", dir.display()));
            pb.enable_steady_tick(Duration::from_millis(80));
            Some(pb)
        };

        let result = installer.run(&dir);

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        result.map_err(|e| CliError::ExternalCommandFailed {
            command: format!("npm install (in {})", dir.display()),
            source: Some(Box::new(e)),
        })?;

        output.success(&format!("Dependencies installed in {}", dir.display()))?;
    }

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    model: &ConfigModel,
    output_root: &std::path::Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Workspace:  {}", model.app_name()))?;
    out.print(&format!("  Host port:  {}", model.host_port()))?;
    if model.microfrontends().is_empty() {
        out.print("  Remotes:    (none)")?;
    } else {
        for mf in model.microfrontends() {
            out.print(&format!("  Remote:     {} (port {})", mf.name(), mf.port()))?;
        }
    }
    out.print(&format!("  Location:   {}", output_root.display()))?;
    out.print("")?;
    Ok(())
}

/// Collect microfrontend declarations interactively.
///
/// Only active with the `interactive` feature on a real terminal; in every
/// other case the answer is "no remotes", which is a valid configuration.
#[cfg(feature = "interactive")]
fn prompt_remotes(host_port: u16) -> CliResult<Vec<crate::cli::RemoteSpec>> {
    use std::io::IsTerminal;

    use crate::cli::RemoteSpec;

    if !std::io::stdin().is_terminal() {
        return Ok(Vec::new());
    }

    let map_err = |e: dialoguer::Error| CliError::IoError {
        message: "failed to read interactive input".into(),
        source: std::io::Error::other(e),
    };

    if !dialoguer::Confirm::new()
        .with_prompt("Add microfrontends?")
        .default(true)
        .interact()
        .map_err(map_err)?
    {
        return Ok(Vec::new());
    }

    let count: usize = dialoguer::Input::new()
        .with_prompt("How many microfrontends?")
        .default(2)
        .interact_text()
        .map_err(map_err)?;

    let mut remotes = Vec::with_capacity(count);
    for i in 0..count {
        let name: String = dialoguer::Input::new()
            .with_prompt(format!("Name of microfrontend #{}", i + 1))
            .interact_text()
            .map_err(map_err)?;
        let port: u16 = dialoguer::Input::new()
            .with_prompt(format!("Port for '{name}'"))
            .default(host_port.saturating_add(1 + i as u16))
            .interact_text()
            .map_err(map_err)?;
        remotes.push(RemoteSpec { name, port });
    }

    Ok(remotes)
}

#[cfg(not(feature = "interactive"))]
fn prompt_remotes(_host_port: u16) -> CliResult<Vec<crate::cli::RemoteSpec>> {
    Ok(Vec::new())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
