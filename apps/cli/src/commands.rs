use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::CommandFactory;
use serde_json::json;

use raidexplorer_core::addons::{HttpPluginSource, PluginUpdater};
use raidexplorer_core::credentials::{CredentialServiceTrait, NewCredential};
use raidexplorer_core::links::REFERENCE_LINKS;
use raidexplorer_core::load_cycle::{LoadOrchestrator, LoadRequest};
use raidexplorer_core::sections::{SectionKind, SectionToggles};
use raidexplorer_core::updates::check_for_update;

use crate::cli::{
    Args, Commands, KeysCommand, OutputFormat, PluginsCommand, TogglesCommand,
};
use crate::main_lib::AppState;
use crate::render::{format_scopes, ConsoleReporter};

pub async fn execute(command: Commands, state: &AppState) -> Result<()> {
    match command {
        Commands::Keys { action } => keys(action, state),
        Commands::Permissions { key, output } => permissions(key.as_deref(), output, state).await,
        Commands::Load {
            key,
            only,
            skip,
            output,
        } => load(key.as_deref(), &only, &skip, output, state).await,
        Commands::Toggles { action } => toggles(action, state),
        Commands::Plugins { action } => plugins(action, state).await,
        Commands::VersionCheck { output } => version_check(output, state).await,
        Commands::Links { output } => links(output),
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut io::stdout());
            Ok(())
        }
    }
}

fn keys(action: KeysCommand, state: &AppState) -> Result<()> {
    match action {
        KeysCommand::List => {
            let names = state.credentials.list_names()?;
            if names.is_empty() {
                println!("No API keys stored.");
            }
            for name in names {
                println!("{}", name);
            }
        }
        KeysCommand::Add { name, secret } => {
            let credential = state
                .credentials
                .add_credential(NewCredential::new(name, secret))?;
            println!("Saved API key '{}'.", credential.name);
        }
        KeysCommand::Remove { name, yes } => {
            if !yes {
                bail!("Refusing to remove '{}' without --yes", name);
            }
            state.credentials.remove_credential(&name)?;
            println!("Removed API key '{}'.", name);
        }
    }
    Ok(())
}

async fn permissions(key: Option<&str>, output: OutputFormat, state: &AppState) -> Result<()> {
    let credential = state.credentials.select_credential(key)?;
    let reporter = Arc::new(ConsoleReporter::new(output, io::stdout()));
    let orchestrator = LoadOrchestrator::new(state.account_api()?, reporter);

    let grants = orchestrator.resolve_permissions(&credential.secret).await?;
    let statuses = grants.statuses();
    match output {
        OutputFormat::Text => {
            println!("Permissions of '{}':", credential.name);
            println!("{}", format_scopes(&statuses));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                json!({ "event": "permissions", "key": credential.name, "scopes": statuses })
            );
        }
    }
    Ok(())
}

/// Toggles for one run: stored toggles narrowed by `--only` or `--skip`.
fn effective_toggles(
    stored: SectionToggles,
    only: &[SectionKind],
    skip: &[SectionKind],
) -> SectionToggles {
    let base = if only.is_empty() {
        stored
    } else {
        SectionToggles::only(only)
    };
    base.without(skip)
}

async fn load(
    key: Option<&str>,
    only: &[SectionKind],
    skip: &[SectionKind],
    output: OutputFormat,
    state: &AppState,
) -> Result<()> {
    let credential = state.credentials.select_credential(key)?;
    let settings = state.settings.load()?;
    let toggles = effective_toggles(settings.toggles, only, skip);
    tracing::debug!("Loading '{}' with {:?}", credential.name, toggles);

    let reporter = Arc::new(ConsoleReporter::new(output, io::stdout()));
    let orchestrator = LoadOrchestrator::new(state.account_api()?, reporter);
    let report = orchestrator
        .run(LoadRequest::new(credential.secret, toggles))
        .await?;

    if report.is_success() {
        Ok(())
    } else {
        // Already reported through the status line.
        std::process::exit(1);
    }
}

fn toggles(action: TogglesCommand, state: &AppState) -> Result<()> {
    let settings = match action {
        TogglesCommand::Show => state.settings.load()?,
        TogglesCommand::Set { section, state: switch } => state
            .settings
            .update(|settings| settings.toggles.set(section, switch.enabled()))?,
    };
    for kind in SectionKind::ALL {
        let label = if settings.toggles.is_enabled(kind) {
            "on"
        } else {
            "off"
        };
        println!("{:<14} {}", kind.key(), label);
    }
    Ok(())
}

async fn plugins(action: PluginsCommand, state: &AppState) -> Result<()> {
    match action {
        PluginsCommand::SetFolder { path } => {
            let folder = path.trim().to_string();
            state
                .settings
                .update(|settings| settings.install_folder = Some(folder.clone()))?;
            println!("Installation folder set to {}", folder);
        }
        PluginsCommand::Update { plugin } => {
            let settings = state.settings.load()?;
            let updater = PluginUpdater::new(Arc::new(HttpPluginSource::new()?));
            println!("Checking {}...", plugin);
            let outcome = updater
                .update(plugin, settings.install_folder.as_deref())
                .await?;
            println!("{}", outcome.message(plugin));
        }
    }
    Ok(())
}

async fn version_check(output: OutputFormat, state: &AppState) -> Result<()> {
    let status = check_for_update(&state.config.version_url, env!("CARGO_PKG_VERSION")).await?;
    match output {
        OutputFormat::Text => println!("{}", status.message()),
        OutputFormat::Json => println!("{}", serde_json::to_string(&status)?),
    }
    Ok(())
}

fn links(output: OutputFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match output {
        OutputFormat::Text => {
            for link in REFERENCE_LINKS {
                writeln!(stdout, "{:<20} {:<50} {}", link.name, link.url, link.description)?;
            }
        }
        OutputFormat::Json => {
            writeln!(stdout, "{}", serde_json::to_string_pretty(REFERENCE_LINKS)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_toggles_apply_without_flags() {
        let stored = SectionToggles::default().without(&[SectionKind::Skins]);
        assert_eq!(effective_toggles(stored, &[], &[]), stored);
    }

    #[test]
    fn only_replaces_stored_toggles() {
        let stored = SectionToggles::all(false);
        let toggles = effective_toggles(stored, &[SectionKind::Currency], &[]);
        assert!(toggles.is_enabled(SectionKind::Currency));
        assert!(!toggles.is_enabled(SectionKind::Bosses));
    }

    #[test]
    fn skip_narrows_stored_toggles() {
        let toggles = effective_toggles(
            SectionToggles::default(),
            &[],
            &[SectionKind::Minis, SectionKind::Achievements],
        );
        assert!(!toggles.is_enabled(SectionKind::Minis));
        assert!(!toggles.is_enabled(SectionKind::Achievements));
        assert!(toggles.is_enabled(SectionKind::Bosses));
    }
}
