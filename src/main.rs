use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use actions_kit::actions::{github_output, use_github_action};
use actions_kit::citation::{citation_bibtex, load_citation};
use actions_kit::config::{load_config, Config};
use actions_kit::docs::resolve_docs_version;
use actions_kit::error::ActionsKitError;
use actions_kit::git::Git2Repository;
use actions_kit::release::{prepare_draft_release, set_release_version, DraftRelease};
use actions_kit::releases::GhReleases;
use actions_kit::tools::{load_tool_commands, render_version_table};
use actions_kit::ui;
use actions_kit::version::{check_version_increments_by_one, IncrementCheck};

#[derive(clap::Parser)]
#[command(
    name = "actions-kit",
    about = "Command-line helpers for GitHub Actions release workflows"
)]
struct Args {
    #[arg(long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,

    #[arg(short, long, help = "Print the citation in BibTeX format and exit")]
    citation: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Download an example workflow file from the template repository
    UseExample {
        /// Template name without the .yml extension
        name: String,

        #[arg(long = "ref", help = "Git ref to download from (defaults to the latest release)")]
        git_ref: Option<String>,

        #[arg(long, help = "Repository slug (OWNER/REPO) hosting the templates")]
        repo: Option<String>,

        #[arg(long, help = "Path to save the downloaded file")]
        save_as: Option<PathBuf>,
    },

    /// Resolve the documentation version and alias for deployment
    DocsVersion {
        #[arg(long, help = "Repository slug to query instead of the current repository")]
        repo: Option<String>,
    },

    /// Decide the next release version and emit it as step outputs
    ReleaseVersion {
        #[arg(long, help = "Currently released version tag")]
        current: String,

        #[arg(long, help = "Manually requested next version tag")]
        next_manual: Option<String>,

        #[arg(long, help = "Next version derived from commit history")]
        next_convco: Option<String>,

        #[arg(long, default_value = "push", help = "GitHub event that triggered the run")]
        event_name: String,
    },

    /// Check that a version is exactly one increment ahead of the current one
    CheckVersion {
        #[arg(long, help = "Current version")]
        current: String,

        #[arg(long, help = "Proposed next version")]
        next: String,

        #[arg(long, help = "Versions carry no leading 'v'")]
        no_leading_v: bool,

        #[arg(long, help = "Print the verdict instead of failing on an invalid increment")]
        lenient: bool,

        #[arg(long, help = "Print per-field comparison results")]
        debug: bool,
    },

    /// Prepare a draft release from the changelog
    DraftRelease {
        #[arg(long, help = "Currently released version tag")]
        current: String,

        #[arg(long, help = "Manually requested next version tag")]
        next_manual: Option<String>,

        #[arg(long, help = "Next version derived from commit history")]
        next_convco: Option<String>,

        #[arg(long, default_value = "push", help = "GitHub event that triggered the run")]
        event_name: String,

        #[arg(long, help = "Ref to merge into the draft branch")]
        pr_ref: String,

        #[arg(long, help = "Repository name used in the release title")]
        repo_name: String,

        #[arg(long, help = "Print mutating commands instead of running them")]
        dry_run: bool,
    },

    /// Print a Markdown table of tool versions
    PrintVersions {
        #[arg(long, help = "JSON file mapping tool names to version commands")]
        json: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("actions-kit {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if args.citation {
        if let Err(e) = print_citation(&config) {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
        return Ok(());
    }

    let Some(command) = args.command else {
        let mut help = Args::command();
        help.print_help()?;
        return Ok(());
    };

    if let Err(e) = run_command(command, &config) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
    Ok(())
}

fn print_citation(config: &Config) -> actions_kit::Result<()> {
    let citation = load_citation(&config.paths.citation)?;
    println!("{}", citation_bibtex(&citation)?);
    Ok(())
}

fn run_command(command: Command, config: &Config) -> actions_kit::Result<()> {
    match command {
        Command::UseExample {
            name,
            git_ref,
            repo,
            save_as,
        } => {
            let repo = repo
                .or_else(|| config.templates.repo.clone())
                .ok_or_else(|| {
                    ActionsKitError::config(
                        "No template repository configured; set templates.repo in actionskit.toml or pass --repo",
                    )
                })?;
            let releases = GhReleases::new(Some(repo.clone()));
            let saved = use_github_action(
                &name,
                git_ref.as_deref(),
                save_as.as_deref(),
                &repo,
                &releases,
            )?;
            ui::display_success(&format!("Saved {}", saved.display()));
            Ok(())
        }

        Command::DocsVersion { repo } => {
            let git_repo = Git2Repository::open(".")?;
            let releases = GhReleases::new(repo);
            let docs = resolve_docs_version(&git_repo, &releases)?;

            let mut out = github_output()?;
            out.set("VERSION", &docs.version)?;
            out.set("ALIAS", &docs.alias)?;
            Ok(())
        }

        Command::ReleaseVersion {
            current,
            next_manual,
            next_convco,
            event_name,
        } => {
            let mut out = github_output()?;
            set_release_version(
                next_manual.as_deref(),
                next_convco.as_deref(),
                &current,
                &event_name,
                &mut out,
            )?;
            Ok(())
        }

        Command::CheckVersion {
            current,
            next,
            no_leading_v,
            lenient,
            debug,
        } => {
            let is_valid = check_version_increments_by_one(
                &current,
                &next,
                IncrementCheck {
                    with_leading_v: !no_leading_v,
                    error_on_false: !lenient,
                    debug,
                },
            )?;
            println!("{}", is_valid);
            Ok(())
        }

        Command::DraftRelease {
            current,
            next_manual,
            next_convco,
            event_name,
            pr_ref,
            repo_name,
            dry_run,
        } => {
            let git_repo = Git2Repository::open(".")?;
            let releases = GhReleases::new(None);
            let mut out = github_output()?;
            let params = DraftRelease {
                next_version_manual: next_manual.as_deref(),
                next_version_convco: next_convco.as_deref(),
                current_version: &current,
                gh_event_name: &event_name,
                pr_ref_name: &pr_ref,
                repo_name: &repo_name,
                dry_run,
            };
            prepare_draft_release(&params, config, &git_repo, &releases, &mut out)
        }

        Command::PrintVersions { json } => {
            let commands = load_tool_commands(json)?;
            println!("{}", render_version_table(&commands));
            Ok(())
        }
    }
}
