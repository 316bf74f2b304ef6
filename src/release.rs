//! Release drafting: decide the next version, rewrite the release files,
//! refresh the draft branch, and open a draft release.

use std::fs;
use std::io::Write;

use crate::changelog::split_changelog;
use crate::citation::{date_today, update_citation};
use crate::config::Config;
use crate::error::{ActionsKitError, Result};
use crate::git::Repository;
use crate::process;
use crate::releases::ReleaseSource;
use crate::ui;
use crate::version::{check_version_increments_by_one, IncrementCheck};
use crate::warning::Warning;
use crate::actions::OutputWriter;

/// Inputs for a release-draft run, as provided by the workflow.
#[derive(Debug, Clone)]
pub struct DraftRelease<'a> {
    /// Version tag supplied by a manual workflow dispatch, if any
    pub next_version_manual: Option<&'a str>,
    /// Version derived from conventional commit history, if any
    pub next_version_convco: Option<&'a str>,
    /// Currently released version tag
    pub current_version: &'a str,
    /// GitHub event that triggered the run (e.g. "workflow_dispatch")
    pub gh_event_name: &'a str,
    /// Ref being released, merged into the draft branch
    pub pr_ref_name: &'a str,
    /// Repository name, used in the release title
    pub repo_name: &'a str,
    /// Print mutating commands instead of running them
    pub dry_run: bool,
}

/// Decide the next release version.
///
/// A manually supplied version wins on `workflow_dispatch` events (with a
/// warning when it disagrees with the version derived from commit history);
/// otherwise the commit-history version is used. Whichever wins must be
/// exactly one increment ahead of `current_version`, leading 'v' required.
pub fn get_release_version(
    next_version_manual: Option<&str>,
    next_version_convco: Option<&str>,
    current_version: &str,
    gh_event_name: &str,
) -> Result<String> {
    let manual = next_version_manual.filter(|v| !v.is_empty());
    let convco = next_version_convco.filter(|v| !v.is_empty());

    let next_version = match manual {
        Some(manual) if gh_event_name == "workflow_dispatch" => {
            if let Some(convco) = convco {
                if manual != convco {
                    ui::display_warning(&Warning::ManualVersionMismatch {
                        manual: manual.to_string(),
                        convco: convco.to_string(),
                    });
                }
            }
            manual.to_string()
        }
        _ => convco
            .ok_or_else(|| {
                ActionsKitError::validation(
                    "No next version available: neither manual input nor commit history provided one",
                )
            })?
            .to_string(),
    };

    check_version_increments_by_one(
        current_version,
        &next_version,
        IncrementCheck {
            with_leading_v: true,
            ..Default::default()
        },
    )?;
    Ok(next_version)
}

/// Decide the next release version and emit it as step outputs
/// (`NEXT_VERSION` with the leading 'v', `NEXT_STRICT` without).
pub fn set_release_version<W: Write>(
    next_version_manual: Option<&str>,
    next_version_convco: Option<&str>,
    current_version: &str,
    gh_event_name: &str,
    out: &mut OutputWriter<W>,
) -> Result<String> {
    let next_version = get_release_version(
        next_version_manual,
        next_version_convco,
        current_version,
        gh_event_name,
    )?;
    out.set("NEXT_VERSION", &next_version)?;
    out.set("NEXT_STRICT", next_version.trim_start_matches('v'))?;
    Ok(next_version)
}

/// One external command in a release plan.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandStep {
    /// Must exit successfully
    Strict(Vec<String>),
    /// Failure is tolerated; the note is shown instead
    Lenient(Vec<String>, String),
    /// Run the first command; on failure run the second, which must succeed
    Fallback(Vec<String>, Vec<String>),
}

/// Commands that refresh the release-draft branch: drop any stale remote
/// branch, recreate it from the PR ref, and push the release files.
pub fn draft_branch_steps(
    draft_branch: &str,
    pr_ref_name: &str,
    next_version: &str,
    files: &[String],
) -> Vec<CommandStep> {
    let mut add = argv(&["git", "add"]);
    add.extend(files.iter().cloned());

    vec![
        CommandStep::Lenient(
            argv(&["git", "push", "origin", "--delete", draft_branch]),
            format!("No {} branch to delete", draft_branch),
        ),
        CommandStep::Fallback(
            argv(&["git", "switch", "-c", draft_branch]),
            argv(&["git", "switch", draft_branch]),
        ),
        CommandStep::Strict(argv(&["git", "merge", "--ff-only", pr_ref_name])),
        CommandStep::Strict(add),
        CommandStep::Strict(argv(&[
            "git",
            "commit",
            "-m",
            &format!("chore: prepare release {}", next_version),
        ])),
        CommandStep::Strict(argv(&[
            "git",
            "push",
            "--set-upstream",
            "origin",
            draft_branch,
        ])),
    ]
}

/// The `gh release create` invocation for a draft release.
pub fn release_draft_command(
    next_version: &str,
    release_notes_filepath: &str,
    release_target: &str,
    repo_name: &str,
) -> Vec<String> {
    argv(&[
        "gh",
        "release",
        "create",
        next_version,
        "--draft",
        "--notes-file",
        release_notes_filepath,
        "--target",
        release_target,
        "--title",
        &format!("{} {}", repo_name, next_version.trim_start_matches('v')),
    ])
}

/// Execute a sequence of command steps, or print them in dry-run mode.
pub fn run_steps(steps: &[CommandStep], dry_run: bool) -> Result<()> {
    for step in steps {
        match step {
            CommandStep::Strict(command) => {
                if dry_run {
                    display_step(command);
                } else {
                    process::run_ok(&command[0], &arg_refs(command))?;
                }
            }
            CommandStep::Lenient(command, note) => {
                if dry_run {
                    display_step(command);
                } else {
                    let output = process::run(&command[0], &arg_refs(command))?;
                    if !output.success() {
                        ui::display_status(note);
                    }
                }
            }
            CommandStep::Fallback(command, fallback) => {
                if dry_run {
                    display_step(command);
                    display_step(fallback);
                } else {
                    let output = process::run(&command[0], &arg_refs(command))?;
                    if !output.success() {
                        process::run_ok(&fallback[0], &arg_refs(fallback))?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Prepare a draft release.
///
/// Resolves the next version, splits the changelog into the updated full
/// text and the release notes, rewrites the VERSION and citation files, runs
/// pre-commit over the changed files, refreshes the draft branch, and
/// creates the draft release targeting the current HEAD.
///
/// File rewrites happen even in dry-run mode; only the git, pre-commit, and
/// gh invocations are replaced by printed commands.
pub fn prepare_draft_release<W: Write>(
    params: &DraftRelease<'_>,
    config: &Config,
    repo: &impl Repository,
    releases: &impl ReleaseSource,
    out: &mut OutputWriter<W>,
) -> Result<()> {
    let next_version = get_release_version(
        params.next_version_manual,
        params.next_version_convco,
        params.current_version,
        params.gh_event_name,
    )?;
    let next_strict = next_version.trim_start_matches('v').to_string();
    out.set("NEXT_VERSION", &next_version)?;

    let latest_tag = releases.latest_tag()?.ok_or_else(|| {
        ActionsKitError::validation("No published release found to diff the changelog against")
    })?;
    let latest_strict = latest_tag.trim_start_matches('v').to_string();

    let changelog_content = fs::read_to_string(&config.paths.changelog)?;
    let split = split_changelog(
        &changelog_content,
        &latest_strict,
        &next_strict,
        &config.release.dev_header,
    )?;

    fs::write(&config.paths.release_notes, &split.release_notes)?;
    fs::write(&config.paths.changelog, &split.changelog)?;
    fs::write(&config.paths.version_file, format!("{}\n", next_strict))?;
    update_citation(
        &config.paths.citation,
        &next_version,
        &date_today(),
        params.dry_run,
    )?;

    let changed_files = vec![
        config.paths.citation.clone(),
        config.paths.changelog.clone(),
        config.paths.version_file.clone(),
    ];
    run_precommit(&changed_files, params.dry_run);

    let steps = draft_branch_steps(
        &config.release.draft_branch,
        params.pr_ref_name,
        &next_version,
        &changed_files,
    );
    run_steps(&steps, params.dry_run)?;

    let release_target = repo.head_hash()?;
    let create = release_draft_command(
        &next_version,
        &config.paths.release_notes,
        &release_target,
        params.repo_name,
    );
    if params.dry_run {
        display_step(&create);
    } else {
        process::run_ok(&create[0], &arg_refs(&create))?;
        ui::display_success(&format!("Drafted release {}", next_version));
    }

    Ok(())
}

/// Run pre-commit over the changed files. The hook output is informational:
/// pre-commit exits non-zero when it rewrites files, and may not be
/// installed at all, so neither case fails the release.
fn run_precommit(files: &[String], dry_run: bool) {
    let mut command = argv(&["pre-commit", "run", "--files"]);
    command.extend(files.iter().cloned());

    if dry_run {
        display_step(&command);
        return;
    }

    match process::run(&command[0], &arg_refs(&command)) {
        Ok(output) if !output.success() => {
            ui::display_status("pre-commit reported changes");
        }
        Ok(_) => {}
        Err(_) => ui::display_status("pre-commit not available, skipping"),
    }
}

fn display_step(command: &[String]) {
    let refs = arg_refs(command);
    ui::display_dry_run(&process::render_command(&command[0], &refs));
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// Arguments of a stored command, excluding the program itself.
fn arg_refs(command: &[String]) -> Vec<&str> {
    command[1..].iter().map(String::as_str).collect()
}
