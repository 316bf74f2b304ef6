//! GitHub Actions integration: workflow-template downloads and the
//! step-output channel.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ActionsKitError, Result};
use crate::releases::ReleaseSource;

/// URL of a workflow template file inside a repository's `examples/`
/// directory at a given git ref.
pub fn template_url(repo: &str, git_ref: &str, filename: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/{}/{}/examples/{}",
        repo, git_ref, filename
    )
}

/// Default location for a downloaded workflow file.
pub fn default_save_path(filename: &str) -> PathBuf {
    Path::new(".github").join("workflows").join(filename)
}

/// Download an example GitHub Actions workflow file.
///
/// The git ref defaults to the template repository's latest release tag, or
/// `main` when nothing has been released. The file is saved under
/// `.github/workflows/` unless `save_as` overrides it.
///
/// # Arguments
/// * `name` - Template name without the `.yml` extension
/// * `git_ref` - Branch, tag, or commit SHA to download from
/// * `save_as` - Target path override
/// * `repo` - Repository slug (OWNER/REPO) hosting the templates
/// * `releases` - Release listing for the template repository
///
/// # Returns
/// The path the file was written to.
pub fn use_github_action(
    name: &str,
    git_ref: Option<&str>,
    save_as: Option<&Path>,
    repo: &str,
    releases: &impl ReleaseSource,
) -> Result<PathBuf> {
    let filename = format!("{}.yml", name);

    let git_ref = match git_ref {
        Some(r) => r.to_string(),
        None => releases
            .latest_tag()?
            .unwrap_or_else(|| "main".to_string()),
    };

    let url = template_url(repo, &git_ref, &filename);
    let save_as = save_as
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_save_path(&filename));

    let body = download_text(&url).map_err(|_| {
        ActionsKitError::http(format!(
            "Failed to download {}. Are you sure {} is a valid workflow template in {}?",
            url, name, repo
        ))
    })?;

    if let Some(parent) = save_as.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&save_as, body)?;

    Ok(save_as)
}

fn download_text(url: &str) -> Result<String> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| ActionsKitError::http(e.to_string()))?;
    response
        .into_string()
        .map_err(|e| ActionsKitError::http(e.to_string()))
}

/// Writer for GitHub Actions step outputs.
///
/// Emits `name=value` lines (or heredoc blocks for multiline values) in the
/// `GITHUB_OUTPUT` file format, or the legacy `::set-output` workflow-command
/// syntax when no output file is available. The sink is an explicit
/// parameter, so the logic is independent of the process environment.
pub struct OutputWriter<W: Write> {
    sink: W,
    legacy: bool,
}

impl<W: Write> OutputWriter<W> {
    /// Writer in the `GITHUB_OUTPUT` file format.
    pub fn new(sink: W) -> Self {
        OutputWriter {
            sink,
            legacy: false,
        }
    }

    /// Writer in the legacy `::set-output` syntax.
    pub fn legacy(sink: W) -> Self {
        OutputWriter { sink, legacy: true }
    }

    /// Set one output variable.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        if self.legacy {
            writeln!(self.sink, "::set-output name={}::{}", name, value)?;
        } else if value.contains('\n') {
            let mut delimiter = "EOF".to_string();
            while value.contains(&delimiter) {
                delimiter.push('_');
            }
            writeln!(self.sink, "{}<<{}", name, delimiter)?;
            writeln!(self.sink, "{}", value)?;
            writeln!(self.sink, "{}", delimiter)?;
        } else {
            writeln!(self.sink, "{}={}", name, value)?;
        }
        Ok(())
    }
}

/// Build an output writer from the process environment: the file named by
/// `GITHUB_OUTPUT` when set, stdout in legacy syntax otherwise.
pub fn github_output() -> Result<OutputWriter<Box<dyn Write>>> {
    match env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => {
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Ok(OutputWriter::new(Box::new(file)))
        }
        _ => Ok(OutputWriter::legacy(Box::new(std::io::stdout()))),
    }
}
