//! Markdown table of installed tool versions.
//!
//! Input is a JSON object mapping tool names to the command line that prints
//! each tool's version. Tools that are not installed are reported as
//! `NOTINDOCKER`; tools whose version command prints nothing usable are
//! reported as `VERSIONUNKNOWN`.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::process;

const NOT_INSTALLED: &str = "NOTINDOCKER";
const UNKNOWN_VERSION: &str = "VERSIONUNKNOWN";

/// Load the tool → version-command mapping from a JSON file.
pub fn load_tool_commands<P: AsRef<Path>>(path: P) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)?;
    let commands: serde_json::Map<String, Value> = serde_json::from_str(&content)?;
    Ok(commands
        .into_iter()
        .map(|(tool, command)| {
            let command = command.as_str().unwrap_or_default().to_string();
            (tool, command)
        })
        .collect())
}

/// Run a version command and normalize its output.
pub fn tool_version(version_command: &str) -> String {
    let mut parts = version_command.split_whitespace();
    let Some(program) = parts.next() else {
        return NOT_INSTALLED.to_string();
    };
    let args: Vec<&str> = parts.collect();

    match process::run(program, &args) {
        Ok(output) if output.success() => {
            let raw = if output.stdout.trim().is_empty() {
                output.stderr
            } else {
                output.stdout
            };
            clean_version_output(&raw)
        }
        _ => NOT_INSTALLED.to_string(),
    }
}

/// Strip quoting and parentheses from raw version output.
fn clean_version_output(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '(' | ')'))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        UNKNOWN_VERSION.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Render the Markdown version table, running each tool's version command.
pub fn render_version_table(commands: &[(String, String)]) -> String {
    let mut lines = vec![
        String::new(),
        "| Tool | Version |".to_string(),
        "|---------|---------|".to_string(),
    ];
    for (tool, version_command) in commands {
        lines.push(format!("| {} | {} |", tool, tool_version(version_command)));
    }
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_tool_commands() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"echo": "echo 1.2.3", "missing": "nope --version"}"#)
            .unwrap();
        file.flush().unwrap();

        let commands = load_tool_commands(file.path()).unwrap();
        assert_eq!(commands.len(), 2);
        assert!(commands.contains(&("echo".to_string(), "echo 1.2.3".to_string())));
    }

    #[test]
    fn test_load_tool_commands_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        file.flush().unwrap();

        assert!(load_tool_commands(file.path()).is_err());
    }

    #[test]
    fn test_tool_version_from_stdout() {
        assert_eq!(tool_version("echo 1.2.3"), "1.2.3");
    }

    #[test]
    fn test_tool_version_strips_quotes_and_parens() {
        assert_eq!(tool_version("echo '1.2.3' (stable)"), "1.2.3 stable");
    }

    #[test]
    fn test_tool_version_missing_binary() {
        assert_eq!(
            tool_version("definitely-not-a-real-binary-xyz --version"),
            NOT_INSTALLED
        );
    }

    #[test]
    fn test_tool_version_failing_command() {
        assert_eq!(tool_version("false"), NOT_INSTALLED);
    }

    #[test]
    fn test_tool_version_empty_output() {
        assert_eq!(tool_version("true"), UNKNOWN_VERSION);
    }

    #[test]
    fn test_tool_version_empty_command() {
        assert_eq!(tool_version("   "), NOT_INSTALLED);
    }

    #[test]
    fn test_render_version_table() {
        let commands = vec![("echo".to_string(), "echo 1.2.3".to_string())];
        let table = render_version_table(&commands);

        assert!(table.starts_with("\n| Tool | Version |\n"));
        assert!(table.contains("|---------|---------|"));
        assert!(table.contains("| echo | 1.2.3 |"));
        assert!(table.ends_with("\n"));
    }
}
