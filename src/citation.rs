//! Citation File Format (CFF) metadata handling.
//!
//! CITATION.cff files are YAML mappings; key order is part of the file's
//! texture, so updates round-trip through [serde_yaml::Mapping] to preserve
//! it. The BibTeX rendering covers the fields release tooling cares about.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde_yaml::{Mapping, Value};

use crate::error::{ActionsKitError, Result};

const BIBTEX_MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Today's date in the `YYYY-MM-DD` format used by `date-released`.
pub fn date_today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Load a CITATION.cff file as a YAML mapping.
pub fn load_citation<P: AsRef<Path>>(citation_file: P) -> Result<Mapping> {
    let content = fs::read_to_string(citation_file)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Update the version and release date in a citation file.
///
/// Rewrites the `version` and `date-released` fields in place and writes the
/// updated YAML back to the file. With `dry_run`, the updated content is
/// printed instead of written.
///
/// # Arguments
/// * `citation_file` - Path to the CITATION.cff file
/// * `version` - Version string to record
/// * `date` - Release date (`YYYY-MM-DD`)
/// * `dry_run` - Print instead of writing
pub fn update_citation<P: AsRef<Path>>(
    citation_file: P,
    version: &str,
    date: &str,
    dry_run: bool,
) -> Result<()> {
    let mut citation = load_citation(&citation_file)?;
    citation.insert(
        Value::String("version".to_string()),
        Value::String(version.to_string()),
    );
    citation.insert(
        Value::String("date-released".to_string()),
        Value::String(date.to_string()),
    );

    let citation_yaml = serde_yaml::to_string(&citation)?;
    if dry_run {
        println!("{}", citation_yaml);
    } else {
        fs::write(citation_file, citation_yaml)?;
    }
    Ok(())
}

/// Render a citation mapping as a BibTeX `@software` entry.
///
/// # Errors
/// * [crate::error::ActionsKitError::Format] - The mapping has no `title` field
pub fn citation_bibtex(citation: &Mapping) -> Result<String> {
    let title = str_field(citation, "title").ok_or_else(|| {
        ActionsKitError::format("Citation file has no 'title' field".to_string())
    })?;

    let mut fields: Vec<(&str, String)> = Vec::new();

    if let Some(authors) = bibtex_authors(citation) {
        fields.push(("author", authors));
    }
    if let Some(doi) = str_field(citation, "doi") {
        fields.push(("doi", doi.to_string()));
    }

    let date = str_field(citation, "date-released")
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
    if let Some(date) = date {
        fields.push(("month", BIBTEX_MONTHS[date.month0() as usize].to_string()));
    }

    fields.push(("title", format!("{{{}}}", title)));

    if let Some(url) = str_field(citation, "url").or_else(|| str_field(citation, "repository-code"))
    {
        fields.push(("url", url.to_string()));
    }
    if let Some(version) = str_field(citation, "version") {
        fields.push(("version", version.to_string()));
    }
    if let Some(date) = date {
        fields.push(("year", date.year().to_string()));
    }

    fields.sort_by_key(|(name, _)| *name);

    let key = citation_key(citation, date.map(|d| d.year()));
    let body: Vec<String> = fields
        .iter()
        .map(|(name, value)| format!("{} = {{{}}}", name, value))
        .collect();
    Ok(format!("@software{{{},\n{}\n}}", key, body.join(",\n")))
}

fn citation_key(citation: &Mapping, year: Option<i32>) -> String {
    let family = first_author(citation)
        .and_then(|author| str_field(author, "family-names"))
        .unwrap_or("software")
        .replace(' ', "_");
    match year {
        Some(year) => format!("{}_{}", family, year),
        None => family,
    }
}

fn bibtex_authors(citation: &Mapping) -> Option<String> {
    let authors = citation.get("authors")?.as_sequence()?;
    let names: Vec<String> = authors
        .iter()
        .filter_map(|author| {
            let author = author.as_mapping()?;
            let family = str_field(author, "family-names")?;
            match str_field(author, "given-names") {
                Some(given) => Some(format!("{}, {}", family, given)),
                None => Some(family.to_string()),
            }
        })
        .collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(" and "))
    }
}

fn first_author(citation: &Mapping) -> Option<&Mapping> {
    citation.get("authors")?.as_sequence()?.first()?.as_mapping()
}

fn str_field<'a>(mapping: &'a Mapping, name: &str) -> Option<&'a str> {
    mapping.get(name)?.as_str()
}
