use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

const GIT_SUFFIX: &str = ".git";
const WEB_SCHEMES: [&str; 2] = ["https://", "http://"];

/// An `owner/name` repository identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef(String);

impl RepositoryRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalizes one line of the repository list.
    ///
    /// A trailing `.git` is dropped; web URLs are reduced to the first two
    /// segments of their path. Anything else passes through unchanged.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let stripped = trimmed.strip_suffix(GIT_SUFFIX).unwrap_or(trimmed);

        let path = WEB_SCHEMES
            .iter()
            .find_map(|scheme| stripped.strip_prefix(scheme))
            .map(url_path);

        if let Some(path) = path {
            let mut segments = path.split('/').filter(|segment| !segment.is_empty());
            if let (Some(owner), Some(name)) = (segments.next(), segments.next()) {
                return Self(format!("{owner}/{name}"));
            }
        }

        Self(stripped.to_string())
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path component of a URL with its scheme already removed, without query or
/// fragment.
fn url_path(after_scheme: &str) -> &str {
    let path = match after_scheme.find('/') {
        Some(index) => &after_scheme[index..],
        None => "",
    };
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Parses a newline-delimited repository list, skipping blank lines. Order
/// and duplicates are preserved.
pub fn parse_repository_list(contents: &str) -> Vec<RepositoryRef> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(RepositoryRef::parse)
        .collect()
}

pub fn read_repository_list(path: &Path) -> AppResult<Vec<RepositoryRef>> {
    let contents = fs::read_to_string(path).map_err(|err| {
        AppError::RepositoryList(format!("cannot read {}: {err}", path.display()))
    })?;
    Ok(parse_repository_list(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_url_with_git_suffix() {
        let repo = RepositoryRef::parse("https://example.com/acme/widget.git");
        assert_eq!(repo.as_str(), "acme/widget");
    }

    #[test]
    fn bare_identifier_is_unchanged() {
        assert_eq!(RepositoryRef::parse("acme/widget").as_str(), "acme/widget");
        assert_eq!(RepositoryRef::parse("  acme/widget \t").as_str(), "acme/widget");
    }

    #[test]
    fn bare_identifier_loses_git_suffix() {
        assert_eq!(RepositoryRef::parse("acme/widget.git").as_str(), "acme/widget");
    }

    #[test]
    fn url_keeps_only_first_two_segments() {
        let repo = RepositoryRef::parse("https://github.com/acme/widget/tree/main/src");
        assert_eq!(repo.as_str(), "acme/widget");

        let repo = RepositoryRef::parse("http://github.com//acme/widget/?tab=readme");
        assert_eq!(repo.as_str(), "acme/widget");
    }

    #[test]
    fn short_url_passes_through() {
        let repo = RepositoryRef::parse("https://github.com/acme");
        assert_eq!(repo.as_str(), "https://github.com/acme");
    }

    #[test]
    fn list_skips_blank_lines_and_keeps_duplicates() {
        let contents = "acme/widget\n\n   \nhttps://github.com/acme/gadget.git\r\nacme/widget\n";
        let repos = parse_repository_list(contents);
        let names: Vec<&str> = repos.iter().map(RepositoryRef::as_str).collect();
        assert_eq!(names, ["acme/widget", "acme/gadget", "acme/widget"]);
    }

    #[test]
    fn missing_list_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_repository_list(&dir.path().join("repositories.txt")).unwrap_err();
        assert!(matches!(err, AppError::RepositoryList(_)));
    }
}
