//! YAML/JSON run file and email list loading

use std::path::Path;

use groupsync_directory::GraphCloud;
use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// Run file contents. Every field is optional; flags fill the gaps.
///
/// ```yaml
/// group: Engineering
/// emails:
///   - user1@example.com
///   - user2@example.com
/// graph:
///   cloud: us-government
///   timeout_secs: 30
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunFile {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub graph: GraphSection,
}

/// Graph connection settings in a run file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSection {
    #[serde(default)]
    pub cloud: Option<GraphCloud>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl RunFile {
    /// Load a run file from disk
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Io(format!("Failed to read run file {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Parse run file text (YAML, which also accepts JSON)
    pub fn parse(content: &str) -> CliResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Read an email list: one address per line, blank lines and `#` comments skipped
pub fn load_email_list(path: &Path) -> CliResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CliError::Io(format!("Failed to read email list {}: {}", path.display(), e))
    })?;
    Ok(parse_email_list(&content))
}

pub fn parse_email_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_run_file() {
        let yaml = r#"
group: Engineering
emails:
  - a@example.com
  - b@example.com
graph:
  cloud: china
  api_version: beta
"#;
        let file = RunFile::parse(yaml).unwrap();
        assert_eq!(file.group.as_deref(), Some("Engineering"));
        assert_eq!(file.emails.len(), 2);
        assert_eq!(file.graph.cloud, Some(GraphCloud::China));
        assert_eq!(file.graph.api_version.as_deref(), Some("beta"));
        assert!(file.graph.url.is_none());
    }

    #[test]
    fn test_parse_json_run_file() {
        let json = r#"{"group": "Sales", "emails": ["s@example.com"], "graph": {"timeout_secs": 10}}"#;
        let file = RunFile::parse(json).unwrap();
        assert_eq!(file.group.as_deref(), Some("Sales"));
        assert_eq!(file.graph.timeout_secs, Some(10));
    }

    #[test]
    fn test_empty_run_file_is_default() {
        let file = RunFile::parse("  \n").unwrap();
        assert!(file.group.is_none());
        assert!(file.emails.is_empty());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = RunFile::parse("grup: Typo\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_parse_email_list_skips_comments_and_blanks() {
        let list = parse_email_list(
            "# team leads\na@example.com\n\n  b@example.com  # on leave\n#c@example.com\n",
        );
        assert_eq!(list, vec!["a@example.com", "b@example.com"]);
    }
}
