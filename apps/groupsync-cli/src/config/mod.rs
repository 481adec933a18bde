//! Run configuration: flags, environment and run file merged into one value

mod run_file;

pub use run_file::{load_email_list, parse_email_list, GraphSection, RunFile};

use std::time::Duration;

use groupsync_directory::{DirectoryConfig, ReportFormat};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// Everything one run needs, fully validated
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub group: String,
    pub emails: Vec<String>,
    pub directory: DirectoryConfig,
    pub report_format: ReportFormat,
}

impl RunSettings {
    /// Resolve settings from parsed arguments, loading any referenced files.
    ///
    /// Flags win over the run file. Emails are the run file list, then the
    /// emails file, then `--email` flags, in that order.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let file = match &cli.config {
            Some(path) => RunFile::load(path)?,
            None => RunFile::default(),
        };

        let mut emails = file.emails;
        if let Some(path) = &cli.emails_file {
            emails.extend(load_email_list(path)?);
        }
        emails.extend(cli.emails.iter().cloned());

        let group = cli
            .group
            .clone()
            .or(file.group)
            .filter(|g| !g.trim().is_empty())
            .ok_or_else(|| {
                CliError::Validation("a group name is required (--group or run file)".into())
            })?;

        if emails.is_empty() {
            return Err(CliError::Validation(
                "no email addresses given (--email, --emails-file or run file)".into(),
            ));
        }

        let directory = directory_config(cli, &file.graph)?;

        Ok(Self {
            group,
            emails,
            directory,
            report_format: if cli.json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            },
        })
    }
}

fn directory_config(cli: &Cli, graph: &GraphSection) -> CliResult<DirectoryConfig> {
    let mut builder = DirectoryConfig::builder();

    if let Some(cloud) = cli.cloud.map(Into::into).or(graph.cloud) {
        builder = builder.cloud(cloud);
    }
    if let Some(url) = cli.graph_url.as_ref().or(graph.url.as_ref()) {
        builder = builder.graph_url(url.clone());
    }
    if let Some(version) = cli.api_version.as_ref().or(graph.api_version.as_ref()) {
        builder = builder.api_version(version.clone());
    }
    if let Some(secs) = cli.timeout_secs.or(graph.timeout_secs) {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(token) = &cli.token {
        builder = builder.token(token.clone());
    }

    Ok(builder.build()?)
}
