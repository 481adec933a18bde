//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use groupsync_directory::GraphCloud;

/// groupsync - add missing users to a directory group
#[derive(Parser, Debug)]
#[command(name = "groupsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bearer token used on every Graph request
    #[arg(long, env = "GROUPSYNC_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Display name of the target group
    #[arg(long, env = "GROUPSYNC_GROUP")]
    pub group: Option<String>,

    /// Email address to reconcile (repeatable)
    #[arg(long = "email", value_name = "EMAIL")]
    pub emails: Vec<String>,

    /// File with one email per line ('#' starts a comment)
    #[arg(long, value_name = "PATH")]
    pub emails_file: Option<PathBuf>,

    /// YAML or JSON run file (group, emails, graph settings)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// National cloud hosting the Graph API
    #[arg(long, value_enum)]
    pub cloud: Option<CloudArg>,

    /// Graph root URL, overrides --cloud
    #[arg(long, env = "GROUPSYNC_GRAPH_URL")]
    pub graph_url: Option<String>,

    /// Graph API version segment
    #[arg(long)]
    pub api_version: Option<String>,

    /// Per-request timeout in seconds (none by default)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log output format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CloudArg {
    Commercial,
    UsGovernment,
    China,
    Germany,
}

impl From<CloudArg> for GraphCloud {
    fn from(arg: CloudArg) -> Self {
        match arg {
            CloudArg::Commercial => GraphCloud::Commercial,
            CloudArg::UsGovernment => GraphCloud::UsGovernment,
            CloudArg::China => GraphCloud::China,
            CloudArg::Germany => GraphCloud::Germany,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
