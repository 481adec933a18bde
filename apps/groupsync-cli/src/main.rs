//! groupsync - reconcile a list of users against a directory group
//!
//! Resolves the target group, checks each email's membership, adds the users
//! that are missing and prints who was already in the group and who was added.

use clap::Parser;

use groupsync_cli::cli::Cli;
use groupsync_cli::config::RunSettings;
use groupsync_cli::error::CliResult;
use groupsync_cli::logging::init_logging;
use groupsync_cli::run;

#[tokio::main]
async fn main() {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_format);

    match execute(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn execute(cli: Cli) -> CliResult<()> {
    let settings = RunSettings::resolve(&cli)?;
    let mut stdout = std::io::stdout().lock();
    run::execute(settings, &mut stdout).await?;
    Ok(())
}
