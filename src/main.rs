use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use release_check::config::{self, Config};
use release_check::logging::{self, LogOptions};
use release_check::release::checker::{UpdateStatus, check_for_update};
use release_check::{GitHubRegistry, compare_versions};

#[derive(Parser)]
#[command(name = "release-check")]
#[command(version, about = "Check GitHub for a newer release of a project")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/release-check/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Base URL of the GitHub API
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tag of the latest release
    Latest { owner: String, repo: String },
    /// Print -1, 0 or 1 for INSTALLED older than, equal to or newer than LATEST
    Compare { installed: String, latest: String },
    /// Report whether a newer release than INSTALLED is available
    Check {
        owner: String,
        repo: String,
        installed: String,
    },
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let path = self.config.clone().unwrap_or_else(config::config_path);
        let mut config = Config::load(&path)?;
        if let Some(timeout_ms) = self.timeout_ms {
            config.fetch.timeout_ms = timeout_ms;
        }
        if let Some(base_url) = &self.base_url {
            config.fetch.base_url = base_url.clone();
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(&LogOptions {
        file: cli.log_file.as_deref(),
        json: cli.log_json,
    })?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match &cli.command {
        Command::Latest { owner, repo } => {
            let registry = GitHubRegistry::new(&cli.load_config()?.fetch)?;
            let tag = runtime
                .block_on(registry.fetch_latest_tag(owner, repo))
                .with_context(|| format!("failed to fetch latest release of {}/{}", owner, repo))?;
            println!("{}", tag);
        }
        Command::Compare { installed, latest } => {
            let ordering = compare_versions(installed, latest)?;
            println!("{}", ordering as i32);
        }
        Command::Check {
            owner,
            repo,
            installed,
        } => {
            let registry = GitHubRegistry::new(&cli.load_config()?.fetch)?;
            let check = runtime
                .block_on(check_for_update(&registry, owner, repo, installed))
                .with_context(|| format!("failed to check {}/{} for updates", owner, repo))?;
            info!("{}/{} status: {:?}", owner, repo, check.status);

            match check.status {
                UpdateStatus::UpToDate => {
                    println!("{} is up to date", installed);
                }
                UpdateStatus::UpdateAvailable => match &check.latest.html_url {
                    Some(url) => println!(
                        "update available: {} -> {} ({})",
                        installed, check.latest.tag_name, url
                    ),
                    None => println!(
                        "update available: {} -> {}",
                        installed, check.latest.tag_name
                    ),
                },
                UpdateStatus::Ahead => {
                    println!(
                        "{} is newer than the latest release {}",
                        installed, check.latest.tag_name
                    );
                }
            }
        }
    }

    Ok(())
}
