// Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::cache::DEFAULT_CACHE_DIR;
use crate::github::GITHUB_API_BASE;
use crate::input::DEFAULT_INPUT_FILE;

/// Check GitHub repositories for new releases since the last run.
#[derive(Debug, Clone, Parser)]
#[command(name = "relwatch", version, about)]
pub struct Config {
    /// File with one repository URL per line
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Directory holding the last seen release per repository
    #[arg(short, long, default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = GITHUB_API_BASE)]
    pub api_url: String,

    /// Token sent as a bearer credential to raise the API rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Compare against the cache without writing to it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
