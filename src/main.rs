// relwatch entry point.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use relwatch::cache::FileCache;
use relwatch::config::Config;
use relwatch::github::GitHubClient;
use relwatch::input::read_repository_lines;
use relwatch::runner::Runner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::parse();
    relwatch::log::init(config.verbose);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let list = read_repository_lines(&config.input)
        .with_context(|| format!("failed to read {}", config.input.display()))?;

    let client = GitHubClient::new(&config.api_url, config.token.as_deref())
        .context("failed to build GitHub client")?;
    let cache = if config.dry_run {
        FileCache::read_only(&config.cache_dir)
    } else {
        FileCache::new(&config.cache_dir)
    };

    let mut runner = Runner::new(client, cache, io::stdout().lock());
    runner.run(&list).await?;

    Ok(())
}
