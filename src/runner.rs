// Change detection runner.
// Walks the repository list in order, compares each latest release with the cache, and reports.

use std::io::Write;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, ReleaseCache};
use crate::error::Result;
use crate::github::ReleaseFetcher;
use crate::input::RepositoryList;
use crate::locator::RepositoryRef;
use crate::report;

/// What happened to a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The line is not a repository URL; nothing was fetched.
    Unparseable { line: String },
    /// GitHub reported no release for the repository.
    NoRelease { repo: RepositoryRef },
    /// The request failed; the repository was skipped.
    FetchFailed { repo: RepositoryRef, reason: String },
    /// A release was found, reported, and cached.
    Checked {
        repo: RepositoryRef,
        tag: String,
        date: String,
        previous_tag: Option<String>,
        updated: bool,
    },
}

impl ItemOutcome {
    /// Whether this item produced an "update found" notice.
    pub fn is_update(&self) -> bool {
        matches!(self, ItemOutcome::Checked { updated: true, .. })
    }
}

/// Counts over a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[ItemOutcome]) -> Self {
        outcomes
            .iter()
            .fold(Self::default(), |mut summary, outcome| {
                match outcome {
                    ItemOutcome::Checked { updated, .. } => {
                        summary.checked += 1;
                        if *updated {
                            summary.updated += 1;
                        }
                    }
                    ItemOutcome::Unparseable { .. } | ItemOutcome::NoRelease { .. } => {
                        summary.skipped += 1
                    }
                    ItemOutcome::FetchFailed { .. } => summary.failed += 1,
                }
                summary
            })
    }
}

/// Sequential release checker over an injected fetcher, cache, and console.
pub struct Runner<F, C, W> {
    fetcher: F,
    cache: C,
    out: W,
    now: DateTime<Utc>,
}

impl<F, C, W> Runner<F, C, W>
where
    F: ReleaseFetcher,
    C: ReleaseCache,
    W: Write,
{
    pub fn new(fetcher: F, cache: C, out: W) -> Self {
        Self {
            fetcher,
            cache,
            out,
            now: Utc::now(),
        }
    }

    /// Use a fixed "now" for relative publish times.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn into_parts(self) -> (F, C, W) {
        (self.fetcher, self.cache, self.out)
    }

    /// Check every line in order, one repository at a time.
    ///
    /// Per-item fetch problems are recorded in the outcome; cache and
    /// console errors abort the run. A missing list is reported under the
    /// header and checks nothing.
    pub async fn run(&mut self, list: &RepositoryList) -> Result<Vec<ItemOutcome>> {
        let header = report::header_line();
        writeln!(self.out, "{}", report::rule_for(&header))?;
        writeln!(self.out, "{}", header)?;

        if let RepositoryList::Missing { path } = list {
            writeln!(self.out, "{}", report::missing_input_notice(path))?;
        }

        let lines = list.lines();
        let mut outcomes = Vec::with_capacity(lines.len());
        for line in lines {
            outcomes.push(self.check_line(line).await?);
        }

        let summary = RunSummary::from_outcomes(&outcomes);
        info!(
            checked = summary.checked,
            updated = summary.updated,
            skipped = summary.skipped,
            failed = summary.failed,
            "run complete"
        );
        Ok(outcomes)
    }

    /// Check a single input line.
    pub async fn check_line(&mut self, line: &str) -> Result<ItemOutcome> {
        let repo = match RepositoryRef::parse(line) {
            Ok(repo) => repo,
            Err(e) => {
                debug!(error = %e, "skipping line");
                return Ok(ItemOutcome::Unparseable {
                    line: line.to_string(),
                });
            }
        };

        let previous = self.cache.load(&repo)?;

        let release = match self.fetcher.latest_release(&repo).await {
            Ok(Some(release)) => release,
            Ok(None) => {
                debug!(%repo, "no release found");
                return Ok(ItemOutcome::NoRelease { repo });
            }
            Err(e) => {
                warn!(%repo, error = %e, "failed to fetch latest release");
                return Ok(ItemOutcome::FetchFailed {
                    repo,
                    reason: e.to_string(),
                });
            }
        };

        let entry = CacheEntry::from(&release);
        let relative = report::format_relative_time(&entry.date, self.now);
        let status = report::status_line(&repo, &entry.tag, &relative);
        writeln!(self.out, "{}", report::rule_for(&status))?;
        writeln!(self.out, "{}", status)?;

        let previous_tag = previous.map(|entry| entry.tag);
        let updated = previous_tag.as_deref() != Some(entry.tag.as_str());
        if updated {
            info!(
                %repo,
                tag = %entry.tag,
                previous = ?previous_tag,
                url = ?release.html_url,
                "update found"
            );
            writeln!(self.out, "{}", report::update_notice(&repo, &entry.tag))?;
            writeln!(self.out, "{}", line.trim())?;
        }

        self.cache.save(&repo, &entry)?;

        Ok(ItemOutcome::Checked {
            repo,
            tag: entry.tag,
            date: entry.date,
            previous_tag,
            updated,
        })
    }
}
