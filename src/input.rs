// Repository list reader.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Default location of the repository list, relative to the working directory.
pub const DEFAULT_INPUT_FILE: &str = "repositories.txt";

/// Repository list as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryList {
    /// The list file does not exist; the run reports it and checks nothing.
    Missing { path: PathBuf },
    /// Non-blank, non-comment lines in file order.
    Lines(Vec<String>),
}

impl RepositoryList {
    pub fn lines(&self) -> &[String] {
        match self {
            RepositoryList::Missing { .. } => &[],
            RepositoryList::Lines(lines) => lines,
        }
    }
}

/// Read repository URLs, one per line.
///
/// Blank lines and `#` comments are dropped.
pub fn read_repository_lines(path: &Path) -> io::Result<RepositoryList> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(RepositoryList::Lines(parse_lines(&contents))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "repository list not found");
            Ok(RepositoryList::Missing {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(e),
    }
}

fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
