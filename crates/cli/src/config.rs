use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "data";

/// Optional TOML run file. Every key mirrors a command-line flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: Vec<String>,
    pub output: Option<PathBuf>,
    pub repo: Option<String>,
    pub repo_url: Option<String>,
    pub branch: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: FileConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}

/// Flags layered over the file: a flag that was given wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub input: Vec<String>,
    pub output: Option<PathBuf>,
    pub repo: Option<String>,
    pub repo_url: Option<String>,
    pub branch: Option<String>,
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub repo: Option<String>,
    pub repo_url: Option<String>,
    pub branch: Option<String>,
}

impl RunConfig {
    #[must_use]
    pub fn resolve(file: FileConfig, flags: Overrides) -> Self {
        let raw = if flags.input.is_empty() {
            file.input
        } else {
            flags.input
        };

        Self {
            inputs: split_inputs(&raw),
            output: flags
                .output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            repo: flags.repo.or(file.repo),
            repo_url: flags.repo_url.or(file.repo_url),
            branch: flags.branch.or(file.branch),
        }
    }
}

/// Each entry may itself hold a comma-separated list.
fn split_inputs(raw: &[String]) -> Vec<PathBuf> {
    raw.iter()
        .flat_map(|entry| entry.split(','))
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect()
}
