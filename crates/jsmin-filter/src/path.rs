//! Path inclusion policy: which request paths the filter runs on.

use regex::Regex;
use std::str::FromStr;

use crate::config::FilterConfig;
use crate::error::{FilterError, Result};

/// Whether the configured path list selects or excludes paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSpec {
    Include,
    Exclude,
}

impl FromStr for PathSpec {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("include") {
            Ok(Self::Include)
        } else if s.eq_ignore_ascii_case("exclude") {
            Ok(Self::Exclude)
        } else {
            Err(FilterError::InvalidPathSpec(s.to_string()))
        }
    }
}

/// Compile a wildcard path into a whole-path regex.
/// `*` matches anything, every other character is literal.
pub fn wildcard_to_regex(pattern: &str) -> Result<Regex> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Ok(Regex::new(&format!("^{body}$"))?)
}

/// Split a comma-separated path list, dropping blank entries.
pub fn parse_path_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// A missing path list behaves as an empty one, and a missing spec as
/// `Exclude`, so with nothing configured the filter runs everywhere.
#[derive(Debug, Clone, Default)]
pub struct PathPolicy {
    spec: Option<PathSpec>,
    patterns: Vec<Regex>,
}

impl PathPolicy {
    /// A policy that applies everywhere.
    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn new(spec: Option<PathSpec>, paths: &[String]) -> Result<Self> {
        let patterns = paths
            .iter()
            .map(|p| wildcard_to_regex(p))
            .collect::<Result<Vec<_>>>()?;
        if spec == Some(PathSpec::Include) && patterns.is_empty() {
            tracing::warn!("include spec with an empty path list; filter will never run");
        }
        Ok(Self { spec, patterns })
    }

    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let spec = config.path_spec.as_deref().map(str::parse::<PathSpec>).transpose()?;
        let paths = config.path_list.as_deref().map(parse_path_list).unwrap_or_default();
        tracing::info!(?spec, ?paths, "path policy configured");
        Self::new(spec, &paths)
    }

    pub fn spec(&self) -> Option<PathSpec> {
        self.spec
    }

    /// Whether the filter should run for `path`.
    pub fn applies_to(&self, path: &str) -> bool {
        let matched = self.patterns.iter().any(|re| re.is_match(path));
        match self.spec.unwrap_or(PathSpec::Exclude) {
            PathSpec::Include => matched,
            PathSpec::Exclude => !matched,
        }
    }
}
