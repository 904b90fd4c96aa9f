use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Filter settings, shaped like servlet init parameters.
///
/// `path_list` is a comma-separated list of paths where `*` matches any run
/// of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub path_spec: Option<String>,
    pub path_list: Option<String>,
}

impl FilterConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn include(path_list: impl Into<String>) -> Self {
        Self { path_spec: Some("include".into()), path_list: Some(path_list.into()) }
    }

    pub fn exclude(path_list: impl Into<String>) -> Self {
        Self { path_spec: Some("exclude".into()), path_list: Some(path_list.into()) }
    }
}
