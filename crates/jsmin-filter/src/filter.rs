//! Payload filter: decide, minify, or fall back to the original bytes.

use jsmin_core::{Minifier, MinifyError};
use thiserror::Error;

use crate::config::FilterConfig;
use crate::content::ContentKind;
use crate::error::Result;
use crate::html::minify_html;
use crate::path::PathPolicy;

/// Why a payload was served unmodified after an attempt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    #[error("body is not valid UTF-8")]
    NotUtf8,
    #[error(transparent)]
    Minify(#[from] MinifyError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStatus {
    Minified { original_len: usize, minified_len: usize },
    /// Content type is not minifiable.
    Skipped,
    FellBack(FallbackReason),
}

#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub body: Vec<u8>,
    pub kind: ContentKind,
    pub status: FilterStatus,
}

impl FilterOutcome {
    pub fn is_minified(&self) -> bool {
        matches!(self.status, FilterStatus::Minified { .. })
    }
}

/// Applies the minifier to outgoing payloads.
///
/// Minification is optional: on any failure the original body is returned.
#[derive(Debug, Clone, Default)]
pub struct ScriptFilter {
    policy: PathPolicy,
    minifier: Minifier,
}

impl ScriptFilter {
    pub fn new(config: &FilterConfig) -> Result<Self> {
        Ok(Self::with_policy(PathPolicy::from_config(config)?))
    }

    pub fn with_policy(policy: PathPolicy) -> Self {
        Self { policy, minifier: Minifier::new() }
    }

    /// A filter that runs on every path.
    pub fn allow_all() -> Self {
        Self::with_policy(PathPolicy::allow_all())
    }

    pub fn policy(&self) -> &PathPolicy {
        &self.policy
    }

    pub fn applies_to(&self, path: &str) -> bool {
        self.policy.applies_to(path)
    }

    /// Minify text of the given kind. `Other` is returned unchanged.
    pub fn minify_text(&self, kind: ContentKind, text: &str) -> std::result::Result<String, MinifyError> {
        match kind {
            ContentKind::Script => self.minifier.compress(text),
            ContentKind::Html => minify_html(text),
            ContentKind::Other => Ok(text.to_string()),
        }
    }

    /// Process a captured response body.
    pub fn process(&self, content_type: Option<&str>, body: Vec<u8>) -> FilterOutcome {
        let kind = ContentKind::from_content_type(content_type);
        tracing::debug!(?content_type, ?kind, "filtering payload");
        if !kind.is_minifiable() {
            return FilterOutcome { body, kind, status: FilterStatus::Skipped };
        }

        let original_len = body.len();
        let text = match std::str::from_utf8(&body) {
            Ok(text) => text,
            Err(_) => return fall_back(body, kind, FallbackReason::NotUtf8),
        };

        tracing::info!(original_len, "length before compression");
        match self.minify_text(kind, text) {
            Ok(minified) => {
                let minified_len = minified.len();
                tracing::info!(minified_len, "length after compression");
                FilterOutcome {
                    body: minified.into_bytes(),
                    kind,
                    status: FilterStatus::Minified { original_len, minified_len },
                }
            }
            Err(err) => fall_back(body, kind, err.into()),
        }
    }
}

fn fall_back(body: Vec<u8>, kind: ContentKind, reason: FallbackReason) -> FilterOutcome {
    tracing::warn!(%reason, "minification failed; serving original body");
    FilterOutcome { body, kind, status: FilterStatus::FellBack(reason) }
}
