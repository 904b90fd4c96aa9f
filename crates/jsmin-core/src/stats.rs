//! Minifier handle and size statistics.

use crate::error::Result;

/// Result of a successful minification with size statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MinifyStats {
    pub output: String,
    pub original_len: usize,
    pub minified_len: usize,
    pub reduction_pct: f64,
}

impl MinifyStats {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.minified_len as f64 / self.original_len as f64
    }
}

/// Stateless minifier handle. Every call builds its own engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minifier;

impl Minifier {
    pub fn new() -> Self {
        Self
    }

    pub fn compress(&self, source: &str) -> Result<String> {
        crate::compress(source)
    }

    /// Compress and report byte lengths before and after.
    pub fn compress_with_stats(&self, source: &str) -> Result<MinifyStats> {
        let original_len = source.len();
        let output = self.compress(source)?;
        let minified_len = output.len();
        let reduction = if original_len > 0 {
            (original_len.saturating_sub(minified_len) as f64 / original_len as f64) * 100.0
        } else {
            0.0
        };

        Ok(MinifyStats {
            output,
            original_len,
            minified_len,
            reduction_pct: reduction,
        })
    }
}
