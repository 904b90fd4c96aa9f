//! Inline `<script>` minification inside HTML documents.

use jsmin_core::{compress, MinifyError};
use regex::Regex;
use std::sync::LazyLock;

static RE_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b([^>]*)>(.*?)</script\s*>").unwrap()
});
static RE_TYPE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\btype\s*=\s*["']?([^"'\s>]+)"#).unwrap()
});

/// Whether a script tag with these attributes holds JavaScript.
/// No `type` attribute means JavaScript.
pub fn is_javascript_tag(attrs: &str) -> bool {
    match RE_TYPE_ATTR.captures(attrs) {
        Some(caps) => {
            let ty = caps[1].to_ascii_lowercase();
            ty.contains("javascript") || ty.contains("ecmascript") || ty == "module"
        }
        None => true,
    }
}

/// Minify the body of every inline JavaScript `<script>` block in `document`.
///
/// Tags and the text around them are kept byte-for-byte. A `<script>` with no
/// closing tag is left alone. The first failing block fails the whole document.
pub fn minify_html(document: &str) -> Result<String, MinifyError> {
    let mut out = String::with_capacity(document.len());
    let mut last = 0;
    let mut regions = 0usize;

    for caps in RE_SCRIPT.captures_iter(document) {
        let (Some(attrs), Some(body)) = (caps.get(1), caps.get(2)) else { continue };
        if !is_javascript_tag(attrs.as_str()) {
            continue;
        }
        out.push_str(&document[last..body.start()]);
        out.push_str(&compress(body.as_str())?);
        last = body.end();
        regions += 1;
    }
    out.push_str(&document[last..]);

    tracing::debug!(regions, "minified inline scripts");
    Ok(out)
}
