/// Payload category, sniffed from the declared content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Standalone script: minified whole.
    Script,
    /// HTML document: inline script regions are minified.
    Html,
    /// Anything else passes through untouched.
    Other,
}

impl ContentKind {
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let Some(ct) = content_type else { return Self::Other };
        let ct = ct.to_ascii_lowercase();
        if ct.contains("text/html") {
            Self::Html
        } else if ct.contains("javascript") || ct.contains("ecmascript") {
            Self::Script
        } else {
            Self::Other
        }
    }

    pub fn is_minifiable(&self) -> bool {
        !matches!(self, Self::Other)
    }
}
