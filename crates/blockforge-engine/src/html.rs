use std::fmt;

/// An HTML fragment produced under the trusted-output contract.
///
/// Rich text and raw-HTML blocks pass operator-authored markup through
/// without escaping; sanitization is the responsibility of the content
/// authoring layer upstream of this crate. The newtype keeps trusted
/// fragments from being mistaken for plain text, so downstream renderers
/// neither re-escape them nor treat them as escapable input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wrap markup that is already trusted.
    pub fn from_trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TrustedHtml> for String {
    fn from(html: TrustedHtml) -> Self {
        html.0
    }
}
