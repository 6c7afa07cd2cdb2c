/// The prefix and suffix that bound a placeholder's key.
///
/// Both may be any string, multi-character or even empty; no combination is
/// rejected. The scan treats them purely mechanically, see
/// [`Scanner`](crate::Scanner) for the exact rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Delimiters {
    prefix: String,
    suffix: String,
}

impl Delimiters {
    pub const DEFAULT_PREFIX: &'static str = "${";
    pub const DEFAULT_SUFFIX: &'static str = "}";

    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Wrap `key` in these delimiters, producing the placeholder for it.
    pub fn wrap(&self, key: &str) -> String {
        let mut placeholder =
            String::with_capacity(self.prefix.len() + key.len() + self.suffix.len());
        placeholder.push_str(&self.prefix);
        placeholder.push_str(key);
        placeholder.push_str(&self.suffix);
        placeholder
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX, Self::DEFAULT_SUFFIX)
    }
}

impl<P, S> From<(P, S)> for Delimiters
where
    P: Into<String>,
    S: Into<String>,
{
    fn from((prefix, suffix): (P, S)) -> Self {
        Self::new(prefix, suffix)
    }
}
