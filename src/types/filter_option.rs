/// One leaf of the fixed optimization catalog: a slash-separated path
/// such as `code/simplification/arithmetic`, plus the enabled state used
/// when no filter expression is given.
///
/// Paths are unique within a catalog; their order is significant for
/// serialization but not for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterOption {
    pub path: String,
    pub default_enabled: bool,
}

impl FilterOption {
    #[must_use]
    pub fn new(path: impl Into<String>, default_enabled: bool) -> Self {
        Self {
            path: path.into(),
            default_enabled,
        }
    }

    /// First path component, used to group leaves for wildcard
    /// serialization.
    #[must_use]
    pub fn group(&self) -> &str {
        self.path.split('/').next().unwrap_or(&self.path)
    }
}
