use super::keep_spec::KeepSpec;

/// The two-flag classification key: what the shrinker may still do to a
/// kept target.
///
/// The four combinations partition the master rule list into buckets;
/// every boilerplate template set carries exactly one pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetentionFlags {
    /// The target may still be eliminated by dead-code elimination.
    pub allow_removal: bool,
    /// The target may still be renamed.
    pub allow_renaming: bool,
}

impl RetentionFlags {
    #[must_use]
    pub fn new(allow_removal: bool, allow_renaming: bool) -> Self {
        Self {
            allow_removal,
            allow_renaming,
        }
    }
}

/// A [`KeepSpec`] tagged with its [`RetentionFlags`]: the unit stored in
/// the master rule list exchanged with the rule-grammar collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifiedKeepSpec {
    pub spec: KeepSpec,
    pub flags: RetentionFlags,
}

impl ClassifiedKeepSpec {
    #[must_use]
    pub fn new(spec: KeepSpec, flags: RetentionFlags) -> Self {
        Self { spec, flags }
    }
}
