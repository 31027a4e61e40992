use std::fmt;

/// JVM class access flags, as they appear in the class file format.
///
/// A [`KeepSpec`] constrains its target with a required mask and an
/// inverted (forbidden) mask; `0` means unconstrained.
pub mod access {
    pub const PUBLIC: u32 = 0x0001;
    pub const PRIVATE: u32 = 0x0002;
    pub const PROTECTED: u32 = 0x0004;
    pub const STATIC: u32 = 0x0008;
    pub const FINAL: u32 = 0x0010;
    pub const INTERFACE: u32 = 0x0200;
    pub const ABSTRACT: u32 = 0x0400;
    pub const SYNTHETIC: u32 = 0x1000;
    pub const ANNOTATION: u32 = 0x2000;
    pub const ENUM: u32 = 0x4000;
}

/// Name/bit pairs for the catalog grammar and for display.
pub(crate) const ACCESS_FLAG_NAMES: &[(&str, u32)] = &[
    ("public", access::PUBLIC),
    ("private", access::PRIVATE),
    ("protected", access::PROTECTED),
    ("static", access::STATIC),
    ("final", access::FINAL),
    ("interface", access::INTERFACE),
    ("abstract", access::ABSTRACT),
    ("synthetic", access::SYNTHETIC),
    ("annotation", access::ANNOTATION),
    ("enum", access::ENUM),
];

/// Convert a human-entered dotted class name to the internal
/// slash-separated form (`com.example.Foo` -> `com/example/Foo`).
#[must_use]
pub fn internal_class_name(external: &str) -> String {
    external.replace('.', "/")
}

/// Convert an internal slash-separated class name back to the dotted
/// form shown to users.
#[must_use]
pub fn external_class_name(internal: &str) -> String {
    internal.replace('/', ".")
}

/// One "keep this class/member" directive.
///
/// All fields are optional constraints; an absent field means "no
/// constraint". `class_name: None` means "match any class" and is never
/// equal to `Some("")`. Structural equality over all fields is the sole
/// criterion used to decide whether a boilerplate rule is present in a
/// loaded rule list.
///
/// A `KeepSpec` is immutable once constructed. Mutating helpers such as
/// [`with_class_name`](Self::with_class_name) return a fresh copy and
/// leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeepSpec {
    pub comment: Option<String>,
    /// Access bits the target must have (`0` = unconstrained).
    pub access_flags: u32,
    /// Access bits the target must not have (`0` = unconstrained).
    pub inverted_access_flags: u32,
    /// Annotation type name or pattern the target must carry.
    pub annotation_type: Option<String>,
    /// Internal (slash-separated) class name or pattern; `None` matches any class.
    pub class_name: Option<String>,
    pub extends_annotation_type: Option<String>,
    /// Internal class name the target must extend or implement.
    pub extends_class_name: Option<String>,
}

impl KeepSpec {
    /// A spec with no constraints: matches any class.
    #[must_use]
    pub fn any_class() -> Self {
        Self::default()
    }

    /// Copy of this spec with a different `class_name`. The receiver is
    /// not modified.
    #[must_use]
    pub fn with_class_name(&self, class_name: Option<String>) -> Self {
        Self {
            class_name,
            ..self.clone()
        }
    }
}

impl fmt::Display for KeepSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.class_name {
            Some(name) => write!(f, "keep class {}", external_class_name(name)),
            None => write!(f, "keep class *"),
        }?;
        if let Some(ext) = &self.extends_class_name {
            write!(f, " extends {}", external_class_name(ext))?;
        }
        Ok(())
    }
}
