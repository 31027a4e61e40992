use super::classified::RetentionFlags;
use super::keep_spec::{KeepSpec, internal_class_name};

/// One entry of the boilerplate catalog: a reusable keep pattern paired
/// with the label key the editor shows next to its toggle.
///
/// Templates are loaded once at startup and are read-only afterwards;
/// [`instantiate`](Self::instantiate) always works on a fresh copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoilerplateTemplate {
    pub label: String,
    pub spec: KeepSpec,
}

impl BoilerplateTemplate {
    #[must_use]
    pub fn new(label: impl Into<String>, spec: KeepSpec) -> Self {
        Self {
            label: label.into(),
            spec,
        }
    }

    /// Produce a concrete [`KeepSpec`] from this template and a raw name
    /// string typed by the user.
    ///
    /// Normalization is three-way and deliberate:
    /// - `None`: the copy inherits the template's own `class_name`.
    /// - `Some("")` or `Some("*")`: both mean "match any class"; the copy
    ///   gets `class_name: None`.
    /// - any other value: converted from the dotted form to the internal
    ///   slash-separated form.
    ///
    /// The template itself is never mutated.
    #[must_use]
    pub fn instantiate(&self, raw_name: Option<&str>) -> KeepSpec {
        let mut spec = self.spec.clone();
        if let Some(raw) = raw_name {
            spec.class_name = match raw {
                "" | "*" => None,
                name => Some(internal_class_name(name)),
            };
        }
        spec
    }
}

/// A named bucket of templates sharing one [`RetentionFlags`] pair, in
/// catalog order ("strict keep", "name-only keep", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub name: String,
    pub flags: RetentionFlags,
    pub templates: Vec<BoilerplateTemplate>,
}

impl TemplateSet {
    #[must_use]
    pub fn new(name: impl Into<String>, flags: RetentionFlags) -> Self {
        Self {
            name: name.into(),
            flags,
            templates: Vec::new(),
        }
    }
}
