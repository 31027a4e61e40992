//! The once-loaded, read-only configuration value behind the editor:
//! boilerplate template sets plus the optimization filter catalog.

mod error;
mod grammar;

use std::collections::HashSet;

pub use error::ParseError;

use grammar::{RawSet, RawTemplate};

use crate::types::ACCESS_FLAG_NAMES;
use crate::{
    BoilerplateTemplate, CatalogError, FilterCodec, FilterOption, KeepSpec, KeepspecError,
    Reconciler, TemplateSet, internal_class_name,
};

/// The boilerplate template sets and filter options for one editor
/// session. Loaded once at process start and never mutated afterwards;
/// safe for unsynchronized concurrent reads, so it can live behind
/// `Arc` or a plain shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    sets: Vec<TemplateSet>,
    options: Vec<FilterOption>,
}

impl Catalog {
    /// Parse and validate catalog resource text.
    ///
    /// # Errors
    ///
    /// Returns [`KeepspecError`] on grammar errors ([`ParseError`]) or
    /// on validation failures ([`CatalogError`](crate::CatalogError)):
    /// duplicate option paths, duplicate template labels within a set,
    /// two sets sharing a flag pair, or unknown access-flag names.
    pub fn from_source(input: &str) -> Result<Self, KeepspecError> {
        use winnow::Parser;
        let parsed = grammar::parse_catalog
            .parse(input)
            .map_err(|e| ParseError::new(e.to_string()))?;
        Ok(Self::validate(parsed)?)
    }

    /// Read a catalog resource file and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`KeepspecError`] on I/O, parse, or validation failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, KeepspecError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_source(&input)
    }

    /// Template sets in catalog order.
    #[must_use]
    pub fn sets(&self) -> &[TemplateSet] {
        &self.sets
    }

    /// Filter options in catalog order.
    #[must_use]
    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    /// A [`FilterCodec`] over this catalog's options.
    #[must_use]
    pub fn filter_codec(&self) -> FilterCodec<'_> {
        FilterCodec::new(&self.options)
    }

    /// A [`Reconciler`] over this catalog's template sets.
    #[must_use]
    pub fn reconciler(&self) -> Reconciler<'_> {
        Reconciler::new(self)
    }

    fn validate(parsed: grammar::ParsedCatalog) -> Result<Self, CatalogError> {
        let mut seen_paths = HashSet::new();
        let mut options = Vec::with_capacity(parsed.options.len());
        for raw in parsed.options {
            if !seen_paths.insert(raw.path.clone()) {
                return Err(CatalogError::DuplicateOptionPath { path: raw.path });
            }
            options.push(FilterOption::new(raw.path, raw.default_enabled));
        }

        let mut sets: Vec<TemplateSet> = Vec::with_capacity(parsed.sets.len());
        for raw_set in parsed.sets {
            if let Some(prior) = sets.iter().find(|s| s.flags == raw_set.flags) {
                return Err(CatalogError::DuplicateSet {
                    first: prior.name.clone(),
                    second: raw_set.name,
                });
            }
            sets.push(build_set(raw_set)?);
        }

        Ok(Self { sets, options })
    }
}

fn build_set(raw: RawSet) -> Result<TemplateSet, CatalogError> {
    let mut set = TemplateSet::new(raw.name, raw.flags);
    let mut seen_labels = HashSet::new();
    for raw_template in raw.templates {
        if !seen_labels.insert(raw_template.label.clone()) {
            return Err(CatalogError::DuplicateTemplateLabel {
                set: set.name.clone(),
                label: raw_template.label,
            });
        }
        set.templates.push(build_template(raw_template)?);
    }
    Ok(set)
}

fn build_template(raw: RawTemplate) -> Result<BoilerplateTemplate, CatalogError> {
    let (access_flags, inverted_access_flags) =
        resolve_access(raw.access.as_deref(), &raw.label)?;
    let spec = KeepSpec {
        comment: raw.comment,
        access_flags,
        inverted_access_flags,
        annotation_type: raw.annotation.map(|a| internal_class_name(&a)),
        class_name: normalize_class_attr(raw.class),
        extends_annotation_type: raw.extends_annotation.map(|a| internal_class_name(&a)),
        extends_class_name: normalize_class_attr(raw.extends),
    };
    Ok(BoilerplateTemplate::new(raw.label, spec))
}

/// Resolve a whitespace-separated flag-name list into the required and
/// inverted (`!`-prefixed) bitmasks.
fn resolve_access(access: Option<&str>, template: &str) -> Result<(u32, u32), CatalogError> {
    let mut required = 0;
    let mut inverted = 0;
    let Some(access) = access else {
        return Ok((0, 0));
    };
    for token in access.split_whitespace() {
        let (name, mask) = match token.strip_prefix('!') {
            Some(name) => (name, &mut inverted),
            None => (token, &mut required),
        };
        match ACCESS_FLAG_NAMES.iter().find(|(n, _)| *n == name) {
            Some((_, bit)) => *mask |= bit,
            None => {
                return Err(CatalogError::UnknownAccessFlag {
                    template: template.to_owned(),
                    name: name.to_owned(),
                });
            }
        }
    }
    Ok((required, inverted))
}

/// Class-valued attributes share the user-name normalization rule:
/// absent, empty, and `*` all mean "match any class"; anything else is
/// stored in the internal slash form.
fn normalize_class_attr(value: Option<String>) -> Option<String> {
    match value.as_deref() {
        None | Some("") | Some("*") => None,
        Some(name) => Some(internal_class_name(name)),
    }
}
