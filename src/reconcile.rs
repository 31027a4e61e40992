//! Bidirectional mapping between one full rule list and the editor's
//! view of it: per-template toggles plus free-form additional rules,
//! parameterized by the boilerplate catalog.

use crate::classify::{filter_by_flags, find_and_remove};
use crate::{Catalog, ClassifiedKeepSpec, KeepSpec, TemplateSet};

/// Editor state for one boilerplate template: the checkbox plus the raw
/// name typed next to it (un-normalized; normalization happens during
/// instantiation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateToggle {
    pub enabled: bool,
    pub class_name: Option<String>,
}

impl TemplateToggle {
    #[must_use]
    pub fn off() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on() -> Self {
        Self {
            enabled: true,
            class_name: None,
        }
    }

    #[must_use]
    pub fn on_with_name(class_name: impl Into<String>) -> Self {
        Self {
            enabled: true,
            class_name: Some(class_name.into()),
        }
    }
}

/// Editor state for one template set: toggles parallel to the set's
/// templates, plus the free-form additional rules.
///
/// `additional` tolerates both an absent list and `None` elements inside
/// the list: the upstream rule-grammar parser may hand over sparse
/// lists. `None` elements are skipped on compose and an absent list
/// composes identically to an empty one. [`Reconciler::decompose`]
/// normalizes an empty remainder to `None` (the canonical
/// representation of "no additional rules").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetState {
    pub toggles: Vec<TemplateToggle>,
    pub additional: Option<Vec<Option<KeepSpec>>>,
}

/// Editor state for the whole catalog, parallel to
/// [`Catalog::sets`](crate::Catalog::sets).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorState {
    pub sets: Vec<SetState>,
}

/// The bidirectional mapping itself. Holds only a shared reference to
/// the read-only catalog; both directions are total functions over
/// well-formed in-memory data and cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'a> {
    catalog: &'a Catalog,
}

impl<'a> Reconciler<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Forward direction: build the full rule list from editor state.
    ///
    /// Per set, in catalog order: instantiate every enabled template
    /// with its toggle's raw name, then append the non-`None` additional
    /// entries in order, tagging every record with the set's flags.
    /// Missing `SetState` entries are treated as all-off and empty;
    /// entries beyond the catalog's sets are ignored.
    #[must_use]
    pub fn compose(&self, state: &EditorState) -> Vec<ClassifiedKeepSpec> {
        let mut records = Vec::new();
        for (i, set) in self.catalog.sets().iter().enumerate() {
            compose_set(set, state.sets.get(i), &mut records);
        }
        records
    }

    /// Inverse direction: decompose a loaded rule list into editor state.
    ///
    /// Per set: take the flag-matching candidate subset, consume one
    /// candidate per matching template (first match only, so a duplicate
    /// boilerplate entry is consumed exactly once), and return whatever
    /// remains as the additional list. Recovered toggles carry no name;
    /// a template matched by its own pattern re-instantiates identically
    /// with `class_name: None`.
    #[must_use]
    pub fn decompose(&self, records: &[ClassifiedKeepSpec]) -> EditorState {
        EditorState {
            sets: self
                .catalog
                .sets()
                .iter()
                .map(|set| decompose_set(set, records))
                .collect(),
        }
    }
}

fn compose_set(set: &TemplateSet, state: Option<&SetState>, records: &mut Vec<ClassifiedKeepSpec>) {
    let Some(state) = state else {
        return;
    };
    for (template, toggle) in set.templates.iter().zip(&state.toggles) {
        if toggle.enabled {
            let spec = template.instantiate(toggle.class_name.as_deref());
            records.push(ClassifiedKeepSpec::new(spec, set.flags));
        }
    }
    if let Some(additional) = &state.additional {
        for spec in additional.iter().flatten() {
            records.push(ClassifiedKeepSpec::new(spec.clone(), set.flags));
        }
    }
}

fn decompose_set(set: &TemplateSet, records: &[ClassifiedKeepSpec]) -> SetState {
    let mut candidates = filter_by_flags(records, set.flags);
    let toggles = set
        .templates
        .iter()
        .map(|template| TemplateToggle {
            enabled: find_and_remove(&template.spec, Some(&mut candidates)),
            class_name: None,
        })
        .collect();
    let additional = if candidates.is_empty() {
        None
    } else {
        Some(candidates.into_iter().map(Some).collect())
    };
    SetState { toggles, additional }
}
