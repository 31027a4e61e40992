//! Configuration synchronization and filter-matching engine for a
//! bytecode shrinker's configuration editor.
//!
//! The crate has four pieces: the [`KeepSpec`] data model, the
//! classifier ([`filter_by_flags`] / [`find_and_remove`]), the
//! [`Reconciler`] mapping between a full rule list and editor toggle
//! state, and the [`FilterCodec`] for the textual optimization filter.
//! The [`Catalog`] of boilerplate templates and filter options is
//! loaded once at startup and passed in by shared reference.

mod catalog;
mod classify;
mod error;
mod filter;
mod reconcile;
mod types;

pub use catalog::{Catalog, ParseError};
pub use classify::{filter_by_flags, find_and_remove};
pub use error::KeepspecError;
pub use filter::FilterCodec;
pub use reconcile::{EditorState, Reconciler, SetState, TemplateToggle};
pub use types::{
    BoilerplateTemplate, CatalogError, ClassifiedKeepSpec, FilterOption, GrammarCodec, KeepSpec,
    RetentionFlags, TemplateSet, access, external_class_name, internal_class_name,
};
