use thiserror::Error;

use crate::CatalogError;
use crate::catalog::ParseError;

/// Unified error type covering catalog parsing, validation, and I/O.
///
/// Returned by convenience methods like [`Catalog::from_source()`](crate::Catalog::from_source)
/// and [`Catalog::from_file()`](crate::Catalog::from_file). The core
/// reconciliation and filter operations themselves are total and never
/// produce errors.
#[derive(Debug, Error)]
pub enum KeepspecError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
