// Error types shared by the symmetry engine and the group catalog

use thiserror::Error;

/// Malformed textual input: an operation code or a Hall symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A coordinate triplet such as `-x+1/2,y,z` could not be read.
    #[error("malformed operation code {code:?}: cannot read {segment:?}")]
    OperationCode { code: String, segment: String },
    /// The rotation part is not an integer matrix with determinant ±1.
    #[error("operation {code:?} does not have a unimodular rotation part")]
    NotUnimodular { code: String },
    /// The rotation part has entries outside {-1, 0, 1} or no period up to 6.
    #[error("operation {code:?} is not a crystallographic symmetry operation")]
    NotCrystallographic { code: String },
    /// A translation constant is not a multiple of 1/24.
    #[error("translation {value:?} is not a multiple of 1/24")]
    Fraction { value: String },
    /// A Hall symbol contains a segment that does not fit the grammar.
    #[error("malformed Hall symbol {symbol:?}: cannot read {segment:?}")]
    HallSymbol { symbol: String, segment: String },
}

/// Closure grew past the crystallographic order bound.
///
/// Crystallographic groups are finite and small, so this means the generators
/// were malformed or non-crystallographic. It is never worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("closure of generators {generators:?} exceeded {limit} operations")]
pub struct GroupConstructionError {
    pub limit: usize,
    pub generators: Vec<String>,
}

/// Failures of catalog loading, regeneration and strict lookup.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("no catalog entry matches {query}")]
    NotFound { query: String },
    #[error("expected a {expected} but the data describes a {found}")]
    WrongKind { expected: String, found: String },
    #[error("compulsory column {column} is missing for row {row}")]
    MissingColumn { column: &'static str, row: usize },
    #[error("invalid catalog key {0:?}")]
    InvalidKey(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Group(#[from] GroupConstructionError),
}

/// Crate-level error wrapping every failure the engine can report.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Group(#[from] GroupConstructionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
