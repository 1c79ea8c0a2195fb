//! Crystallographic symmetry library
//!
//! This library provides exact symmetry operations, a Hall symbol parser, finite group
//! closure and classification, and a queryable catalog of the point and space groups.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod symmetries;

pub use catalog::{point_groups, space_groups, GroupCatalog, Query};
pub use errors::{CatalogError, Error, GroupConstructionError, ParseError};
pub use symmetries::{Group, Operation};

/// Common result type used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_crate_error_wraps_parse_failures() {
        let error = Group::from_hall("P 7").unwrap_err();
        assert!(matches!(error, Error::Parse(ParseError::HallSymbol { .. })));
    }
}
