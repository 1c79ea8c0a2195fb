// Catalog module: named point and space groups built from Hall symbols
// This module provides the column model, lookup, JSON persistence and the bundled tables

// ======================== MODULE DECLARATIONS ========================
pub mod bundled_catalogs;
pub mod catalog_builder;
pub mod catalog_columns;
pub mod catalog_serialization;
pub mod catalog_tables;
pub mod group_catalog;

// ======================== COLUMNS ========================
pub use catalog_columns::{
    Column,         // enum - n_c, number, setting, HM, Hall, group, HM_short, HM_simple, HM_numbered, standard
    ACCESSORS,      // const [Column; 5] - columns matched by an anonymous key, in priority order
    BUILD_ORDER,    // const [Column; 10] - compile-time topological order of column derivation
};

// Column impl methods:
//   name(self) -> &'static str                                      - key in the persisted table
//   dependencies(self) -> &'static [Column]                         - columns this one is derived from
//   is_compulsory(self) -> bool                                     - supplied by the raw table
//   is_accessor(self) -> bool                                       - matched by anonymous keys

// ======================== CATALOG ========================
pub use group_catalog::{
    GroupCatalog,   // struct - ordered rows of named groups
    CatalogRow,     // struct - one setting: n_c, number, setting, HM, Hall, group and derived names
    CatalogKind,    // enum - PointGroupCatalog / SpaceGroupCatalog, persisted as "_type"
    Cell,           // enum - Text / Integer / Flag value used by keys and filters
    Query,          // struct - anonymous key plus column filters
    Lookup,         // struct - best-effort result: row plus optional ambiguity
    Ambiguity,      // struct - diagnostic listing every candidate's HM_numbered
};

// GroupCatalog impl methods:
//   get(&self, query: &Query) -> Option<Lookup>                     - best effort, warns on ambiguity
//   find(&self, key: impl Into<Cell>) -> Result<&CatalogRow, CatalogError> - strict lookup
//   candidates(&self, query: &Query) -> Vec<&CatalogRow>            - every match, standard first
//   by_nc(&self, n_c: &str) -> Option<&CatalogRow>                  - exact n_c access
//   catalog["P21/c"] / catalog[14u32]                               - panicking bracket access
//   to_json / to_json_compact / from_json(kind, json)               - persistence

// ======================== BUNDLED DATA ========================
pub use bundled_catalogs::{
    point_groups,               // fn() -> &'static GroupCatalog - the 32 point groups (45 settings)
    space_groups,               // fn() -> &'static GroupCatalog - the 230 space groups (300 settings)
    regenerate_point_groups,    // fn() -> Result<GroupCatalog, CatalogError> - rebuild from Hall symbols
    regenerate_space_groups,    // fn() -> Result<GroupCatalog, CatalogError> - rebuild from Hall symbols
};
pub use catalog_builder::{
    build_catalog,  // fn(kind, table: &[RawRow]) -> Result<GroupCatalog, CatalogError> - derive every column
    simplify_hm,    // fn(hm: &str, monoclinic: bool) -> String - HM_simple rule
};
pub use catalog_tables::{RawRow, POINT_GROUP_TABLE, SPACE_GROUP_TABLE};

// Test modules
mod _tests_catalog_columns;
mod _tests_catalog_serialization;
mod _tests_group_catalog;
