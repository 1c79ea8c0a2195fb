// Process-wide catalogs loaded once from the bundled JSON data

use std::sync::OnceLock;

use super::catalog_builder::build_catalog;
use super::catalog_tables::{POINT_GROUP_TABLE, SPACE_GROUP_TABLE};
use super::group_catalog::{CatalogKind, GroupCatalog};
use crate::errors::CatalogError;

const POINT_GROUP_DATA: &str = include_str!("../../data/point_groups.json");
const SPACE_GROUP_DATA: &str = include_str!("../../data/space_groups.json");

static POINT_GROUPS: OnceLock<GroupCatalog> = OnceLock::new();
static SPACE_GROUPS: OnceLock<GroupCatalog> = OnceLock::new();

/// The 32 crystallographic point groups, loaded on first use.
///
/// # Panics
/// If the bundled data does not decode, which means the build is corrupt.
pub fn point_groups() -> &'static GroupCatalog {
    POINT_GROUPS.get_or_init(|| load_bundled(CatalogKind::PointGroupCatalog, POINT_GROUP_DATA))
}

/// The 230 space-group types in their tabulated settings, loaded on first use.
///
/// # Panics
/// If the bundled data does not decode, which means the build is corrupt.
pub fn space_groups() -> &'static GroupCatalog {
    SPACE_GROUPS.get_or_init(|| load_bundled(CatalogKind::SpaceGroupCatalog, SPACE_GROUP_DATA))
}

/// Rebuild the point group catalog from its Hall symbols
pub fn regenerate_point_groups() -> Result<GroupCatalog, CatalogError> {
    build_catalog(CatalogKind::PointGroupCatalog, POINT_GROUP_TABLE)
}

/// Rebuild the space group catalog from its Hall symbols
pub fn regenerate_space_groups() -> Result<GroupCatalog, CatalogError> {
    build_catalog(CatalogKind::SpaceGroupCatalog, SPACE_GROUP_TABLE)
}

fn load_bundled(kind: CatalogKind, json: &str) -> GroupCatalog {
    match GroupCatalog::from_json(kind, json) {
        Ok(catalog) => catalog,
        Err(error) => panic!("bundled {kind} data is corrupt: {error}"),
    }
}
