// JSON persistence of group catalogs

use log::info;
use serde::{Deserialize, Serialize};

use super::group_catalog::{CatalogKind, CatalogRow, GroupCatalog};
use crate::errors::CatalogError;

#[derive(Serialize)]
struct CatalogFileRef<'a> {
    #[serde(rename = "_type")]
    kind: CatalogKind,
    table: &'a [CatalogRow],
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(rename = "_type")]
    kind: CatalogKind,
    table: Vec<CatalogRow>,
}

/// Only the tag, so a wrong kind is reported before the table is decoded
#[derive(Deserialize)]
struct CatalogHeader {
    #[serde(rename = "_type")]
    kind: CatalogKind,
}

impl GroupCatalog {
    /// Serialize as `{"_type": ..., "table": [...]}` with one row per line.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let header = serde_json::to_string(&self.kind())?;
        let rows = self
            .rows()
            .iter()
            .map(|row| serde_json::to_string(row).map(|json| format!("    {json}")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!(
            "{{\n  \"_type\": {header},\n  \"table\": [\n{}\n  ]\n}}\n",
            rows.join(",\n")
        ))
    }

    /// Compact single-line JSON, same schema as [`GroupCatalog::to_json`]
    pub fn to_json_compact(&self) -> Result<String, CatalogError> {
        let file = CatalogFileRef {
            kind: self.kind(),
            table: self.rows(),
        };
        Ok(serde_json::to_string(&file)?)
    }

    /// Load a catalog without touching the Hall parser or re-running closure.
    pub fn from_json(expected: CatalogKind, json: &str) -> Result<Self, CatalogError> {
        let header: CatalogHeader = serde_json::from_str(json)?;
        if header.kind != expected {
            return Err(CatalogError::WrongKind {
                expected: expected.to_string(),
                found: header.kind.to_string(),
            });
        }
        let file: CatalogFile = serde_json::from_str(json)?;
        info!("loaded {} with {} rows", file.kind, file.table.len());
        Ok(GroupCatalog::new(file.kind, file.table))
    }
}
