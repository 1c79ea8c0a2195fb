use std::fmt;
use std::ops::{Deref, Index};

use log::warn;
use serde::{Deserialize, Serialize};

use super::catalog_columns::{Column, ACCESSORS};
use crate::errors::CatalogError;
use crate::symmetries::hall_symbols::normalize_hall_symbol;
use crate::symmetries::Group;

/// Which family of groups a catalog holds; persisted as the `_type` tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    PointGroupCatalog,
    SpaceGroupCatalog,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::PointGroupCatalog => f.write_str("PointGroupCatalog"),
            CatalogKind::SpaceGroupCatalog => f.write_str("SpaceGroupCatalog"),
        }
    }
}

/// A single value of a catalog column, used for keys and filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Integer(value.into())
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Integer(value.into())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Flag(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => write!(f, "{text:?}"),
            Cell::Integer(n) => write!(f, "{n}"),
            Cell::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// One named group setting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogRow {
    /// `"number"` or `"number:setting"`
    pub n_c: String,
    pub number: u32,
    pub setting: String,
    #[serde(rename = "HM")]
    pub hm: String,
    #[serde(rename = "Hall")]
    pub hall: String,
    pub group: Group,
    #[serde(rename = "HM_short")]
    pub hm_short: String,
    #[serde(rename = "HM_simple")]
    pub hm_simple: String,
    #[serde(rename = "HM_numbered")]
    pub hm_numbered: String,
    /// First setting listed for its number
    pub standard: bool,
}

impl CatalogRow {
    /// Value of a scalar column; the group column has none.
    pub fn cell(&self, column: Column) -> Option<Cell> {
        Some(match column {
            Column::NC => Cell::from(self.n_c.as_str()),
            Column::Number => Cell::from(self.number),
            Column::Setting => Cell::from(self.setting.as_str()),
            Column::Hm => Cell::from(self.hm.as_str()),
            Column::Hall => Cell::from(self.hall.as_str()),
            Column::Group => return None,
            Column::HmShort => Cell::from(self.hm_short.as_str()),
            Column::HmSimple => Cell::from(self.hm_simple.as_str()),
            Column::HmNumbered => Cell::from(self.hm_numbered.as_str()),
            Column::Standard => Cell::from(self.standard),
        })
    }

    fn matches_key(&self, accessor: Column, key: &Cell) -> bool {
        match (accessor, key) {
            // text keys never match numbers: "4" is a symbol, not point group no. 4
            (Column::Number, Cell::Integer(n)) => i64::from(self.number) == *n,
            (Column::Hall, Cell::Text(text)) => {
                normalize_hall_symbol(text) == normalize_hall_symbol(&self.hall)
            }
            (_, Cell::Text(_)) => self.cell(accessor).as_ref() == Some(key),
            _ => false,
        }
    }
}

/// A lookup request: an optional anonymous key plus column filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    key: Option<Cell>,
    filters: Vec<(Column, Cell)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key matched against number (integer keys), HM, HM_short, HM_simple and Hall (text keys)
    pub fn key(key: impl Into<Cell>) -> Self {
        Self {
            key: Some(key.into()),
            filters: Vec::new(),
        }
    }

    /// Require a column to equal a value
    pub fn with(mut self, column: Column, value: impl Into<Cell>) -> Self {
        self.filters.push((column, value.into()));
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(key) = &self.key {
            parts.push(key.to_string());
        }
        for (column, value) in &self.filters {
            parts.push(format!("{column}={value}"));
        }
        if parts.is_empty() {
            f.write_str("<empty query>")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Diagnostic attached to a lookup that matched several rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ambiguity {
    pub query: String,
    /// `HM_numbered` of every candidate, the returned row first
    pub candidates: Vec<String>,
}

impl fmt::Display for Ambiguity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "query {} is ambiguous, choosing {} from: {}",
            self.query,
            self.candidates.first().map_or("", String::as_str),
            self.candidates.join(", ")
        )
    }
}

/// Result of a best-effort lookup.
#[derive(Debug, Clone)]
pub struct Lookup<'a> {
    pub row: &'a CatalogRow,
    pub ambiguity: Option<Ambiguity>,
}

impl Deref for Lookup<'_> {
    type Target = CatalogRow;

    fn deref(&self) -> &CatalogRow {
        self.row
    }
}

/// Ordered table of group settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCatalog {
    kind: CatalogKind,
    rows: Vec<CatalogRow>,
}

impl GroupCatalog {
    pub fn new(kind: CatalogKind, rows: Vec<CatalogRow>) -> Self {
        Self { kind, rows }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row with exactly this `n_c`
    pub fn by_nc(&self, n_c: &str) -> Option<&CatalogRow> {
        self.rows.iter().find(|row| row.n_c == n_c)
    }

    /// Every row matching the query, standard settings first.
    pub fn candidates(&self, query: &Query) -> Vec<&CatalogRow> {
        let mut matched: Vec<usize> = match &query.key {
            Some(key) => self.key_matches(key),
            None => (0..self.rows.len()).collect(),
        };
        matched.retain(|&index| {
            let row = &self.rows[index];
            query
                .filters
                .iter()
                .all(|(column, value)| row.cell(*column).as_ref() == Some(value))
        });
        matched.sort_by_key(|&index| !self.rows[index].standard);
        matched.into_iter().map(|index| &self.rows[index]).collect()
    }

    /// Best-effort lookup: the first candidate, with a diagnostic when several match.
    pub fn get(&self, query: &Query) -> Option<Lookup<'_>> {
        let candidates = self.candidates(query);
        let (&row, rest) = candidates.split_first()?;
        let ambiguity = (!rest.is_empty()).then(|| Ambiguity {
            query: query.to_string(),
            candidates: candidates.iter().map(|c| c.hm_numbered.clone()).collect(),
        });
        if let Some(ambiguity) = &ambiguity {
            warn!("{ambiguity}");
        }
        Some(Lookup { row, ambiguity })
    }

    /// Strict lookup by anonymous key.
    pub fn find(&self, key: impl Into<Cell>) -> Result<&CatalogRow, CatalogError> {
        let query = Query::key(key);
        self.get(&query)
            .map(|lookup| lookup.row)
            .ok_or_else(|| CatalogError::NotFound {
                query: query.to_string(),
            })
    }

    /// Union of key matches over the accessor columns, in priority order
    fn key_matches(&self, key: &Cell) -> Vec<usize> {
        let mut matched = Vec::new();
        for accessor in ACCESSORS {
            for (index, row) in self.rows.iter().enumerate() {
                if row.matches_key(accessor, key) && !matched.contains(&index) {
                    matched.push(index);
                }
            }
        }
        matched
    }
}

impl<'a> Index<&'a str> for GroupCatalog {
    type Output = CatalogRow;

    fn index(&self, key: &'a str) -> &CatalogRow {
        match self.find(key) {
            Ok(row) => row,
            Err(error) => panic!("{error}"),
        }
    }
}

impl Index<u32> for GroupCatalog {
    type Output = CatalogRow;

    fn index(&self, number: u32) -> &CatalogRow {
        match self.find(number) {
            Ok(row) => row,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<'a> IntoIterator for &'a GroupCatalog {
    type Item = &'a CatalogRow;
    type IntoIter = std::slice::Iter<'a, CatalogRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
