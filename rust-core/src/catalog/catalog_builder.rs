// Regeneration of catalog rows from raw (n_c, HM, Hall) tables

use std::collections::HashSet;

use log::info;

use super::catalog_columns::{Column, BUILD_ORDER};
use super::catalog_tables::RawRow;
use super::group_catalog::{CatalogKind, CatalogRow, GroupCatalog};
use crate::errors::CatalogError;
use crate::symmetries::{parse_hall_symbol, CrystalSystem, Group};

/// Build a catalog by deriving every column of every raw row.
///
/// This re-parses each Hall symbol and re-runs closure, so it is the slow
/// maintenance path; the bundled catalogs are loaded from JSON instead.
pub fn build_catalog(kind: CatalogKind, table: &[RawRow]) -> Result<GroupCatalog, CatalogError> {
    let mut standard_numbers = HashSet::new();
    let rows = table
        .iter()
        .enumerate()
        .map(|(index, raw)| build_row(index, raw, &mut standard_numbers))
        .collect::<Result<Vec<_>, _>>()?;
    info!("regenerated {} with {} rows", kind, rows.len());
    Ok(GroupCatalog::new(kind, rows))
}

fn build_row(
    index: usize,
    raw: &RawRow,
    standard_numbers: &mut HashSet<u32>,
) -> Result<CatalogRow, CatalogError> {
    let mut row = PartialRow::new(index);
    for column in BUILD_ORDER {
        row.derive(column, raw, standard_numbers)?;
    }
    row.finish()
}

/// Row under construction; columns are filled in dependency order.
#[derive(Default)]
struct PartialRow {
    index: usize,
    n_c: Option<String>,
    number: Option<u32>,
    setting: Option<String>,
    hm: Option<String>,
    hall: Option<String>,
    group: Option<Group>,
    hm_short: Option<String>,
    hm_simple: Option<String>,
    hm_numbered: Option<String>,
    standard: Option<bool>,
}

impl PartialRow {
    fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    fn missing(&self, column: Column) -> CatalogError {
        CatalogError::MissingColumn {
            column: column.name(),
            row: self.index,
        }
    }

    fn text(&self, column: Column) -> Result<&str, CatalogError> {
        let value = match column {
            Column::NC => self.n_c.as_deref(),
            Column::Hm => self.hm.as_deref(),
            Column::Hall => self.hall.as_deref(),
            Column::HmSimple => self.hm_simple.as_deref(),
            _ => None,
        };
        value.ok_or_else(|| self.missing(column))
    }

    fn compulsory(&self, value: &str, column: Column) -> Result<String, CatalogError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(self.missing(column));
        }
        Ok(value.to_string())
    }

    fn derive(
        &mut self,
        column: Column,
        raw: &RawRow,
        standard_numbers: &mut HashSet<u32>,
    ) -> Result<(), CatalogError> {
        let (n_c, hm, hall) = *raw;
        match column {
            Column::NC => self.n_c = Some(self.compulsory(n_c, column)?),
            Column::Hm => self.hm = Some(self.compulsory(hm, column)?),
            Column::Hall => self.hall = Some(self.compulsory(hall, column)?),
            Column::Number => {
                let n_c = self.text(Column::NC)?;
                let number = n_c
                    .split(':')
                    .next()
                    .and_then(|n| n.parse::<u32>().ok())
                    .ok_or_else(|| CatalogError::InvalidKey(n_c.to_string()))?;
                self.number = Some(number);
            }
            Column::Setting => {
                let setting = self.text(Column::NC)?.split_once(':').map_or("", |(_, s)| s);
                self.setting = Some(setting.to_string());
            }
            Column::Group => {
                let generators = parse_hall_symbol(self.text(Column::Hall)?)?;
                self.group = Some(Group::new(&generators)?);
            }
            Column::HmShort => self.hm_short = Some(self.text(Column::Hm)?.replace('_', "")),
            Column::HmSimple => {
                let group = self.group.as_ref().ok_or_else(|| self.missing(Column::Group))?;
                let monoclinic = group.system() == CrystalSystem::Monoclinic;
                self.hm_simple = Some(simplify_hm(self.text(Column::Hm)?, monoclinic));
            }
            Column::HmNumbered => {
                let numbered = format!(
                    "{} (#{})",
                    self.text(Column::HmSimple)?,
                    self.text(Column::NC)?
                );
                self.hm_numbered = Some(numbered);
            }
            Column::Standard => {
                let number = self.number.ok_or_else(|| self.missing(Column::Number))?;
                self.standard = Some(standard_numbers.insert(number));
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<CatalogRow, CatalogError> {
        let index = self.index;
        let missing = |column: Column| CatalogError::MissingColumn {
            column: column.name(),
            row: index,
        };
        Ok(CatalogRow {
            n_c: self.n_c.ok_or_else(|| missing(Column::NC))?,
            number: self.number.ok_or_else(|| missing(Column::Number))?,
            setting: self.setting.ok_or_else(|| missing(Column::Setting))?,
            hm: self.hm.ok_or_else(|| missing(Column::Hm))?,
            hall: self.hall.ok_or_else(|| missing(Column::Hall))?,
            group: self.group.ok_or_else(|| missing(Column::Group))?,
            hm_short: self.hm_short.ok_or_else(|| missing(Column::HmShort))?,
            hm_simple: self.hm_simple.ok_or_else(|| missing(Column::HmSimple))?,
            hm_numbered: self.hm_numbered.ok_or_else(|| missing(Column::HmNumbered))?,
            standard: self.standard.ok_or_else(|| missing(Column::Standard))?,
        })
    }
}

/// Setting-free HM symbol with screw underscores removed, e.g. `Ccce:1` → `Ccce`.
///
/// For monoclinic groups the placeholder `1`s of the unique-axis notation are
/// dropped as well, so `P12_1/c1` becomes `P21/c`.
pub fn simplify_hm(hm: &str, monoclinic: bool) -> String {
    let base = hm.split_once(':').map_or(hm, |(base, _)| base);
    let mut simple = String::with_capacity(base.len());
    let mut previous = None;
    for c in base.chars() {
        // unique-axis placeholders only; screw indices follow an underscore
        let placeholder = monoclinic && c == '1' && previous != Some('_');
        if !placeholder && c != '_' {
            simple.push(c);
        }
        previous = Some(c);
    }
    simple
}
