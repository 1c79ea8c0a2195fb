use std::fmt;

use serde::{Deserialize, Serialize};

pub const COLUMN_COUNT: usize = 10;

/// Columns of a catalog row.
///
/// Each column declares the columns it is derived from; [`BUILD_ORDER`] is a
/// topological order of these dependencies computed at compile time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Column {
    NC,
    Number,
    Setting,
    Hm,
    Hall,
    Group,
    HmShort,
    HmSimple,
    HmNumbered,
    Standard,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::NC,
        Column::Number,
        Column::Setting,
        Column::Hm,
        Column::Hall,
        Column::Group,
        Column::HmShort,
        Column::HmSimple,
        Column::HmNumbered,
        Column::Standard,
    ];

    /// Key of the column in the persisted table
    pub const fn name(self) -> &'static str {
        match self {
            Column::NC => "n_c",
            Column::Number => "number",
            Column::Setting => "setting",
            Column::Hm => "HM",
            Column::Hall => "Hall",
            Column::Group => "group",
            Column::HmShort => "HM_short",
            Column::HmSimple => "HM_simple",
            Column::HmNumbered => "HM_numbered",
            Column::Standard => "standard",
        }
    }

    pub const fn dependencies(self) -> &'static [Column] {
        match self {
            Column::NC | Column::Hm | Column::Hall => &[],
            Column::Number | Column::Setting => &[Column::NC],
            Column::Group => &[Column::Hall],
            Column::HmShort => &[Column::Hm],
            Column::HmSimple => &[Column::Hm, Column::Group],
            Column::HmNumbered => &[Column::HmSimple, Column::NC],
            Column::Standard => &[Column::Number],
        }
    }

    /// Columns that must come from the raw table rather than be derived
    pub const fn is_compulsory(self) -> bool {
        matches!(self, Column::NC | Column::Hm | Column::Hall)
    }

    pub fn is_accessor(self) -> bool {
        ACCESSORS.contains(&self)
    }

    const fn is_ready(self, placed: &[bool; COLUMN_COUNT]) -> bool {
        let dependencies = self.dependencies();
        let mut i = 0;
        while i < dependencies.len() {
            if !placed[dependencies[i] as usize] {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Columns an anonymous lookup key is matched against, highest priority first
pub const ACCESSORS: [Column; 5] = [
    Column::Number,
    Column::Hm,
    Column::HmShort,
    Column::HmSimple,
    Column::Hall,
];

/// Order in which row columns are derived.
pub const BUILD_ORDER: [Column; COLUMN_COUNT] = topological_order();

/// Kahn's algorithm over [`Column::dependencies`], evaluated at compile time.
const fn topological_order() -> [Column; COLUMN_COUNT] {
    let mut order = [Column::NC; COLUMN_COUNT];
    let mut placed = [false; COLUMN_COUNT];
    let mut count = 0;
    while count < COLUMN_COUNT {
        let mut progressed = false;
        let mut i = 0;
        while i < COLUMN_COUNT {
            let column = Column::ALL[i];
            if !placed[i] && column.is_ready(&placed) {
                placed[i] = true;
                order[count] = column;
                count += 1;
                progressed = true;
            }
            i += 1;
        }
        if !progressed {
            panic!("catalog column dependencies contain a cycle");
        }
    }
    order
}
