use std::collections::{HashMap, HashSet};
use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::symmetry_operations::Operation;

/// The seven crystal systems.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CrystalSystem {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Hexagonal,
    Cubic,
}

impl CrystalSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrystalSystem::Triclinic => "triclinic",
            CrystalSystem::Monoclinic => "monoclinic",
            CrystalSystem::Orthorhombic => "orthorhombic",
            CrystalSystem::Tetragonal => "tetragonal",
            CrystalSystem::Trigonal => "trigonal",
            CrystalSystem::Hexagonal => "hexagonal",
            CrystalSystem::Cubic => "cubic",
        }
    }
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identify the crystal system from the folds and axis directions of a set of operations.
pub fn identify_crystal_system<'a>(
    operations: impl IntoIterator<Item = &'a Operation>,
) -> CrystalSystem {
    // Collect distinct axis directions per fold
    let mut axes: HashMap<u32, HashSet<Vector3<i32>>> = HashMap::new();
    for operation in operations {
        if let Some(axis) = operation.axis() {
            axes.entry(operation.fold()).or_default().insert(axis);
        }
    }
    let count = |fold: u32| axes.get(&fold).map_or(0, HashSet::len);

    match (count(6), count(4), count(3), count(2)) {
        (n6, _, _, _) if n6 > 0 => CrystalSystem::Hexagonal,
        (_, _, n3, _) if n3 > 1 => CrystalSystem::Cubic,
        (_, _, 1, _) => CrystalSystem::Trigonal,
        (_, n4, _, _) if n4 > 0 => CrystalSystem::Tetragonal,
        (_, _, _, n2) if n2 > 1 => CrystalSystem::Orthorhombic,
        (_, _, _, 1) => CrystalSystem::Monoclinic,
        _ => CrystalSystem::Triclinic,
    }
}
