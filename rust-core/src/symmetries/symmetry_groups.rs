use std::collections::HashSet;

use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::crystal_systems::{identify_crystal_system, CrystalSystem};
use super::hall_symbols::parse_hall_symbol;
use super::symmetry_operations::{BoundedOperation, Operation, OperationType};
use crate::config::MAX_GROUP_ORDER;
use crate::errors::GroupConstructionError;

/// A finite crystallographic group, stored as bounded coset representatives.
///
/// Operations are kept in the order closure discovered them, starting with
/// the identity, but equality between groups ignores that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GroupRecord", into = "GroupRecord")]
pub struct Group {
    generators: Vec<BoundedOperation>,
    operations: Vec<BoundedOperation>,
}

/// Persisted form of a [`Group`]: both lists as operation codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRecord {
    pub generators: Vec<BoundedOperation>,
    pub operations: Vec<BoundedOperation>,
}

impl Group {
    /// Close a set of generators under composition.
    pub fn new(generators: &[Operation]) -> Result<Self, GroupConstructionError> {
        let mut unique = Vec::with_capacity(generators.len());
        let mut seen = HashSet::new();
        for generator in generators {
            let bounded = generator.bounded();
            if seen.insert(bounded) {
                unique.push(bounded);
            }
        }
        let operations = close(&unique)?;
        debug!(
            "closed {} generators into {} operations",
            unique.len(),
            operations.len()
        );
        Ok(Self {
            generators: unique,
            operations,
        })
    }

    /// Parse a Hall symbol and close its generators.
    pub fn from_hall(symbol: &str) -> crate::Result<Self> {
        let generators = parse_hall_symbol(symbol)?;
        Ok(Self::new(&generators)?)
    }

    /// Assemble a group whose operation list is already known to be closed.
    ///
    /// Closure is not re-run; only the order bound is enforced.
    pub fn from_closed_parts(
        generators: Vec<BoundedOperation>,
        operations: Vec<BoundedOperation>,
    ) -> Result<Self, GroupConstructionError> {
        if operations.len() > MAX_GROUP_ORDER {
            return Err(construction_error(&generators));
        }
        Ok(Self {
            generators,
            operations,
        })
    }

    // ======================== ACCESSORS ========================

    pub fn generators(&self) -> &[BoundedOperation] {
        &self.generators
    }

    pub fn operations(&self) -> &[BoundedOperation] {
        &self.operations
    }

    pub fn order(&self) -> usize {
        self.operations.len()
    }

    pub fn contains(&self, operation: &Operation) -> bool {
        self.operations.contains(&operation.bounded())
    }

    // ======================== CLASSIFICATION ========================

    pub fn system(&self) -> CrystalSystem {
        identify_crystal_system(self.operations.iter().map(|op| &**op))
    }

    pub fn is_centrosymmetric(&self) -> bool {
        self.operations.iter().any(|op| op.trace() == -3)
    }

    /// Only proper operations, so the group admits chiral structures
    pub fn is_enantiomorphic(&self) -> bool {
        self.operations.iter().all(|op| op.det() > 0)
    }

    /// Whether a single direction is left invariant by every operation.
    ///
    /// Inversion or any rotoinversion rules polarity out; otherwise all
    /// proper rotation axes have to be parallel.
    pub fn is_polar(&self) -> bool {
        let mut axes = HashSet::new();
        for op in &self.operations {
            if !op.is_proper() {
                if matches!(
                    op.typ(),
                    OperationType::Inversion | OperationType::Rotoinversion
                ) {
                    return false;
                }
                continue;
            }
            if let Some(axis) = op.axis() {
                axes.insert(axis);
            }
        }
        axes.len() <= 1
    }

    /// True if any operation forces the reflection to be absent
    pub fn is_extinct(&self, hkl: &Vector3<i32>) -> bool {
        self.operations.iter().any(|op| op.extincts(hkl))
    }

    // ======================== DERIVED GROUPS ========================

    /// Laue class: the group extended by inversion.
    pub fn lauefy(&self) -> Result<Self, GroupConstructionError> {
        let generators: Vec<Operation> = self
            .operations
            .iter()
            .map(|op| op.unbounded())
            .chain(std::iter::once(Operation::inversion()))
            .collect();
        Self::new(&generators)
    }

    /// Point group acting on Miller indices, generated by the reciprocal generators.
    pub fn reciprocate(&self) -> Result<Self, GroupConstructionError> {
        let generators: Vec<Operation> = self
            .generators
            .iter()
            .map(|op| op.reciprocal().into())
            .collect();
        Self::new(&generators)
    }
}

/// Breadth-first closure: every discovered element is multiplied by every generator.
///
/// Generators and products must stay crystallographic, so entries never grow
/// and the loop either closes or reports the group as infinite.
fn close(generators: &[BoundedOperation]) -> Result<Vec<BoundedOperation>, GroupConstructionError> {
    if !generators.iter().all(|generator| generator.is_crystallographic()) {
        return Err(construction_error(generators));
    }
    let identity = Operation::identity().bounded();
    let mut operations = vec![identity];
    let mut visited = HashSet::from([identity]);
    for generator in generators {
        if visited.insert(*generator) {
            operations.push(*generator);
        }
    }

    let mut cursor = 0;
    while cursor < operations.len() {
        let current = operations[cursor];
        for generator in generators {
            let product = current * *generator;
            // a non-crystallographic product cannot belong to a finite group
            if !product.is_crystallographic() {
                return Err(construction_error(generators));
            }
            if visited.insert(product) {
                operations.push(product);
                if operations.len() > MAX_GROUP_ORDER {
                    return Err(construction_error(generators));
                }
            }
        }
        cursor += 1;
    }
    Ok(operations)
}

fn construction_error(generators: &[BoundedOperation]) -> GroupConstructionError {
    GroupConstructionError {
        limit: MAX_GROUP_ORDER,
        generators: generators.iter().map(|op| op.code()).collect(),
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        let mine: HashSet<&BoundedOperation> = self.operations.iter().collect();
        self.order() == other.order() && other.operations.iter().all(|op| mine.contains(op))
    }
}

impl Eq for Group {}

impl TryFrom<GroupRecord> for Group {
    type Error = GroupConstructionError;

    fn try_from(record: GroupRecord) -> Result<Self, Self::Error> {
        Group::from_closed_parts(record.generators, record.operations)
    }
}

impl From<Group> for GroupRecord {
    fn from(group: Group) -> Self {
        GroupRecord {
            generators: group.generators,
            operations: group.operations,
        }
    }
}
