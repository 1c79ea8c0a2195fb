use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use super::symmetry_operations::Operation;
use super::symmetry_parsing::{failure_point, hall_symbol, ClauseItem, RawClause};
use crate::config::{MAX_HALL_GENERATORS, ORIGIN_SHIFT_DENOMINATOR, TRANSLATION_DENOMINATOR};
use crate::errors::ParseError;

const D: i32 = TRANSLATION_DENOMINATOR;

/// Lattice symbol of a Hall symbol, selecting the centering translations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HallLattice {
    P,
    A,
    B,
    C,
    I,
    /// Rhombohedral, obverse setting
    R,
    S,
    T,
    F,
}

impl HallLattice {
    pub(crate) fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'p' => HallLattice::P,
            'a' => HallLattice::A,
            'b' => HallLattice::B,
            'c' => HallLattice::C,
            'i' => HallLattice::I,
            'r' => HallLattice::R,
            's' => HallLattice::S,
            't' => HallLattice::T,
            'f' => HallLattice::F,
            _ => return None,
        })
    }

    pub fn letter(&self) -> char {
        match self {
            HallLattice::P => 'P',
            HallLattice::A => 'A',
            HallLattice::B => 'B',
            HallLattice::C => 'C',
            HallLattice::I => 'I',
            HallLattice::R => 'R',
            HallLattice::S => 'S',
            HallLattice::T => 'T',
            HallLattice::F => 'F',
        }
    }

    /// Non-trivial centering translations in 24ths
    pub fn centering_translations(&self) -> Vec<Vector3<i32>> {
        let (h, t1, t2) = (D / 2, D / 3, 2 * D / 3);
        match self {
            HallLattice::P => vec![],
            HallLattice::A => vec![Vector3::new(0, h, h)],
            HallLattice::B => vec![Vector3::new(h, 0, h)],
            HallLattice::C => vec![Vector3::new(h, h, 0)],
            HallLattice::I => vec![Vector3::new(h, h, h)],
            HallLattice::R => vec![Vector3::new(t2, t1, t1), Vector3::new(t1, t2, t2)],
            HallLattice::S => vec![Vector3::new(t1, t1, t2), Vector3::new(t2, t2, t1)],
            HallLattice::T => vec![Vector3::new(t1, t2, t1), Vector3::new(t2, t1, t2)],
            HallLattice::F => vec![
                Vector3::new(0, h, h),
                Vector3::new(h, 0, h),
                Vector3::new(h, h, 0),
            ],
        }
    }

    /// Centering operations, identity first
    pub fn centering_operations(&self) -> Vec<Operation> {
        std::iter::once(Operation::identity())
            .chain(self.centering_translations().into_iter().map(Operation::translation))
            .collect()
    }
}

/// Axis symbol as written in a Hall clause.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HallAxis {
    X,
    Y,
    Z,
    /// `'`: face diagonal `b-c`, `a-c` or `a-b` relative to the preceding axis
    Prime,
    /// `"`: face diagonal `b+c`, `a+c` or `a+b` relative to the preceding axis
    DoublePrime,
    /// `*`: body diagonal
    Star,
}

impl HallAxis {
    pub(crate) fn from_symbol(symbol: char) -> Option<Self> {
        Some(match symbol {
            'x' => HallAxis::X,
            'y' => HallAxis::Y,
            'z' => HallAxis::Z,
            '\'' => HallAxis::Prime,
            '"' => HallAxis::DoublePrime,
            '*' => HallAxis::Star,
            _ => return None,
        })
    }

    pub fn symbol(&self) -> char {
        match self {
            HallAxis::X => 'x',
            HallAxis::Y => 'y',
            HallAxis::Z => 'z',
            HallAxis::Prime => '\'',
            HallAxis::DoublePrime => '"',
            HallAxis::Star => '*',
        }
    }
}

/// Principal lattice direction a face-diagonal axis is measured against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Principal {
    X,
    Y,
    Z,
}

/// Fully resolved rotation axis of a clause.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    Along(Principal),
    Prime(Principal),
    DoublePrime(Principal),
    BodyDiagonal,
}

impl RotationAxis {
    /// Lattice direction of the axis, used for screw translations
    pub fn direction(&self) -> Vector3<i32> {
        match self {
            RotationAxis::Along(Principal::X) => Vector3::new(1, 0, 0),
            RotationAxis::Along(Principal::Y) => Vector3::new(0, 1, 0),
            RotationAxis::Along(Principal::Z) => Vector3::new(0, 0, 1),
            RotationAxis::Prime(Principal::X) => Vector3::new(0, 1, -1),
            RotationAxis::Prime(Principal::Y) => Vector3::new(1, 0, -1),
            RotationAxis::Prime(Principal::Z) => Vector3::new(1, -1, 0),
            RotationAxis::DoublePrime(Principal::X) => Vector3::new(0, 1, 1),
            RotationAxis::DoublePrime(Principal::Y) => Vector3::new(1, 0, 1),
            RotationAxis::DoublePrime(Principal::Z) => Vector3::new(1, 1, 0),
            RotationAxis::BodyDiagonal => Vector3::new(1, 1, 1),
        }
    }

    /// Proper rotation matrix for the given fold, when the axis admits it.
    pub fn rotation(&self, fold: u32) -> Option<Matrix3<i32>> {
        use Principal::{X, Y, Z};
        use RotationAxis::{Along, BodyDiagonal, DoublePrime, Prime};

        #[rustfmt::skip]
        let matrix = match (self, fold) {
            (_, 1) => Matrix3::identity(),
            (Along(X), 2) => Matrix3::new(1, 0, 0, 0, -1, 0, 0, 0, -1),
            (Along(Y), 2) => Matrix3::new(-1, 0, 0, 0, 1, 0, 0, 0, -1),
            (Along(Z), 2) => Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1),
            (Along(X), 3) => Matrix3::new(1, 0, 0, 0, 0, -1, 0, 1, -1),
            (Along(Y), 3) => Matrix3::new(-1, 0, 1, 0, 1, 0, -1, 0, 0),
            (Along(Z), 3) => Matrix3::new(0, -1, 0, 1, -1, 0, 0, 0, 1),
            (Along(X), 4) => Matrix3::new(1, 0, 0, 0, 0, -1, 0, 1, 0),
            (Along(Y), 4) => Matrix3::new(0, 0, 1, 0, 1, 0, -1, 0, 0),
            (Along(Z), 4) => Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1),
            (Along(X), 6) => Matrix3::new(1, 0, 0, 0, 1, -1, 0, 1, 0),
            (Along(Y), 6) => Matrix3::new(0, 0, 1, 0, 1, 0, -1, 0, 1),
            (Along(Z), 6) => Matrix3::new(1, -1, 0, 1, 0, 0, 0, 0, 1),
            (Prime(X), 2) => Matrix3::new(-1, 0, 0, 0, 0, -1, 0, -1, 0),
            (Prime(Y), 2) => Matrix3::new(0, 0, -1, 0, -1, 0, -1, 0, 0),
            (Prime(Z), 2) => Matrix3::new(0, -1, 0, -1, 0, 0, 0, 0, -1),
            (DoublePrime(X), 2) => Matrix3::new(-1, 0, 0, 0, 0, 1, 0, 1, 0),
            (DoublePrime(Y), 2) => Matrix3::new(0, 0, 1, 0, -1, 0, 1, 0, 0),
            (DoublePrime(Z), 2) => Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, -1),
            (BodyDiagonal, 3) => Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0),
            _ => return None,
        };
        Some(matrix)
    }
}

/// Translation letters of a Hall clause.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HallTranslation {
    A,
    B,
    C,
    N,
    U,
    V,
    W,
    D,
}

impl HallTranslation {
    pub(crate) fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'a' => HallTranslation::A,
            'b' => HallTranslation::B,
            'c' => HallTranslation::C,
            'n' => HallTranslation::N,
            'u' => HallTranslation::U,
            'v' => HallTranslation::V,
            'w' => HallTranslation::W,
            'd' => HallTranslation::D,
            _ => return None,
        })
    }

    pub fn letter(&self) -> char {
        match self {
            HallTranslation::A => 'a',
            HallTranslation::B => 'b',
            HallTranslation::C => 'c',
            HallTranslation::N => 'n',
            HallTranslation::U => 'u',
            HallTranslation::V => 'v',
            HallTranslation::W => 'w',
            HallTranslation::D => 'd',
        }
    }

    /// Translation vector in 24ths
    pub fn vector24(&self) -> Vector3<i32> {
        let (h, q) = (D / 2, D / 4);
        match self {
            HallTranslation::A => Vector3::new(h, 0, 0),
            HallTranslation::B => Vector3::new(0, h, 0),
            HallTranslation::C => Vector3::new(0, 0, h),
            HallTranslation::N => Vector3::new(h, h, h),
            HallTranslation::U => Vector3::new(q, 0, 0),
            HallTranslation::V => Vector3::new(0, q, 0),
            HallTranslation::W => Vector3::new(0, 0, q),
            HallTranslation::D => Vector3::new(q, q, q),
        }
    }
}

/// One rotation clause such as `-4bd` or `2"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HallClause {
    pub improper: bool,
    pub fold: u32,
    /// Axis as written, `None` when it was implied
    pub written_axis: Option<HallAxis>,
    /// Resolved axis, `None` only for the 1-fold clause
    pub axis: Option<RotationAxis>,
    pub screw: u32,
    pub translations: Vec<HallTranslation>,
}

impl HallClause {
    /// Generator operation encoded by the clause
    pub fn operation(&self) -> Operation {
        let rotation = self
            .axis
            .and_then(|axis| axis.rotation(self.fold))
            .unwrap_or_else(Matrix3::identity);
        let screw = match self.axis {
            Some(axis) if self.screw > 0 => {
                axis.direction() * (self.screw as i32 * D / self.fold as i32)
            }
            _ => Vector3::zeros(),
        };
        let translation = self
            .translations
            .iter()
            .fold(screw, |sum, letter| sum + letter.vector24());
        let rotation = if self.improper { -rotation } else { rotation };
        Operation::new(rotation, translation)
    }
}

impl HallClause {
    /// Validate the items of a written clause; the axis is resolved later.
    fn from_raw(raw: &RawClause<'_>) -> Option<Self> {
        let mut clause = HallClause {
            improper: raw.improper,
            fold: raw.fold,
            written_axis: None,
            axis: None,
            screw: 0,
            translations: Vec::new(),
        };
        for item in &raw.items {
            match *item {
                ClauseItem::Axis(axis) => {
                    if clause.written_axis.replace(axis).is_some() {
                        return None;
                    }
                }
                ClauseItem::Screw(screw) => {
                    if clause.screw != 0 || screw == 0 || screw >= raw.fold {
                        return None;
                    }
                    clause.screw = screw;
                }
                ClauseItem::Translation(letter) => clause.translations.push(letter),
            }
        }
        Some(clause)
    }
}

impl fmt::Display for HallClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.improper {
            write!(f, "-")?;
        }
        write!(f, "{}", self.fold)?;
        if self.screw > 0 {
            write!(f, "{}", self.screw)?;
        }
        if let Some(axis) = self.written_axis {
            write!(f, "{}", axis.symbol())?;
        }
        for letter in &self.translations {
            write!(f, "{}", letter.letter())?;
        }
        Ok(())
    }
}

/// A parsed Hall symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HallSymbol {
    pub centrosymmetric: bool,
    pub lattice: HallLattice,
    pub clauses: Vec<HallClause>,
    /// Origin shift in twelfths, each component within one cell
    pub origin_shift: Option<Vector3<i32>>,
}

impl HallSymbol {
    /// Generators in order: centering operations, clause operations, inversion.
    ///
    /// With an origin shift `s` every generator is conjugated as `T(s)·op·T(−s)`.
    pub fn generators(&self) -> Vec<Operation> {
        let mut operations = self.lattice.centering_operations();
        operations.extend(self.clauses.iter().map(HallClause::operation));
        if self.centrosymmetric {
            operations.push(Operation::inversion());
        }
        if let Some(shift) = self.origin_shift {
            let shift24 = shift * (D / ORIGIN_SHIFT_DENOMINATOR);
            let forward = Operation::translation(shift24);
            let backward = Operation::translation(-shift24);
            operations = operations
                .into_iter()
                .map(|operation| forward * operation * backward)
                .collect();
        }
        operations
    }
}

impl FromStr for HallSymbol {
    type Err = ParseError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        let error = |segment: &str| ParseError::HallSymbol {
            symbol: symbol.to_string(),
            segment: segment.to_string(),
        };

        let normalized = symbol.trim().to_lowercase().replace('_', " ");
        let raw = match hall_symbol(&normalized) {
            Ok((_, raw)) => raw,
            Err(failure) => {
                let rest = failure_point(failure).unwrap_or("");
                return Err(error(&failing_segment(symbol, &normalized, rest)));
            }
        };
        let shift_in_cell = |shift: &Vector3<i32>| {
            shift.iter().all(|c| c.abs() <= ORIGIN_SHIFT_DENOMINATOR)
        };
        if !raw.origin_shift.as_ref().map_or(true, shift_in_cell) {
            let shift = normalized.find('(').map_or("", |open| &normalized[open..]);
            return Err(error(shift.trim()));
        }
        if raw.clauses.len() > MAX_HALL_GENERATORS {
            return Err(error(raw.clauses[MAX_HALL_GENERATORS].text));
        }

        let mut clauses: Vec<HallClause> = Vec::with_capacity(raw.clauses.len());
        let mut previous_fold: Option<u32> = None;
        let mut previous_axis: Option<RotationAxis> = None;
        for (index, written) in raw.clauses.iter().enumerate() {
            let mut clause = HallClause::from_raw(written).ok_or_else(|| error(written.text))?;
            if clause.fold != 1 {
                let written_axis = clause
                    .written_axis
                    .or_else(|| implied_axis(index, clause.fold, previous_fold))
                    .ok_or_else(|| error(written.text))?;
                let axis = resolve_axis(written_axis, previous_axis);
                if axis.rotation(clause.fold).is_none() {
                    return Err(error(written.text));
                }
                clause.axis = Some(axis);
                previous_axis = Some(axis);
            }
            previous_fold = Some(clause.fold);
            clauses.push(clause);
        }

        Ok(HallSymbol {
            centrosymmetric: raw.centrosymmetric,
            lattice: raw.lattice,
            clauses,
            origin_shift: raw.origin_shift,
        })
    }
}

impl fmt::Display for HallSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.centrosymmetric {
            write!(f, "-")?;
        }
        write!(f, "{}", self.lattice.letter())?;
        for clause in &self.clauses {
            write!(f, " {clause}")?;
        }
        if let Some(shift) = self.origin_shift {
            write!(f, " ({} {} {})", shift[0], shift[1], shift[2])?;
        }
        Ok(())
    }
}

/// Parse a Hall symbol straight into its generator operations.
pub fn parse_hall_symbol(symbol: &str) -> Result<Vec<Operation>, ParseError> {
    Ok(symbol.parse::<HallSymbol>()?.generators())
}

/// Case, underscore and whitespace insensitive form used for matching Hall symbols.
pub fn normalize_hall_symbol(symbol: &str) -> String {
    symbol
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Axis a clause takes when none is written.
fn implied_axis(index: usize, fold: u32, previous_fold: Option<u32>) -> Option<HallAxis> {
    match (index, fold, previous_fold) {
        (0, _, _) => Some(HallAxis::Z),
        (1, 2, Some(2 | 4)) => Some(HallAxis::X),
        (1, 2, Some(3 | 6)) => Some(HallAxis::Prime),
        (2, 3, _) => Some(HallAxis::Star),
        _ => None,
    }
}

fn resolve_axis(written: HallAxis, previous: Option<RotationAxis>) -> RotationAxis {
    // face diagonals refer to the preceding principal axis, c after a body diagonal
    let reference = match previous {
        Some(
            RotationAxis::Along(principal)
            | RotationAxis::Prime(principal)
            | RotationAxis::DoublePrime(principal),
        ) => principal,
        _ => Principal::Z,
    };
    match written {
        HallAxis::X => RotationAxis::Along(Principal::X),
        HallAxis::Y => RotationAxis::Along(Principal::Y),
        HallAxis::Z => RotationAxis::Along(Principal::Z),
        HallAxis::Prime => RotationAxis::Prime(reference),
        HallAxis::DoublePrime => RotationAxis::DoublePrime(reference),
        HallAxis::Star => RotationAxis::BodyDiagonal,
    }
}

/// Whitespace-delimited token around the point where parsing stopped.
///
/// Failures inside the origin shift report the whole parenthesized part,
/// and running out of input reports the symbol as written.
fn failing_segment(symbol: &str, normalized: &str, rest: &str) -> String {
    if rest.is_empty() {
        return symbol.trim().to_string();
    }
    let offset = normalized.len() - rest.len();
    if let Some(open) = normalized.find('(').filter(|open| *open <= offset) {
        return normalized[open..].trim().to_string();
    }
    let start = normalized[..offset]
        .rfind(char::is_whitespace)
        .map_or(0, |space| space + 1);
    let end = rest.find(char::is_whitespace).map_or(normalized.len(), |space| offset + space);
    normalized[start..end].to_string()
}
