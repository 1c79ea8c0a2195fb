use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Mul};

use nalgebra::{Matrix3, Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{FRACTION_TOLERANCE, MAX_FOLD, TRANSLATION_DENOMINATOR};
use crate::errors::ParseError;

const D: i32 = TRANSLATION_DENOMINATOR;

/// Geometric kind of a symmetry operation, decided from trace, determinant and glide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    Identity,
    Translation,
    Inversion,
    Rotoinversion,
    Reflection,
    Transflection,
    Rotation,
    Rototranslation,
}

/// Sense of rotation about the (sign-normalized) axis, defined for folds of 3 and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationSense {
    Positive,
    Negative,
}

/// A crystallographic symmetry operation: integer rotation part plus translation.
///
/// The translation is kept as integer multiples of 1/24 so that composition,
/// equality and reduction modulo the lattice are exact. Two operations are
/// equal when their matrices agree and their translations agree modulo 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Operation {
    /// Rotation part acting on fractional coordinates
    tf: Matrix3<i32>,
    /// Translation part in 24ths
    tl24: Vector3<i32>,
}

impl Operation {
    /// Create an operation from an integer matrix and a translation in 24ths.
    pub fn new(tf: Matrix3<i32>, tl24: Vector3<i32>) -> Self {
        Self { tf, tl24 }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros())
    }

    /// Create inversion through the origin
    pub fn inversion() -> Self {
        Self::new(-Matrix3::identity(), Vector3::zeros())
    }

    /// Create a pure translation, given in 24ths
    pub fn translation(tl24: Vector3<i32>) -> Self {
        Self::new(Matrix3::identity(), tl24)
    }

    /// Create an operation from a rotation matrix and a fractional translation.
    ///
    /// Each translation component must be a multiple of 1/24.
    pub fn from_pair(tf: Matrix3<i32>, tl: Vector3<f64>) -> Result<Self, ParseError> {
        let mut tl24 = Vector3::zeros();
        for i in 0..3 {
            tl24[i] = decimal_to_24ths(tl[i])?;
        }
        Self::checked(tf, tl24)
    }

    /// Create an operation from an augmented 4×4 matrix `[[W, t], [0, 1]]`.
    pub fn from_matrix(matrix: &Matrix4<f64>) -> Result<Self, ParseError> {
        let mut tf = Matrix3::zeros();
        for r in 0..3 {
            for c in 0..3 {
                let value = matrix[(r, c)];
                if (value - value.round()).abs() > FRACTION_TOLERANCE {
                    return Err(ParseError::NotUnimodular {
                        code: format!("{matrix}"),
                    });
                }
                tf[(r, c)] = value.round() as i32;
            }
        }
        let tl = Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);
        Self::from_pair(tf, tl)
    }

    /// Build an operation, rejecting rotation parts that are not crystallographic.
    ///
    /// Entries must lie in {-1, 0, 1}, the determinant must be ±1 and some
    /// power up to 6 must give the identity.
    pub(crate) fn checked(tf: Matrix3<i32>, tl24: Vector3<i32>) -> Result<Self, ParseError> {
        let operation = Self::new(tf, tl24);
        if !has_unit_entries(&tf) {
            return Err(ParseError::NotCrystallographic {
                code: operation.code(),
            });
        }
        if operation.det().abs() != 1 {
            return Err(ParseError::NotUnimodular {
                code: operation.code(),
            });
        }
        if !operation.is_crystallographic() {
            return Err(ParseError::NotCrystallographic {
                code: operation.code(),
            });
        }
        Ok(operation)
    }

    // ======================== RAW COMPONENTS ========================

    /// Rotation part
    pub fn tf(&self) -> Matrix3<i32> {
        self.tf
    }

    /// Translation part in 24ths
    pub fn tl24(&self) -> Vector3<i32> {
        self.tl24
    }

    /// Translation part as fractional coordinates
    pub fn tl(&self) -> Vector3<f64> {
        self.tl24.map(|t| t as f64 / D as f64)
    }

    pub fn det(&self) -> i32 {
        determinant(&self.tf)
    }

    pub fn trace(&self) -> i32 {
        self.tf[(0, 0)] + self.tf[(1, 1)] + self.tf[(2, 2)]
    }

    pub fn is_proper(&self) -> bool {
        self.det() > 0
    }

    /// Unit entries, determinant ±1 and a finite period of at most 6
    pub fn is_crystallographic(&self) -> bool {
        has_unit_entries(&self.tf)
            && self.det().abs() == 1
            && matrix_period(&self.tf).is_some()
    }

    /// Exact identity, including a zero (not merely integral) translation
    pub fn is_identity(&self) -> bool {
        self.tf == Matrix3::identity() && self.tl24 == Vector3::zeros()
    }

    // ======================== ALGEBRA ========================

    /// Inverse operation `(W⁻¹, −W⁻¹t)`.
    pub fn inverse(&self) -> Self {
        let inverse = inverse_matrix(&self.tf);
        Self::new(inverse, -(inverse * self.tl24))
    }

    /// Repeated composition; negative exponents compose the inverse.
    pub fn pow(&self, exponent: i32) -> Self {
        let base = if exponent < 0 { self.inverse() } else { *self };
        (0..exponent.unsigned_abs()).fold(Self::identity(), |power, _| power * base)
    }

    /// Coset representative with every translation component in [0, 1).
    pub fn bounded(&self) -> BoundedOperation {
        BoundedOperation::new(*self)
    }

    /// Rotation part of the reciprocal-space action: `(W⁻¹)ᵀ` with no translation.
    pub fn reciprocal(&self) -> PointOperation {
        PointOperation::new(inverse_matrix(&self.tf).transpose())
    }

    // ======================== CLASSIFICATION ========================

    pub fn typ(&self) -> OperationType {
        let det = self.det();
        match self.trace() {
            3 if self.has_glide() => OperationType::Translation,
            3 => OperationType::Identity,
            -3 => OperationType::Inversion,
            _ if det < 0 && !self.has_invariant_vector() => OperationType::Rotoinversion,
            _ if det < 0 && self.has_glide() => OperationType::Transflection,
            _ if det < 0 => OperationType::Reflection,
            _ if self.has_glide() => OperationType::Rototranslation,
            _ => OperationType::Rotation,
        }
    }

    /// Smallest n in 1..=6 with `(det·W)ⁿ = I`.
    ///
    /// # Panics
    /// If no such n exists, i.e. the rotation part is not crystallographic.
    pub fn fold(&self) -> u32 {
        match matrix_period(&self.proper_part()) {
            Some(fold) => fold,
            None => panic!("operation {} is not crystallographic", self.code()),
        }
    }

    /// Smallest n in 1..=6 for which the bounded `opⁿ` is the identity.
    ///
    /// # Panics
    /// If no such n exists, which for a valid operation cannot happen.
    pub fn order(&self) -> u32 {
        let bounded = self.bounded();
        let mut power = bounded;
        for n in 1..=MAX_FOLD {
            if power.is_identity() {
                return n;
            }
            power = power * bounded;
        }
        panic!("operation {} has no order within {}", self.code(), MAX_FOLD);
    }

    /// Intrinsic translation of the symmetry element in 24ths.
    ///
    /// The operation is applied until its rotation part becomes the identity
    /// and the accumulated translation is divided by that count. Operations
    /// taken from a space group always divide exactly. For hand-built
    /// operations such as `y+1/24,x,-z` the division is inexact and each
    /// component is truncated toward zero.
    ///
    /// # Panics
    /// If the rotation part has no period up to 6.
    pub fn glide24(&self) -> Vector3<i32> {
        let period = match matrix_period(&self.tf) {
            Some(period) => period as i32,
            None => panic!("operation {} is not crystallographic", self.code()),
        };
        let accumulated = self.pow(period).tl24;
        accumulated.map(|t| t / period)
    }

    /// Intrinsic translation of the symmetry element as fractional coordinates.
    pub fn glide(&self) -> Vector3<f64> {
        self.glide24().map(|t| t as f64 / D as f64)
    }

    /// Primitive integer direction of the rotation (or mirror-normal) axis.
    ///
    /// The direction spans the fixed space of `det·W` and is sign-normalized:
    /// positive component sum, or positive first non-zero component when the
    /// sum vanishes. Identity, translations and inversion have no axis.
    pub fn axis(&self) -> Option<Vector3<i32>> {
        let proper = self.proper_part();
        if proper == Matrix3::identity() {
            return None;
        }
        let shifted = proper - Matrix3::identity();
        let row = |i: usize| Vector3::new(shifted[(i, 0)], shifted[(i, 1)], shifted[(i, 2)]);
        [(0, 1), (0, 2), (1, 2)]
            .into_iter()
            .map(|(i, j)| row(i).cross(&row(j)))
            .find(|candidate| *candidate != Vector3::zeros())
            .map(normalize_direction)
    }

    /// Unit vector along [`Operation::axis`]
    pub fn orientation(&self) -> Option<Vector3<f64>> {
        self.axis().map(|axis| {
            let direction = axis.map(|x| x as f64);
            direction / direction.norm()
        })
    }

    /// Rotation sense about the normalized axis, for folds of 3 and above.
    pub fn sense(&self) -> Option<RotationSense> {
        if self.fold() < 3 {
            return None;
        }
        let axis = self.axis()?;
        let off_axis = [Vector3::x(), Vector3::y(), Vector3::z()]
            .into_iter()
            .find(|v| axis.cross(v) != Vector3::zeros())?;
        let image = self.proper_part() * off_axis;
        let volume = determinant(&Matrix3::from_columns(&[axis, off_axis, image]));
        Some(if volume > 0 {
            RotationSense::Positive
        } else {
            RotationSense::Negative
        })
    }

    /// Short crystallographic symbol such as `1`, `-1`, `2_1`, `3+`, `-4-`, `m` or `n`.
    pub fn name(&self) -> String {
        let sense = match self.sense() {
            Some(RotationSense::Positive) => "+",
            Some(RotationSense::Negative) => "-",
            None => "",
        };
        match self.typ() {
            OperationType::Identity => "1".to_string(),
            OperationType::Translation => "t".to_string(),
            OperationType::Inversion => "-1".to_string(),
            OperationType::Rotation => format!("{}{}", self.fold(), sense),
            OperationType::Rototranslation => {
                format!("{}_{}{}", self.fold(), self.screw_index(), sense)
            }
            OperationType::Rotoinversion => format!("-{}{}", self.fold(), sense),
            OperationType::Reflection => "m".to_string(),
            OperationType::Transflection => self.glide_letter().to_string(),
        }
    }

    // ======================== ACTION ========================

    /// Apply the operation to a single point in fractional coordinates.
    pub fn transform_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.tf.map(|x| x as f64) * point + self.tl()
    }

    /// Apply the operation to many points in fractional coordinates.
    pub fn transform(&self, points: &[Vector3<f64>]) -> Vec<Vector3<f64>> {
        let rotation = self.tf.map(|x| x as f64);
        let translation = self.tl();
        points.iter().map(|p| rotation * p + translation).collect()
    }

    /// Whether this operation forces the reflection `hkl` to be systematically absent.
    ///
    /// The reflection has to be invariant under the reciprocal operation and
    /// its phase shift `h·g` (with `g` the glide) must be non-integer.
    pub fn extincts(&self, hkl: &Vector3<i32>) -> bool {
        if self.tf.transpose() * hkl != *hkl {
            return false;
        }
        hkl.dot(&self.glide24()).rem_euclid(D) != 0
    }

    // ======================== HELPERS ========================

    fn proper_part(&self) -> Matrix3<i32> {
        let det = self.det();
        self.tf.map(|x| x * det)
    }

    fn has_invariant_vector(&self) -> bool {
        determinant(&(self.tf - Matrix3::identity())) == 0
    }

    fn has_glide(&self) -> bool {
        self.glide24().iter().any(|g| g.rem_euclid(D) != 0)
    }

    /// Screw index k in `N_k`, read from the glide along the axis.
    fn screw_index(&self) -> i32 {
        let (Some(axis), glide) = (self.axis(), self.glide24()) else {
            return 0;
        };
        let fold = self.fold() as i32;
        (0..3)
            .find(|&i| axis[i] != 0)
            .map(|i| (glide[i] / axis[i] * fold / D).rem_euclid(fold))
            .unwrap_or(0)
    }

    fn glide_letter(&self) -> char {
        let glide = self.glide24().map(|g| g.rem_euclid(D));
        let nonzero: Vec<usize> = (0..3).filter(|&i| glide[i] != 0).collect();
        match nonzero.as_slice() {
            [i] => ['a', 'b', 'c'][*i],
            _ if nonzero.iter().all(|&i| glide[i] == D / 2) => 'n',
            _ if nonzero.iter().all(|&i| glide[i] == D / 4 || glide[i] == 3 * D / 4) => 'd',
            _ => 'g',
        }
    }

    /// Canonical key `(W, t mod 1)` used for equality and hashing.
    fn key(&self) -> ([i32; 9], [i32; 3]) {
        let mut matrix = [0; 9];
        for (slot, value) in matrix.iter_mut().zip(self.tf.iter()) {
            *slot = *value;
        }
        let t = self.tl24.map(|t| t.rem_euclid(D));
        (matrix, [t[0], t[1], t[2]])
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Operation {}

impl Hash for Operation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Composition `A * B`: apply B first, then A.
impl Mul for Operation {
    type Output = Operation;

    fn mul(self, rhs: Operation) -> Operation {
        Operation::new(self.tf * rhs.tf, self.tf * rhs.tl24 + self.tl24)
    }
}

// ======================== BOUNDED OPERATION ========================

/// An operation whose translation lies in [0, 1): a coset representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoundedOperation(Operation);

impl BoundedOperation {
    pub fn new(operation: Operation) -> Self {
        Self(Operation::new(
            operation.tf,
            operation.tl24.map(|t| t.rem_euclid(D)),
        ))
    }

    pub fn unbounded(&self) -> Operation {
        self.0
    }
}

impl Deref for BoundedOperation {
    type Target = Operation;

    fn deref(&self) -> &Operation {
        &self.0
    }
}

impl Mul for BoundedOperation {
    type Output = BoundedOperation;

    fn mul(self, rhs: BoundedOperation) -> BoundedOperation {
        BoundedOperation::new(self.0 * rhs.0)
    }
}

impl From<BoundedOperation> for Operation {
    fn from(operation: BoundedOperation) -> Self {
        operation.0
    }
}

// ======================== POINT OPERATION ========================

/// An operation with exactly zero translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PointOperation(Operation);

impl PointOperation {
    pub fn new(tf: Matrix3<i32>) -> Self {
        Self(Operation::new(tf, Vector3::zeros()))
    }

    /// Drop the translation part of an operation
    pub fn from_operation(operation: &Operation) -> Self {
        Self::new(operation.tf)
    }
}

impl Deref for PointOperation {
    type Target = Operation;

    fn deref(&self) -> &Operation {
        &self.0
    }
}

impl Mul for PointOperation {
    type Output = PointOperation;

    fn mul(self, rhs: PointOperation) -> PointOperation {
        PointOperation::new(self.0.tf * rhs.0.tf)
    }
}

impl From<PointOperation> for Operation {
    fn from(operation: PointOperation) -> Self {
        operation.0
    }
}

impl fmt::Display for BoundedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for PointOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ======================== INTEGER MATRIX UTILITIES ========================

pub(crate) fn determinant(m: &Matrix3<i32>) -> i32 {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// Exact inverse of a unimodular matrix: `adj(W) / det(W) = adj(W) · det(W)`.
fn inverse_matrix(m: &Matrix3<i32>) -> Matrix3<i32> {
    let cofactor = |r: usize, c: usize| {
        let rows: Vec<usize> = (0..3).filter(|&i| i != r).collect();
        let cols: Vec<usize> = (0..3).filter(|&j| j != c).collect();
        let minor = m[(rows[0], cols[0])] * m[(rows[1], cols[1])]
            - m[(rows[0], cols[1])] * m[(rows[1], cols[0])];
        if (r + c) % 2 == 0 {
            minor
        } else {
            -minor
        }
    };
    let det = determinant(m);
    // adjugate is the transposed cofactor matrix
    Matrix3::from_fn(|r, c| cofactor(c, r) * det)
}

fn has_unit_entries(m: &Matrix3<i32>) -> bool {
    m.iter().all(|x| (-1..=1).contains(x))
}

/// Smallest n in 1..=MAX_FOLD with `Wⁿ = I`.
///
/// Powers are only taken of matrices with unit entries, which keeps every
/// intermediate product far from overflow.
fn matrix_period(m: &Matrix3<i32>) -> Option<u32> {
    if !has_unit_entries(m) {
        return None;
    }
    let mut power = *m;
    for n in 1..=MAX_FOLD {
        if power == Matrix3::identity() {
            return Some(n);
        }
        power *= m;
    }
    None
}

pub(crate) fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn normalize_direction(v: Vector3<i32>) -> Vector3<i32> {
    let divisor = gcd(gcd(v[0].unsigned_abs(), v[1].unsigned_abs()), v[2].unsigned_abs()).max(1);
    let reduced = v.map(|x| x / divisor as i32);
    let sum: i32 = reduced.iter().sum();
    let first = reduced.iter().copied().find(|x| *x != 0).unwrap_or(0);
    if sum < 0 || (sum == 0 && first < 0) {
        -reduced
    } else {
        reduced
    }
}

/// Convert a decimal translation to 24ths, failing when it is not a multiple of 1/24.
pub(crate) fn decimal_to_24ths(value: f64) -> Result<i32, ParseError> {
    let scaled = value * D as f64;
    if !scaled.is_finite()
        || scaled.abs() > i32::MAX as f64
        || (scaled - scaled.round()).abs() > FRACTION_TOLERANCE
    {
        return Err(ParseError::Fraction {
            value: value.to_string(),
        });
    }
    Ok(scaled.round() as i32)
}
