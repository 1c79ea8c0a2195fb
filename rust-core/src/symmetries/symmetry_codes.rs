// Coordinate-triplet codes for symmetry operations, e.g. "-x+1/2,y,-z+1/2"

use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix3, Vector3};

use super::symmetry_operations::{
    decimal_to_24ths, gcd, BoundedOperation, Operation, PointOperation,
};
use super::symmetry_parsing::{failure_point, triplet, Term};
use crate::config::TRANSLATION_DENOMINATOR;
use crate::errors::ParseError;

const D: i32 = TRANSLATION_DENOMINATOR;
const VARIABLES: [char; 3] = ['x', 'y', 'z'];

impl Operation {
    /// Parse an ITC coordinate triplet.
    ///
    /// Coefficients may carry integer multipliers (`2x`), constants may be
    /// integers, fractions (`1/3`) or decimals (`0.25`) in any position of the
    /// row. Whitespace and case are ignored.
    pub fn from_code(code: &str) -> Result<Self, ParseError> {
        let compact: String = code
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        let malformed = |segment: &str| ParseError::OperationCode {
            code: code.to_string(),
            segment: segment.to_string(),
        };
        let rows = match triplet(&compact) {
            Ok((_, rows)) => rows,
            Err(error) => {
                let rest = failure_point(error).unwrap_or(&compact);
                let segment = rest.split(',').next().unwrap_or(rest);
                return Err(malformed(segment));
            }
        };

        let mut tf = Matrix3::zeros();
        let mut tl24 = Vector3::zeros();
        for (r, terms) in rows.iter().enumerate() {
            for term in terms {
                match *term {
                    Term::Variable {
                        negative,
                        multiplier,
                        axis,
                    } => {
                        let magnitude = match multiplier {
                            Some(text) => text.parse::<i32>().map_err(|_| malformed(text))?,
                            None => 1,
                        };
                        let coefficient = if negative { -magnitude } else { magnitude };
                        tf[(r, axis)] = i32::checked_add(tf[(r, axis)], coefficient)
                            .ok_or_else(|| malformed(multiplier.unwrap_or("")))?;
                    }
                    Term::Constant { negative, value } => {
                        let magnitude = fraction_to_24ths(value)?;
                        let translation = if negative { -magnitude } else { magnitude };
                        tl24[r] = i32::checked_add(tl24[r], translation)
                            .ok_or_else(|| ParseError::Fraction {
                                value: value.to_string(),
                            })?;
                    }
                }
            }
        }
        Operation::checked(tf, tl24)
    }

    /// Canonical ITC triplet, the inverse of [`Operation::from_code`].
    pub fn code(&self) -> String {
        let tf = self.tf();
        let tl24 = self.tl24();
        (0..3)
            .map(|r| format_row([tf[(r, 0)], tf[(r, 1)], tf[(r, 2)]], tl24[r]))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// `"1/3"`, `"2"` or `"0.25"` as a count of 24ths
fn fraction_to_24ths(text: &str) -> Result<i32, ParseError> {
    let fraction_error = || ParseError::Fraction {
        value: text.to_string(),
    };
    match text.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: i32 = numerator.parse().map_err(|_| fraction_error())?;
            let denominator: i32 = denominator.parse().map_err(|_| fraction_error())?;
            let scaled = numerator.checked_mul(D).ok_or_else(fraction_error)?;
            if denominator == 0 || scaled % denominator != 0 {
                return Err(fraction_error());
            }
            Ok(scaled / denominator)
        }
        None => {
            let value: f64 = text.parse().map_err(|_| fraction_error())?;
            decimal_to_24ths(value)
        }
    }
}

fn format_row(coefficients: [i32; 3], translation24: i32) -> String {
    let mut out = String::new();
    for (coefficient, variable) in coefficients.into_iter().zip(VARIABLES) {
        if coefficient == 0 {
            continue;
        }
        push_sign(&mut out, coefficient);
        if coefficient.unsigned_abs() != 1 {
            out.push_str(&coefficient.unsigned_abs().to_string());
        }
        out.push(variable);
    }
    if translation24 != 0 {
        push_sign(&mut out, translation24);
        out.push_str(&format_fraction(translation24.unsigned_abs()));
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

fn push_sign(out: &mut String, value: i32) {
    if value < 0 {
        out.push('-');
    } else if !out.is_empty() {
        out.push('+');
    }
}

fn format_fraction(numerator24: u32) -> String {
    let divisor = gcd(numerator24, D as u32);
    let (numerator, denominator) = (numerator24 / divisor, D as u32 / divisor);
    if denominator == 1 {
        numerator.to_string()
    } else {
        format!("{numerator}/{denominator}")
    }
}

// ======================== STRING CONVERSIONS ========================

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl FromStr for Operation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::from_code(s)
    }
}

impl TryFrom<String> for Operation {
    type Error = ParseError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Operation::from_code(&code)
    }
}

impl From<Operation> for String {
    fn from(operation: Operation) -> Self {
        operation.code()
    }
}

impl FromStr for BoundedOperation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::from_code(s).map(BoundedOperation::new)
    }
}

impl TryFrom<String> for BoundedOperation {
    type Error = ParseError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<BoundedOperation> for String {
    fn from(operation: BoundedOperation) -> Self {
        operation.code()
    }
}

impl FromStr for PointOperation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::from_code(s).map(|operation| PointOperation::from_operation(&operation))
    }
}

impl TryFrom<String> for PointOperation {
    type Error = ParseError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<PointOperation> for String {
    fn from(operation: PointOperation) -> Self {
        operation.code()
    }
}
