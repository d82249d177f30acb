use std::fmt;

use serde::{Deserialize, Serialize};

use crate::offset::Offset;

/// Summed absolute difference between two alignments, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AlignmentError {
    pub x: f64,
    pub y: f64,
    /// Number of offset pairs that were compared.
    pub pairs: usize,
}

impl AlignmentError {
    /// Mean error per compared pair. Zero pairs gives zero error.
    #[must_use]
    pub fn average(&self) -> Self {
        if self.pairs == 0 {
            return Self::default();
        }
        let n = self.pairs as f64;
        Self {
            x: self.x / n,
            y: self.y / n,
            pairs: self.pairs,
        }
    }
}

impl fmt::Display for AlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", float_text(self.x), float_text(self.y))
    }
}

/// Shortest round-trip text of `value`, with a signed two-digit exponent
/// (`1e+16`, `2.5e-07`) and `1.0` for whole numbers.
fn float_text(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Compares two alignments offset by offset.
///
/// Offsets are paired by position only; when one alignment is longer its
/// trailing offsets are ignored.
#[must_use]
pub fn compare(first: &[Offset], second: &[Offset]) -> AlignmentError {
    first
        .iter()
        .zip(second)
        .fold(AlignmentError::default(), |acc, (a, b)| AlignmentError {
            x: acc.x + (a.x - b.x).abs(),
            y: acc.y + (a.y - b.y).abs(),
            pairs: acc.pairs + 1,
        })
}
