use std::{cmp::Ordering, fmt::Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{BpResult, Error};

mod parse;
mod part;

pub use part::PatternPart;

/// Widest template a pattern may describe, bounded by the `u64` inputs
/// it is matched against
pub const MAX_BIT_LENGTH: u32 = u64::BITS;

/// A named variable chunk of a compiled pattern.
/// `lsb` is the position of the chunk's least significant bit
/// counted from the least significant end of the whole template
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: String,
    pub lsb: u32,
    pub width: u32,
}

impl Field {
    pub fn mask(&self) -> u64 {
        width_mask(self.width) << self.lsb
    }
}

fn width_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// A compiled bit pattern.
/// The part list is laid out most significant part first.
/// Everything else is derived from it once in `Pattern::new`.
/// Serialized as its rendered string, e.g. `"0 rd{3} 1"`
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    parts: Vec<PatternPart>,
    bit_length: u32,
    value_mask: u64,
    care_mask: u64,
    specificity: u32,
    fields: Vec<Field>,
    rendered: String,
}

impl Pattern {
    pub fn new(parts: Vec<PatternPart>) -> BpResult<Self> {
        for (index, part) in parts.iter().enumerate() {
            part.validate(index)?;
        }

        // summed wide so absurd variable widths cannot wrap around
        let total: u64 = parts.iter().map(|p| p.width() as u64).sum();
        if total > MAX_BIT_LENGTH as u64 {
            return Err(Error::PatternTooWide(
                u32::try_from(total).unwrap_or(u32::MAX),
            ));
        }
        let bit_length = total as u32;

        let mut value_mask = 0;
        let mut care_mask = 0;
        let mut fields = vec![];
        let mut pos = bit_length;
        for part in parts.iter() {
            pos -= part.width();
            match part {
                PatternPart::Literal(bit) => {
                    care_mask |= 1u64 << pos;
                    value_mask |= (*bit as u64) << pos;
                }
                PatternPart::Variable { width, name } => fields.push(Field {
                    name: name.clone(),
                    lsb: pos,
                    width: *width,
                }),
            }
        }

        let rendered = parts
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<String>>()
            .join(" ");

        let pattern = Self {
            specificity: parts.iter().filter(|p| p.is_literal()).count() as u32,
            parts,
            bit_length,
            value_mask,
            care_mask,
            fields,
            rendered,
        };
        debug_assert_eq!(pattern.specificity, pattern.care_mask.count_ones());
        log::trace!(
            "compiled pattern '{}' (len {}, value {:#x}, care {:#x})",
            pattern.rendered,
            pattern.bit_length,
            pattern.value_mask,
            pattern.care_mask
        );
        Ok(pattern)
    }

    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }

    /// bit k is set iff template bit k is a literal 1
    pub fn value_mask(&self) -> u64 {
        self.value_mask
    }

    /// bit k is set iff template bit k is a literal
    pub fn care_mask(&self) -> u64 {
        self.care_mask
    }

    /// Number of literal bits. Higher means more constrained
    pub fn specificity(&self) -> u32 {
        self.specificity
    }

    /// Greater if self pins down more literal bits than other,
    /// Equal if both are equally specific
    pub fn compare_specificity(&self, other: &Self) -> Ordering {
        self.specificity.cmp(&other.specificity)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// first variable chunk with the given name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    fn position_bit(&self, pos: i64) -> Option<u64> {
        if pos >= 0 && pos < self.bit_length as i64 {
            Some(1u64 << pos)
        } else {
            None
        }
    }

    pub fn is_literal_zero(&self, pos: i64) -> bool {
        self.position_bit(pos)
            .map_or(false, |b| self.care_mask & b != 0 && self.value_mask & b == 0)
    }

    pub fn is_literal_one(&self, pos: i64) -> bool {
        self.position_bit(pos)
            .map_or(false, |b| self.care_mask & b != 0 && self.value_mask & b != 0)
    }

    pub fn is_variable(&self, pos: i64) -> bool {
        self.position_bit(pos)
            .map_or(false, |b| self.care_mask & b == 0)
    }

    /// Bits at or above `bit_length` are never part of the care mask
    /// and therefore never influence the result
    pub fn matches(&self, input: u64) -> bool {
        let diff = !(input ^ self.value_mask);
        diff & self.care_mask == self.care_mask
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rendered)
    }
}

impl TryFrom<Vec<PatternPart>> for Pattern {
    type Error = Error;

    fn try_from(parts: Vec<PatternPart>) -> BpResult<Self> {
        Self::new(parts)
    }
}

impl TryFrom<String> for Pattern {
    type Error = Error;

    fn try_from(s: String) -> BpResult<Self> {
        s.parse()
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.rendered
    }
}

#[allow(clippy::from_over_into)]
impl Into<Vec<PatternPart>> for Pattern {
    fn into(self) -> Vec<PatternPart> {
        self.parts
    }
}
