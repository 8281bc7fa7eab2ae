use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{BpResult, Error};

/// A single element of a bit pattern.
/// Literals pin exactly one bit, variables cover a run of
/// `width` bits that never take part in matching
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatternPart {
    Literal(u8),
    Variable {
        width: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        name: String,
    },
}

impl PatternPart {
    pub fn zero() -> Self {
        Self::Literal(0)
    }

    pub fn one() -> Self {
        Self::Literal(1)
    }

    pub fn var(width: u32, name: &str) -> Self {
        Self::Variable {
            width,
            name: name.into(),
        }
    }

    /// number of template bits this part occupies
    pub fn width(&self) -> u32 {
        match self {
            Self::Literal(_) => 1,
            Self::Variable { width, .. } => *width,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    pub(crate) fn validate(&self, index: usize) -> BpResult<()> {
        match self {
            Self::Literal(0 | 1) => Ok(()),
            Self::Literal(bit) => Err(Error::InvalidPart {
                index,
                reason: format!("literal bit must be 0 or 1, got {}", bit),
            }),
            Self::Variable { width: 0, name } => Err(Error::InvalidPart {
                index,
                reason: format!("variable '{}' has zero width", name),
            }),
            Self::Variable { name, .. } if !is_valid_name(name) => Err(Error::InvalidPart {
                index,
                reason: format!("variable name '{}' cannot be rendered unambiguously", name),
            }),
            Self::Variable { .. } => Ok(()),
        }
    }
}

/// Names must survive rendering and parsing unchanged.
/// Empty names are allowed and render as `?`
fn is_valid_name(name: &str) -> bool {
    !matches!(name, "0" | "1" | "?")
        && !name.contains(|c: char| c.is_whitespace() || c == '{' || c == '}')
}

impl Display for PatternPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(bit) => write!(f, "{}", bit),
            Self::Variable { width, name } => {
                let name = if name.is_empty() { "?" } else { name.as_str() };
                if *width > 1 {
                    write!(f, "{}{{{}}}", name, width)
                } else {
                    write!(f, "{}", name)
                }
            }
        }
    }
}

impl From<bool> for PatternPart {
    fn from(bit: bool) -> Self {
        Self::Literal(bit as u8)
    }
}

#[cfg(test)]
mod test {
    use super::PatternPart;

    #[test]
    fn tokens() {
        assert_eq!("0", PatternPart::zero().to_string());
        assert_eq!("1", PatternPart::one().to_string());
        assert_eq!("rd", PatternPart::var(1, "rd").to_string());
        assert_eq!("rd{5}", PatternPart::var(5, "rd").to_string());
        assert_eq!("?", PatternPart::var(1, "").to_string());
        assert_eq!("?{3}", PatternPart::var(3, "").to_string());
    }

    #[test]
    fn validation() {
        assert!(PatternPart::Literal(1).validate(0).is_ok());
        assert!(PatternPart::Literal(2).validate(0).is_err());
        assert!(PatternPart::var(0, "x").validate(3).is_err());
        assert!(PatternPart::var(64, "x").validate(3).is_ok());
        assert!(PatternPart::var(2, "").validate(0).is_ok());
    }

    #[test]
    fn names_that_look_like_other_tokens() {
        for name in ["0", "1", "?", "a b", "x{2}", "{", "}", "tab\there", " "] {
            assert!(
                PatternPart::var(1, name).validate(0).is_err(),
                "'{}' should be rejected",
                name
            );
        }
        for name in ["rd", "imm_lo", "01", "r0", "?x", "-"] {
            assert!(PatternPart::var(1, name).validate(0).is_ok());
        }
    }
}
