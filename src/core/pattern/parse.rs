use std::str::FromStr;

use crate::prelude::{BpResult, Error};

use super::{Pattern, PatternPart};

/// Parses the rendered pattern syntax back into a pattern.
/// Tokens are separated by whitespace:
/// - `0` and `1` are literal bits
/// - `name` is a single bit variable
/// - `name{w}` is a variable of width w
/// - `?` and `?{w}` are unnamed variables
impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> BpResult<Self> {
        let parts = s
            .split_whitespace()
            .map(parse_part)
            .collect::<BpResult<Vec<PatternPart>>>()?;
        Self::new(parts)
    }
}

fn parse_part(token: &str) -> BpResult<PatternPart> {
    match token {
        "0" => return Ok(PatternPart::zero()),
        "1" => return Ok(PatternPart::one()),
        _ => (),
    }

    let (name, width) = match token.split_once('{') {
        Some((name, rest)) => {
            let width = rest
                .strip_suffix('}')
                .ok_or_else(|| Error::Parse(format!("unterminated width in '{}'", token)))?;
            let width = width
                .parse::<u32>()
                .map_err(|e| Error::Parse(format!("bad width in '{}': {}", token, e)))?;
            (name, width)
        }
        None => (token, 1),
    };

    if name.is_empty() || name.contains(|c| c == '{' || c == '}') {
        return Err(Error::Parse(format!("bad variable name in '{}'", token)));
    }
    let name = if name == "?" { "" } else { name };
    Ok(PatternPart::var(width, name))
}
