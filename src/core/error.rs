use thiserror::Error;

pub type BpResult<T> = Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid pattern part at index {index}: {reason}")]
    InvalidPart { index: usize, reason: String },
    #[error("Pattern is {0} bits wide, at most 64 bits are supported")]
    PatternTooWide(u32),
    /// Two matches share the highest specificity among all matches.
    /// Ties between less specific matches are not reported when a more
    /// specific match exists.
    #[error("Ambiguous match for {input:#x}: '{first}' and '{second}' both have specificity {specificity}")]
    AmbiguousMatch {
        input: u64,
        first: String,
        second: String,
        specificity: u32,
    },
    #[error("Unable to parse pattern: {0}")]
    Parse(String),
    #[cfg(feature = "serde")]
    #[error("Unable to write pattern table")]
    Ron(#[from] ron::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
