pub mod error;
pub mod group;
pub mod pattern;
#[cfg(feature = "serde")]
pub mod table;
