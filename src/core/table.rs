use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prelude::{BpResult, Error, Pattern, PatternGroup};

/// A single named encoding of a pattern table.
/// The pattern is stored in its rendered form
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TableEntry {
    pub name: String,
    pub pattern: Pattern,
}

/// A pattern table as stored in a ron file:
///
/// ```ron
/// (
///     entries: [
///         (name: "nop", pattern: "0 0 0 0"),
///         (name: "ld", pattern: "0 r{3}"),
///     ],
/// )
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternTable {
    #[serde(default)]
    pub entries: Vec<TableEntry>,
}

impl PatternTable {
    pub fn from_ron_str(s: &str) -> BpResult<Self> {
        ron::from_str(s).map_err(|e| Error::Parse(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> BpResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_ron_str(&data)
    }

    pub fn to_ron_string(&self) -> BpResult<String> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Build a group that yields the entry name for the winning pattern
    pub fn compile(&self) -> PatternGroup<String> {
        log::debug!("compiling pattern table with {} entries", self.entries.len());
        PatternGroup::with_data(
            self.entries
                .iter()
                .map(|e| (e.pattern.clone(), e.name.clone())),
        )
    }
}
