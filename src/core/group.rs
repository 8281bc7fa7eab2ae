use std::{cmp::Ordering, sync::Arc};

use crate::prelude::{BpResult, Error, Pattern};

/// A pattern together with the data the caller wants back
/// when this pattern wins a resolution, e.g. an opcode name
#[derive(Clone, Debug)]
pub struct Matcher<T = ()> {
    pub pattern: Arc<Pattern>,
    pub data: T,
}

impl<T> Matcher<T> {
    pub fn new(pattern: impl Into<Arc<Pattern>>, data: T) -> Self {
        Self {
            pattern: pattern.into(),
            data,
        }
    }

    pub fn is_match(&self, input: u64) -> bool {
        self.pattern.matches(input)
    }
}

/// A frozen set of patterns.
/// Resolution picks the single most specific matching pattern
/// and reports a conflict if that choice is not unique
#[derive(Clone, Debug)]
pub struct PatternGroup<T = ()> {
    matchers: Vec<Matcher<T>>,
}

impl<T> Default for PatternGroup<T> {
    fn default() -> Self {
        Self { matchers: vec![] }
    }
}

impl PatternGroup {
    pub fn new<P: Into<Arc<Pattern>>>(patterns: impl IntoIterator<Item = P>) -> Self {
        Self::with_data(patterns.into_iter().map(|p| (p, ())))
    }
}

impl<T> PatternGroup<T> {
    pub fn with_data<P: Into<Arc<Pattern>>>(entries: impl IntoIterator<Item = (P, T)>) -> Self {
        entries
            .into_iter()
            .map(|(p, data)| Matcher::new(p, data))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Matcher<T>> {
        self.matchers.iter()
    }

    /// All matchers whose pattern accepts the input, in group order
    pub fn matches(&self, input: u64) -> impl Iterator<Item = &Matcher<T>> {
        self.matchers.iter().filter(move |m| m.is_match(input))
    }

    /// Find the most specific pattern matching the input.
    /// Returns Ok(None) if nothing matches and an ambiguity error
    /// if two or more matches share the highest specificity.
    /// Ties between less specific matches are shadowed by the winner,
    /// so the outcome does not depend on the group's order
    pub fn resolve(&self, input: u64) -> BpResult<Option<&Matcher<T>>> {
        let mut matches = self.matches(input);
        let Some(mut champion) = matches.next() else {
            log::trace!("no pattern matches {:#x}", input);
            return Ok(None);
        };

        // a rival of equal specificity to the current champion
        let mut rival: Option<&Matcher<T>> = None;
        for m in matches {
            match m.pattern.compare_specificity(&champion.pattern) {
                Ordering::Greater => {
                    champion = m;
                    rival = None;
                }
                Ordering::Equal => {
                    rival.get_or_insert(m);
                }
                Ordering::Less => (),
            }
        }

        if let Some(rival) = rival {
            log::warn!(
                "ambiguous match for {:#x}: '{}' and '{}'",
                input,
                champion.pattern,
                rival.pattern
            );
            return Err(Error::AmbiguousMatch {
                input,
                first: champion.pattern.to_string(),
                second: rival.pattern.to_string(),
                specificity: champion.pattern.specificity(),
            });
        }

        log::trace!("{:#x} resolved to '{}'", input, champion.pattern);
        Ok(Some(champion))
    }
}

impl<T> FromIterator<Matcher<T>> for PatternGroup<T> {
    fn from_iter<I: IntoIterator<Item = Matcher<T>>>(iter: I) -> Self {
        let matchers: Vec<Matcher<T>> = iter.into_iter().collect();
        log::debug!("pattern group with {} patterns", matchers.len());
        Self { matchers }
    }
}

impl FromIterator<Pattern> for PatternGroup {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        Self::new(iter)
    }
}
