//! Subtype Aggregator - Weighted score accumulation.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::cmp::Ordering;

use super::{Answer, ScoringError};

/// Fixed divisor normalising an intensity to a 0..1 factor.
///
/// Intensities are expected on a 0-5 scale; the divisor is part of the
/// scoring formula and is not derived from any configured maximum.
pub const INTENSITY_SCALE: f64 = 5.0;

/// Accumulated score per subtype, in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtypeScores {
    entries: Vec<(String, f64)>,
}

impl SubtypeScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `subtype`, starting from zero on first encounter.
    pub fn add(&mut self, subtype: &str, amount: f64) {
        match self.entries.iter_mut().find(|(name, _)| name == subtype) {
            Some((_, score)) => *score += amount,
            None => self.entries.push((subtype.to_string(), amount)),
        }
    }

    pub fn get(&self, subtype: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == subtype)
            .map(|(_, score)| *score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(subtype, score)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Subtypes sorted by score, highest first.
    ///
    /// The sort is stable over first-encounter order, so tied subtypes
    /// keep the order in which they were first seen.
    pub fn ranking(&self) -> Vec<RankedSubtype> {
        let mut ranked: Vec<RankedSubtype> = self
            .entries
            .iter()
            .map(|(name, score)| RankedSubtype(name.clone(), *score))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }

    /// The top-ranked subtype, or `None` when nothing was scored.
    pub fn principal(&self) -> Option<String> {
        self.ranking().into_iter().next().map(|ranked| ranked.0)
    }
}

impl Serialize for SubtypeScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, score) in &self.entries {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

/// One ranking entry, serialized as a `[subtype, score]` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSubtype(pub String, pub f64);

/// Calculator for subtype scores.
pub struct SubtypeAggregator;

impl SubtypeAggregator {
    /// Accumulates `weight * intensity / 5` into every subtype of every answer.
    ///
    /// A multi-tag answer contributes its full weighted score to each tag;
    /// scores are never split between tags. Zero and negative weights are
    /// accepted as-is.
    ///
    /// # Errors
    ///
    /// Fails on the first answer whose response is not integer-like.
    pub fn aggregate(answers: &[Answer]) -> Result<SubtypeScores, ScoringError> {
        let mut scores = SubtypeScores::new();

        for answer in answers {
            let factor = answer.intensity()?.value() as f64 / INTENSITY_SCALE;
            for subtype in &answer.subtypes {
                scores.add(subtype, answer.weight * factor);
            }
        }

        Ok(scores)
    }
}
