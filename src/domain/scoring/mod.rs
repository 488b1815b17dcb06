//! Scoring Module - Pure domain services for subtype classification.
//!
//! Turns a list of answered questions into a personality subtype result.
//!
//! # Components
//!
//! - `Answer` / `Intensity` - One answered question and its parsed strength
//! - `SubtypeAggregator` - Weighted score accumulation per subtype
//! - `SubtypeScores` - Insertion-ordered score mapping with ranking
//! - `SubtypeCatalog` - Description lookup with placeholder fallback
//! - `influential_answers` - Answers that contributed to the winner
//! - `ScoringResult` - The assembled result
//!
//! Everything here is synchronous and stateless: a fresh score mapping is
//! built on every call and nothing is retained between requests.

mod aggregator;
mod answer;
mod catalog;
mod errors;
mod influence;
mod result;

pub use aggregator::{RankedSubtype, SubtypeAggregator, SubtypeScores, INTENSITY_SCALE};
pub use answer::{Answer, Intensity};
pub use catalog::{SubtypeCatalog, SubtypeDescription, NOT_AVAILABLE};
pub use errors::ScoringError;
pub use influence::{influential_answers, InfluentialAnswer};
pub use result::{score_answers, ScoringResult};
