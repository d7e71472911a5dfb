//! Verdict evaluation: how many collected clues point at the accused.

use log::{debug, info};

use crate::case::clue_set::ClueSet;
use crate::case::suspect_index::SuspectIndex;
use crate::case::CaseError;
use crate::logutil::player_input;

/// Minimum number of matching clues for a guilty verdict.
pub const GUILTY_THRESHOLD: usize = 2;

/// A validated accusation (non-empty suspect name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accusation(String);

impl Accusation {
    /// Strip the trailing line terminator and reject an empty name. Inner and
    /// leading whitespace is kept: matching is exact.
    pub fn parse(raw: &str) -> Result<Self, CaseError> {
        let name = raw.trim_end_matches(&['\n', '\r'][..]);
        if name.is_empty() {
            debug!("Rejected empty accusation");
            return Err(CaseError::EmptyAccusation);
        }
        Ok(Accusation(name.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Guilty,
    Insufficient,
}

impl Outcome {
    pub fn from_count(count: usize) -> Self {
        if count >= GUILTY_THRESHOLD {
            Outcome::Guilty
        } else {
            Outcome::Insufficient
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub accused: String,
    pub count: usize,
    pub outcome: Outcome,
    /// The collected clues that pointed at the accused, alphabetical.
    pub matching_clues: Vec<String>,
}

impl Verdict {
    pub fn is_guilty(&self) -> bool {
        self.outcome == Outcome::Guilty
    }
}

/// Count the collected clues whose suspect is exactly the accused name.
/// Clues without an associated suspect are skipped.
pub fn evaluate(clues: &ClueSet, index: &SuspectIndex, accusation: &Accusation) -> Verdict {
    let accused = accusation.name();
    let matching_clues: Vec<String> = clues
        .iter()
        .filter(|clue| match index.get(clue) {
            Some(suspect) => suspect == accused,
            None => {
                debug!("Clue {:?} has no suspect; not counted", clue);
                false
            }
        })
        .map(str::to_string)
        .collect();
    let count = matching_clues.len();
    let outcome = Outcome::from_count(count);
    info!(
        "Accusation of '{}': {} matching clue(s) -> {:?}",
        player_input(accused),
        count,
        outcome
    );
    Verdict {
        accused: accused.to_string(),
        count,
        outcome,
        matching_clues,
    }
}
