//! Per-problem component score computation.
//! Implements the total_score formula from ARCHITECTURE.md §3.3.

use hireverse_common::{Difficulty, PrepLevel, Problem, Result};
use serde::{Deserialize, Serialize};

use crate::weights::Weights;

/// Topic-match score is a constant until topic tagging ships.
pub const TOPIC_SCORE_PLACEHOLDER: f64 = 0.1;

/// The four component scores for one problem, before weighting.
/// All in [0, 1] (topic_match pinned at its placeholder value).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ComponentScores {
    pub frequency: f64,
    pub company_match: f64,
    pub difficulty_fit: f64,
    pub topic_match: f64,
}

impl ComponentScores {
    /// total_score = w_f·S_f + w_c·S_c + w_d·S_d + w_t·S_t
    pub fn total(&self, weights: &Weights) -> f64 {
        weights.frequency * self.frequency
            + weights.company_match * self.company_match
            + weights.difficulty_fit * self.difficulty_fit
            + weights.topic_match * self.topic_match
    }
}

/// Frequency score S_f, normalized against the set-wide maximum.
/// A degenerate set (empty, or every frequency zero) scores 0 across the
/// board instead of dividing by zero.
pub fn frequency_score(frequency: f64, max_frequency: f64) -> f64 {
    if max_frequency <= 0.0 {
        0.0
    } else {
        frequency / max_frequency
    }
}

/// Company-match score S_c: 1 when a target company is set and tagged on the
/// problem, else 0.
pub fn company_score(target_company: Option<&str>, problem: &Problem) -> f64 {
    match target_company {
        Some(company) if problem.has_company_tag(company) => 1.0,
        _ => 0.0,
    }
}

/// Difficulty-fit score S_d from the fixed table in ARCHITECTURE.md §3.3.
pub fn difficulty_fit(level: PrepLevel, difficulty: Difficulty) -> f64 {
    use Difficulty::{Easy, Hard, Medium};
    use PrepLevel::{Advanced, Beginner, Intermediate};

    match (level, difficulty) {
        (Beginner, Easy) => 1.0,
        (Beginner, Medium) => 0.5,
        (Beginner, Hard) => 0.1,
        (Intermediate, Easy) => 0.5,
        (Intermediate, Medium) => 1.0,
        (Intermediate, Hard) => 0.5,
        (Advanced, Easy) => 0.1,
        (Advanced, Medium) => 0.5,
        (Advanced, Hard) => 1.0,
    }
}

/// Compute all component scores for one problem. Fails on a difficulty
/// string outside the closed enumeration.
pub fn score_components(
    problem: &Problem,
    level: PrepLevel,
    target_company: Option<&str>,
    max_frequency: f64,
) -> Result<ComponentScores> {
    let difficulty = problem.difficulty()?;
    Ok(ComponentScores {
        frequency: frequency_score(problem.frequency, max_frequency),
        company_match: company_score(target_company, problem),
        difficulty_fit: difficulty_fit(level, difficulty),
        topic_match: TOPIC_SCORE_PLACEHOLDER,
    })
}
