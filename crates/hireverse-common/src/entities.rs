//! Core entity types mirroring the document-store schema.
//! See ARCHITECTURE.md §2.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{HireverseError, Result};

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Closed difficulty enumeration. Stored records carry this as a string;
/// parsing happens at scoring time so schema drift surfaces as a typed error
/// rather than a rejected fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Fixed ordinal used for display ordering only (Easy < Medium < Hard).
    /// Distinct from the difficulty-fit score in ARCHITECTURE.md §3.3.
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = HireverseError;

    // Exact match: the store writes these capitalized, and a lowercased or
    // misspelled value means a corrupt record, not a formatting variant.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(HireverseError::InvalidDifficulty(other.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Prep level
// ---------------------------------------------------------------------------

/// Self-reported candidate skill tier. Drives both the daily problem quota
/// and the difficulty-fit score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PrepLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl PrepLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrepLevel::Beginner => "beginner",
            PrepLevel::Intermediate => "intermediate",
            PrepLevel::Advanced => "advanced",
        }
    }
}

impl FromStr for PrepLevel {
    type Err = HireverseError;

    // Case-insensitive: the form layer has shipped both "Beginner" and
    // "beginner" over time.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(PrepLevel::Beginner),
            "intermediate" => Ok(PrepLevel::Intermediate),
            "advanced" => Ok(PrepLevel::Advanced),
            other => Err(HireverseError::InvalidPrepLevel(other.to_string())),
        }
    }
}

impl std::fmt::Display for PrepLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Problem
// ---------------------------------------------------------------------------

/// One interview problem as persisted in the document store.
///
/// Records routinely carry fields this core does not know about (topic tags,
/// moderation flags, whatever the UI last added). Those land in `extra` and
/// survive a write round-trip untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    /// Document id; empty until the store assigns one on save.
    #[serde(default)]
    pub id: String,

    pub title: String,

    /// Difficulty as stored. Validated against [`Difficulty`] when scored.
    pub difficulty: String,

    /// Relative appearance rate in real interviews. Non-negative.
    #[serde(default)]
    pub frequency: f64,

    /// Companies known to have asked this problem.
    #[serde(default)]
    pub company_tags: Vec<String>,

    /// Per-user progress marker. Displayed, never ranked on.
    #[serde(default)]
    pub completed: bool,

    /// Canonical problem URL; contribution dedupe key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Stamped by the store on first save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Unrecognized fields from the store, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Problem {
    /// Parse the stored difficulty string, failing on anything outside the
    /// closed enumeration.
    pub fn difficulty(&self) -> Result<Difficulty> {
        self.difficulty.parse()
    }

    /// Exact-match company tag test.
    pub fn has_company_tag(&self, company: &str) -> bool {
        self.company_tags.iter().any(|tag| tag == company)
    }
}

// ---------------------------------------------------------------------------
// Ranking request / result
// ---------------------------------------------------------------------------

/// One plan invocation, built fresh per form submission and discarded after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRequest {
    /// Days until the interview. Already clamped to >= 0.
    pub time_left: u32,

    pub prep_level: PrepLevel,

    /// `None` means no company preference.
    pub target_company: Option<String>,
}

impl RankingRequest {
    /// Normalize raw form input into a request: clamp negative time to zero,
    /// parse the prep level (case-insensitively), and treat an empty company
    /// string as no preference.
    pub fn new(time_left: i64, prep_level: &str, target_company: Option<&str>) -> Result<Self> {
        Ok(Self {
            time_left: time_left.max(0) as u32,
            prep_level: prep_level.parse()?,
            target_company: target_company
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from),
        })
    }
}

/// A problem with its computed score attached, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedProblem {
    #[serde(flatten)]
    pub problem: Problem,

    /// Weighted sum per ARCHITECTURE.md §3.3. Roughly [0, 1.1] given the
    /// urgent weight profile.
    pub total_score: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prep_level_parse_case_insensitive() {
        assert_eq!("beginner".parse::<PrepLevel>().unwrap(), PrepLevel::Beginner);
        assert_eq!("Intermediate".parse::<PrepLevel>().unwrap(), PrepLevel::Intermediate);
        assert_eq!("ADVANCED".parse::<PrepLevel>().unwrap(), PrepLevel::Advanced);
    }

    #[test]
    fn test_prep_level_rejects_unknown() {
        let err = "expert".parse::<PrepLevel>().unwrap_err();
        assert!(matches!(err, HireverseError::InvalidPrepLevel(_)));
    }

    #[test]
    fn test_difficulty_parse_is_exact() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("easy".parse::<Difficulty>().is_err());
        assert!("Extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_rank_order() {
        assert!(Difficulty::Easy.rank() < Difficulty::Medium.rank());
        assert!(Difficulty::Medium.rank() < Difficulty::Hard.rank());
    }

    #[test]
    fn test_request_clamps_negative_time() {
        let req = RankingRequest::new(-3, "beginner", None).unwrap();
        assert_eq!(req.time_left, 0);
    }

    #[test]
    fn test_request_empty_company_is_none() {
        let req = RankingRequest::new(5, "beginner", Some("")).unwrap();
        assert_eq!(req.target_company, None);
        let req = RankingRequest::new(5, "beginner", Some("  ")).unwrap();
        assert_eq!(req.target_company, None);
        let req = RankingRequest::new(5, "beginner", Some("Google")).unwrap();
        assert_eq!(req.target_company.as_deref(), Some("Google"));
    }

    #[test]
    fn test_problem_preserves_unknown_fields() {
        let raw = serde_json::json!({
            "id": "p1",
            "title": "Two Sum",
            "difficulty": "Easy",
            "frequency": 90.0,
            "company_tags": ["Google"],
            "topic": "arrays",
            "reviewed": true
        });
        let problem: Problem = serde_json::from_value(raw).unwrap();
        assert_eq!(problem.extra.get("topic").unwrap(), "arrays");

        let back = serde_json::to_value(&problem).unwrap();
        assert_eq!(back.get("reviewed").unwrap(), true);
    }

    #[test]
    fn test_company_tag_match_is_exact() {
        let problem: Problem = serde_json::from_value(serde_json::json!({
            "title": "Two Sum",
            "difficulty": "Easy",
            "company_tags": ["Google"]
        }))
        .unwrap();
        assert!(problem.has_company_tag("Google"));
        assert!(!problem.has_company_tag("google"));
        assert!(!problem.has_company_tag("Amazon"));
    }
}
