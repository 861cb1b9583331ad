//! Resolved scoring weights for one plan invocation.
//! See ARCHITECTURE.md §3.2.

use hireverse_common::ranking_config::WeightProfile;
use serde::{Deserialize, Serialize};

/// The four weights actually applied to a scoring pass, after the urgency
/// branch has been taken. w_f/w_c/w_d/w_t in the scoring formula.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weights {
    pub frequency: f64,
    pub company_match: f64,
    pub difficulty_fit: f64,
    pub topic_match: f64,
}

impl Weights {
    /// Resolve a profile against the time budget. Under the urgency threshold
    /// the frequency and company weights are swapped for their urgent
    /// overrides; difficulty and topic weights stay put, so the resolved set
    /// sums to 1.2 rather than 1.0 in that branch (shipped behavior, kept).
    pub fn resolve(profile: &WeightProfile, time_left: u32, urgency_threshold_days: u32) -> Self {
        if time_left < urgency_threshold_days {
            Self {
                frequency: profile.urgent_frequency,
                company_match: profile.urgent_company_match,
                difficulty_fit: profile.difficulty_fit,
                topic_match: profile.topic_match,
            }
        } else {
            Self {
                frequency: profile.frequency,
                company_match: profile.company_match,
                difficulty_fit: profile.difficulty_fit,
                topic_match: profile.topic_match,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relaxed() {
        let w = Weights::resolve(&WeightProfile::standard(), 14, 7);
        assert_eq!(w.frequency, 0.4);
        assert_eq!(w.company_match, 0.3);
        assert_eq!(w.difficulty_fit, 0.2);
        assert_eq!(w.topic_match, 0.1);
    }

    #[test]
    fn test_resolve_urgent() {
        let w = Weights::resolve(&WeightProfile::standard(), 6, 7);
        assert_eq!(w.frequency, 0.5);
        assert_eq!(w.company_match, 0.4);
        // unchanged in the urgent branch
        assert_eq!(w.difficulty_fit, 0.2);
        assert_eq!(w.topic_match, 0.1);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Exactly at the threshold counts as relaxed.
        let w = Weights::resolve(&WeightProfile::standard(), 7, 7);
        assert_eq!(w.frequency, 0.4);
    }

    #[test]
    fn test_legacy_profile_resolves() {
        let w = Weights::resolve(&WeightProfile::legacy(), 30, 7);
        assert_eq!(w.frequency, 0.3);
        assert_eq!(w.company_match, 0.4);

        let w = Weights::resolve(&WeightProfile::legacy(), 2, 7);
        assert_eq!(w.frequency, 0.4);
        assert_eq!(w.company_match, 0.5);
    }
}
