//! Plan construction: score the whole set, select the top of it, and order
//! the selection for display. See ARCHITECTURE.md §3.4.

use hireverse_common::{Problem, RankedProblem, RankingConfig, RankingRequest, Result};
use hireverse_store::ProblemRepository;
use tracing::{debug, info, warn};

use crate::scorer::score_components;
use crate::weights::Weights;

/// Build a practice plan from an already-fetched problem set.
///
/// Pure: the input set is never mutated, and identical inputs always produce
/// the identical output sequence (both sorts are stable). Errors on the first
/// problem whose difficulty falls outside the closed enumeration; no partial
/// plan is returned.
pub fn rank(
    problems: &[Problem],
    request: &RankingRequest,
    config: &RankingConfig,
) -> Result<Vec<RankedProblem>> {
    let plan_size =
        config.pace.problems_per_day(request.prep_level) as usize * request.time_left as usize;
    let weights = Weights::resolve(
        &config.weights,
        request.time_left,
        config.urgency_threshold_days,
    );

    // Set-wide maximum, computed once per invocation.
    let max_frequency = problems.iter().map(|p| p.frequency).fold(0.0_f64, f64::max);
    if max_frequency <= 0.0 && !problems.is_empty() {
        warn!(
            count = problems.len(),
            "no positive frequency in problem set; frequency component scores 0"
        );
    }

    let target_company = request.target_company.as_deref();
    let mut scored = Vec::with_capacity(problems.len());
    for problem in problems {
        let difficulty = problem.difficulty()?;
        let components = score_components(problem, request.prep_level, target_company, max_frequency)?;
        let total_score = components.total(&weights);
        debug!(id = %problem.id, total_score, "scored problem");
        scored.push((
            RankedProblem {
                problem: problem.clone(),
                total_score,
            },
            difficulty.rank(),
        ));
    }

    // Top of the class first; stable, so score ties keep input order.
    scored.sort_by(|a, b| {
        b.0.total_score
            .partial_cmp(&a.0.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(plan_size);

    // Re-order the selection for display: easiest first, score order within
    // each difficulty tier.
    scored.sort_by_key(|(_, rank)| *rank);

    Ok(scored.into_iter().map(|(ranked, _)| ranked).collect())
}

/// Fetch the full problem set from the repository and build a plan from it.
pub async fn rank_for_request(
    repo: &dyn ProblemRepository,
    request: &RankingRequest,
    config: &RankingConfig,
) -> Result<Vec<RankedProblem>> {
    let problems = repo.fetch_all().await?;
    info!(count = problems.len(), "fetched problem set");

    let plan = rank(&problems, request, config)?;
    info!(
        plan_size = plan.len(),
        time_left = request.time_left,
        prep_level = %request.prep_level,
        "built practice plan"
    );
    Ok(plan)
}

// ── Tests ───────────────────────────────────────────────────────────────────
