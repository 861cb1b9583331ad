//! hireverse-ranker — Practice-plan scoring and selection engine.
//! Implements the model in ARCHITECTURE.md §3.

pub mod scorer;
pub mod weights;
pub mod planner;

pub use planner::{rank, rank_for_request};
pub use scorer::ComponentScores;
pub use weights::Weights;
