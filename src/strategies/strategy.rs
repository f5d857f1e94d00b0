use super::arm::RewardModel;
use super::epsilon_greedy::EpsilonGreedy;
use super::errors::StrategyError;
use super::thompson_sampling::ThompsonSampling;
use super::ucb::Ucb1;

use serde::Deserialize;

/// Tagged constructor for the concrete strategies, so the driver can build
/// and iterate over a homogeneous list of boxed strategies.
#[derive(Clone, Debug, Deserialize)]
pub enum StrategyType {
    EpsilonGreedy {
        epsilon: f64,
        model: RewardModel,
        seed: Option<u64>,
    },
    Ucb1 {
        model: RewardModel,
        seed: Option<u64>,
    },
    ThompsonSampling {
        seed: Option<u64>,
    },
}

impl StrategyType {
    pub fn into_inner(self, true_values: &[f64]) -> Result<Box<dyn Strategy>, StrategyError> {
        match self {
            StrategyType::EpsilonGreedy {
                epsilon,
                model,
                seed,
            } => Ok(Box::new(EpsilonGreedy::new(
                true_values,
                epsilon,
                model,
                seed,
            )?)),
            StrategyType::Ucb1 { model, seed } => {
                Ok(Box::new(Ucb1::new(true_values, model, seed)?))
            }
            StrategyType::ThompsonSampling { seed } => {
                Ok(Box::new(ThompsonSampling::new(true_values, seed)?))
            }
        }
    }
}

/// An action-selection policy over a fixed set of arms.
///
/// `run` executes the same tight trial loop on every call but is not
/// idempotent in effect: arm statistics, the reward log and the running total
/// keep accumulating across calls, and the full accumulated log is returned.
pub trait Strategy {
    /// Short label for logs and reports.
    fn name(&self) -> &'static str;

    /// Picks the arm index to play next, mutating any per-draw bookkeeping
    /// the policy keeps (RNG state, trial counters).
    fn select_arm(&mut self) -> Result<usize, StrategyError>;

    /// Plays `iterations` trials and returns the full reward log accumulated
    /// so far, one entry per trial in trial order.
    fn run(&mut self, iterations: usize) -> Result<Vec<f64>, StrategyError>;

    /// Per-trial rewards observed so far, in trial order.
    fn rewards(&self) -> &[f64];

    /// Sum of the reward log, kept incrementally for O(1) reporting.
    fn total_reward(&self) -> f64;
}

/// Index of the maximum score, first maximum winning on ties. Scanning
/// left-to-right with a strict comparison is what makes greedy selection
/// deterministic under a fixed RNG stream.
pub(super) fn argmax(scores: impl Iterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, score) in scores.enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index)
}
