use crate::strategies::errors::StrategyError;
use crate::strategies::{RewardModel, Strategy, StrategyType};

use serde::Serialize;
use tracing::info;

/// Reward sequences produced by one strategy, in trial order. This is the raw
/// handoff consumed by the external reporting/plotting collaborator, which
/// computes its own cumulative sums.
#[derive(Debug, Serialize)]
pub struct StrategyOutcome {
    pub name: String,
    pub rewards: Vec<f64>,
    pub total_reward: f64,
}

#[derive(Debug, Serialize)]
pub struct ExperimentReport {
    pub true_values: Vec<f64>,
    pub iterations: usize,
    pub outcomes: Vec<StrategyOutcome>,
}

/// Runs the three strategies over one shared list of true arm parameters.
///
/// Epsilon-Greedy and UCB1 read the parameters as Gaussian means while
/// Thompson Sampling reads them as Bernoulli success probabilities; see
/// `RewardModel` for why this asymmetry is kept.
pub struct Experiment {
    true_values: Vec<f64>,
    iterations: usize,
    epsilon: f64,
    seed: Option<u64>,
}

impl Experiment {
    pub fn new(
        true_values: Vec<f64>,
        iterations: usize,
        epsilon: f64,
        seed: Option<u64>,
    ) -> Result<Self, StrategyError> {
        if true_values.is_empty() {
            return Err(StrategyError::NoArms);
        }
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(StrategyError::InvalidEpsilon(epsilon));
        }

        Ok(Self {
            true_values,
            iterations,
            epsilon,
            seed,
        })
    }

    /// Each strategy gets its own generator stream, derived from the base
    /// seed so a seeded experiment is reproducible end to end.
    fn seed_for(&self, offset: u64) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(offset))
    }

    pub fn run(self) -> Result<ExperimentReport, StrategyError> {
        let strategy_types = [
            StrategyType::EpsilonGreedy {
                epsilon: self.epsilon,
                model: RewardModel::Gaussian,
                seed: self.seed_for(0),
            },
            StrategyType::Ucb1 {
                model: RewardModel::Gaussian,
                seed: self.seed_for(1),
            },
            StrategyType::ThompsonSampling {
                seed: self.seed_for(2),
            },
        ];

        let mut outcomes = Vec::with_capacity(strategy_types.len());
        for strategy_type in strategy_types {
            let mut strategy: Box<dyn Strategy> = strategy_type.into_inner(&self.true_values)?;
            let rewards = strategy.run(self.iterations)?;

            info!(
                strategy = strategy.name(),
                trials = strategy.rewards().len(),
                total_reward = strategy.total_reward(),
                "strategy finished"
            );

            outcomes.push(StrategyOutcome {
                name: strategy.name().to_string(),
                rewards,
                total_reward: strategy.total_reward(),
            });
        }

        Ok(ExperimentReport {
            true_values: self.true_values,
            iterations: self.iterations,
            outcomes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;
    const EPS: f64 = 1e-12;

    fn make_experiment(iterations: usize) -> Experiment {
        Experiment::new(vec![0.1, 0.5, 0.9], iterations, 0.1, Some(SEED)).unwrap()
    }

    #[test]
    fn rejects_empty_arms() {
        assert!(Experiment::new(vec![], 100, 0.1, Some(SEED)).is_err());
    }

    #[test]
    fn rejects_epsilon_out_of_range() {
        assert!(Experiment::new(vec![0.5], 100, 1.5, Some(SEED)).is_err());
    }

    #[test]
    fn report_covers_all_strategies() {
        let report = make_experiment(100).run().unwrap();

        assert_eq!(report.outcomes.len(), 3);
        let names: Vec<_> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["epsilon_greedy", "ucb1", "thompson_sampling"]);
    }

    #[test]
    fn every_log_has_one_entry_per_trial() {
        let report = make_experiment(100).run().unwrap();

        for outcome in &report.outcomes {
            assert_eq!(outcome.rewards.len(), 100);
            let sum: f64 = outcome.rewards.iter().sum();
            assert!((outcome.total_reward - sum).abs() < EPS);
        }
    }

    #[test]
    fn zero_iterations_gives_empty_logs() {
        let report = make_experiment(0).run().unwrap();

        for outcome in &report.outcomes {
            assert!(outcome.rewards.is_empty());
            assert_eq!(outcome.total_reward, 0.0);
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let first = make_experiment(200).run().unwrap();
        let second = make_experiment(200).run().unwrap();

        for (a, b) in first.outcomes.iter().zip(&second.outcomes) {
            assert_eq!(a.rewards, b.rewards);
        }
    }

    #[test]
    fn report_serializes_to_json() {
        let report = make_experiment(10).run().unwrap();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("thompson_sampling"));
    }
}
