use super::errors::StrategyError;
use super::rng::MaybeSeededRng;
use super::strategy::{argmax, Strategy};

use rand::Rng;
use rand_distr::{Beta, Distribution};
use tracing::debug;

/// Beta-Bernoulli Thompson Sampling. Belief about each arm lives in a
/// Beta(alpha, beta) posterior starting from the uniform Beta(1, 1) prior;
/// each trial samples every posterior and plays the arm with the largest draw.
///
/// Rewards are strictly Bernoulli here: the true values are read as success
/// probabilities, only for generating rewards, never by the policy itself.
/// Unlike the other strategies this one keeps no running-mean estimates.
pub struct ThompsonSampling {
    true_values: Vec<f64>,
    alpha: Vec<f64>,
    beta: Vec<f64>,
    rewards: Vec<f64>,
    total_reward: f64,
    rng: MaybeSeededRng,
}

impl ThompsonSampling {
    pub fn new(true_values: &[f64], seed: Option<u64>) -> Result<Self, StrategyError> {
        if true_values.is_empty() {
            return Err(StrategyError::NoArms);
        }

        Ok(Self {
            true_values: true_values.to_vec(),
            alpha: vec![1.0; true_values.len()],
            beta: vec![1.0; true_values.len()],
            rewards: Vec::new(),
            total_reward: 0.0,
            rng: MaybeSeededRng::new(seed),
        })
    }

    /// Times each arm has been chosen, recovered from the posterior counters
    /// (`alpha + beta` grows by one per observation, starting at 2).
    pub fn selection_counts(&self) -> Vec<u64> {
        self.alpha
            .iter()
            .zip(&self.beta)
            .map(|(a, b)| (a + b - 2.0).round() as u64)
            .collect()
    }
}

impl Strategy for ThompsonSampling {
    fn name(&self) -> &'static str {
        "thompson_sampling"
    }

    fn select_arm(&mut self) -> Result<usize, StrategyError> {
        let mut samples = Vec::with_capacity(self.alpha.len());
        for (&alpha, &beta) in self.alpha.iter().zip(&self.beta) {
            let sample = Beta::new(alpha, beta)
                .map_err(|e| StrategyError::SamplingError(e.to_string()))?
                .sample(self.rng.get_rng());
            samples.push(sample);
        }

        argmax(samples.into_iter()).ok_or(StrategyError::NoArms)
    }

    fn run(&mut self, iterations: usize) -> Result<Vec<f64>, StrategyError> {
        for _ in 0..iterations {
            let chosen = self.select_arm()?;
            let reward = (self.rng.get_rng().random::<f64>() < self.true_values[chosen]) as u8 as f64;

            self.rewards.push(reward);
            self.total_reward += reward;
            self.alpha[chosen] += reward;
            self.beta[chosen] += 1.0 - reward;

            debug!(strategy = self.name(), chosen, reward, "trial");
        }

        debug!(
            strategy = self.name(),
            counts = ?self.selection_counts(),
            "posterior selection counts"
        );

        Ok(self.rewards.clone())
    }

    fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    fn total_reward(&self) -> f64 {
        self.total_reward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;
    const EPS: f64 = 1e-12;

    #[test]
    fn rejects_empty_arms() {
        assert!(ThompsonSampling::new(&[], Some(SEED)).is_err());
    }

    #[test]
    fn starts_from_uniform_prior() {
        let strategy = ThompsonSampling::new(&[0.1, 0.5, 0.9], Some(SEED)).unwrap();
        assert_eq!(strategy.alpha, vec![1.0; 3]);
        assert_eq!(strategy.beta, vec![1.0; 3]);
    }

    #[test]
    fn rewards_are_binary() {
        let mut strategy = ThompsonSampling::new(&[0.1, 0.5, 0.9], Some(SEED)).unwrap();
        let log = strategy.run(200).unwrap();

        assert!(log.iter().all(|&r| r == 0.0 || r == 1.0));
    }

    #[test]
    fn posterior_counts_track_selections() {
        let mut strategy = ThompsonSampling::new(&[0.1, 0.5, 0.9], Some(SEED)).unwrap();
        strategy.run(250).unwrap();

        // alpha + beta = 2 + times chosen, summed over arms = 2K + trials
        let counts = strategy.selection_counts();
        assert_eq!(counts.iter().sum::<u64>(), 250);
        for (index, count) in counts.iter().enumerate() {
            let total = strategy.alpha[index] + strategy.beta[index];
            assert!((total - (2.0 + *count as f64)).abs() < EPS);
        }
    }

    #[test]
    fn run_zero_is_a_noop() {
        let mut strategy = ThompsonSampling::new(&[0.1, 0.5, 0.9], Some(SEED)).unwrap();

        let log = strategy.run(0).unwrap();
        assert!(log.is_empty());
        assert_eq!(strategy.alpha, vec![1.0; 3]);
        assert_eq!(strategy.beta, vec![1.0; 3]);
        assert_eq!(strategy.total_reward(), 0.0);
    }

    #[test]
    fn converges_on_the_best_arm() {
        let mut strategy = ThompsonSampling::new(&[0.1, 0.5, 0.9], Some(SEED)).unwrap();

        strategy.run(900).unwrap();
        let before = strategy.selection_counts();
        strategy.run(100).unwrap();
        let after = strategy.selection_counts();

        // the 0.9 arm should dominate the final 100 trials
        let best_arm_share = after[2] - before[2];
        assert!(
            best_arm_share > 50,
            "best arm chosen {best_arm_share} times in the final 100 trials"
        );

        let total = strategy.total_reward();
        assert!(
            (700.0..=950.0).contains(&total),
            "total reward {total} outside the plausible band"
        );
    }
}
