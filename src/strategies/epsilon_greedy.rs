use super::arm::{Arm, RewardModel};
use super::errors::StrategyError;
use super::rng::MaybeSeededRng;
use super::strategy::{argmax, Strategy};

use rand::Rng;
use tracing::debug;

/// Explores a uniformly random arm with probability epsilon, otherwise
/// exploits the arm with the best running-mean estimate.
pub struct EpsilonGreedy {
    arms: Vec<Arm>,
    epsilon: f64,
    model: RewardModel,
    rewards: Vec<f64>,
    total_reward: f64,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(
        true_values: &[f64],
        epsilon: f64,
        model: RewardModel,
        seed: Option<u64>,
    ) -> Result<Self, StrategyError> {
        if true_values.is_empty() {
            return Err(StrategyError::NoArms);
        }
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(StrategyError::InvalidEpsilon(epsilon));
        }

        Ok(Self {
            arms: true_values.iter().map(|&value| Arm::new(value)).collect(),
            epsilon,
            model,
            rewards: Vec::new(),
            total_reward: 0.0,
            rng: MaybeSeededRng::new(seed),
        })
    }
}

impl Strategy for EpsilonGreedy {
    fn name(&self) -> &'static str {
        "epsilon_greedy"
    }

    fn select_arm(&mut self) -> Result<usize, StrategyError> {
        let rng = self.rng.get_rng();

        if rng.random::<f64>() < self.epsilon {
            Ok(rng.random_range(0..self.arms.len()))
        } else {
            argmax(self.arms.iter().map(|arm| arm.estimate)).ok_or(StrategyError::NoArms)
        }
    }

    fn run(&mut self, iterations: usize) -> Result<Vec<f64>, StrategyError> {
        for _ in 0..iterations {
            let chosen = self.select_arm()?;
            let reward = self.arms[chosen].pull(self.model, self.rng.get_rng());

            self.arms[chosen].update(reward);
            self.rewards.push(reward);
            self.total_reward += reward;

            debug!(strategy = self.name(), chosen, reward, "trial");
        }

        Ok(self.rewards.clone())
    }

    fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    fn total_reward(&self) -> f64 {
        self.total_reward
    }
}
