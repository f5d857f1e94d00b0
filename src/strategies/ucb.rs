use super::arm::{Arm, RewardModel};
use super::errors::StrategyError;
use super::rng::MaybeSeededRng;
use super::strategy::{argmax, Strategy};

use tracing::debug;

/// UCB1: optimism under uncertainty. Each arm scores its estimate plus an
/// exploration bonus `sqrt(2 ln t / n)` shrinking with pulls; untried arms
/// score infinity so every arm is played once before exploitation starts.
pub struct Ucb1 {
    arms: Vec<Arm>,
    model: RewardModel,
    rewards: Vec<f64>,
    total_reward: f64,
    time: u64,
    rng: MaybeSeededRng,
}

impl Ucb1 {
    pub fn new(
        true_values: &[f64],
        model: RewardModel,
        seed: Option<u64>,
    ) -> Result<Self, StrategyError> {
        if true_values.is_empty() {
            return Err(StrategyError::NoArms);
        }

        Ok(Self {
            arms: true_values.iter().map(|&value| Arm::new(value)).collect(),
            model,
            rewards: Vec::new(),
            total_reward: 0.0,
            time: 0,
            rng: MaybeSeededRng::new(seed),
        })
    }

    fn score(arm: &Arm, time: u64) -> f64 {
        if arm.pulls == 0 {
            f64::INFINITY
        } else {
            arm.estimate + (2.0 * (time as f64).ln() / (arm.pulls as f64)).sqrt()
        }
    }
}

impl Strategy for Ucb1 {
    fn name(&self) -> &'static str {
        "ucb1"
    }

    fn select_arm(&mut self) -> Result<usize, StrategyError> {
        // incremented before use so the first call scores with ln(1) = 0
        self.time += 1;

        let time = self.time;
        argmax(self.arms.iter().map(|arm| Self::score(arm, time))).ok_or(StrategyError::NoArms)
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
