use rand::Rng;
use rand_distr::StandardNormal;
use serde::Deserialize;

/// How an arm turns its hidden true value into a stochastic reward.
///
/// The reference scenario mixes models on purpose: Epsilon-Greedy and UCB1
/// read the true value as a Gaussian mean, while Thompson Sampling reads the
/// very same value as a Bernoulli success probability. This is a modeling
/// assumption carried over as-is, since unifying it would change the
/// comparative results.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum RewardModel {
    /// Reward = true value + standard normal noise.
    Gaussian,
    /// Reward = 1.0 with probability equal to the true value, else 0.0.
    Bernoulli,
}

/// One reward source: a hidden true value plus a running-mean estimate of it.
#[derive(Debug, Clone)]
pub struct Arm {
    true_value: f64,
    pub(super) estimate: f64,
    pub(super) pulls: u64,
}

impl Arm {
    pub fn new(true_value: f64) -> Self {
        Self {
            true_value,
            estimate: 0.0,
            pulls: 0,
        }
    }

    /// Draws one observation; consumes RNG state but mutates nothing else.
    pub fn pull<R: Rng + ?Sized>(&self, model: RewardModel, rng: &mut R) -> f64 {
        match model {
            RewardModel::Gaussian => {
                let noise: f64 = rng.sample(StandardNormal);
                self.true_value + noise
            }
            RewardModel::Bernoulli => (rng.random::<f64>() < self.true_value) as u8 as f64,
        }
    }

    /// Folds one observation into the estimate as an incremental mean.
    /// Must be called exactly once per `pull` for `pulls` to stay the number
    /// of observations behind `estimate`.
    pub fn update(&mut self, observed: f64) {
        self.pulls += 1;
        self.estimate += (observed - self.estimate) / (self.pulls as f64);
    }
}
