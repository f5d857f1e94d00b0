pub mod arm;
pub mod epsilon_greedy;
pub mod errors;
pub mod thompson_sampling;
pub mod ucb;
mod rng;
mod strategy;

pub use arm::RewardModel;
pub use strategy::{Strategy, StrategyType};
