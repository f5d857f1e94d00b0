mod experiment;
mod strategies;

use experiment::Experiment;
use tracing_subscriber::EnvFilter;

// Reference scenario: three arms whose hidden parameters double as Gaussian
// means (Epsilon-Greedy, UCB1) and Bernoulli success rates (Thompson).
const TRUE_VALUES: [f64; 3] = [0.1, 0.5, 0.9];
const ITERATIONS: usize = 1000;
const EPSILON: f64 = 0.1;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let report = Experiment::new(TRUE_VALUES.to_vec(), ITERATIONS, EPSILON, None)?.run()?;

    // raw per-trial reward sequences, in trial order, for the downstream
    // plotting collaborator
    serde_json::to_writer_pretty(std::io::stdout().lock(), &report)?;
    println!();

    Ok(())
}
