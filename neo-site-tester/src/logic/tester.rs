use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.name.bright_white()
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut timings = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let mut rng = ChaCha8Rng::seed_from_u64(iteration_seed);
            let started = Instant::now();
            let outcome = (scenario.check)(&mut rng);
            let elapsed = started.elapsed();
            timings.push(elapsed);

            match outcome {
                Ok(()) => {
                    successes += 1;
                    if self.verbose {
                        println!("  ✅ Iteration {}/{iterations} passed ({elapsed:?})", i + 1);
                    }
                }
                Err(err) => {
                    let line = format!("Iteration {} (seed {iteration_seed}): {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", line.clone().red());
                    }
                    failures.push(line);
                }
            }
        }

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration: average(&timings),
        }
    }
}

fn average(timings: &[Duration]) -> Duration {
    if timings.is_empty() {
        return Duration::ZERO;
    }
    timings.iter().sum::<Duration>() / u32::try_from(timings.len()).unwrap_or(u32::MAX)
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, ensure};
    use rand::Rng;

    fn always_ok(_: &mut ChaCha8Rng) -> Result<()> {
        Ok(())
    }

    fn fails_on_odd_draws(rng: &mut ChaCha8Rng) -> Result<()> {
        let n: u32 = rng.gen_range(0..1000);
        ensure!(n % 2 == 0, "drew {n}");
        Ok(())
    }

    #[test]
    fn runs_every_seed_and_iteration() {
        let tester = LogicTester::new(false);
        let scenario = TestScenario::new("ok", always_ok);
        let results = tester.run_scenario(&scenario, &[1, 2], 3);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed && r.successful_iterations == 3));
        assert_eq!(results[1].seed, 2);
    }

    #[test]
    fn failures_name_the_replay_seed() {
        let tester = LogicTester::new(false);
        let scenario = TestScenario::new("flaky", fails_on_odd_draws);
        let result = &tester.run_scenario(&scenario, &[100], 40)[0];
        assert!(!result.passed);
        assert_eq!(
            result.successful_iterations + result.failures.len(),
            result.iterations_run
        );
        assert!(result.failures[0].contains("(seed 1"));
    }

    #[test]
    fn results_are_deterministic_per_seed() {
        let tester = LogicTester::new(false);
        let scenario = TestScenario::new("flaky", fails_on_odd_draws);
        let a = tester.run_scenario(&scenario, &[7], 20);
        let b = tester.run_scenario(&scenario, &[7], 20);
        assert_eq!(a[0].failures, b[0].failures);
    }

    #[test]
    fn serialises_durations_as_millis() {
        let result = ScenarioResult {
            scenario_name: "ok".into(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(12),
        };
        let json = serde_json::to_value(&result).expect("serialise");
        assert_eq!(json["average_duration"], 12);
    }
}
