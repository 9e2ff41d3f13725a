mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use browser::{BrowserConfig, BrowserKind, SitePage, new_session};
use common::scenario::{ScenarioCtx, all_scenario_keys, get_scenario, list_scenarios};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{LogicTester, ScenarioResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Core behaviour checks (fast, no browser)
    Logic,
    /// Browser automation against a served build
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "neo-site-tester", version)]
#[command(about = "Automated QA for the Neo marketing site - core checks and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (real page), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds for the randomised logic checks (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Iterations per scenario and seed (logic mode only)
    #[arg(long, default_value_t = 25)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the served site
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Seconds to wait for the loading screen to clear
    #[arg(long, default_value_t = 8)]
    load_timeout: u64,

    /// Artifacts directory for screenshots and DOM dumps
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = parse_seeds(&args.seeds)?;

    let mut results = run_logic_scenarios(&args, &scenarios, &seeds);
    results.extend(run_browser_scenarios(&args, &scenarios).await);

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target, "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target, "  {key:15} - {description}")?;
    }
    output_target.flush()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🧭 Neo Site Automated Tester".bright_cyan().bold());
    println!("{}", "============================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in all_scenario_keys() {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn parse_seeds(raw: &str) -> Result<Vec<u64>> {
    split_csv(raw)
        .iter()
        .map(|s| s.parse().with_context(|| format!("invalid seed {s:?}")))
        .collect()
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

fn run_logic_scenarios(args: &Args, scenarios: &[String], seeds: &[u64]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(args.verbose);
    for name in scenarios {
        let Some(scenario) = get_scenario(name) else {
            eprintln!("⚠️  Unknown scenario: {}", name.yellow());
            continue;
        };
        if let Some(logic) = scenario.as_logic_scenario() {
            results.extend(tester.run_scenario(&logic, seeds, args.iterations));
        } else {
            eprintln!("⚠️  Scenario {} has no logic test implementation", name.yellow());
        }
    }
    results
}

async fn run_browser_scenarios(args: &Args, scenarios: &[String]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return results;
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let cfg = build_browser_config(args);
    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };
        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {}: {e}", kind.label());
                continue;
            }
        };
        results.extend(run_browser_scenarios_for_driver(args, scenarios, kind, &driver).await);
        let _ = driver.quit().await;
    }
    results
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> Vec<ScenarioResult> {
    let label = kind.label();
    let mut results = Vec::new();
    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            continue;
        };
        // Browser runs are not randomised; seed 0 keeps artifact paths stable.
        let ctx = ScenarioCtx {
            base_url: args.base_url.clone(),
            seed: 0,
            page: SitePage::new(driver),
            load_timeout: Duration::from_secs(args.load_timeout),
            verbose: args.verbose,
        };

        let started = Instant::now();
        let outcome = scenario.run_browser(&ctx).await;
        let duration = started.elapsed();
        let failures = match outcome {
            Ok(()) => {
                println!("✅ [{}] {scenario_name} - {duration:?}", label.green());
                Vec::new()
            }
            Err(e) => {
                eprintln!("❌ [{}] {scenario_name} - {duration:?}: {e:#}", label.red());
                let dir = artifacts_dir(&args.artifacts_dir, label, scenario_name, ctx.seed);
                if let Err(capture) = capture_artifacts(driver, &dir, &e).await {
                    log::warn!("could not save artifacts to {dir}: {capture:#}");
                }
                vec![format!("{e:#}")]
            }
        };
        results.push(ScenarioResult {
            scenario_name: format!("{scenario_name} [{label}]"),
            seed: ctx.seed,
            passed: failures.is_empty(),
            iterations_run: 1,
            successful_iterations: usize::from(failures.is_empty()),
            failures,
            average_duration: duration,
        });
    }
    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    output_target,
                    "# Neo Site Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    writeln!(output_target)?;
    writeln!(output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
    output_target.flush()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::File(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
