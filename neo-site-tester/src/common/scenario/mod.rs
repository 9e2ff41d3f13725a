use anyhow::Result;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use crate::browser::SitePage;

pub mod form;
pub mod phone;
pub mod smoke;
pub mod theme;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub seed: u64,
    pub page: SitePage<'a>,
    pub load_timeout: Duration,
    pub verbose: bool,
}

/// One randomised pass over core behaviour. The generator is seeded per
/// iteration so failures replay exactly.
pub type LogicCheck = fn(&mut ChaCha8Rng) -> Result<()>;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

const CATALOG: &[(&str, &str)] = &[
    ("smoke", "Page shell, loading screen and dialogs"),
    ("phone-mask", "Phone mask formatting while typing"),
    ("form-invalid", "Contact form rejects missing and malformed input"),
    ("form-valid", "Contact form confirms, resets and closes its dialog"),
    ("theme-toggle", "Theme toggle flips and persists the preference"),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "phone-mask" | "phone" => Some(Box::new(phone::PhoneMaskScenario)),
        "form-invalid" | "invalid" => Some(Box::new(form::InvalidSubmitScenario)),
        "form-valid" | "valid" => Some(Box::new(form::ValidSubmitScenario)),
        "theme-toggle" | "theme" => Some(Box::new(theme::ThemeToggleScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.to_vec()
}

/// Every catalogue key, in listing order.
pub fn all_scenario_keys() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(key, _)| *key)
}
