use anyhow::{Context, Result, ensure};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use neo_site_core::{
    CONTACT_DIALOG, DEMO_DIALOG, DialogPayload, DialogState, PROJECT_DIALOG, SiteConfig,
};

pub struct SmokeScenario;

fn smoke_rules(rng: &mut ChaCha8Rng) -> Result<()> {
    SiteConfig::default()
        .validate()
        .context("default site config is invalid")?;

    let mut dialogs = DialogState::default();
    let opener = format!("opener-{}", rng.gen_range(0..100u32));
    dialogs.open(CONTACT_DIALOG, DialogPayload::None, Some(opener.clone()));
    dialogs.open(
        PROJECT_DIALOG,
        DialogPayload::Project {
            id: rng.gen_range(1..4u32).to_string(),
        },
        Some("somewhere-else".into()),
    );
    ensure!(dialogs.is_open(PROJECT_DIALOG), "replacement dialog not open");
    ensure!(
        dialogs.close_if(DEMO_DIALOG).is_none() && dialogs.is_open(PROJECT_DIALOG),
        "closing a different dialog had an effect"
    );
    let back = dialogs.close();
    ensure!(
        back.as_deref() == Some(opener.as_str()),
        "focus should return to the first opener, got {back:?}"
    );
    ensure!(dialogs.current().is_none(), "dialog still tracked after close");
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open(&ctx.base_url, ctx.load_timeout).await?;

        for id in [DEMO_DIALOG, PROJECT_DIALOG, CONTACT_DIALOG] {
            ensure!(
                page.count(&format!("dialog#{id}")).await? == 1,
                "missing dialog #{id}"
            );
        }
        ensure!(
            page.count(".loading-screen--hidden").await? == 1,
            "loading screen not hidden"
        );

        page.click("cta").await?;
        page.settle().await;
        let snap = page.snapshot().await?;
        ensure!(
            snap.open_dialog.as_deref() == Some(CONTACT_DIALOG),
            "call to action opened {:?}",
            snap.open_dialog
        );
        if ctx.verbose {
            println!("  🌐 Page loaded, seed {}: {snap:?}", ctx.seed);
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke", smoke_rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn smoke_rules_pass() {
        smoke_rules(&mut ChaCha8Rng::seed_from_u64(1337)).expect("smoke rules");
    }
}
