use anyhow::{Context, Result, ensure};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use neo_site_core::theme::parse_stored;
use neo_site_core::{
    MemoryPreferenceStore, PreferenceStore, Theme, resolve_initial_theme, toggle_theme,
};

pub struct ThemeToggleScenario;

fn preference_rules(rng: &mut ChaCha8Rng) -> Result<()> {
    let start = if rng.gen_bool(0.5) { Theme::Dark } else { Theme::Light };
    let store = MemoryPreferenceStore::default();

    let flips = rng.gen_range(1..8);
    let mut theme = start;
    for _ in 0..flips {
        theme = toggle_theme(&store, theme).context("memory store never fails")?;
        let stored = store.load_theme().context("memory store never fails")?;
        ensure!(stored == Some(theme), "stored {stored:?} after toggling to {theme:?}");
    }
    let expected = if flips % 2 == 0 { start } else { start.toggled() };
    ensure!(theme == expected, "{flips} toggles from {start:?} ended on {theme:?}");

    ensure!(
        resolve_initial_theme(Some(theme), Some(theme != Theme::Dark)) == theme,
        "stored preference must beat the system scheme"
    );
    ensure!(resolve_initial_theme(None, None) == Theme::Dark, "default is not dark");

    let garbage: String = (0..rng.gen_range(1..10))
        .map(|_| char::from(b'A' + rng.gen_range(0..26u8)))
        .collect();
    ensure!(
        parse_stored(Some(garbage.clone())).is_none(),
        "garbage {garbage:?} parsed as a theme"
    );
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for ThemeToggleScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open(&ctx.base_url, ctx.load_timeout).await?;
        page.clear_storage().await?;
        page.open(&ctx.base_url, ctx.load_timeout).await?;

        let initial = page
            .snapshot()
            .await?
            .theme
            .context("no data-theme on the document")?;

        page.click("themeToggle").await?;
        page.settle().await;
        let flipped = page.snapshot().await?.theme;
        ensure!(
            flipped.as_deref() != Some(initial.as_str()),
            "theme stayed {initial} after toggling"
        );
        let stored = page.stored_theme().await?;
        ensure!(stored == flipped, "stored {stored:?} but showing {flipped:?}");

        page.open(&ctx.base_url, ctx.load_timeout).await?;
        let reloaded = page.snapshot().await?.theme;
        ensure!(reloaded == flipped, "preference lost on reload: {reloaded:?}");

        page.click("themeToggle").await?;
        page.settle().await;
        let restored = page.snapshot().await?.theme;
        ensure!(
            restored.as_deref() == Some(initial.as_str()),
            "second toggle showed {restored:?}, expected {initial}"
        );
        if ctx.verbose {
            println!("  🌗 {initial} -> {flipped:?} -> {restored:?}");
        }
        Ok(())
    }
}

impl CombinedScenario for ThemeToggleScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Theme Preference", preference_rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn preference_rules_hold_for_fixed_seeds() {
        for seed in 0..16 {
            preference_rules(&mut ChaCha8Rng::seed_from_u64(seed)).expect("theme rules");
        }
    }
}
