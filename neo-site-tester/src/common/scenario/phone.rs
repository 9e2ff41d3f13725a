use anyhow::{Result, ensure};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use neo_site_core::phone::MAX_DIGITS;
use neo_site_core::{format_after_delete, format_phone, is_complete, phone_digits};

const PHONE_ID: &str = "contactForm-phone";
const NOISE: &[char] = &[' ', '-', '(', ')', '+', 'x', '.'];

pub struct PhoneMaskScenario;

/// Digits with the odd separator or stray letter mixed in, the way people
/// paste numbers.
fn noisy_number(rng: &mut ChaCha8Rng) -> String {
    let len = rng.gen_range(0..=14);
    let mut raw = String::new();
    for _ in 0..len {
        if rng.gen_bool(0.25) {
            raw.push(NOISE[rng.gen_range(0..NOISE.len())]);
        }
        raw.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    raw
}

fn mask_properties(rng: &mut ChaCha8Rng) -> Result<()> {
    for _ in 0..32 {
        let raw = noisy_number(rng);
        let shown = format_phone(&raw);

        ensure!(
            format_phone(&shown) == shown,
            "mask is not stable: {raw:?} -> {shown:?} -> {:?}",
            format_phone(&shown)
        );
        let digits = phone_digits(&shown);
        ensure!(digits.len() <= MAX_DIGITS, "too many digits in {shown:?}");
        ensure!(
            shown.is_empty() || shown.starts_with("+7"),
            "{shown:?} lost the country code"
        );
        ensure!(
            is_complete(&shown) == (digits.len() == MAX_DIGITS),
            "completeness of {shown:?} disagrees with its digit count"
        );

        if !shown.is_empty() {
            let mut shortened = shown.clone();
            shortened.pop();
            let after = format_after_delete(&shortened);
            ensure!(
                after.len() < shown.len(),
                "backspace on {shown:?} got stuck at {after:?}"
            );
        }
    }
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for PhoneMaskScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open(&ctx.base_url, ctx.load_timeout).await?;
        page.click("cta").await?;
        page.settle().await;

        for (typed, expected) in [
            ("8999", "+7 (999)"),
            ("89991234567", "+7 (999) 123-45-67"),
            ("9161234567", "+7 (916) 123-45-67"),
            ("abc", ""),
        ] {
            page.type_into(PHONE_ID, typed).await?;
            let value = page.value(PHONE_ID).await?;
            ensure!(
                value == expected,
                "typing {typed:?} showed {value:?}, expected {expected:?}"
            );
            if ctx.verbose {
                println!("  ⌨️  {typed:?} -> {value:?}");
            }
        }
        Ok(())
    }
}

impl CombinedScenario for PhoneMaskScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Phone Mask", mask_properties))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn mask_properties_hold_for_fixed_seeds() {
        for seed in [1, 42, 1337] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            mask_properties(&mut rng).expect("mask properties");
        }
    }

    #[test]
    fn noisy_numbers_are_reproducible() {
        let a = noisy_number(&mut ChaCha8Rng::seed_from_u64(9));
        let b = noisy_number(&mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
