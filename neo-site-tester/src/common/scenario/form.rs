use anyhow::{Result, bail, ensure};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use neo_site_core::validation::{EMAIL_MESSAGE, PHONE_MESSAGE};
use neo_site_core::{
    CONTACT_DIALOG, FormSpec, FormValues, SiteConfig, SubmissionGuard, SubmitOutcome,
    format_phone, validate_form,
};

const FORM_ID: &str = "contactForm";

pub struct InvalidSubmitScenario;
pub struct ValidSubmitScenario;

fn lowercase_word(rng: &mut ChaCha8Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
        .collect()
}

fn valid_values(rng: &mut ChaCha8Rng) -> FormValues {
    let name_len = rng.gen_range(2..12);
    let subscriber: String = (0..10)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    let mut values = FormValues::new();
    values.insert("name".into(), lowercase_word(rng, name_len));
    values.insert(
        "email".into(),
        format!("{}@{}.com", lowercase_word(rng, 6), lowercase_word(rng, 5)),
    );
    values.insert("phone".into(), format_phone(&format!("8{subscriber}")));
    if rng.gen_bool(0.5) {
        values.insert("message".into(), lowercase_word(rng, 40));
    }
    values
}

fn rejection_rules(rng: &mut ChaCha8Rng) -> Result<()> {
    let spec = FormSpec::contact();

    let empty = validate_form(&spec, &FormValues::new());
    let invalid: Vec<&str> = empty.invalid_fields().map(|f| f.name.as_str()).collect();
    ensure!(
        invalid == ["name", "email", "phone"],
        "empty form flagged {invalid:?}"
    );

    let mut values = valid_values(rng);
    values.insert("name".into(), " ".repeat(rng.gen_range(1..5)));
    let report = validate_form(&spec, &values);
    ensure!(
        report.first_invalid().map(|f| f.name.as_str()) == Some("name"),
        "whitespace-only name accepted"
    );

    let mut values = valid_values(rng);
    values.insert("email".into(), lowercase_word(rng, 8));
    let report = validate_form(&spec, &values);
    let message = report.field("email").and_then(|f| f.display_message());
    ensure!(message == Some(EMAIL_MESSAGE), "email without @ showed {message:?}");

    let mut values = valid_values(rng);
    let short = format_phone(&format!("8{}", rng.gen_range(0..1_000_000u32)));
    values.insert("phone".into(), short.clone());
    let report = validate_form(&spec, &values);
    let message = report.field("phone").and_then(|f| f.display_message());
    ensure!(message == Some(PHONE_MESSAGE), "partial phone {short:?} showed {message:?}");

    let mut guard = SubmissionGuard::new(SiteConfig::default().notice_ms);
    match guard.submit(&spec, &empty, 0.0) {
        SubmitOutcome::Rejected { .. } => {}
        other => bail!("empty submit produced {other:?}"),
    }
    ensure!(!guard.is_pending(), "a rejected submit must not start a confirmation");
    Ok(())
}

fn acceptance_rules(rng: &mut ChaCha8Rng) -> Result<()> {
    let spec = FormSpec::contact().inside_dialog(CONTACT_DIALOG);
    let notice_ms = SiteConfig::default().notice_ms;
    let mut guard = SubmissionGuard::new(notice_ms);
    let values = valid_values(rng);
    let report = validate_form(&spec, &values);
    ensure!(report.is_valid(), "generated values rejected: {values:?}");

    let now = f64::from(rng.gen_range(0..10_000u32));
    match guard.submit(&spec, &report, now) {
        SubmitOutcome::Accepted {
            notice,
            close_dialog,
        } => {
            ensure!(
                close_dialog.as_deref() == Some(CONTACT_DIALOG),
                "accepted submit closes {close_dialog:?}"
            );
            ensure!(
                (notice.expires_at_ms - now - f64::from(notice_ms)).abs() < f64::EPSILON,
                "notice expiry off: {}",
                notice.expires_at_ms
            );
        }
        other => bail!("valid submit produced {other:?}"),
    }

    let again = now + f64::from(rng.gen_range(0..notice_ms));
    ensure!(
        matches!(guard.submit(&spec, &report, again), SubmitOutcome::Pending { .. }),
        "second submit during the confirmation was not debounced"
    );
    let later = now + f64::from(notice_ms);
    ensure!(
        matches!(guard.submit(&spec, &report, later), SubmitOutcome::Accepted { .. }),
        "submit after the confirmation expired was not accepted"
    );
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for InvalidSubmitScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open(&ctx.base_url, ctx.load_timeout).await?;
        page.click("cta").await?;
        page.settle().await;

        page.type_into("contactForm-email", "not-an-email").await?;
        page.submit(FORM_ID).await?;
        page.settle().await;

        for field in ["name", "email", "phone"] {
            let id = format!("{FORM_ID}-{field}");
            let invalid = page.attr(&id, "aria-invalid").await?;
            ensure!(
                invalid.as_deref() == Some("true"),
                "#{id} not marked invalid ({invalid:?})"
            );
        }
        ensure!(page.count(".toast").await? == 0, "rejected submit showed a toast");
        let snap = page.snapshot().await?;
        ensure!(
            snap.open_dialog.as_deref() == Some(CONTACT_DIALOG),
            "dialog closed on a rejected submit: {snap:?}"
        );
        Ok(())
    }
}

impl CombinedScenario for InvalidSubmitScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Contact Form Rejection", rejection_rules))
    }
}

#[async_trait::async_trait]
impl BrowserScenario for ValidSubmitScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open(&ctx.base_url, ctx.load_timeout).await?;
        page.click("cta").await?;
        page.settle().await;

        page.type_into("contactForm-name", "Ada Lovelace").await?;
        page.type_into("contactForm-email", "ada@example.com").await?;
        page.type_into("contactForm-phone", "89991234567").await?;
        page.submit(FORM_ID).await?;
        page.settle().await;

        ensure!(page.count(".toast").await? >= 1, "no confirmation toast");
        ensure!(
            page.value("contactForm-name").await?.is_empty(),
            "form was not reset"
        );
        let snap = page.snapshot().await?;
        ensure!(snap.open_dialog.is_none(), "dialog still open: {snap:?}");
        ensure!(
            snap.active_element.as_deref() == Some("cta"),
            "focus went to {:?} instead of the opener",
            snap.active_element
        );
        if ctx.verbose {
            println!("  📨 Submitted, confirmed and closed: {snap:?}");
        }
        Ok(())
    }
}

impl CombinedScenario for ValidSubmitScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Contact Form Acceptance", acceptance_rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn generated_values_always_validate() {
        let spec = FormSpec::contact();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let values = valid_values(&mut rng);
            assert!(validate_form(&spec, &values).is_valid(), "{values:?}");
        }
    }

    #[test]
    fn form_rules_hold_for_fixed_seeds() {
        for seed in [1, 2, 3] {
            rejection_rules(&mut ChaCha8Rng::seed_from_u64(seed)).expect("rejection rules");
            acceptance_rules(&mut ChaCha8Rng::seed_from_u64(seed)).expect("acceptance rules");
        }
    }
}
