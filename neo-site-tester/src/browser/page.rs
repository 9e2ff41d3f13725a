use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

use neo_site_core::THEME_STORAGE_KEY;

/// What the page looks like from the outside, captured alongside failures.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SiteSnapshot {
    pub theme: Option<String>,
    pub loaded: bool,
    pub open_dialog: Option<String>,
    pub active_element: Option<String>,
}

pub const SNAPSHOT_SCRIPT: &str = r"
    const open = document.querySelector('dialog[open]');
    return {
        theme: document.documentElement.getAttribute('data-theme'),
        loaded: document.body.classList.contains('loaded'),
        open_dialog: open ? open.id : null,
        active_element: document.activeElement ? (document.activeElement.id || null) : null,
    };
";

/// Thin driver over the rendered site, addressing elements by id.
#[derive(Debug, Clone)]
pub struct SitePage<'a> {
    driver: &'a WebDriver,
}

impl<'a> SitePage<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    async fn eval(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        let ret = self.driver.execute(script, args).await?;
        Ok(ret.json().clone())
    }

    /// Load the site and wait for the loading screen to go away.
    pub async fn open(&self, base_url: &str, timeout: Duration) -> Result<()> {
        self.driver.goto(base_url).await?;
        self.driver
            .find(By::Id("main"))
            .await
            .context("page shell did not render")?;
        let started = Instant::now();
        while !self.snapshot().await?.loaded {
            if started.elapsed() > timeout {
                bail!("loading screen still visible after {timeout:?}");
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        Ok(())
    }

    pub async fn snapshot(&self) -> Result<SiteSnapshot> {
        let v = self.eval(SNAPSHOT_SCRIPT, vec![]).await?;
        serde_json::from_value(v).context("parsing SiteSnapshot")
    }

    pub async fn click(&self, id: &str) -> Result<()> {
        self.driver
            .find(By::Id(id))
            .await
            .with_context(|| format!("#{id} not found"))?
            .click()
            .await?;
        Ok(())
    }

    /// Replace the field contents by typing, so the input handlers run.
    pub async fn type_into(&self, id: &str, text: &str) -> Result<()> {
        let el = self
            .driver
            .find(By::Id(id))
            .await
            .with_context(|| format!("#{id} not found"))?;
        el.clear().await?;
        el.send_keys(text).await?;
        Ok(())
    }

    pub async fn value(&self, id: &str) -> Result<String> {
        let v = self
            .eval(
                "const el = document.getElementById(arguments[0]); return el ? el.value : null;",
                vec![id.into()],
            )
            .await?;
        v.as_str()
            .map(str::to_string)
            .with_context(|| format!("#{id} has no value"))
    }

    pub async fn attr(&self, id: &str, name: &str) -> Result<Option<String>> {
        let v = self
            .eval(
                "const el = document.getElementById(arguments[0]); return el ? el.getAttribute(arguments[1]) : null;",
                vec![id.into(), name.into()],
            )
            .await?;
        Ok(v.as_str().map(str::to_string))
    }

    pub async fn submit(&self, form_id: &str) -> Result<()> {
        let found = self
            .eval(
                "const f = document.getElementById(arguments[0]); if (!f) return false; f.requestSubmit(); return true;",
                vec![form_id.into()],
            )
            .await?;
        if found.as_bool() != Some(true) {
            bail!("form #{form_id} not found");
        }
        Ok(())
    }

    pub async fn stored_theme(&self) -> Result<Option<String>> {
        let v = self
            .eval(
                "return window.localStorage.getItem(arguments[0]);",
                vec![THEME_STORAGE_KEY.into()],
            )
            .await?;
        Ok(v.as_str().map(str::to_string))
    }

    pub async fn clear_storage(&self) -> Result<()> {
        self.eval("window.localStorage.clear();", vec![]).await?;
        Ok(())
    }

    pub async fn count(&self, selector: &str) -> Result<u64> {
        let v = self
            .eval(
                "return document.querySelectorAll(arguments[0]).length;",
                vec![selector.into()],
            )
            .await?;
        Ok(v.as_u64().unwrap_or(0))
    }

    /// Give effects and timers a moment to run.
    pub async fn settle(&self) {
        tokio::time::sleep(Duration::from_millis(150)).await;
    }
}
