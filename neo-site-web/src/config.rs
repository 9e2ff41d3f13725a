use neo_site_core::SiteConfig;

const SITE_JSON: &str = include_str!("../static/site.json");

/// Site tunables embedded at build time.
///
/// A malformed or out-of-range document is logged and replaced by the
/// built-in defaults so the page always boots.
#[must_use]
pub fn load_site_config() -> SiteConfig {
    parse_or_default(SITE_JSON)
}

fn parse_or_default(json: &str) -> SiteConfig {
    SiteConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("site config rejected, using defaults: {err}");
        SiteConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(load_site_config(), SiteConfig::default());
    }

    #[test]
    fn invalid_documents_fall_back() {
        assert_eq!(parse_or_default("{"), SiteConfig::default());
        assert_eq!(
            parse_or_default(r#"{"frame_ms": 0}"#),
            SiteConfig::default()
        );
        let tuned = parse_or_default(r#"{"notice_ms": 1500}"#);
        assert_eq!(tuned.notice_ms, 1500);
        assert_eq!(tuned.loading_ms, SiteConfig::default().loading_ms);
    }
}
