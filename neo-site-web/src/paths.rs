//! Helpers for constructing URLs to static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/site` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Script URL for the offline service worker.
#[must_use]
pub fn service_worker_path() -> String {
    asset_path("sw.js")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, service_worker_path};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("audio/click.mp3"), "/audio/click.mp3");
        assert_eq!(asset_path("/audio/click.mp3"), "/audio/click.mp3");
        assert_eq!(service_worker_path(), "/sw.js");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("audio/click.mp3", "/site"),
            "/site/audio/click.mp3"
        );
        assert_eq!(
            super::asset_path_with_base("/sw.js", "/site/"),
            "/site/sw.js"
        );
    }
}
