use std::env;

pub const DEFAULT_SITE_NAME: &str = "CardPulse";
pub const DEFAULT_SITE_URL: &str = "https://cardpulse.gg";
pub const DEFAULT_SITE_DESCRIPTION: &str =
    "Trading card market prices, weekly movers and sales analytics";
pub const DEFAULT_API_URL: &str = "https://api.cardpulse.gg";

/// Path prefix of the versioned upstream REST API.
pub const API_PREFIX: &str = "/api/v1";

/// Pages that exist independently of any upstream data, with their
/// `(path, changefreq, priority)` sitemap attributes.
pub fn static_pages() -> Vec<(&'static str, &'static str, f32)> {
    vec![
        ("/", "hourly", 1.0),
        ("/market", "hourly", 0.9),
        ("/methodology", "monthly", 0.5),
        ("/blog", "daily", 0.7),
        ("/blog/weekly-movers", "weekly", 0.6),
    ]
}

/// Site-wide settings shared by the feed, sitemap and image formatters.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub site_name: String,
    pub site_url: String,
    pub description: String,
    pub api_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            description: DEFAULT_SITE_DESCRIPTION.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load from `SITE_NAME`, `SITE_URL`, `SITE_DESCRIPTION` and `API_URL`,
    /// falling back to the built-in defaults for unset or blank variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            site_name: get("SITE_NAME", DEFAULT_SITE_NAME),
            site_url: trim_trailing_slash(get("SITE_URL", DEFAULT_SITE_URL)),
            description: get("SITE_DESCRIPTION", DEFAULT_SITE_DESCRIPTION),
            api_url: trim_trailing_slash(get("API_URL", DEFAULT_API_URL)),
        }
    }

    /// Absolute URL for a site-relative path.
    pub fn page_url(&self, path: &str) -> String {
        if path == "/" || path.is_empty() {
            format!("{}/", self.site_url)
        } else if path.starts_with('/') {
            format!("{}{}", self.site_url, path)
        } else {
            format!("{}/{}", self.site_url, path)
        }
    }
}

fn trim_trailing_slash(mut s: String) -> String {
    while s.ends_with('/') {
        s.pop();
    }
    s
}
