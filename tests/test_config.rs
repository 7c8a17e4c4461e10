//! Site configuration tests.

use std::collections::HashMap;

use cardpulse::config::{SiteConfig, DEFAULT_API_URL, DEFAULT_SITE_NAME};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset_or_blank() {
    let cfg = SiteConfig::from_lookup(lookup(&[("SITE_NAME", "  ")]));
    assert_eq!(cfg.site_name, DEFAULT_SITE_NAME);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn overrides_are_trimmed() {
    let cfg = SiteConfig::from_lookup(lookup(&[
        ("SITE_NAME", "Slab Watch"),
        ("SITE_URL", "https://slab.example/"),
        ("API_URL", "http://localhost:8000//"),
    ]));
    assert_eq!(cfg.site_name, "Slab Watch");
    assert_eq!(cfg.site_url, "https://slab.example");
    assert_eq!(cfg.api_url, "http://localhost:8000");
}

#[test]
fn page_url_joins_paths() {
    let cfg = SiteConfig {
        site_url: "https://slab.example".to_string(),
        ..SiteConfig::default()
    };
    assert_eq!(cfg.page_url("/"), "https://slab.example/");
    assert_eq!(cfg.page_url("/market"), "https://slab.example/market");
    assert_eq!(cfg.page_url("blog"), "https://slab.example/blog");
}
