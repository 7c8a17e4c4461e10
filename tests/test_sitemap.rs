//! Sitemap rendering tests.

use cardpulse::models::{BlogPost, WeeklyMoversReport};
use cardpulse::sitemap::{fallback_sitemap, render_sitemap, sitemap_entries, SitemapSources};
use cardpulse::SiteConfig;
use chrono::{NaiveDate, TimeZone, Utc};

fn site() -> SiteConfig {
    SiteConfig {
        site_url: "https://example.test".to_string(),
        ..SiteConfig::default()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
}

#[test]
fn fallback_lists_the_static_pages() {
    let xml = fallback_sitemap(&site(), today());

    for loc in [
        "https://example.test/",
        "https://example.test/market",
        "https://example.test/methodology",
        "https://example.test/blog",
    ] {
        assert!(
            xml.contains(&format!("<loc>{loc}</loc>")),
            "missing {loc} in fallback sitemap"
        );
    }
    assert!(xml.contains("<lastmod>2025-02-01</lastmod>"));
    assert!(xml.trim_end().ends_with("</urlset>"));
}

#[test]
fn empty_sources_render_same_as_fallback() {
    let full = render_sitemap(&site(), &SitemapSources::default(), today());
    assert_eq!(full, fallback_sitemap(&site(), today()));
}

#[test]
fn entries_cover_reports_posts_and_cards() {
    let sources = SitemapSources {
        weekly_movers: vec![WeeklyMoversReport {
            date: NaiveDate::from_ymd_opt(2025, 1, 27).unwrap(),
            title: None,
            summary: None,
            top_gainer: None,
            top_loser: None,
            total_volume: None,
        }],
        posts: vec![BlogPost {
            slug: "grading-guide".to_string(),
            title: "Grading & You".to_string(),
            description: None,
            published_at: Utc.with_ymd_and_hms(2024, 12, 1, 8, 0, 0).unwrap(),
            updated_at: None,
        }],
        card_ids: vec![101, 202],
    };

    let entries = sitemap_entries(&site(), &sources, today());
    let static_count = cardpulse::config::static_pages().len();
    assert_eq!(entries.len(), static_count + 4);

    let report = &entries[static_count];
    assert_eq!(report.loc, "https://example.test/blog/weekly-movers/2025-01-27");
    assert_eq!(report.lastmod, NaiveDate::from_ymd_opt(2025, 1, 27).unwrap());
    assert_eq!(report.changefreq, "weekly");

    let post = &entries[static_count + 1];
    assert_eq!(post.loc, "https://example.test/blog/grading-guide");
    assert_eq!(post.lastmod, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());

    let xml = render_sitemap(&site(), &sources, today());
    assert!(xml.contains("<loc>https://example.test/cards/202</loc>"));
    assert!(xml.contains("<priority>0.8</priority>"));
    assert!(xml.contains("<changefreq>daily</changefreq>"));
    assert_eq!(xml.matches("<url>").count(), static_count + 4);
}
