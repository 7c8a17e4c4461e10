//! XML sitemap covering static pages, reports, blog posts and card pages.

use chrono::NaiveDate;

use crate::config::{self, SiteConfig};
use crate::models::{BlogPost, WeeklyMoversReport};
use crate::xml::push_element;

pub const CONTENT_TYPE: &str = "application/xml; charset=utf-8";
pub const CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

/// Upper bound on card detail pages listed; sitemaps cap at 50k URLs.
pub const MAX_CARD_URLS: usize = 45_000;

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub changefreq: &'static str,
    pub priority: f32,
}

/// Upstream-derived content of the sitemap. Any list may be empty.
#[derive(Debug, Clone, Default)]
pub struct SitemapSources {
    pub weekly_movers: Vec<WeeklyMoversReport>,
    pub posts: Vec<BlogPost>,
    pub card_ids: Vec<i64>,
}

/// Build the full entry list: static pages first, then reports, posts and cards.
pub fn sitemap_entries(site: &SiteConfig, sources: &SitemapSources, today: NaiveDate) -> Vec<SitemapEntry> {
    let mut entries = static_entries(site, today);

    entries.extend(sources.weekly_movers.iter().map(|r| SitemapEntry {
        loc: site.page_url(&r.path()),
        lastmod: r.date,
        changefreq: "weekly",
        priority: 0.6,
    }));

    entries.extend(sources.posts.iter().map(|p| SitemapEntry {
        loc: site.page_url(&p.path()),
        lastmod: p.last_modified().date_naive(),
        changefreq: "monthly",
        priority: 0.6,
    }));

    entries.extend(
        sources
            .card_ids
            .iter()
            .take(MAX_CARD_URLS)
            .map(|id| SitemapEntry {
                loc: site.page_url(&format!("/cards/{id}")),
                lastmod: today,
                changefreq: "daily",
                priority: 0.8,
            }),
    );

    entries
}

pub fn render_sitemap(site: &SiteConfig, sources: &SitemapSources, today: NaiveDate) -> String {
    render_entries(&sitemap_entries(site, sources, today))
}

/// Static pages only, served when the upstream is unavailable.
pub fn fallback_sitemap(site: &SiteConfig, today: NaiveDate) -> String {
    render_entries(&static_entries(site, today))
}

fn static_entries(site: &SiteConfig, today: NaiveDate) -> Vec<SitemapEntry> {
    config::static_pages()
        .into_iter()
        .map(|(path, changefreq, priority)| SitemapEntry {
            loc: site.page_url(path),
            lastmod: today,
            changefreq,
            priority,
        })
        .collect()
}

fn render_entries(entries: &[SitemapEntry]) -> String {
    let mut out = String::with_capacity(128 + entries.len() * 160);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for e in entries {
        out.push_str("  <url>\n");
        push_element(&mut out, "    ", "loc", &e.loc);
        push_element(&mut out, "    ", "lastmod", &e.lastmod.format("%Y-%m-%d").to_string());
        push_element(&mut out, "    ", "changefreq", e.changefreq);
        push_element(&mut out, "    ", "priority", &format!("{:.1}", e.priority));
        out.push_str("  </url>\n");
    }
    out.push_str("</urlset>\n");
    out
}
