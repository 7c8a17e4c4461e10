//! RSS 2.0 feed of the weekly market movers reports.

use chrono::{DateTime, NaiveTime, Utc};

use crate::config::SiteConfig;
use crate::models::WeeklyMoversReport;
use crate::xml::{escape_xml, push_element};

pub const CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";
pub const CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

/// Path the feed is served from; used for the `atom:link` self reference.
pub const FEED_PATH: &str = "/feed.xml";

/// Render the full feed, newest report first.
pub fn render_rss(site: &SiteConfig, reports: &[WeeklyMoversReport], now: DateTime<Utc>) -> String {
    let mut sorted: Vec<&WeeklyMoversReport> = reports.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut out = channel_open(site, now);
    for report in sorted {
        push_item(&mut out, site, report);
    }
    out.push_str(CHANNEL_CLOSE);
    out
}

/// A valid channel with no items, served when the upstream is unavailable.
pub fn fallback_rss(site: &SiteConfig, now: DateTime<Utc>) -> String {
    let mut out = channel_open(site, now);
    out.push_str(CHANNEL_CLOSE);
    out
}

const CHANNEL_CLOSE: &str = "  </channel>\n</rss>\n";

fn channel_open(site: &SiteConfig, now: DateTime<Utc>) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n");
    out.push_str("  <channel>\n");
    push_element(&mut out, "    ", "title", &format!("{} Weekly Movers", site.site_name));
    push_element(&mut out, "    ", "link", &site.page_url("/blog/weekly-movers"));
    push_element(&mut out, "    ", "description", &site.description);
    push_element(&mut out, "    ", "language", "en-us");
    push_element(&mut out, "    ", "lastBuildDate", &now.to_rfc2822());
    out.push_str(&format!(
        "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        escape_xml(&site.page_url(FEED_PATH))
    ));
    out
}

fn push_item(out: &mut String, site: &SiteConfig, report: &WeeklyMoversReport) {
    let link = site.page_url(&report.path());
    let published = report.date.and_time(NaiveTime::MIN).and_utc();

    out.push_str("    <item>\n");
    push_element(out, "      ", "title", &report.display_title());
    push_element(out, "      ", "link", &link);
    push_element(out, "      ", "description", &report.display_summary());
    push_element(out, "      ", "pubDate", &published.to_rfc2822());
    out.push_str(&format!(
        "      <guid isPermaLink=\"true\">{}</guid>\n",
        escape_xml(&link)
    ));
    out.push_str("    </item>\n");
}
