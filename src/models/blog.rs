use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// WeeklyMoversReport: one entry of the weekly movers archive
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMoversReport {
    /// Week the report covers; also the report's URL slug.
    pub date: NaiveDate,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub top_gainer: Option<String>,
    #[serde(default)]
    pub top_loser: Option<String>,
    #[serde(default)]
    pub total_volume: Option<u64>,
}

impl WeeklyMoversReport {
    pub fn path(&self) -> String {
        format!("/blog/weekly-movers/{}", self.date.format("%Y-%m-%d"))
    }

    pub fn display_title(&self) -> String {
        match &self.title {
            Some(t) if !t.trim().is_empty() => t.clone(),
            _ => format!("Weekly Market Movers: {}", self.date.format("%B %-d, %Y")),
        }
    }

    /// Summary text, or one assembled from the top gainer/loser.
    pub fn display_summary(&self) -> String {
        if let Some(s) = self.summary.as_ref().filter(|s| !s.trim().is_empty()) {
            return s.clone();
        }
        let mut parts = Vec::new();
        if let Some(g) = &self.top_gainer {
            parts.push(format!("Top gainer: {g}."));
        }
        if let Some(l) = &self.top_loser {
            parts.push(format!("Top loser: {l}."));
        }
        if let Some(v) = self.total_volume {
            parts.push(format!("{v} sales tracked."));
        }
        if parts.is_empty() {
            format!(
                "Biggest price moves in the card market for the week of {}.",
                self.date.format("%B %-d, %Y")
            )
        } else {
            parts.join(" ")
        }
    }
}

// ---------------------------------------------------------------------------
// BlogPost: a long-form article or market report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.published_at)
    }
}
