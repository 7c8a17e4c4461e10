//! Open Graph preview images for card pages.
//!
//! The image is composed as an SVG scene (string-templated, like the feeds)
//! and rasterized to a 1200x630 PNG with `resvg`. Text is drawn with whatever
//! system fonts are available to the font database; the chart and layout do
//! not depend on fonts.

use std::sync::Arc;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};
use tracing::debug;

use crate::error::{CardPulseError, Result};
use crate::models::{CardDetail, PricePoint};
use crate::xml::escape_xml;

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

pub const CONTENT_TYPE: &str = "image/png";
pub const CACHE_CONTROL: &str = "public, max-age=86400";

/// Most points drawn on the preview chart.
pub const MAX_CHART_POINTS: usize = 60;

const MAX_NAME_CHARS: usize = 42;
const FONT_STACK: &str = "Inter, 'DejaVu Sans', Arial, sans-serif";

// ---------------------------------------------------------------------------
// OgCard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OgCard {
    pub name: String,
    pub set_name: Option<String>,
    pub price: Option<f64>,
    pub delta: Option<f64>,
    /// Prices in chronological order.
    pub history: Vec<f64>,
}

impl OgCard {
    /// Build from a fetched card and its (possibly empty) history.
    pub fn from_detail(card: &CardDetail, history: &[PricePoint]) -> Self {
        let mut points: Vec<&PricePoint> = history.iter().collect();
        points.sort_by_key(|p| p.date);

        Self {
            name: card.name.clone(),
            set_name: Some(card.set_name.clone()).filter(|s| !s.is_empty()),
            price: card.headline_price(),
            delta: Some(card.effective_delta()).filter(|d| *d != 0.0),
            history: points.into_iter().map(|p| p.price).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Chart geometry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub const CHART_BOX: ChartBox = ChartBox {
    x: 80.0,
    y: 330.0,
    width: 1040.0,
    height: 220.0,
};

/// Map a price series onto `area`, oldest point on the left.
///
/// Non-finite prices are dropped and long series are downsampled to
/// [`MAX_CHART_POINTS`]. Fewer than two points, or a series with no range,
/// becomes a flat line across the middle of the box.
pub fn chart_points(prices: &[f64], area: &ChartBox) -> Vec<(f32, f32)> {
    let series = downsample(
        &prices.iter().copied().filter(|p| p.is_finite()).collect::<Vec<_>>(),
        MAX_CHART_POINTS,
    );

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mid_y = area.y + area.height / 2.0;

    if series.len() < 2 || max - min <= f64::EPSILON {
        return vec![(area.x, mid_y), (area.x + area.width, mid_y)];
    }

    let last = (series.len() - 1) as f32;
    let range = max - min;
    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = area.x + area.width * i as f32 / last;
            let y = area.y + area.height - (((p - min) / range) as f32) * area.height;
            (x, y)
        })
        .collect()
}

/// Evenly spaced picks that always keep the first and last value.
fn downsample(values: &[f64], max: usize) -> Vec<f64> {
    if values.len() <= max || max < 2 {
        return values.to_vec();
    }
    let step = (values.len() - 1) as f64 / (max - 1) as f64;
    (0..max)
        .map(|i| values[((i as f64 * step).round() as usize).min(values.len() - 1)])
        .collect()
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// `$1,234.56` style price label.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let mut s: String = name.chars().take(max - 1).collect();
    s.push('…');
    s
}

/// Compose the preview as an SVG document.
pub fn render_svg(card: &OgCard, site_name: &str) -> String {
    let points = chart_points(&card.history, &CHART_BOX);
    let rising = match (card.history.first(), card.history.last()) {
        (Some(first), Some(last)) if card.history.len() >= 2 => last >= first,
        _ => card.delta.map_or(true, |d| d >= 0.0),
    };
    let line_color = if rising { "#22c55e" } else { "#ef4444" };

    let polyline = points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    let baseline = CHART_BOX.y + CHART_BOX.height;
    let area = format!(
        "{:.1},{baseline:.1} {polyline} {:.1},{baseline:.1}",
        CHART_BOX.x,
        CHART_BOX.x + CHART_BOX.width
    );

    let mut out = String::with_capacity(4096);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\">\n"
    ));
    out.push_str(
        "<defs><linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">\
         <stop offset=\"0\" stop-color=\"#0f172a\"/><stop offset=\"1\" stop-color=\"#1e293b\"/>\
         </linearGradient></defs>\n",
    );
    out.push_str(&format!(
        "<rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"url(#bg)\"/>\n"
    ));

    out.push_str(&text(80.0, 90.0, 28, "#94a3b8", &site_name.to_uppercase()));
    out.push_str(&text(80.0, 170.0, 64, "#f8fafc", &truncate(&card.name, MAX_NAME_CHARS)));
    if let Some(set) = &card.set_name {
        out.push_str(&text(80.0, 220.0, 32, "#cbd5e1", set));
    }

    let price_label = card.price.map_or_else(|| "No recent sales".to_string(), format_price);
    out.push_str(&text(80.0, 295.0, 56, "#f8fafc", &price_label));

    if let Some(delta) = card.delta {
        let (fill, sign) = if delta >= 0.0 {
            ("#166534", "+")
        } else {
            ("#991b1b", "")
        };
        out.push_str(&format!(
            "<rect x=\"900\" y=\"245\" rx=\"16\" width=\"220\" height=\"64\" fill=\"{fill}\"/>\n"
        ));
        out.push_str(&text(930.0, 290.0, 36, "#f8fafc", &format!("{sign}{delta:.1}%")));
    }

    out.push_str(&format!(
        "<polygon points=\"{area}\" fill=\"{line_color}\" fill-opacity=\"0.15\"/>\n"
    ));
    out.push_str(&format!(
        "<polyline points=\"{polyline}\" fill=\"none\" stroke=\"{line_color}\" stroke-width=\"5\" stroke-linejoin=\"round\" stroke-linecap=\"round\"/>\n"
    ));
    out.push_str("</svg>\n");
    out
}

fn text(x: f32, y: f32, size: u32, fill: &str, content: &str) -> String {
    format!(
        "<text x=\"{x}\" y=\"{y}\" font-family=\"{FONT_STACK}\" font-size=\"{size}\" font-weight=\"700\" fill=\"{fill}\">{}</text>\n",
        escape_xml(content)
    )
}

// ---------------------------------------------------------------------------
// OgRenderer
// ---------------------------------------------------------------------------

/// Rasterizes preview scenes. Holds the font database, which is loaded once.
#[derive(Clone)]
pub struct OgRenderer {
    fontdb: Arc<fontdb::Database>,
}

impl OgRenderer {
    /// Create a renderer using the system's installed fonts.
    pub fn with_system_fonts() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        debug!(faces = db.len(), "loaded system fonts for preview images");
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Create a renderer with no fonts; text is skipped, shapes still render.
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(fontdb::Database::new()),
        }
    }

    pub fn render_png(&self, card: &OgCard, site_name: &str) -> Result<Vec<u8>> {
        let svg = render_svg(card, site_name);
        self.rasterize(&svg)
    }

    /// Rasterize an SVG document at its own size into PNG bytes.
    pub fn rasterize(&self, svg: &str) -> Result<Vec<u8>> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &options)
            .map_err(|e| CardPulseError::Render(format!("invalid SVG scene: {e}")))?;

        let size = tree.size().to_int_size();
        let mut pixmap = Pixmap::new(size.width(), size.height())
            .ok_or_else(|| CardPulseError::Render("zero-sized image".into()))?;
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| CardPulseError::Render(format!("PNG encoding failed: {e}")))
    }
}

impl std::fmt::Debug for OgRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OgRenderer")
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}
