//! Preview image composition tests.

use cardpulse::og::{
    chart_points, format_price, render_svg, ChartBox, OgCard, OgRenderer, HEIGHT, MAX_CHART_POINTS,
    WIDTH,
};
use cardpulse::models::CardDetail;
use serde_json::json;

const AREA: ChartBox = ChartBox {
    x: 0.0,
    y: 0.0,
    width: 100.0,
    height: 50.0,
};

// ---------------------------------------------------------------------------
// Chart geometry
// ---------------------------------------------------------------------------

#[test]
fn chart_maps_min_to_bottom_and_max_to_top() {
    let pts = chart_points(&[10.0, 20.0, 15.0], &AREA);
    assert_eq!(pts, vec![(0.0, 50.0), (50.0, 0.0), (100.0, 25.0)]);
}

#[test]
fn short_or_flat_series_draw_a_midline() {
    let mid = vec![(0.0, 25.0), (100.0, 25.0)];
    assert_eq!(chart_points(&[], &AREA), mid);
    assert_eq!(chart_points(&[12.0], &AREA), mid);
    assert_eq!(chart_points(&[5.0, 5.0, 5.0], &AREA), mid);
    assert_eq!(chart_points(&[f64::NAN, 3.0], &AREA), mid);
}

#[test]
fn long_series_are_downsampled_keeping_endpoints() {
    let prices: Vec<f64> = (0..500).map(|i| i as f64).collect();
    let pts = chart_points(&prices, &AREA);

    assert_eq!(pts.len(), MAX_CHART_POINTS);
    assert_eq!(pts.first(), Some(&(0.0, 50.0)));
    assert_eq!(pts.last(), Some(&(100.0, 0.0)));
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

#[test]
fn format_price_groups_thousands() {
    assert_eq!(format_price(0.5), "$0.50");
    assert_eq!(format_price(12.346), "$12.35");
    assert_eq!(format_price(1234567.0), "$1,234,567.00");
    assert_eq!(format_price(-1500.0), "-$1,500.00");
}

#[test]
fn svg_escapes_card_text() {
    let card = OgCard {
        name: "Fire & <Ice>".to_string(),
        set_name: Some("Existence".to_string()),
        price: Some(42.0),
        delta: Some(-3.25),
        history: vec![50.0, 45.0, 42.0],
    };
    let svg = render_svg(&card, "CardPulse");

    assert!(svg.contains("Fire &amp; &lt;Ice&gt;"));
    assert!(svg.contains("$42.00"));
    assert!(svg.contains("-3.2%") || svg.contains("-3.3%"));
    assert!(svg.contains("#ef4444"));
    assert!(svg.contains(&format!("width=\"{WIDTH}\" height=\"{HEIGHT}\"")));
}

fn detail(volume: u64, price_delta: f64) -> CardDetail {
    serde_json::from_value(json!({
        "id": 9,
        "name": "Tidal Oracle",
        "latest_price": 20.0,
        "volume": volume,
        "price_delta": price_delta
    }))
    .unwrap()
}

#[test]
fn thin_volume_hides_the_delta_badge() {
    let card = OgCard::from_detail(&detail(1, 400.0), &[]);
    assert_eq!(card.delta, None);

    let svg = render_svg(&card, "CardPulse");
    assert!(!svg.contains("400.0%"));
    assert!(!svg.contains("fill=\"#166534\""));
}

#[test]
fn delta_badge_is_clamped() {
    let card = OgCard::from_detail(&detail(10, 850.0), &[]);
    assert_eq!(card.delta, Some(100.0));
    assert!(render_svg(&card, "CardPulse").contains("+100.0%"));

    let falling = OgCard::from_detail(&detail(10, -250.0), &[]);
    assert_eq!(falling.delta, Some(-100.0));
}

#[test]
fn svg_without_price_says_so() {
    let card = OgCard {
        name: "Unsold".to_string(),
        ..Default::default()
    };
    assert!(render_svg(&card, "CardPulse").contains("No recent sales"));
}

// ---------------------------------------------------------------------------
// Rasterization
// ---------------------------------------------------------------------------

#[test]
fn rasterizes_to_png_of_preview_size() {
    let card = OgCard {
        name: "Storm Caller".to_string(),
        price: Some(9.99),
        history: vec![8.0, 9.0, 9.99],
        ..Default::default()
    };
    let png = OgRenderer::without_fonts()
        .render_png(&card, "CardPulse")
        .unwrap();

    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    // IHDR width and height, big-endian
    assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), WIDTH);
    assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), HEIGHT);
}

#[test]
fn invalid_svg_is_a_render_error() {
    let err = OgRenderer::without_fonts().rasterize("<not-svg").unwrap_err();
    assert!(matches!(err, cardpulse::CardPulseError::Render(_)));
}
