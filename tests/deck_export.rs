//! Integration tests for deck editing, JSON import/export and HTML export

use slide_charts::deck::TextStyle;
use slide_charts::{
    export_html, render_chart, Chart, ChartForm, ChartKind, Deck, DeckError, Palette,
    RenderConfig, Surface, SvgConfig,
};

fn sample_deck() -> Deck {
    let mut deck = Deck::new().with_title("Quarterly <Review>");

    let title = deck.add_text(0).unwrap();
    deck.update_text(0, title, "Revenue by region").unwrap();
    deck.set_text_style(0, title, TextStyle::default().with_bold(true).with_font_size(32))
        .unwrap();
    let chart = ChartForm::new("North, South, East", "12, 7.5, 3")
        .parse(ChartKind::Pie)
        .unwrap();
    deck.set_chart(0, chart).unwrap();

    let second = deck.add_slide().unwrap();
    let body = deck.add_text(second).unwrap();
    deck.update_text(second, body, "Line one\nLine two").unwrap();
    let chart = ChartForm::new("Q1,Q2,Q3,Q4", "1,4,2,8")
        .parse(ChartKind::Line)
        .unwrap();
    deck.set_chart(second, chart).unwrap();

    deck
}

#[test]
fn test_deck_json_round_trip() {
    let deck = sample_deck();
    let json = deck.to_json();
    let back = Deck::from_json(&json).expect("Should load exported deck");

    assert_eq!(back.title, deck.title);
    assert_eq!(back.slides(), deck.slides());
    let chart = back.slide(0).unwrap().chart.as_ref().unwrap();
    assert_eq!(chart.kind, ChartKind::Pie);
    assert_eq!(chart.labels, vec!["North", "South", "East"]);
    assert_eq!(chart.data, vec![12.0, 7.5, 3.0]);
}

#[test]
fn test_html_export_contains_every_slide() {
    let html = export_html(&sample_deck(), &RenderConfig::default());

    assert_eq!(html.matches("<section class=\"slide\"").count(), 2);
    assert!(html.contains("<title>Quarterly &lt;Review&gt;</title>"));
    assert!(html.contains("font-weight: bold;"));
    assert!(html.contains("font-size: 32px;"));
    assert!(html.contains("Line one\nLine two"));
    assert_eq!(html.matches("<svg").count(), 2);
    assert_eq!(html.matches("<path").count(), 3);
    assert_eq!(html.matches("<polyline").count(), 1);
    assert_eq!(html.matches("<circle").count(), 4);
}

#[test]
fn test_export_and_editor_share_geometry() {
    let deck = sample_deck();
    let chart = deck.slide(1).unwrap().chart.clone();

    let config = RenderConfig::new()
        .with_surface(Surface::Preview)
        .with_svg(SvgConfig::inline());
    let svg = render_chart(chart.as_ref(), &config);
    let html = export_html(&deck, &config);

    assert!(html.contains(&svg));
}

#[test]
fn test_custom_palette_in_export() {
    let palette = Palette::from_toml(
        r##"
[colors]
series = ["#000001", "#000002"]
marker = "#00ff00"
"##,
    )
    .unwrap();
    let html = export_html(&sample_deck(), &RenderConfig::new().with_palette(palette));

    assert!(html.contains(r##"fill="#000001""##));
    assert!(html.contains(r##"fill="#000002""##));
    assert!(html.contains(r##"fill="#00ff00""##));
    assert!(!html.contains("#e15759"));
}

#[test]
fn test_form_rejects_mismatched_input() {
    let err = ChartForm::new("a,b,c", "1,2").parse(ChartKind::Bar).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Labels and data must be non-empty and have the same length (3 labels, 2 values)"
    );
}

#[test]
fn test_deck_keeps_last_slide() {
    let mut deck = sample_deck();
    assert_eq!(deck.delete_slide(1).unwrap(), 0);
    assert!(matches!(deck.delete_slide(0), Err(DeckError::LastSlide)));
    assert_eq!(deck.len(), 1);
}

#[test]
fn test_deck_syntax_error_report() {
    let source = "{\n  \"slides\": [\n    {\"id\": 1, \"texts\": [}\n  ]\n}";
    let err = Deck::from_json(source).unwrap_err();
    let report = err.format(source, "broken.json");
    assert!(report.contains("broken.json"));
}

#[test]
fn test_removed_chart_not_exported() {
    let mut deck = sample_deck();
    deck.remove_chart(0).unwrap();
    let html = export_html(&deck, &RenderConfig::default());
    assert_eq!(html.matches("<svg").count(), 1);
    assert!(deck.slide(0).unwrap().chart.is_none());
    assert!(Chart::from_json(&deck.slide(1).unwrap().chart.as_ref().unwrap().to_json()).is_ok());
}
