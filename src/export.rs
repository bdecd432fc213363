//! Standalone HTML export of a deck
//!
//! Every slide becomes a `<section>` with its text boxes followed by its
//! chart, drawn at the preview size with the same geometry the editor uses.

use crate::deck::{Deck, Slide, TextBox};
use crate::geometry::{self, Surface};
use crate::renderer::{escape_xml, render_svg, SvgConfig};
use crate::RenderConfig;

const SLIDE_CSS: &str = "\
body { margin: 0; background: #f5f5f5; font-family: Arial, sans-serif; }
.slide { width: 800px; min-height: 600px; margin: 24px auto; padding: 24px; box-sizing: border-box; background: white; box-shadow: 0 0 15px rgba(0,0,0,0.3); border-radius: 10px; display: flex; flex-direction: column; gap: 20px; }
.text { margin-bottom: 8px; white-space: pre-wrap; }
.chart svg { margin: auto; display: block; }";

/// Render a deck as a self-contained HTML document
pub fn export_html(deck: &Deck, config: &RenderConfig) -> String {
    let svg_config = config.svg.clone().with_xml_declaration(false);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_xml(&deck.title)));
    html.push_str(&format!("<style>\n{}\n</style>\n", SLIDE_CSS));
    html.push_str("</head>\n<body>\n");

    for (index, slide) in deck.slides().iter().enumerate() {
        html.push_str(&render_slide(index, slide, config, &svg_config));
    }

    html.push_str("</body>\n</html>\n");

    tracing::debug!(slides = deck.len(), bytes = html.len(), "exported deck as HTML");
    html
}

fn render_slide(index: usize, slide: &Slide, config: &RenderConfig, svg: &SvgConfig) -> String {
    let mut out = format!(
        "<section class=\"slide\" id=\"slide-{}\" data-slide-id=\"{}\">\n",
        index + 1,
        slide.id
    );

    for text in &slide.texts {
        out.push_str(&render_text(text));
    }

    if let Some(chart) = &slide.chart {
        let (width, height) = Surface::Preview.dimensions();
        let scene = geometry::render_with_palette(Some(chart), width, height, &config.palette);
        out.push_str("<div class=\"chart\">\n");
        out.push_str(&render_svg(&scene, svg));
        out.push_str("\n</div>\n");
    }

    out.push_str("</section>\n");
    out
}

fn render_text(text: &TextBox) -> String {
    let style = &text.style;
    let css = format!(
        "font-weight: {}; font-style: {}; text-decoration: {}; font-size: {}px;",
        if style.bold { "bold" } else { "normal" },
        if style.italic { "italic" } else { "normal" },
        if style.underline { "underline" } else { "none" },
        style.font_size
    );
    format!(
        "<div class=\"text\" style=\"{}\">{}</div>\n",
        css,
        escape_xml(&text.text)
    )
}
