//! SVG generation from chart scenes

use crate::scene::{path, Point, Primitive, Scene, ViewBox};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn class_attr(&self, kind: &str) -> String {
        if self.config.class_prefix.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}{}""#, self.config.class_prefix, kind)
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a filled path element
    pub fn add_path(&mut self, kind: &str, d: &str, fill: &str) {
        self.elements.push(format!(
            r#"{}<path{} d="{}" fill="{}"/>"#,
            self.indent_str(),
            self.class_attr(kind),
            d,
            escape_xml(fill)
        ));
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, kind: &str, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.elements.push(format!(
            r#"{}<rect{} x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            self.class_attr(kind),
            x,
            y,
            w,
            h,
            escape_xml(fill)
        ));
    }

    /// Add an unfilled polyline element
    pub fn add_polyline(&mut self, kind: &str, points: &[Point], stroke: &str, stroke_width: f64) {
        let points_str: String = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<polyline{} points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            self.indent_str(),
            self.class_attr(kind),
            points_str,
            escape_xml(stroke),
            stroke_width
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, kind: &str, cx: f64, cy: f64, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"{}<circle{} cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.indent_str(),
            self.class_attr(kind),
            cx,
            cy,
            r,
            escape_xml(fill)
        ));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64, view_box: Option<ViewBox>) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.xml_declaration {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let view_box_attr = view_box
            .map(|vb| {
                format!(
                    r#" viewBox="{} {} {} {}""#,
                    vb.x, vb.y, vb.width, vb.height
                )
            })
            .unwrap_or_default();
        let class_attr = self.class_attr("chart");

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg"{} width="{}" height="{}"{}>"#,
            class_attr, width, height, view_box_attr
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a scene to an SVG string
pub fn render_svg(scene: &Scene, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for primitive in &scene.primitives {
        let kind = primitive.kind();
        match primitive {
            Primitive::Path { segments, fill } => {
                builder.add_path(kind, &path::to_svg_d(segments), fill);
            }
            Primitive::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => builder.add_rect(kind, *x, *y, *width, *height, fill),
            Primitive::Polyline {
                points,
                stroke,
                stroke_width,
            } => builder.add_polyline(kind, points, stroke, *stroke_width),
            Primitive::Circle { cx, cy, r, fill } => builder.add_circle(kind, *cx, *cy, *r, fill),
        }
    }

    builder.build(scene.width, scene.height, scene.view_box)
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
