//! Path segments for sector shapes
//!
//! Converts resolved segments into SVG path `d` attribute strings.

use serde::{Deserialize, Serialize};

use super::Point;

/// A segment in a resolved path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Circular arc to point
    ArcTo {
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool, // true = clockwise in SVG coordinates (y-down)
    },
    /// Close path back to start
    Close,
}

/// Convert a list of segments to an SVG path `d` attribute string
///
/// Coordinates are written with full precision so that two independent
/// consumers of the same scene agree on every vertex.
pub fn to_svg_d(segments: &[PathSegment]) -> String {
    let mut parts = Vec::with_capacity(segments.len());

    for seg in segments {
        match seg {
            PathSegment::MoveTo(p) => parts.push(format!("M{},{}", p.x, p.y)),
            PathSegment::LineTo(p) => parts.push(format!("L{},{}", p.x, p.y)),
            PathSegment::ArcTo {
                end,
                radius,
                large_arc,
                sweep,
            } => {
                let large = if *large_arc { 1 } else { 0 };
                let sw = if *sweep { 1 } else { 0 };
                // A rx,ry x-axis-rotation large-arc-flag sweep-flag x,y
                parts.push(format!(
                    "A{},{} 0 {} {} {},{}",
                    radius, radius, large, sw, end.x, end.y
                ));
            }
            PathSegment::Close => parts.push("Z".to_string()),
        }
    }

    parts.join(" ")
}
