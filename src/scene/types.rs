//! Core scene types

use serde::{Deserialize, Serialize};

use super::PathSegment;

/// A 2D point in the scene coordinate system (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on a circle at angle `theta` (radians, clockwise from +X in y-down space)
    pub fn on_circle(center: Point, radius: f64, theta: f64) -> Self {
        Self {
            x: center.x + radius * theta.cos(),
            y: center.y + radius * theta.sin(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Logical coordinate system mapped onto the outer viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// A filled closed path (pie sector)
    Path {
        segments: Vec<PathSegment>,
        fill: String,
    },
    /// A filled rectangle
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    /// A stroked, unfilled polyline
    Polyline {
        points: Vec<Point>,
        stroke: String,
        stroke_width: f64,
    },
    /// A filled circle
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },
}

impl Primitive {
    /// Short name of the primitive kind, used for CSS classes and logging
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Path { .. } => "slice",
            Primitive::Rect { .. } => "bar",
            Primitive::Polyline { .. } => "line",
            Primitive::Circle { .. } => "marker",
        }
    }

    /// True when every coordinate and dimension is a finite number
    pub fn is_finite(&self) -> bool {
        match self {
            Primitive::Path { segments, .. } => segments.iter().all(|seg| match seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p.is_finite(),
                PathSegment::ArcTo { end, radius, .. } => end.is_finite() && radius.is_finite(),
                PathSegment::Close => true,
            }),
            Primitive::Rect {
                x,
                y,
                width,
                height,
                ..
            } => [x, y, width, height].iter().all(|v| v.is_finite()),
            Primitive::Polyline {
                points,
                stroke_width,
                ..
            } => stroke_width.is_finite() && points.iter().all(Point::is_finite),
            Primitive::Circle { cx, cy, r, .. } => {
                cx.is_finite() && cy.is_finite() && r.is_finite()
            }
        }
    }
}

/// The set of primitives produced by one render call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Outer viewport width
    pub width: f64,
    /// Outer viewport height
    pub height: f64,
    /// Logical coordinate system, when it differs from the viewport
    pub view_box: Option<ViewBox>,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// A scene with nothing to draw
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            view_box: None,
            primitives: vec![],
        }
    }

    pub fn with_view_box(mut self, view_box: ViewBox) -> Self {
        self.view_box = Some(view_box);
        self
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// True when every primitive has finite geometry
    pub fn is_finite(&self) -> bool {
        self.primitives.iter().all(Primitive::is_finite)
    }
}
