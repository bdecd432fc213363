//! Pie chart geometry
//!
//! Slices are laid out clockwise from the positive X axis on a circle of
//! radius [`PIE_RADIUS`] centered in a fixed [`PIE_VIEWBOX`] square. The
//! requested width and height only size the outer viewport, so a non-square
//! box stretches the pie.

use std::f64::consts::PI;

use super::{PIE_RADIUS, PIE_VIEWBOX};
use crate::palette::Palette;
use crate::scene::{PathSegment, Point, Primitive, Scene, ViewBox};

/// Angular extent and endpoints of one slice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    /// Radians, measured clockwise from +X in y-down coordinates
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    pub start: Point,
    pub end: Point,
}

impl PieSlice {
    /// Sector outline: center, start point, arc to end point, close
    pub fn segments(&self) -> Vec<PathSegment> {
        vec![
            PathSegment::MoveTo(center()),
            PathSegment::LineTo(self.start),
            PathSegment::ArcTo {
                end: self.end,
                radius: PIE_RADIUS,
                large_arc: self.large_arc,
                sweep: true,
            },
            PathSegment::Close,
        ]
    }
}

fn center() -> Point {
    Point::new(PIE_VIEWBOX / 2.0, PIE_VIEWBOX / 2.0)
}

/// Compute slice angles for a series whose total is positive
///
/// The running sum is accumulated in the same order as the total, so the
/// last slice ends at exactly `2pi`.
pub fn slices(data: &[f64]) -> Vec<PieSlice> {
    let total: f64 = data.iter().sum();
    let mut cumulative = 0.0;

    data.iter()
        .enumerate()
        .map(|(index, value)| {
            let start_angle = cumulative / total * 2.0 * PI;
            cumulative += value;
            let end_angle = cumulative / total * 2.0 * PI;

            PieSlice {
                index,
                start_angle,
                end_angle,
                large_arc: end_angle - start_angle > PI,
                start: Point::on_circle(center(), PIE_RADIUS, start_angle),
                end: Point::on_circle(center(), PIE_RADIUS, end_angle),
            }
        })
        .collect()
}

/// Render a validated pie series
pub fn render(data: &[f64], width: f64, height: f64, palette: &Palette) -> Scene {
    let mut scene = Scene::empty(width, height)
        .with_view_box(ViewBox::new(0.0, 0.0, PIE_VIEWBOX, PIE_VIEWBOX));

    for slice in slices(data) {
        scene.push(Primitive::Path {
            segments: slice.segments(),
            fill: palette.series_color(slice.index).to_string(),
        });
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_slices_partition_full_circle() {
        let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.6];
        let slices = slices(&data);
        assert_eq!(slices.len(), data.len());
        assert_eq!(slices[0].start_angle, 0.0);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        let last = slices.last().unwrap();
        assert!((last.end_angle - 2.0 * PI).abs() < EPS);
    }

    #[test]
    fn test_half_and_half() {
        let slices = slices(&[1.0, 1.0]);
        assert_eq!(slices[0].start, Point::new(200.0, 100.0));
        assert!((slices[0].end.x - 0.0).abs() < EPS);
        assert!((slices[0].end.y - 100.0).abs() < EPS);
        // exactly pi is not a large arc
        assert!(!slices[0].large_arc);
        assert!(!slices[1].large_arc);
    }

    #[test]
    fn test_large_arc_flag() {
        let slices = slices(&[3.0, 1.0]);
        assert!(slices[0].large_arc);
        assert!(!slices[1].large_arc);
    }

    #[test]
    fn test_quarter_slice_endpoints() {
        let slices = slices(&[1.0, 3.0]);
        let first = slices[0];
        assert!((first.end_angle - PI / 2.0).abs() < EPS);
        assert!((first.end.x - 100.0).abs() < EPS);
        assert!((first.end.y - 200.0).abs() < EPS);
    }

    #[test]
    fn test_zero_value_slice_is_degenerate_not_nan() {
        let slices = slices(&[0.0, 2.0]);
        assert_eq!(slices[0].start_angle, slices[0].end_angle);
        assert!(slices[0].start.is_finite());
    }

    #[test]
    fn test_render_uses_fixed_viewbox() {
        let scene = render(&[1.0, 2.0], 780.0, 350.0, &Palette::default());
        assert_eq!(scene.width, 780.0);
        assert_eq!(scene.height, 350.0);
        assert_eq!(
            scene.view_box,
            Some(ViewBox::new(0.0, 0.0, PIE_VIEWBOX, PIE_VIEWBOX))
        );
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_colors_cycle_every_five_slices() {
        let scene = render(&[1.0; 7], 320.0, 220.0, &Palette::default());
        let fills: Vec<&str> = scene
            .primitives
            .iter()
            .map(|p| match p {
                Primitive::Path { fill, .. } => fill.as_str(),
                other => panic!("unexpected primitive {:?}", other),
            })
            .collect();
        assert_eq!(fills[0], "#4e79a7");
        assert_eq!(fills[5], "#4e79a7");
        assert_eq!(fills[6], "#f28e2b");
    }

    #[test]
    fn test_sector_segments() {
        let slice = slices(&[1.0, 1.0])[0];
        let segments = slice.segments();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], PathSegment::MoveTo(Point::new(100.0, 100.0)));
        assert_eq!(segments[1], PathSegment::LineTo(Point::new(200.0, 100.0)));
        assert!(matches!(
            segments[2],
            PathSegment::ArcTo {
                radius,
                large_arc: false,
                sweep: true,
                ..
            } if radius == PIE_RADIUS
        ));
        assert_eq!(segments[3], PathSegment::Close);
    }
}
