//! Line chart geometry

use super::{max_of, scaled_height, LINE_STROKE_WIDTH, MARKER_RADIUS, PLOT_MARGIN};
use crate::palette::Palette;
use crate::scene::{Point, Primitive, Scene};

/// Positions of the data points across the full box width
///
/// The first point sits on the left edge and the last on the right edge. A
/// single point has no spacing to compute and is placed at `x = 0`.
pub fn points(data: &[f64], width: f64, height: f64) -> Vec<Point> {
    let max = max_of(data);
    let gap = if data.len() > 1 {
        width / (data.len() - 1) as f64
    } else {
        0.0
    };

    data.iter()
        .enumerate()
        .map(|(i, value)| {
            Point::new(
                i as f64 * gap,
                height - scaled_height(*value, max, height) - PLOT_MARGIN,
            )
        })
        .collect()
}

/// Render a validated line series: one polyline plus a marker per point
pub fn render(data: &[f64], width: f64, height: f64, palette: &Palette) -> Scene {
    let mut scene = Scene::empty(width, height);
    let points = points(data, width, height);

    scene.push(Primitive::Polyline {
        points: points.clone(),
        stroke: palette.line.clone(),
        stroke_width: LINE_STROKE_WIDTH,
    });

    for p in points {
        scene.push(Primitive::Circle {
            cx: p.x,
            cy: p.y,
            r: MARKER_RADIUS,
            fill: palette.marker.clone(),
        });
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_span_width() {
        let points = points(&[0.0, 5.0, 10.0], 200.0, 120.0);
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 110.0),
                Point::new(100.0, 60.0),
                Point::new(200.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_single_point_at_origin() {
        let points = points(&[5.0], 320.0, 220.0);
        assert_eq!(points, vec![Point::new(0.0, 10.0)]);
    }

    #[test]
    fn test_all_zero_on_baseline() {
        for p in points(&[0.0, 0.0, 0.0], 300.0, 220.0) {
            assert_eq!(p.y, 210.0);
        }
    }

    #[test]
    fn test_render_polyline_then_markers() {
        let scene = render(&[1.0, 2.0], 100.0, 100.0, &Palette::default());
        assert_eq!(scene.len(), 3);
        match &scene.primitives[0] {
            Primitive::Polyline {
                points,
                stroke,
                stroke_width,
            } => {
                assert_eq!(points.len(), 2);
                assert_eq!(stroke, "#4e79a7");
                assert_eq!(*stroke_width, 3.0);
            }
            other => panic!("expected polyline, got {:?}", other),
        }
        for marker in &scene.primitives[1..] {
            match marker {
                Primitive::Circle { r, fill, .. } => {
                    assert_eq!(*r, 4.0);
                    assert_eq!(fill, "#f28e2b");
                }
                other => panic!("expected circle, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_single_point_render() {
        let scene = render(&[5.0], 320.0, 220.0, &Palette::default());
        assert_eq!(scene.len(), 2);
        assert!(scene.is_finite());
    }
}
