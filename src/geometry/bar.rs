//! Bar chart geometry

use super::{max_of, scaled_height, BAR_GAP, BAR_INSET, PLOT_MARGIN};
use crate::palette::Palette;
use crate::scene::{Primitive, Scene};

/// Render a validated bar series
///
/// Bars share the width evenly with a [`BAR_GAP`] between neighbours and
/// grow upwards from a baseline [`PLOT_MARGIN`] above the bottom edge. The
/// largest value spans the full plot height.
pub fn render(data: &[f64], width: f64, height: f64, palette: &Palette) -> Scene {
    let mut scene = Scene::empty(width, height);
    let max = max_of(data);
    let bar_width = width / data.len() as f64 - BAR_GAP;

    for (i, value) in data.iter().enumerate() {
        let bar_height = scaled_height(*value, max, height);
        scene.push(Primitive::Rect {
            x: i as f64 * (bar_width + BAR_GAP) + BAR_INSET,
            y: height - bar_height - PLOT_MARGIN,
            width: bar_width,
            height: bar_height,
            fill: palette.series_color(i).to_string(),
        });
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects(scene: &Scene) -> Vec<(f64, f64, f64, f64)> {
        scene
            .primitives
            .iter()
            .map(|p| match p {
                Primitive::Rect {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => (*x, *y, *width, *height),
                other => panic!("unexpected primitive {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_three_bars() {
        let scene = render(&[10.0, 20.0, 30.0], 320.0, 220.0, &Palette::default());
        let rects = rects(&scene);
        let bar_width = 320.0 / 3.0 - 10.0;

        assert_eq!(rects.len(), 3);
        assert!((rects[0].2 - 96.666_666_666).abs() < 1e-6);
        assert_eq!(rects[2], (2.0 * (bar_width + 10.0) + 5.0, 10.0, bar_width, 200.0));
        assert_eq!(rects[0].0, 5.0);
    }

    #[test]
    fn test_exact_layout() {
        let scene = render(&[1.0, 2.0, 4.0], 330.0, 220.0, &Palette::default());
        assert_eq!(
            rects(&scene),
            vec![
                (5.0, 160.0, 100.0, 50.0),
                (115.0, 110.0, 100.0, 100.0),
                (225.0, 10.0, 100.0, 200.0),
            ]
        );
    }

    #[test]
    fn test_zero_value_on_baseline() {
        let scene = render(&[0.0, 5.0], 200.0, 100.0, &Palette::default());
        let rects = rects(&scene);
        assert_eq!(rects[0].1, 90.0);
        assert_eq!(rects[0].3, 0.0);
        assert_eq!(rects[1].1, 10.0);
        assert_eq!(rects[1].3, 80.0);
    }

    #[test]
    fn test_all_zero_flattens() {
        let scene = render(&[0.0, 0.0], 200.0, 100.0, &Palette::default());
        for (_, y, _, h) in rects(&scene) {
            assert_eq!(y, 90.0);
            assert_eq!(h, 0.0);
        }
    }

    #[test]
    fn test_fill_colors_by_index() {
        let scene = render(&[1.0; 6], 600.0, 300.0, &Palette::default());
        let fills: Vec<&str> = scene
            .primitives
            .iter()
            .map(|p| match p {
                Primitive::Rect { fill, .. } => fill.as_str(),
                other => panic!("unexpected primitive {:?}", other),
            })
            .collect();
        assert_eq!(
            fills,
            vec!["#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#4e79a7"]
        );
    }
}
