//! Chart geometry
//!
//! Pure functions from `(chart, width, height)` to a [`Scene`]. Nothing is
//! cached between calls, so the same input always yields the same scene and
//! the functions are safe to call from any number of places at once.

pub mod bar;
pub mod line;
pub mod pie;
pub mod surface;

pub use pie::PieSlice;
pub use surface::Surface;

use crate::chart::{Chart, ChartError, ChartKind};
use crate::palette::Palette;
use crate::scene::Scene;

/// Pie radius in pie viewBox units
pub const PIE_RADIUS: f64 = 100.0;

/// Side of the square pie viewBox, independent of the outer viewport
pub const PIE_VIEWBOX: f64 = 200.0;

/// Horizontal gap between bars
pub const BAR_GAP: f64 = 10.0;

/// Left inset of the first bar
pub const BAR_INSET: f64 = 5.0;

/// Distance from the bottom edge to the baseline (and from the top edge to full scale)
pub const PLOT_MARGIN: f64 = 10.0;

/// Stroke width of the line chart polyline
pub const LINE_STROKE_WIDTH: f64 = 3.0;

/// Radius of line chart point markers
pub const MARKER_RADIUS: f64 = 4.0;

/// Render a chart with the default palette
///
/// Absent, malformed or unknown charts yield an empty scene.
pub fn render(chart: Option<&Chart>, width: f64, height: f64) -> Scene {
    render_with_palette(chart, width, height, &Palette::default())
}

/// Render a chart with a custom palette
pub fn render_with_palette(
    chart: Option<&Chart>,
    width: f64,
    height: f64,
    palette: &Palette,
) -> Scene {
    let Some(chart) = chart else {
        return Scene::empty(width, height);
    };

    match try_render_with_palette(chart, width, height, palette) {
        Ok(scene) => scene,
        Err(e) => {
            tracing::warn!(kind = %chart.kind, error = %e, "invalid chart data, drawing nothing");
            Scene::empty(width, height)
        }
    }
}

/// Render a chart, reporting malformed data as an error
pub fn try_render(chart: &Chart, width: f64, height: f64) -> Result<Scene, ChartError> {
    try_render_with_palette(chart, width, height, &Palette::default())
}

/// Render a chart with a custom palette, reporting malformed data as an error
pub fn try_render_with_palette(
    chart: &Chart,
    width: f64,
    height: f64,
    palette: &Palette,
) -> Result<Scene, ChartError> {
    if let ChartKind::Other(name) = &chart.kind {
        tracing::debug!(kind = %name, "unknown chart kind, drawing nothing");
        return Ok(Scene::empty(width, height));
    }

    validate_box(width, height)?;
    chart.validate()?;

    let scene = match chart.kind {
        ChartKind::Pie => pie::render(&chart.data, width, height, palette),
        ChartKind::Bar => bar::render(&chart.data, width, height, palette),
        ChartKind::Line => line::render(&chart.data, width, height, palette),
        ChartKind::Other(_) => Scene::empty(width, height),
    };

    tracing::debug!(
        kind = %chart.kind,
        width,
        height,
        primitives = scene.len(),
        "rendered chart"
    );
    Ok(scene)
}

/// Check that a render box has a usable area
pub fn validate_box(width: f64, height: f64) -> Result<(), ChartError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(ChartError::invalid_box(width, height))
    }
}

/// Vertical position of a value scaled against `max`
///
/// `max == 0` means every value is zero, so every point sits on the baseline.
pub(crate) fn scaled_height(value: f64, max: f64, height: f64) -> f64 {
    if max == 0.0 {
        0.0
    } else {
        value / max * (height - 2.0 * PLOT_MARGIN)
    }
}

/// Largest value of a validated, non-empty series
pub(crate) fn max_of(data: &[f64]) -> f64 {
    data.iter().copied().fold(0.0, f64::max)
}
