//! Slide Charts - chart geometry and export for a slide presentation editor
//!
//! This library turns chart values (pie, bar, line) into vector scenes and
//! SVG, and exports whole slide decks as JSON or standalone HTML.
//!
//! # Example
//!
//! ```rust
//! use slide_charts::render;
//!
//! let svg = render(r#"{"type": "bar", "labels": ["A", "B"], "data": [1, 2]}"#).unwrap();
//! assert!(svg.contains("<rect"));
//! ```

pub mod chart;
pub mod deck;
pub mod error;
pub mod export;
pub mod geometry;
pub mod palette;
pub mod renderer;
pub mod scene;

pub use chart::{Chart, ChartError, ChartForm, ChartKind, FormError};
pub use deck::{Deck, DeckError};
pub use error::SourceError;
pub use export::export_html;
pub use geometry::Surface;
pub use palette::{Palette, PaletteError};
pub use renderer::{render_svg, SvgConfig};
pub use scene::{Primitive, Scene};

use std::path::Path;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Chart JSON could not be decoded
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Chart data cannot be drawn
    #[error("invalid chart data: {0}")]
    Chart(#[from] ChartError),

    /// Deck could not be loaded
    #[error(transparent)]
    Deck(#[from] DeckError),

    /// Palette could not be loaded
    #[error(transparent)]
    Palette(#[from] PaletteError),
}

impl RenderError {
    /// Format the error, with source context for decoding errors
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            RenderError::Source(e) => e.format(source, filename),
            RenderError::Deck(e) => e.format(source, filename),
            other => other.to_string(),
        }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Series, line and marker colors
    pub palette: Palette,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Render box width
    pub width: f64,
    /// Render box height
    pub height: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let (width, height) = Surface::Default.dimensions();
        Self {
            palette: Palette::default(),
            svg: SvgConfig::default(),
            width,
            height,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Load the palette from a TOML file
    pub fn with_palette_file(self, path: &Path) -> Result<Self, RenderError> {
        Ok(self.with_palette(Palette::from_file(path)?))
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set an explicit render box
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Use the render box of a named surface
    pub fn with_surface(self, surface: Surface) -> Self {
        let (width, height) = surface.dimensions();
        self.with_size(width, height)
    }
}

/// Render chart JSON to SVG with default configuration
///
/// Malformed chart data is reported as an error rather than drawn.
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render chart JSON to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use slide_charts::{render_with_config, RenderConfig, Surface, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_surface(Surface::Thumbnail)
///     .with_svg(SvgConfig::inline());
///
/// let svg = render_with_config(r#"{"type": "pie", "data": [1, 1]}"#, &config).unwrap();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains(r#"width="150" height="100""#));
/// ```
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let scene = render_scene(source, config)?;
    Ok(render_svg(&scene, &config.svg))
}

/// Decode chart JSON and compute its scene
pub fn render_scene(source: &str, config: &RenderConfig) -> Result<Scene, RenderError> {
    let chart = Chart::from_json(source)?;
    let scene =
        geometry::try_render_with_palette(&chart, config.width, config.height, &config.palette)?;
    Ok(scene)
}

/// Draw an optional chart to SVG, drawing nothing for absent or malformed charts
pub fn render_chart(chart: Option<&Chart>, config: &RenderConfig) -> String {
    let scene = geometry::render_with_palette(chart, config.width, config.height, &config.palette);
    render_svg(&scene, &config.svg)
}
