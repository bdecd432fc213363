//! Chart color palettes
//!
//! Series colors are assigned cyclically by data index. The default palette
//! is the fixed five-color set every surface of the editor uses; a TOML
//! palette file can replace it for themed exports.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default series colors, indexed by `i mod 5`
pub const SERIES_COLORS: [&str; 5] = ["#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f"];

/// Default stroke color for line charts
pub const LINE_COLOR: &str = "#4e79a7";

/// Default fill color for line chart markers
pub const MARKER_COLOR: &str = "#f28e2b";

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Palette must define at least one series color")]
    EmptySeries,
}

/// Colors used to fill slices and bars and to draw line charts
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Cyclic series colors
    pub series: Vec<String>,
    /// Line chart stroke
    pub line: String,
    /// Line chart point markers
    pub marker: String,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: TomlColors,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize, Default)]
struct TomlColors {
    series: Option<Vec<String>>,
    line: Option<String>,
    marker: Option<String>,
}

impl Palette {
    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load palette from TOML string
    ///
    /// Colors not given in the file keep their default values.
    pub fn from_toml(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;
        let defaults = Self::default();

        let series = parsed.colors.series.unwrap_or(defaults.series);
        if series.is_empty() {
            return Err(PaletteError::EmptySeries);
        }

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            series,
            line: parsed.colors.line.unwrap_or(defaults.line),
            marker: parsed.colors.marker.unwrap_or(defaults.marker),
        })
    }

    /// Fill color for the data point at `index`
    pub fn series_color(&self, index: usize) -> &str {
        // from_toml rejects empty series; a hand-built empty palette falls back
        if self.series.is_empty() {
            return SERIES_COLORS[index % SERIES_COLORS.len()];
        }
        &self.series[index % self.series.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            series: SERIES_COLORS.iter().map(|c| c.to_string()).collect(),
            line: LINE_COLOR.to_string(),
            marker: MARKER_COLOR.to_string(),
        }
    }
}
