//! Chart model types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ChartError;
use crate::error::SourceError;

/// Types of charts the renderer knows how to draw
///
/// Serialized as the plain strings `"pie"`, `"bar"` and `"line"`. Any other
/// string is kept verbatim in [`ChartKind::Other`] so that decks written by
/// newer editors survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
    Other(String),
}

impl ChartKind {
    pub fn as_str(&self) -> &str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Other(name) => name,
        }
    }

    /// Whether the renderer has an algorithm for this kind
    pub fn is_known(&self) -> bool {
        !matches!(self, ChartKind::Other(_))
    }
}

impl From<String> for ChartKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pie" => ChartKind::Pie,
            "bar" => ChartKind::Bar,
            "line" => ChartKind::Line,
            _ => ChartKind::Other(s),
        }
    }
}

impl From<&str> for ChartKind {
    fn from(s: &str) -> Self {
        ChartKind::from(s.to_string())
    }
}

impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chart stored on a slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    #[serde(default)]
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl Chart {
    pub fn new(kind: ChartKind, labels: Vec<String>, data: Vec<f64>) -> Self {
        Self { kind, labels, data }
    }

    /// Pie chart from parallel labels and values
    pub fn pie(labels: Vec<String>, data: Vec<f64>) -> Self {
        Self::new(ChartKind::Pie, labels, data)
    }

    /// Bar chart from parallel labels and values
    pub fn bar(labels: Vec<String>, data: Vec<f64>) -> Self {
        Self::new(ChartKind::Bar, labels, data)
    }

    /// Line chart from parallel labels and values
    pub fn line(labels: Vec<String>, data: Vec<f64>) -> Self {
        Self::new(ChartKind::Line, labels, data)
    }

    /// Chart with data only (labels are not needed for geometry)
    pub fn unlabeled(kind: ChartKind, data: Vec<f64>) -> Self {
        Self::new(kind, vec![], data)
    }

    /// Sum of all values
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Largest value, or `None` for an empty series
    pub fn max_value(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }

    /// Check that the data can be turned into finite geometry
    ///
    /// Labels are optional; when present they must pair up with the data.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.data.is_empty() {
            return Err(ChartError::EmptyData);
        }

        if let Some((index, &value)) = self
            .data
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ChartError::invalid_value(index, value));
        }

        if !self.labels.is_empty() && self.labels.len() != self.data.len() {
            return Err(ChartError::length_mismatch(
                self.labels.len(),
                self.data.len(),
            ));
        }

        if self.kind == ChartKind::Pie {
            let total = self.total();
            if !(total.is_finite() && total > 0.0) {
                return Err(ChartError::DegenerateTotal { total });
            }
        }

        Ok(())
    }

    /// Parse a chart from its JSON form
    pub fn from_json(source: &str) -> Result<Self, SourceError> {
        serde_json::from_str(source).map_err(|e| SourceError::from_json(&e, source))
    }

    /// Serialize to JSON in the editor's export format
    pub fn to_json(&self) -> String {
        // Chart only holds strings and f64, which always serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}
