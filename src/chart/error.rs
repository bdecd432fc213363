//! Error types for chart data

use thiserror::Error;

/// Reasons a chart cannot be turned into geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// The data series has no values
    #[error("chart data is empty")]
    EmptyData,

    /// A value is negative, NaN or infinite
    #[error("value {value} at index {index} must be a finite non-negative number")]
    InvalidValue { index: usize, value: f64 },

    /// Labels were given but do not pair up with the data
    #[error("{labels} labels for {data} data points")]
    LengthMismatch { labels: usize, data: usize },

    /// Pie slices cannot be computed from this sum
    #[error("pie total must be positive and finite, got {total}")]
    DegenerateTotal { total: f64 },

    /// The render box has no usable area
    #[error("render box {width}x{height} must have positive finite dimensions")]
    InvalidBox { width: f64, height: f64 },
}

impl ChartError {
    /// Create an invalid value error
    pub fn invalid_value(index: usize, value: f64) -> Self {
        Self::InvalidValue { index, value }
    }

    /// Create a label/data length mismatch error
    pub fn length_mismatch(labels: usize, data: usize) -> Self {
        Self::LengthMismatch { labels, data }
    }

    /// Create an invalid render box error
    pub fn invalid_box(width: f64, height: f64) -> Self {
        Self::InvalidBox { width, height }
    }
}

/// Errors from parsing the comma-separated chart form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Labels and data must be non-empty and have the same length")]
    Empty,

    #[error("Labels and data must be non-empty and have the same length ({labels} labels, {data} values)")]
    Mismatch { labels: usize, data: usize },
}
