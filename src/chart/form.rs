//! Chart input form parsing
//!
//! The editor collects labels and values as two comma-separated text
//! fields. This module turns that raw input into a [`Chart`].

use super::{Chart, ChartKind, FormError};

/// Raw text entered into the "add chart" form
#[derive(Debug, Clone, Default)]
pub struct ChartForm {
    pub labels: String,
    pub data: String,
}

impl ChartForm {
    pub fn new(labels: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            labels: labels.into(),
            data: data.into(),
        }
    }

    /// Build a chart of the given kind from the form fields
    ///
    /// Blank labels are skipped. Values that do not parse as numbers or
    /// are negative are skipped as well; the remaining lists must be
    /// non-empty and of equal length.
    pub fn parse(&self, kind: ChartKind) -> Result<Chart, FormError> {
        let labels = split_labels(&self.labels);
        let data = split_values(&self.data);

        if labels.is_empty() || data.is_empty() {
            return Err(FormError::Empty);
        }
        if labels.len() != data.len() {
            return Err(FormError::Mismatch {
                labels: labels.len(),
                data: data.len(),
            });
        }

        tracing::debug!(kind = %kind, points = data.len(), "chart form accepted");
        Ok(Chart::new(kind, labels, data))
    }
}

fn split_labels(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_values(input: &str) -> Vec<f64> {
    input
        .split(',')
        .filter_map(|s| parse_number(s.trim()))
        .filter(|n| *n >= 0.0)
        .collect()
}

/// Parse one form value; a blank item counts as zero
fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_items() {
        let chart = ChartForm::new(" A , B,C ", "10, 20 ,30")
            .parse(ChartKind::Bar)
            .unwrap();
        assert_eq!(chart.labels, vec!["A", "B", "C"]);
        assert_eq!(chart.data, vec![10.0, 20.0, 30.0]);
        assert_eq!(chart.kind, ChartKind::Bar);
    }

    #[test]
    fn test_negative_and_garbage_values_dropped() {
        let chart = ChartForm::new("a, b", "5, -3, x, 2.5")
            .parse(ChartKind::Line)
            .unwrap();
        assert_eq!(chart.data, vec![5.0, 2.5]);
    }

    #[test]
    fn test_blank_labels_dropped() {
        let err = ChartForm::new("a,,b", "1,2,3")
            .parse(ChartKind::Pie)
            .unwrap_err();
        assert_eq!(err, FormError::Mismatch { labels: 2, data: 3 });
    }

    #[test]
    fn test_blank_value_reads_as_zero() {
        let chart = ChartForm::new("a,b", "1,").parse(ChartKind::Bar).unwrap();
        assert_eq!(chart.data, vec![1.0, 0.0]);
    }

    #[test]
    fn test_empty_form_rejected() {
        let err = ChartForm::default().parse(ChartKind::Bar).unwrap_err();
        assert_eq!(err, FormError::Empty);
    }

    #[test]
    fn test_infinite_value_dropped() {
        let chart = ChartForm::new("a", "inf, 4").parse(ChartKind::Bar).unwrap();
        assert_eq!(chart.data, vec![4.0]);
    }
}
