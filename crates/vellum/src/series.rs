//! Plotted data and display modes.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::LayoutError;

/// How a series is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DisplayMode {
    /// One bar per data point.
    Column,
    /// A line through all data points.
    #[default]
    Continuous,
}

impl FromStr for DisplayMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "column" => Ok(Self::Column),
            "continuous" => Ok(Self::Continuous),
            other => Err(LayoutError::UnknownDisplayMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for DisplayMode {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column => f.write_str("column"),
            Self::Continuous => f.write_str("continuous"),
        }
    }
}

/// A validated pair of x and y value sequences.
///
/// Both sequences have the same, non-zero length, hold only finite numbers,
/// and the x values are non-decreasing.
///
/// # Examples
///
/// ```
/// # use vellum::series::Series;
/// let series = Series::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 5.0, 2.0, 8.0]).unwrap();
/// assert_eq!(series.len(), 4);
/// assert_eq!(series.y_range(), (0.0, 8.0));
///
/// assert!(Series::new(vec![2.0, 1.0, 3.0], vec![0.0, 0.0, 0.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    /// Validates and wraps the value sequences.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`LayoutError::LengthMismatch`] if the lengths differ
    /// - [`LayoutError::EmptyData`] if both are empty
    /// - [`LayoutError::NonFiniteValue`] for the first NaN or infinity
    /// - [`LayoutError::UnsortedX`] for the first x value smaller than its predecessor
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, LayoutError> {
        if x.len() != y.len() {
            return Err(LayoutError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.is_empty() {
            return Err(LayoutError::EmptyData);
        }
        for (axis, values) in [("x", &x), ("y", &y)] {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(LayoutError::NonFiniteValue { axis, index });
            }
        }
        if let Some(index) = (1..x.len()).find(|&i| x[i] < x[i - 1]) {
            return Err(LayoutError::UnsortedX {
                index,
                previous: x[index - 1],
                value: x[index],
            });
        }

        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of data points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`; a series holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(min, max)` of the x values.
    pub fn x_range(&self) -> (f64, f64) {
        value_range(&self.x)
    }

    /// `(min, max)` of the y values.
    pub fn y_range(&self) -> (f64, f64) {
        value_range(&self.y)
    }
}

/// `(min, max)` of `values`; `(inf, -inf)` when empty.
pub(crate) fn value_range(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_parse() {
        assert_eq!("column".parse::<DisplayMode>(), Ok(DisplayMode::Column));
        assert_eq!("continuous".parse::<DisplayMode>(), Ok(DisplayMode::Continuous));
        assert_eq!(
            "bars".parse::<DisplayMode>(),
            Err(LayoutError::UnknownDisplayMode("bars".to_string()))
        );
        assert_eq!(DisplayMode::Column.to_string(), "column");
    }

    #[test]
    fn test_series_validation_order() {
        assert_eq!(
            Series::new(vec![], vec![1.0]),
            Err(LayoutError::LengthMismatch { x: 0, y: 1 })
        );
        assert_eq!(Series::new(vec![], vec![]), Err(LayoutError::EmptyData));
        assert_eq!(
            Series::new(vec![0.0, 1.0], vec![f64::INFINITY, 1.0]),
            Err(LayoutError::NonFiniteValue { axis: "y", index: 0 })
        );
        assert_eq!(
            Series::new(vec![0.0, f64::NAN], vec![0.0, 1.0]),
            Err(LayoutError::NonFiniteValue { axis: "x", index: 1 })
        );
    }

    #[test]
    fn test_series_rejects_single_inversion() {
        let err = Series::new(vec![2.0, 1.0, 3.0], vec![0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnsortedX {
                index: 1,
                previous: 2.0,
                value: 1.0
            }
        );
    }

    #[test]
    fn test_series_allows_repeated_x() {
        let series = Series::new(vec![1.0, 1.0, 2.0], vec![3.0, -1.0, 0.5]).unwrap();
        assert_eq!(series.x_range(), (1.0, 2.0));
        assert_eq!(series.y_range(), (-1.0, 3.0));
        assert!(!series.is_empty());
    }
}
