//! Geometric helpers for chart layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in page space
//! - [`AxisScale`] - The affine map from a data range onto a pixel length
//!
//! Page coordinates follow SVG: origin at the top-left, y growing downward.
//! The plot area flips its y axis so that data grows upward.

/// A 2D point in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns the vector from `self` to `other`.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        let d = other.sub_point(self);
        d.x.hypot(d.y)
    }
}

/// Maps data values onto a pixel range: `pixel = value * scale + shift`.
///
/// # Examples
///
/// ```
/// # use vellum::geometry::AxisScale;
/// let axis = AxisScale::fit(2.0, 6.0, 400.0).unwrap();
/// assert_eq!(axis.scale(), 100.0);
/// assert_eq!(axis.shift(), -200.0);
/// assert_eq!(axis.apply(6.0), 400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    scale: f64,
    shift: f64,
}

impl AxisScale {
    /// Fits `[min, max]` onto `[0, length]`.
    ///
    /// A degenerate range (`min == max`) keeps unit scale and centers the
    /// single value on the axis.
    ///
    /// Returns `None` when the range cannot be mapped with finite, non-zero
    /// factors: a span too small to divide by, or one that overflows.
    pub fn fit(min: f64, max: f64, length: f64) -> Option<Self> {
        let span = max - min;
        if span == 0.0 {
            return Some(Self {
                scale: 1.0,
                shift: length / 2.0 - min,
            });
        }
        let scale = length / span;
        // Subtracting from zero keeps `min == 0` from producing `-0`.
        let shift = 0.0 - min * scale;
        (span.is_finite() && scale.is_finite() && scale != 0.0 && shift.is_finite())
            .then_some(Self { scale, shift })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Maps a data value to its pixel offset along the axis.
    pub fn apply(&self, value: f64) -> f64 {
        value * self.scale + self.shift
    }
}
