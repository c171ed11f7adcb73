//! Attribute values and the attribute container attached to every element.
//!
//! # Overview
//!
//! - [`AttrValue`] - A typed attribute value (integer, float or string)
//! - [`Attributes`] - Mapping from attribute name to [`AttrValue`] with
//!   lexicographic iteration order
//! - [`MergeMode`] - Whether a merge replaces existing values or appends to them
//!
//! Values keep their kind so later readers can tell an integer page height
//! from a colour string. Appending always produces a string.
//!
//! # Example
//!
//! ```
//! # use vellum_core::attributes::{Attributes, MergeMode};
//! let mut attrs = Attributes::translate(10.0, 20.0);
//! attrs.merge(&Attributes::scale(1.0, -1.0), MergeMode::Append);
//! assert_eq!(
//!     attrs.get_str("transform"),
//!     Some("translate(10, 20) scale(1, -1)")
//! );
//! ```

use std::{collections::BTreeMap, fmt};

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl AttrValue {
    /// Returns the string payload, or `None` for numeric values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, or `None` for other kinds.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a float when it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Str(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, u8, u16, u32, usize);

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

/// How [`Attributes::merge`] treats keys that already hold a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Replace the existing value.
    Override,
    /// Concatenate with a separating space, e.g. `translate(..) scale(..)`.
    Append,
}

/// Attribute container with deterministic (lexicographic) key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: BTreeMap<String, AttrValue>,
}

impl Attributes {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value` (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value if any.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Returns the value of `key` if it is present and holds a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Appends `value` to the existing value of `key`, separated by a space.
    ///
    /// An absent or empty existing value is simply replaced.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        let combined = match self.entries.get(&key) {
            Some(existing) => {
                let existing = existing.to_string();
                if existing.is_empty() {
                    value.to_string()
                } else {
                    format!("{existing} {value}")
                }
            }
            None => value.to_string(),
        };
        self.entries.insert(key, AttrValue::Str(combined));
    }

    /// Merges every entry of `other` into this container.
    pub fn merge(&mut self, other: &Attributes, mode: MergeMode) {
        for (key, value) in other.iter() {
            match mode {
                MergeMode::Override => {
                    self.set(key, value.clone());
                }
                MergeMode::Append => self.append(key, value.clone()),
            }
        }
    }

    /// Combines several containers; later ones override earlier ones.
    pub fn sum(parts: &[&Attributes]) -> Self {
        let mut out = Self::new();
        for part in parts {
            out.merge(part, MergeMode::Override);
        }
        out
    }

    /// A `transform` attribute translating the coordinate system.
    pub fn translate(x: f64, y: f64) -> Self {
        Self::new().with("transform", format!("translate({x}, {y})"))
    }

    /// A `transform` attribute scaling the coordinate system.
    pub fn scale(x: f64, y: f64) -> Self {
        Self::new().with("transform", format!("scale({x}, {y})"))
    }

    /// A `transform` attribute rotating by `angle` degrees around `(cx, cy)`.
    pub fn rotate(angle: f64, cx: f64, cy: f64) -> Self {
        Self::new().with("transform", format!("rotate({angle}, {cx}, {cy})"))
    }

    pub fn view_box(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self::new().with("viewBox", format!("{min_x} {min_y} {width} {height}"))
    }

    /// Sets the `x` and `y` attributes.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.set("x", x);
        self.set("y", y);
    }

    /// Sets the `width` and `height` attributes.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.set("width", width);
        self.set("height", height);
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_lexicographic() {
        let attrs = Attributes::new()
            .with("y", 1)
            .with("fill", "none")
            .with("x", 2)
            .with("cx", 3);

        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["cx", "fill", "x", "y"]);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(AttrValue::from(42).to_string(), "42");
        assert_eq!(AttrValue::from(2.5).to_string(), "2.5");
        assert_eq!(AttrValue::from(70.0).to_string(), "70");
        assert_eq!(AttrValue::from("red").to_string(), "red");
    }

    #[test]
    fn test_value_kinds() {
        assert_eq!(AttrValue::from(3).as_int(), Some(3));
        assert_eq!(AttrValue::from(3).as_float(), Some(3.0));
        assert_eq!(AttrValue::from("3").as_int(), None);
        assert_eq!(AttrValue::from(1.5).as_str(), None);
    }

    #[test]
    fn test_merge_append_concatenates_transforms() {
        let mut attrs = Attributes::translate(0.0, 230.0);
        attrs.merge(&Attributes::scale(1.0, -1.0), MergeMode::Append);
        attrs.merge(&Attributes::from([("fill", "none")]), MergeMode::Append);

        assert_eq!(
            attrs.get_str("transform"),
            Some("translate(0, 230) scale(1, -1)")
        );
        assert_eq!(attrs.get_str("fill"), Some("none"));
    }

    #[test]
    fn test_merge_override_replaces() {
        let mut attrs = Attributes::from([("stroke", "red")]);
        attrs.merge(&Attributes::from([("stroke", "blue")]), MergeMode::Override);
        assert_eq!(attrs.get_str("stroke"), Some("blue"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_append_to_empty_value() {
        let mut attrs = Attributes::from([("class", "")]);
        attrs.append("class", "axis");
        assert_eq!(attrs.get_str("class"), Some("axis"));
    }

    #[test]
    fn test_append_stringifies_numbers() {
        let mut attrs = Attributes::new().with("width", 10);
        attrs.append("width", 20);
        assert_eq!(attrs.get("width"), Some(&AttrValue::Str("10 20".to_string())));
    }

    #[test]
    fn test_sum_later_wins() {
        let a = Attributes::from([("fill", "none"), ("stroke", "red")]);
        let b = Attributes::from([("stroke", "blue")]);
        let sum = Attributes::sum(&[&a, &b]);
        assert_eq!(sum.get_str("fill"), Some("none"));
        assert_eq!(sum.get_str("stroke"), Some("blue"));
    }

    #[test]
    fn test_transform_helpers() {
        assert_eq!(
            Attributes::rotate(90.0, 5.0, 40.0).get_str("transform"),
            Some("rotate(90, 5, 40)")
        );
        assert_eq!(
            Attributes::view_box(0.0, 0.0, 430.0, 252.0).get_str("viewBox"),
            Some("0 0 430 252")
        );
    }

    #[test]
    fn test_position_and_size() {
        let mut attrs = Attributes::new();
        attrs.set_position(1.0, 2.0);
        attrs.set_size(3.0, 4.0);
        assert_eq!(attrs.get("x").and_then(AttrValue::as_float), Some(1.0));
        assert_eq!(attrs.get("height").and_then(AttrValue::as_float), Some(4.0));
    }
}
