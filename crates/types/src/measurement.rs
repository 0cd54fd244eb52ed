//! Defines primitives for dimension-like token values.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Measurement unit of a dimension-like value, with a fixed CSS suffix
/// mapping.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
#[derive(Default)]
pub enum Unit {
    #[default]
    Pixel,
    Percent,
    Em,
    Rem,
    /// A bare number with no suffix (e.g. unitless line heights).
    Raw,
}

impl Unit {
    pub fn css_suffix(&self) -> &'static str {
        match self {
            Unit::Pixel => "px",
            Unit::Percent => "%",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Raw => "",
        }
    }
}

/// A unit-qualified scalar measurement.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub unit: Unit,
    pub measure: f64,
}

impl Eq for Measurement {}

impl Hash for Measurement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        self.measure.to_bits().hash(state);
    }
}

impl Measurement {
    pub fn new(measure: f64, unit: Unit) -> Self {
        Self { unit, measure }
    }

    /// Renders `<measure><suffix>` with the measure trimmed to at most three
    /// decimal places.
    pub fn to_css(&self) -> String {
        format!("{}{}", format_measure(self.measure), self.unit.css_suffix())
    }
}

/// Formats a measure rounded to three decimal places with trailing zeros
/// trimmed, so `16.0` renders as `16` and `1.5` as `1.5`.
pub fn format_measure(measure: f64) -> String {
    let rounded = (measure * 1000.0).round() / 1000.0;
    let mut s = format!("{rounded:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
