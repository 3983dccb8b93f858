use std::collections::BTreeMap;

use crate::value::Value;

/// Fallback for color properties nobody set.
pub const DEFAULT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// The resolved longhand properties of one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    props: BTreeMap<String, Value>,
}

impl ComputedStyle {
    pub fn from_map(props: BTreeMap<String, Value>) -> Self {
        Self { props }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Overwrites properties with those in `other`.
    pub fn update(&mut self, other: BTreeMap<String, Value>) {
        self.props.extend(other);
    }

    /// A numeric property, or `default` when missing or not a number.
    pub fn number(&self, key: &str, default: f32) -> f32 {
        self.get(key).and_then(Value::as_number).unwrap_or(default)
    }

    pub fn color(&self, key: &str, default: [f32; 4]) -> [f32; 4] {
        self.get(key).and_then(Value::as_color).unwrap_or(default)
    }

    pub fn ident(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_ident)
    }

    /// `display: none` hides the element.
    pub fn is_displayed(&self) -> bool {
        self.ident("display") != Some("none")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}
