//! Inline Style Maps
//!
//! Ordered property->value maps, the only style representation the
//! image engine emits. Order is preserved so serialized output is
//! stable; setting an existing property replaces it in place.

use crate::properties::{PropertyId, StyleValue};

/// Ordered inline style map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    entries: Vec<(PropertyId, StyleValue)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing in place if already present
    pub fn set(&mut self, property: PropertyId, value: StyleValue) {
        if let Some(slot) = self.entries.iter_mut().find(|(p, _)| *p == property) {
            slot.1 = value;
        } else {
            self.entries.push((property, value));
        }
    }

    /// Builder-style set
    pub fn with(mut self, property: PropertyId, value: StyleValue) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: PropertyId) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, property: PropertyId) {
        self.entries.retain(|(p, _)| *p != property);
    }

    /// Merge another style in; the other map's values win
    pub fn merge(&mut self, other: &InlineStyle) {
        for (property, value) in &other.entries {
            self.set(*property, value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(PropertyId, StyleValue)> {
        self.entries.iter()
    }

    /// Serialize as a `style` attribute value
    pub fn to_css_string(&self) -> String {
        let mut out = String::new();
        for (i, (property, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            out.push_str(property.name());
            out.push(':');
            out.push_str(&value.to_css());
        }
        out
    }
}
