//! Scale expansion.
//!
//! Scale tables hold unscaled multipliers of a base unit. Expanding a table
//! multiplies every value by the unit and records the resulting magnitude in
//! a parallel sizes table, so callers that need a raw number (rather than a
//! style object) can look it up by token.
//!
//! # Example
//!
//! ```rust
//! use tachyon_style::scale::{expand, Units};
//! use tachyon_style::style::{style_object, StyleTable};
//!
//! let mut table = StyleTable::new();
//! table.insert("lh-title".into(), style_object([("lineHeight", 1.25)]));
//!
//! let fragment = expand(&table, Units::new(16.0)).unwrap();
//! assert_eq!(fragment.styles["lh-title"]["lineHeight"], 20.0);
//! assert_eq!(fragment.sizes["lh-title"], 20.0);
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ConfigError;
use crate::style::{StyleObject, StyleTable};

/// The property that may use a separate unit.
pub const FONT_SIZE_PROPERTY: &str = "fontSize";

/// Unit multipliers used for expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Units {
    /// Base unit applied to every property.
    pub rem: f64,
    /// Unit for `fontSize` only, when set.
    pub font_rem: Option<f64>,
}

impl Units {
    /// Creates units with a single base size.
    pub fn new(rem: f64) -> Self {
        Self {
            rem,
            font_rem: None,
        }
    }

    /// Sets a separate unit for font sizes.
    pub fn with_font_rem(mut self, font_rem: f64) -> Self {
        self.font_rem = Some(font_rem);
        self
    }

    /// Returns the multiplier for the given property.
    pub fn for_property(&self, property: &str) -> f64 {
        match self.font_rem {
            Some(font_rem) if property == FONT_SIZE_PROPERTY => font_rem,
            _ => self.rem,
        }
    }
}

/// The result of expanding one scale table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleFragment {
    /// Scaled style objects, keyed as in the source table.
    pub styles: StyleTable,
    /// Scaled magnitude per token.
    pub sizes: BTreeMap<String, f64>,
}

/// Expands a scale table by the given units.
///
/// When an entry has several properties, the last one in key order supplies
/// its size.
///
/// # Errors
///
/// Returns [`ConfigError::NonNumericScale`] if any value is not a number.
pub fn expand(table: &StyleTable, units: Units) -> Result<ScaleFragment, ConfigError> {
    let mut fragment = ScaleFragment::default();

    for (token, entry) in table {
        let mut scaled = StyleObject::new();
        for (property, value) in entry {
            let raw = value.as_f64().ok_or_else(|| ConfigError::NonNumericScale {
                token: token.clone(),
                property: property.clone(),
                value: value.to_string(),
            })?;
            let magnitude = raw * units.for_property(property);
            scaled.insert(property.clone(), Value::from(magnitude));
            fragment.sizes.insert(token.clone(), magnitude);
        }
        fragment.styles.insert(token.clone(), scaled);
    }

    Ok(fragment)
}
