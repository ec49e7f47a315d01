//! Stylesheet compilation.
//!
//! [`compile`] turns [`Options`] into a flat token → style map. Sources are
//! merged in a fixed order and later sources win on key collision:
//!
//! 1. Static groups (borders, flexbox, font weights, images, text, opacity)
//! 2. Rem-scaled tables, then the configured extra scales
//! 3. Absolute-positioning helpers
//! 4. Color tokens: `bg-name`, `name`, `b--name`, `tint-name`
//! 5. Font tokens: `ff-name`
//! 6. Custom style overrides
//!
//! Keys are normalized (`-` → `_`) as they are inserted, so `bg-red` and
//! `bg_red` name the same entry.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::options::Options;
use crate::scale::expand;
use crate::style::{self, hyphens_to_underscores, style_object, StyleObject, StyleTable};
use crate::tables;

/// The compiled token → style map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    entries: HashMap<String, StyleObject>,
}

impl Stylesheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a token. Hyphenated and underscored spellings are equivalent.
    pub fn get(&self, token: &str) -> Option<&StyleObject> {
        self.entries.get(hyphens_to_underscores(token).as_ref())
    }

    /// Returns `true` if the token has an entry.
    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stylesheet has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(token, style)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleObject)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<HashMap<String, StyleObject>> for Stylesheet {
    fn from(entries: HashMap<String, StyleObject>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (normalize(&k), v))
            .collect();
        Self { entries }
    }
}

/// Scaled magnitudes of rem-scaled tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sizes {
    entries: HashMap<String, f64>,
}

impl Sizes {
    /// Creates an empty sizes table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a token's magnitude. Hyphenated and underscored spellings are
    /// equivalent.
    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(hyphens_to_underscores(token).as_ref()).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(token, magnitude)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Adds every entry of `other`, overwriting same tokens.
    pub fn merge(&mut self, other: Sizes) {
        self.entries.extend(other.entries);
    }
}

/// Output of one compile, before publication.
#[derive(Debug, Clone, Default)]
pub struct Compiled {
    /// Normalized token → style map, not yet passed through a factory.
    pub styles: HashMap<String, StyleObject>,
    /// Sizes from this compile only.
    pub sizes: Sizes,
}

#[derive(Default)]
struct Builder {
    styles: HashMap<String, StyleObject>,
    sizes: HashMap<String, f64>,
}

impl Builder {
    fn insert(&mut self, token: &str, style: StyleObject) {
        self.styles.insert(normalize(token), style);
    }

    fn extend(&mut self, table: StyleTable) {
        for (token, style) in table {
            self.insert(&token, style);
        }
    }
}

fn normalize(token: &str) -> String {
    hyphens_to_underscores(token).into_owned()
}

/// Compiles the stylesheet described by `options`.
///
/// # Errors
///
/// Returns [`ConfigError::NonNumericScale`] if a rem-scaled table (built-in
/// or configured) holds a non-numeric value.
pub fn compile(options: &Options) -> Result<Compiled, ConfigError> {
    let mut builder = Builder::default();

    for group in tables::static_groups() {
        builder.extend(group);
    }

    let units = options.units();
    let extra = options.scales.values().cloned();
    for table in tables::rem_scaled().into_iter().chain(extra) {
        let fragment = expand(&table, units)?;
        builder.extend(fragment.styles);
        for (token, size) in fragment.sizes {
            builder.sizes.insert(normalize(&token), size);
        }
    }

    builder.extend(tables::absolute(options.rem));

    for (name, value) in &options.colors {
        builder.insert(&format!("bg-{name}"), style::bg(value));
        builder.insert(name, style_object([("color", value.as_str())]));
        builder.insert(&format!("b--{name}"), style::b_(value));
        builder.insert(&format!("tint-{name}"), style::tint(value));
    }

    for (name, family) in &options.fonts {
        builder.insert(
            &format!("ff-{name}"),
            style_object([("fontFamily", family.as_str())]),
        );
    }

    builder.extend(options.custom_styles.clone());

    Ok(Compiled {
        styles: builder.styles,
        sizes: Sizes {
            entries: builder.sizes,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Config;
    use serde_json::{json, Value};

    fn compiled(config: Config) -> Compiled {
        let mut options = Options::default();
        options.merge(&config);
        compile(&options).unwrap()
    }

    fn entry(c: &Compiled, token: &str) -> Value {
        Value::Object(c.styles[token].clone())
    }

    #[test]
    fn test_line_height_scaled_by_rem() {
        let c = compiled(Config::new().rem(16.0));
        assert_eq!(entry(&c, "lh_title"), json!({"lineHeight": 20.0}));
        assert_eq!(c.sizes.get("lh-title"), Some(20.0));
    }

    #[test]
    fn test_keys_are_normalized() {
        let c = compiled(Config::new());
        assert!(c.styles.contains_key("flx_row"));
        assert!(!c.styles.contains_key("flx-row"));
        assert!(c.styles.contains_key("top__1"));
    }

    #[test]
    fn test_color_tokens() {
        let c = compiled(Config::new().color("red", "#ff0000"));
        assert_eq!(entry(&c, "bg_red"), json!({"backgroundColor": "#ff0000"}));
        assert_eq!(entry(&c, "red"), json!({"color": "#ff0000"}));
        assert_eq!(entry(&c, "b__red"), json!({"borderColor": "#ff0000"}));
        assert_eq!(entry(&c, "tint_red"), json!({"tintColor": "#ff0000"}));
    }

    #[test]
    fn test_font_tokens() {
        let c = compiled(Config::new().font("mono", "Menlo"));
        assert_eq!(entry(&c, "ff_mono"), json!({"fontFamily": "Menlo"}));
    }

    #[test]
    fn test_custom_styles_win() {
        let c = compiled(
            Config::new().custom_style("pa2", style_object([("padding", "auto")])),
        );
        assert_eq!(entry(&c, "pa2"), json!({"padding": "auto"}));
    }

    #[test]
    fn test_font_rem_scales_type_scale_only() {
        let c = compiled(Config::new().rem(16.0).font_rem(10.0));
        assert_eq!(entry(&c, "f5"), json!({"fontSize": 10.0}));
        assert_eq!(entry(&c, "h1"), json!({"height": 16.0}));
    }

    #[test]
    fn test_absolute_uses_rem() {
        let c = compiled(Config::new().rem(10.0));
        assert_eq!(entry(&c, "top_2"), json!({"top": 20.0}));
        assert!(c.sizes.get("top-2").is_none());
    }

    #[test]
    fn test_extra_scales_expanded() {
        let mut table = StyleTable::new();
        table.insert("gap-2".into(), style_object([("gap", 2)]));
        let c = compiled(Config::new().rem(4.0).scale("gaps", table));

        assert_eq!(entry(&c, "gap_2"), json!({"gap": 8.0}));
        assert_eq!(c.sizes.get("gap_2"), Some(8.0));
    }

    #[test]
    fn test_non_numeric_extra_scale_fails() {
        let mut table = StyleTable::new();
        table.insert("gap-x".into(), style_object([("gap", "wide")]));
        let mut options = Options::default();
        options.merge(&Config::new().scale("gaps", table));

        assert!(matches!(
            compile(&options),
            Err(ConfigError::NonNumericScale { .. })
        ));
    }

    #[test]
    fn test_stylesheet_lookup_either_spelling() {
        let c = compiled(Config::new().color("red", "#f00"));
        let sheet = Stylesheet::from(c.styles);
        assert_eq!(sheet.get("bg-red"), sheet.get("bg_red"));
        assert!(sheet.contains("bg-red"));
    }

    #[test]
    fn test_sizes_merge_overwrites() {
        let mut a = Sizes::new();
        a.entries.insert("h1".into(), 16.0);
        a.entries.insert("h2".into(), 32.0);
        let mut b = Sizes::new();
        b.entries.insert("h1".into(), 10.0);
        a.merge(b);

        assert_eq!(a.get("h1"), Some(10.0));
        assert_eq!(a.get("h2"), Some(32.0));
    }
}
