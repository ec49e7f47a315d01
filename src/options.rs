//! Compile options and configuration input.
//!
//! - [`Config`]: a partial configuration passed to each compile. Every field
//!   is optional; anything left out falls back to the current [`Options`].
//! - [`Options`]: the accumulated settings. Each compile deep-merges its
//!   `Config` into them, so colors, fonts and transform functions persist
//!   across rebuilds unless explicitly overridden.
//! - [`TransformRegistry`]: named fallback resolvers for tokens that have no
//!   stylesheet entry.
//!
//! # Loading from a file
//!
//! `Config` deserializes from JSON or YAML using camelCase field names:
//!
//! ```rust
//! use tachyon_style::Config;
//!
//! let config = Config::from_yaml(r##"
//! rem: 10
//! colors:
//!   primary: "#3366ff"
//! fonts:
//!   body: Inter
//! clsPropName: cls
//! "##).unwrap();
//!
//! assert_eq!(config.rem, Some(10.0));
//! assert_eq!(config.colors["primary"], "#3366ff");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::scale::Units;
use crate::style::{self, StyleObject, StyleTable};
use crate::tree::Element;

/// Default base unit.
pub const DEFAULT_REM: f64 = 16.0;

/// Default class prop name.
pub const DEFAULT_CLS_PROP_NAME: &str = "cls";

/// A transform function: string arguments plus the element being styled.
///
/// Transforms run during resolution and must not call back into
/// [`crate::global`].
pub type TransformFn = Arc<dyn Fn(&[&str], &Element) -> StyleObject + Send + Sync>;

/// Name-keyed registry of transform functions.
#[derive(Clone, Default)]
pub struct TransformRegistry {
    fns: HashMap<String, TransformFn>,
}

impl TransformRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in `bg`, `b_` and `tint`.
    ///
    /// Each built-in takes its first argument as the color value.
    pub fn builtin() -> Self {
        Self::new()
            .with("bg", |args: &[&str], _: &Element| style::bg(first_arg(args)))
            .with("b_", |args: &[&str], _: &Element| style::b_(first_arg(args)))
            .with("tint", |args: &[&str], _: &Element| style::tint(first_arg(args)))
    }

    /// Registers a function under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&[&str], &Element) -> StyleObject + Send + Sync + 'static,
    {
        self.fns.insert(name.into(), Arc::new(f));
    }

    /// Registers a function, returning the registry for chaining.
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[&str], &Element) -> StyleObject + Send + Sync + 'static,
    {
        self.register(name, f);
        self
    }

    /// Looks up a function by name.
    pub fn get(&self, name: &str) -> Option<&TransformFn> {
        self.fns.get(name)
    }

    /// Returns `true` if a function is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.fns.contains_key(name)
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.fns.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.fns.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Adds every entry of `other`, replacing same-named entries.
    pub fn merge(&mut self, other: &TransformRegistry) {
        for (name, f) in &other.fns {
            self.fns.insert(name.clone(), Arc::clone(f));
        }
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

fn first_arg<'a>(args: &[&'a str]) -> &'a str {
    args.first().copied().unwrap_or_default()
}

/// Partial configuration for a compile.
///
/// Maps merge key-wise into the current options; scalar fields replace them
/// only when set. Unknown fields in a configuration document are ignored.
///
/// # Example
///
/// ```rust
/// use tachyon_style::Config;
/// use tachyon_style::style::style_object;
///
/// let config = Config::new()
///     .rem(10.0)
///     .color("red", "#ff0000")
///     .font("mono", "Menlo")
///     .custom_style("card", style_object([("borderRadius", 6)]))
///     .transform("gap", |args, _el| style_object([("gap", args.len())]));
///
/// assert_eq!(config.rem, Some(10.0));
/// assert!(config.transforms.contains("gap"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Base unit for rem-scaled tables.
    pub rem: Option<f64>,
    /// Separate unit for `fontSize`.
    pub font_rem: Option<f64>,
    /// Color name → color value.
    pub colors: BTreeMap<String, String>,
    /// Font name → font family.
    pub fonts: BTreeMap<String, String>,
    /// Token → style overrides, merged last.
    pub custom_styles: StyleTable,
    /// Name of the primary class prop.
    pub cls_prop_name: Option<String>,
    /// Capitalized class prop name used for suffix matching.
    pub cls_prop_name_cap: Option<String>,
    /// Explicit class prop → style prop pairs.
    pub cls_map: BTreeMap<String, String>,
    /// Extra rem-scaled tables, by name.
    pub scales: BTreeMap<String, StyleTable>,
    /// Extra transform functions.
    #[serde(skip)]
    pub transforms: TransformRegistry,
}

impl Config {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Parse {
            format: "JSON",
            message: e.to_string(),
        })
    }

    /// Parses a configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
            format: "YAML",
            message: e.to_string(),
        })
    }

    /// Sets the base unit.
    pub fn rem(mut self, rem: f64) -> Self {
        self.rem = Some(rem);
        self
    }

    /// Sets the font-size unit.
    pub fn font_rem(mut self, font_rem: f64) -> Self {
        self.font_rem = Some(font_rem);
        self
    }

    /// Adds a color.
    pub fn color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(name.into(), value.into());
        self
    }

    /// Adds a font family.
    pub fn font(mut self, name: impl Into<String>, family: impl Into<String>) -> Self {
        self.fonts.insert(name.into(), family.into());
        self
    }

    /// Adds a custom style override.
    pub fn custom_style(mut self, token: impl Into<String>, style: StyleObject) -> Self {
        self.custom_styles.insert(token.into(), style);
        self
    }

    /// Sets the primary class prop name.
    pub fn cls_prop_name(mut self, name: impl Into<String>) -> Self {
        self.cls_prop_name = Some(name.into());
        self
    }

    /// Sets the capitalized class prop name explicitly.
    pub fn cls_prop_name_cap(mut self, cap: impl Into<String>) -> Self {
        self.cls_prop_name_cap = Some(cap.into());
        self
    }

    /// Maps a class prop to the style prop it fills.
    pub fn cls_map(mut self, cls_prop: impl Into<String>, style_prop: impl Into<String>) -> Self {
        self.cls_map.insert(cls_prop.into(), style_prop.into());
        self
    }

    /// Adds a named rem-scaled table.
    pub fn scale(mut self, name: impl Into<String>, table: StyleTable) -> Self {
        self.scales.insert(name.into(), table);
        self
    }

    /// Registers a transform function.
    pub fn transform<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[&str], &Element) -> StyleObject + Send + Sync + 'static,
    {
        self.transforms.register(name, f);
        self
    }

    /// Checks the unit sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUnit`] for a zero, negative or
    /// non-finite `rem` or `font_rem`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("rem", self.rem)?;
        check_unit("fontRem", self.font_rem)
    }
}

fn check_unit(field: &'static str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(ConfigError::InvalidUnit { field, value: v }),
        _ => Ok(()),
    }
}

/// The accumulated compile settings.
#[derive(Debug, Clone)]
pub struct Options {
    /// Base unit.
    pub rem: f64,
    /// Font-size unit, if different from `rem`.
    pub font_rem: Option<f64>,
    /// Color name → color value.
    pub colors: BTreeMap<String, String>,
    /// Font name → font family.
    pub fonts: BTreeMap<String, String>,
    /// Primary class prop name; its style prop is `style`.
    pub cls_prop_name: String,
    /// Suffix that marks additional class props (e.g. `containerCls`).
    pub cls_prop_name_cap: String,
    /// Explicit class prop → style prop pairs.
    pub cls_map: BTreeMap<String, String>,
    /// Custom style overrides.
    pub custom_styles: StyleTable,
    /// Extra rem-scaled tables.
    pub scales: BTreeMap<String, StyleTable>,
    /// Transform functions.
    pub transforms: TransformRegistry,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rem: DEFAULT_REM,
            font_rem: None,
            colors: BTreeMap::new(),
            fonts: BTreeMap::new(),
            cls_prop_name: DEFAULT_CLS_PROP_NAME.to_string(),
            cls_prop_name_cap: capitalize(DEFAULT_CLS_PROP_NAME),
            cls_map: BTreeMap::new(),
            custom_styles: StyleTable::new(),
            scales: BTreeMap::new(),
            transforms: TransformRegistry::builtin(),
        }
    }
}

impl Options {
    /// Units for scale expansion.
    pub fn units(&self) -> Units {
        Units {
            rem: self.rem,
            font_rem: self.font_rem,
        }
    }

    /// Deep-merges a configuration into these options.
    ///
    /// Style tables merge per token and per property. When the config does
    /// not name the capitalized class prop, it is derived from the (possibly
    /// updated) class prop name.
    pub fn merge(&mut self, config: &Config) {
        if let Some(rem) = config.rem {
            self.rem = rem;
        }
        if let Some(font_rem) = config.font_rem {
            self.font_rem = Some(font_rem);
        }
        self.colors.extend(config.colors.clone());
        self.fonts.extend(config.fonts.clone());
        self.cls_map.extend(config.cls_map.clone());
        merge_table(&mut self.custom_styles, &config.custom_styles);
        for (name, table) in &config.scales {
            merge_table(self.scales.entry(name.clone()).or_default(), table);
        }
        self.transforms.merge(&config.transforms);

        if let Some(name) = &config.cls_prop_name {
            self.cls_prop_name = name.clone();
        }
        self.cls_prop_name_cap = match &config.cls_prop_name_cap {
            Some(cap) => cap.clone(),
            None => capitalize(&self.cls_prop_name),
        };
    }
}

fn merge_table(target: &mut StyleTable, source: &StyleTable) {
    for (token, obj) in source {
        let entry = target.entry(token.clone()).or_default();
        for (property, value) in obj {
            entry.insert(property.clone(), value.clone());
        }
    }
}

/// Uppercases the first character.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
