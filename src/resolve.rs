//! Token resolution.
//!
//! A class prop holds a space-separated list of utility tokens. Resolution
//! turns that list into an ordered list of style objects:
//!
//! 1. The prop value is stringified with classnames semantics (see
//!    [`class_string`]).
//! 2. Hyphens become underscores and the string is split on whitespace.
//! 3. Each token is looked up in the [`Stylesheet`]. On a miss, the token is
//!    read as a function call, `name_arg1_arg2`, and dispatched to the
//!    [`TransformRegistry`].
//! 4. Tokens that match neither are reported and skipped.
//!
//! Function-call splitting happens at every underscore that is followed by
//! something other than another underscore. `b__red` therefore splits into
//! `b_` and `red`, and `tint_ff0000` into `tint` and `ff0000`.

use serde_json::Value;
use tracing::{trace, warn};

use crate::compiler::Stylesheet;
use crate::error::UnresolvedToken;
use crate::options::TransformRegistry;
use crate::tree::Element;

/// The outcome of resolving a token string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Resolved style objects, in token order.
    pub styles: Vec<Value>,
    /// Tokens that matched nothing.
    pub unresolved: Vec<UnresolvedToken>,
}

/// Borrowed view of the state needed to resolve tokens.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    stylesheet: &'a Stylesheet,
    transforms: &'a TransformRegistry,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over a stylesheet and a transform registry.
    pub fn new(stylesheet: &'a Stylesheet, transforms: &'a TransformRegistry) -> Self {
        Self {
            stylesheet,
            transforms,
        }
    }

    /// Resolves every token of `class_string` in order.
    ///
    /// Each unresolved token is logged once at warn level.
    pub fn resolve(&self, class_string: &str, element: &Element) -> Resolution {
        let mut resolution = Resolution::default();

        for token in tokenize(class_string) {
            match self.resolve_token(&token, element) {
                Some(style) => resolution.styles.push(style),
                None => {
                    let unresolved = UnresolvedToken { token };
                    warn!(token = %unresolved.token, "{}", unresolved);
                    resolution.unresolved.push(unresolved);
                }
            }
        }

        resolution
    }

    fn resolve_token(&self, token: &str, element: &Element) -> Option<Value> {
        if let Some(style) = self.stylesheet.get(token) {
            return Some(Value::Object(style.clone()));
        }

        let parts = split_call(token);
        let (name, args) = parts.split_first()?;
        let f = self.transforms.get(name)?;
        trace!(function = %name, ?args, "dispatching transform function");
        Some(Value::Object(f(args, element)))
    }

    /// Computes the new style prop value for a class/style prop pair.
    ///
    /// Returns `None` when there is nothing to translate: the class prop is
    /// absent or stringifies to a blank string. Otherwise the result starts
    /// with the existing style (an array is copied, an object is wrapped,
    /// anything else is dropped) followed by the resolved tokens. A present
    /// class string always yields `Some`, even if no token resolved.
    pub fn transform_style(
        &self,
        element: &Element,
        existing: Option<&Value>,
        source: Option<&Value>,
    ) -> Option<Vec<Value>> {
        let class_string = source.map(class_string)?;
        if class_string.trim().is_empty() {
            return None;
        }

        let mut styles = match existing {
            Some(Value::Array(items)) => items.clone(),
            Some(obj @ Value::Object(_)) => vec![obj.clone()],
            _ => Vec::new(),
        };
        styles.extend(self.resolve(&class_string, element).styles);
        Some(styles)
    }
}

/// Normalizes and splits a class string into tokens.
///
/// Hyphens become underscores; empty tokens are dropped.
pub fn tokenize(class_string: &str) -> Vec<String> {
    class_string
        .split_whitespace()
        .map(|token| token.replace('-', "_"))
        .collect()
}

/// Splits a token into a function name and its arguments.
///
/// Splits at each `_` that is followed by a character other than `_`.
pub fn split_call(token: &str) -> Vec<&str> {
    let bytes = token.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        if byte == b'_' && bytes.get(i + 1).is_some_and(|&next| next != b'_') {
            parts.push(&token[start..i]);
            start = i + 1;
        }
    }
    parts.push(&token[start..]);
    parts
}

/// Stringifies a class prop value.
///
/// - strings are used as-is
/// - numbers are formatted
/// - arrays are flattened recursively, skipping entries that produce nothing
/// - objects contribute each key whose value is truthy
/// - `null` and booleans produce nothing
pub fn class_string(value: &Value) -> String {
    let mut classes = Vec::new();
    collect_classes(value, &mut classes);
    classes.join(" ")
}

fn collect_classes(value: &Value, classes: &mut Vec<String>) {
    match value {
        Value::String(s) if !s.is_empty() => classes.push(s.clone()),
        Value::Number(n) => classes.push(n.to_string()),
        Value::Array(items) => {
            for item in items {
                collect_classes(item, classes);
            }
        }
        Value::Object(map) => {
            for (key, enabled) in map {
                if is_truthy(enabled) {
                    classes.push(key.clone());
                }
            }
        }
        _ => {}
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
