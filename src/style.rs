//! Style primitives shared by the compiler and the resolver.
//!
//! - [`StyleObject`]: a flat property → value map
//! - [`StyleTable`]: token → [`StyleObject`] tables, the unit of compilation
//! - [`bg`], [`b_`], [`tint`]: color helpers, also registered as transform functions
//! - [`flatten`]: last-key-wins merge of a resolved style list

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// A flat mapping from style property name to a scalar or string value.
pub type StyleObject = Map<String, Value>;

/// A table of style objects keyed by utility token.
///
/// Scale tables share this shape; their numeric values are unscaled
/// multipliers of the base unit.
pub type StyleTable = BTreeMap<String, StyleObject>;

/// Builds a [`StyleObject`] from property/value pairs.
///
/// # Example
///
/// ```rust
/// use tachyon_style::style::style_object;
///
/// let obj = style_object([("flexDirection", "row")]);
/// assert_eq!(obj["flexDirection"], "row");
/// ```
pub fn style_object<K, V, I>(pairs: I) -> StyleObject
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Background color style.
pub fn bg(color: &str) -> StyleObject {
    style_object([("backgroundColor", color)])
}

/// Border color style.
///
/// The trailing underscore matches the `b--name` token family, which
/// normalizes to `b__name` and splits into `b_` plus the argument.
pub fn b_(color: &str) -> StyleObject {
    style_object([("borderColor", color)])
}

/// Image tint color style.
pub fn tint(color: &str) -> StyleObject {
    style_object([("tintColor", color)])
}

/// Replaces every hyphen with an underscore.
///
/// Borrows when there is nothing to replace.
pub fn hyphens_to_underscores(token: &str) -> Cow<'_, str> {
    if token.contains('-') {
        Cow::Owned(token.replace('-', "_"))
    } else {
        Cow::Borrowed(token)
    }
}

/// Merges a resolved style list into a single object.
///
/// Entries are applied in order so later keys win. Non-object entries are
/// skipped, and nested arrays are flattened first.
pub fn flatten(styles: &[Value]) -> StyleObject {
    let mut merged = StyleObject::new();
    flatten_into(styles, &mut merged);
    merged
}

fn flatten_into(styles: &[Value], merged: &mut StyleObject) {
    for entry in styles {
        match entry {
            Value::Object(obj) => {
                for (k, v) in obj {
                    merged.insert(k.clone(), v.clone());
                }
            }
            Value::Array(nested) => flatten_into(nested, merged),
            _ => {}
        }
    }
}
