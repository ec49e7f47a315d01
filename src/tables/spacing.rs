//! Padding and margin scale.

use crate::style::{style_object, StyleTable};

const STEPS: [f64; 8] = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0];

const PROPERTIES: [(&str, &str); 14] = [
    ("pa", "padding"),
    ("pl", "paddingLeft"),
    ("pr", "paddingRight"),
    ("pt", "paddingTop"),
    ("pb", "paddingBottom"),
    ("pv", "paddingVertical"),
    ("ph", "paddingHorizontal"),
    ("ma", "margin"),
    ("ml", "marginLeft"),
    ("mr", "marginRight"),
    ("mt", "marginTop"),
    ("mb", "marginBottom"),
    ("mv", "marginVertical"),
    ("mh", "marginHorizontal"),
];

/// `pa0`..`pa7`, `mh0`..`mh7`, and so on.
pub(super) fn spacing() -> StyleTable {
    let mut table = StyleTable::new();
    for (prefix, property) in PROPERTIES {
        for (i, step) in STEPS.iter().enumerate() {
            table.insert(format!("{prefix}{i}"), style_object([(property, *step)]));
        }
    }
    table
}
