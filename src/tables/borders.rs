//! Border widths and radii.

use serde_json::Value;

use crate::style::{style_object, StyleTable};

use super::keyed;

pub(super) fn styles() -> StyleTable {
    let mut table = keyed("borderWidth", &[("bn", 0.0)]);
    table.insert(
        "ba".to_string(),
        style_object([
            ("borderStyle", Value::from("solid")),
            ("borderWidth", Value::from(1.0)),
        ]),
    );
    table.extend(keyed("borderTopWidth", &[("bt", 1.0)]));
    table.extend(keyed("borderRightWidth", &[("br", 1.0)]));
    table.extend(keyed("borderBottomWidth", &[("bb", 1.0)]));
    table.extend(keyed("borderLeftWidth", &[("bl", 1.0)]));
    table
}

/// Rem-scaled border radii.
pub(super) fn radii() -> StyleTable {
    keyed(
        "borderRadius",
        &[
            ("br0", 0.0),
            ("br1", 0.125),
            ("br2", 0.25),
            ("br3", 0.5),
            ("br4", 1.0),
        ],
    )
}
