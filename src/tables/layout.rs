//! Flexbox, image, opacity and absolute-positioning utilities.

use serde_json::Value;

use crate::style::{style_object, StyleTable};

use super::keyed;

pub(super) fn flexbox() -> StyleTable {
    let mut table = keyed("flex", &[("flx-i", 1.0)]);
    table.extend(keyed(
        "flexDirection",
        &[
            ("flx-row", "row"),
            ("flx-row-reverse", "row-reverse"),
            ("flx-col", "column"),
            ("flx-col-reverse", "column-reverse"),
        ],
    ));
    table.extend(keyed(
        "flexWrap",
        &[("flx-wrap", "wrap"), ("flx-nowrap", "nowrap")],
    ));
    table.extend(keyed(
        "alignItems",
        &[
            ("items-start", "flex-start"),
            ("items-end", "flex-end"),
            ("items-center", "center"),
            ("items-baseline", "baseline"),
            ("items-stretch", "stretch"),
        ],
    ));
    table.extend(keyed(
        "justifyContent",
        &[
            ("justify-start", "flex-start"),
            ("justify-end", "flex-end"),
            ("justify-center", "center"),
            ("justify-between", "space-between"),
            ("justify-around", "space-around"),
        ],
    ));
    table.extend(keyed(
        "alignSelf",
        &[
            ("self-start", "flex-start"),
            ("self-end", "flex-end"),
            ("self-center", "center"),
            ("self-baseline", "baseline"),
            ("self-stretch", "stretch"),
        ],
    ));
    table.extend(keyed(
        "alignContent",
        &[
            ("content-start", "flex-start"),
            ("content-end", "flex-end"),
            ("content-center", "center"),
            ("content-between", "space-between"),
            ("content-around", "space-around"),
            ("content-stretch", "stretch"),
        ],
    ));
    table
}

pub(super) fn images() -> StyleTable {
    keyed(
        "resizeMode",
        &[
            ("rm-contain", "contain"),
            ("rm-cover", "cover"),
            ("rm-stretch", "stretch"),
            ("rm-center", "center"),
            ("rm-repeat", "repeat"),
        ],
    )
}

pub(super) fn opacity() -> StyleTable {
    keyed(
        "opacity",
        &[
            ("o-100", 1.0),
            ("o-90", 0.9),
            ("o-80", 0.8),
            ("o-70", 0.7),
            ("o-60", 0.6),
            ("o-50", 0.5),
            ("o-40", 0.4),
            ("o-30", 0.3),
            ("o-20", 0.2),
            ("o-10", 0.1),
            ("o-05", 0.05),
            ("o-025", 0.025),
            ("o-0", 0.0),
        ],
    )
}

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// Offsets in rem, as `(token suffix, multiplier)`.
const OFFSETS: [(&str, f64); 5] = [("0", 0.0), ("1", 1.0), ("2", 2.0), ("-1", -1.0), ("-2", -2.0)];

/// Absolute-positioning helpers with offsets already scaled by `rem`.
///
/// Produces `absolute`, `absolute--fill`, and `top-1`, `left--2`, etc.
pub fn absolute(rem: f64) -> StyleTable {
    let mut table = StyleTable::new();
    table.insert("absolute".to_string(), style_object([("position", "absolute")]));

    let mut fill = style_object([("position", "absolute")]);
    for side in SIDES {
        fill.insert(side.to_string(), Value::from(0.0));
        for (suffix, multiplier) in OFFSETS {
            table.insert(
                format!("{side}-{suffix}"),
                style_object([(side, multiplier * rem)]),
            );
        }
    }
    table.insert("absolute--fill".to_string(), fill);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_scales_offsets() {
        let table = absolute(16.0);
        assert_eq!(table["top-1"]["top"], 16.0);
        assert_eq!(table["left--2"]["left"], -32.0);
        assert_eq!(table["bottom-0"]["bottom"], 0.0);
    }

    #[test]
    fn test_absolute_fill() {
        let table = absolute(10.0);
        let fill = &table["absolute--fill"];
        assert_eq!(fill["position"], "absolute");
        for side in SIDES {
            assert_eq!(fill[side], 0.0);
        }
    }
}
